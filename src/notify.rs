pub mod log;
pub mod memory;

use crate::core::events::Notice;

// NoticePublisher abstracts the channel where circulation notices land.
pub trait NoticePublisher {
    fn publish(&self, notice: &Notice);
}
