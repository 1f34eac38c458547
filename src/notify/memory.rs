use std::cell::RefCell;
use crate::core::events::Notice;
use crate::notify::NoticePublisher;

// Records published notices so a harness can assert on them.
#[derive(Debug, Default)]
pub struct MemoryNoticePublisher {
    notices: RefCell<Vec<Notice>>,
}

impl MemoryNoticePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl NoticePublisher for MemoryNoticePublisher {
    fn publish(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
