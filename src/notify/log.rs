use crate::core::events::Notice;
use crate::notify::NoticePublisher;

// Publishes notices to the tracing log.
#[derive(Debug, Default)]
pub struct LogNoticePublisher;

impl NoticePublisher for LogNoticePublisher {
    fn publish(&self, notice: &Notice) {
        tracing::warn!(kind = ?notice.kind, key = notice.key.as_str(),
                       patron_id = notice.patron_id.as_str(), "{}", notice.message);
    }
}
