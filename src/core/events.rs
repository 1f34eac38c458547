use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// NoticeKind defines the kind of notice emitted by circulation
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum NoticeKind {
    OverdueReturn,
}

// Notice abstracts an observable notification emitted as a side effect
// of a circulation operation, e.g. a copy coming back past its due date.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: String,
    pub kind: NoticeKind,
    pub key: String,
    pub patron_id: String,
    pub message: String,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub emitted_on: NaiveDate,
}

impl Notice {
    pub fn overdue_return<T: Serialize>(key: &str, patron_id: &str, emitted_on: NaiveDate,
                                        data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Notice {
            notice_id: Uuid::new_v4().to_string(),
            kind: NoticeKind::OverdueReturn,
            key: key.to_string(),
            patron_id: patron_id.to_string(),
            message: "Retour en retard !".to_string(),
            json_data: json,
            emitted_on,
        })
    }
}
