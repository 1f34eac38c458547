use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// CopyKey identifies one physical copy of a title.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub(crate) struct CopyKey {
    pub isbn: String,
    pub copy_number: u32,
}

impl CopyKey {
    pub fn new(isbn: &str, copy_number: u32) -> Self {
        Self {
            isbn: isbn.to_string(),
            copy_number,
        }
    }
}

impl Display for CopyKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.isbn, self.copy_number)
    }
}

// LoanEntity abstracts one active borrow of a copy by a patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanEntity {
    pub loan_id: String,
    pub isbn: String,
    pub copy_number: u32,
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub borrowed_on: NaiveDate,
    #[serde(with = "serializer")]
    pub due_on: NaiveDate,
}

impl LoanEntity {
    pub fn new(key: &CopyKey, patron_id: &str, borrowed_on: NaiveDate, due_on: NaiveDate) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            isbn: key.isbn.to_string(),
            copy_number: key.copy_number,
            patron_id: patron_id.to_string(),
            borrowed_on,
            due_on,
        }
    }

    pub fn key(&self) -> CopyKey {
        CopyKey::new(self.isbn.as_str(), self.copy_number)
    }

    // overdue is strict: a loan due today is not overdue
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_on < today
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::circulation::domain::model::{CopyKey, LoanEntity};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_should_build_loan() {
        let key = CopyKey::new("123-1", 1);
        let loan = LoanEntity::new(&key, "5", date(2026, 1, 30), date(2026, 2, 28));
        assert_eq!("123-1", loan.isbn.as_str());
        assert_eq!(1, loan.copy_number);
        assert_eq!("5", loan.patron_id.as_str());
        assert_eq!(key, loan.key());
    }

    #[test]
    fn test_should_format_copy_key() {
        assert_eq!("123-1#2", CopyKey::new("123-1", 2).to_string());
    }

    #[test]
    fn test_should_flag_overdue_strictly() {
        let key = CopyKey::new("123-1", 1);
        let loan = LoanEntity::new(&key, "5", date(2026, 1, 30), date(2026, 2, 28));
        assert!(!loan.is_overdue(date(2026, 2, 27)));
        assert!(!loan.is_overdue(date(2026, 2, 28)));
        assert!(loan.is_overdue(date(2026, 3, 1)));
    }
}
