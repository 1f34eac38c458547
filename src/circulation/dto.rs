use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::model::LoanEntity;
use crate::utils::date::serializer;

// LoanDto is the loan record handed back across the engine boundary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub isbn: String,
    pub copy_number: u32,
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub borrowed_on: NaiveDate,
    #[serde(with = "serializer")]
    pub due_on: NaiveDate,
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            copy_number: other.copy_number,
            patron_id: other.patron_id.to_string(),
            borrowed_on: other.borrowed_on,
            due_on: other.due_on,
        }
    }
}
