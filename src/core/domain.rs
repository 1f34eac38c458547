use serde::{Deserialize, Serialize};

// Identifiable defines the common trait shared by circulation records
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the circulation engine
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_id: String,
    pub loan_period_months: u32,
}

impl Configuration {
    pub fn new(library_id: &str) -> Self {
        Configuration {
            library_id: library_id.to_string(),
            loan_period_months: 1,
        }
    }
}
