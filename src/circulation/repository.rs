use std::collections::HashMap;
use crate::circulation::domain::model::{CopyKey, LoanEntity};

// LoanRepository abstracts storage for active loans. At most one loan
// per copy key exists at any time.
pub(crate) trait LoanRepository {
    fn save(&mut self, loan: &LoanEntity);
    fn get(&self, key: &CopyKey) -> Option<LoanEntity>;
    fn remove(&mut self, key: &CopyKey) -> Option<LoanEntity>;
    fn find_by_patron(&self, patron_id: &str) -> Vec<LoanEntity>;
}

// Loan arena keyed by the composite copy key.
#[derive(Debug, Default)]
pub(crate) struct InMemoryLoanRepository {
    loans: HashMap<CopyKey, LoanEntity>,
}

impl InMemoryLoanRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn save(&mut self, loan: &LoanEntity) {
        self.loans.insert(loan.key(), loan.clone());
    }

    fn get(&self, key: &CopyKey) -> Option<LoanEntity> {
        self.loans.get(key).cloned()
    }

    fn remove(&mut self, key: &CopyKey) -> Option<LoanEntity> {
        self.loans.remove(key)
    }

    fn find_by_patron(&self, patron_id: &str) -> Vec<LoanEntity> {
        self.loans.values()
            .filter(|loan| loan.patron_id == patron_id)
            .cloned()
            .collect()
    }
}
