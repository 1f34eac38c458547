use std::collections::{HashMap, VecDeque};

// HoldRepository abstracts storage for the per-isbn waiting queues.
// Queues hold patron ids only; identity is by id everywhere.
pub(crate) trait HoldRepository {
    // true if the patron was appended, false if already queued
    fn enqueue(&mut self, isbn: &str, patron_id: &str) -> bool;
    fn head(&self, isbn: &str) -> Option<String>;
    fn pop_head(&mut self, isbn: &str) -> Option<String>;
    fn position(&self, isbn: &str, patron_id: &str) -> usize;
    fn waiting(&self, isbn: &str) -> usize;
}

// Queue arena keyed by isbn.
#[derive(Debug, Default)]
pub(crate) struct InMemoryHoldRepository {
    queues: HashMap<String, VecDeque<String>>,
}

impl InMemoryHoldRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl HoldRepository for InMemoryHoldRepository {
    fn enqueue(&mut self, isbn: &str, patron_id: &str) -> bool {
        let queue = self.queues.entry(isbn.to_string()).or_default();
        if queue.iter().any(|id| id == patron_id) {
            return false;
        }
        queue.push_back(patron_id.to_string());
        true
    }

    fn head(&self, isbn: &str) -> Option<String> {
        self.queues.get(isbn).and_then(|queue| queue.front().cloned())
    }

    fn pop_head(&mut self, isbn: &str) -> Option<String> {
        self.queues.get_mut(isbn).and_then(|queue| queue.pop_front())
    }

    fn position(&self, isbn: &str, patron_id: &str) -> usize {
        self.queues.get(isbn)
            .and_then(|queue| queue.iter().position(|id| id == patron_id))
            .map(|index| index + 1)
            .unwrap_or(0)
    }

    fn waiting(&self, isbn: &str) -> usize {
        self.queues.get(isbn).map(VecDeque::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::hold::repository::{HoldRepository, InMemoryHoldRepository};

    #[test]
    fn test_should_queue_in_fifo_order() {
        let mut repository = InMemoryHoldRepository::new();
        assert!(repository.enqueue("123-1", "101"));
        assert!(repository.enqueue("123-1", "102"));
        assert_eq!(Some("101".to_string()), repository.head("123-1"));
        assert_eq!(1, repository.position("123-1", "101"));
        assert_eq!(2, repository.position("123-1", "102"));
        assert_eq!(2, repository.waiting("123-1"));
    }

    #[test]
    fn test_should_not_enqueue_same_patron_twice() {
        let mut repository = InMemoryHoldRepository::new();
        assert!(repository.enqueue("123-1", "101"));
        assert!(!repository.enqueue("123-1", "101"));
        assert_eq!(1, repository.waiting("123-1"));
    }

    #[test]
    fn test_should_pop_head_and_shift_positions() {
        let mut repository = InMemoryHoldRepository::new();
        repository.enqueue("123-1", "101");
        repository.enqueue("123-1", "102");
        assert_eq!(Some("101".to_string()), repository.pop_head("123-1"));
        assert_eq!(1, repository.position("123-1", "102"));
        assert_eq!(0, repository.position("123-1", "101"));
    }

    #[test]
    fn test_should_report_empty_queue_for_unknown_isbn() {
        let repository = InMemoryHoldRepository::new();
        assert_eq!(None, repository.head("999-9"));
        assert_eq!(0, repository.position("999-9", "101"));
        assert_eq!(0, repository.waiting("999-9"));
    }
}
