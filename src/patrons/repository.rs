use std::collections::HashMap;
use crate::patrons::domain::model::Patron;

// PatronRepository abstracts storage for the patron directory.
pub(crate) trait PatronRepository {
    fn save(&mut self, patron: &Patron);
    fn exists(&self, id: &str) -> bool;
}

// Directory arena keyed by patron id.
#[derive(Debug, Default)]
pub(crate) struct InMemoryPatronRepository {
    patrons: HashMap<String, Patron>,
}

impl InMemoryPatronRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl PatronRepository for InMemoryPatronRepository {
    fn save(&mut self, patron: &Patron) {
        self.patrons.insert(patron.patron_id.to_string(), patron.clone());
    }

    fn exists(&self, id: &str) -> bool {
        self.patrons.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::Patron;
    use crate::patrons::repository::{InMemoryPatronRepository, PatronRepository};

    #[test]
    fn test_should_save_and_find_patron() {
        let mut repository = InMemoryPatronRepository::new();
        assert!(!repository.exists("2"));
        repository.save(&Patron::new("Dupont", "Jeanne", "2"));
        assert!(repository.exists("2"));
        assert!(!repository.exists("3"));
    }

    #[test]
    fn test_should_replace_patron_with_same_id() {
        let mut repository = InMemoryPatronRepository::new();
        repository.save(&Patron::new("Dupont", "Jeanne", "2"));
        repository.save(&Patron::new("Martin", "Paul", "2"));
        assert!(repository.exists("2"));
    }
}
