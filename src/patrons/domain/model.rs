use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Patron abstracts a registered member of the lending catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patron {
    pub patron_id: String,
    pub family_name: String,
    pub given_name: String,
}

impl Patron {
    pub fn new(family_name: &str, given_name: &str, patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            family_name: family_name.to_string(),
            given_name: given_name.to_string(),
        }
    }
}

// Two patrons are the same member iff their ids match, whatever the names say.
impl PartialEq for Patron {
    fn eq(&self, other: &Self) -> bool {
        self.patron_id == other.patron_id
    }
}

impl Eq for Patron {}

impl Hash for Patron {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patron_id.hash(state);
    }
}

impl Identifiable for Patron {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::patrons::domain::model::Patron;

    #[test]
    fn test_should_build_patron() {
        let patron = Patron::new("Dupont", "Marie", "999");
        assert_eq!("Dupont", patron.family_name.as_str());
        assert_eq!("Marie", patron.given_name.as_str());
        assert_eq!("999", patron.id().as_str());
    }

    #[test]
    fn test_should_compare_patrons_by_id_only() {
        let marie = Patron::new("Dupont", "Marie", "2");
        let jeanne = Patron::new("Dupont", "Jeanne", "2");
        let boris = Patron::new("Theron", "Boris", "3");
        assert_eq!(marie, jeanne);
        assert_ne!(marie, boris);
    }
}
