pub mod model;
pub mod service;

use crate::core::library::CirculationResult;
use crate::patrons::domain::model::Patron;

pub(crate) trait PatronService {
    // appends the patron to the directory; a patron with the same id is replaced
    fn register_patron(&self, patron: &Patron);

    // pure membership check, no side effects
    fn identify(&self, patron: &Patron) -> CirculationResult<bool>;
}
