pub mod model;
pub mod service;

use crate::circulation::dto::LoanDto;
use crate::core::library::CirculationResult;
use crate::patrons::domain::model::Patron;

pub(crate) trait CirculationService {
    // lends one available copy of the isbn to the patron
    fn borrow(&self, patron: &Patron, isbn: &str) -> CirculationResult<LoanDto>;

    // silent no-op when no loan is active for the key
    fn return_copy(&self, isbn: &str, copy_number: u32);

    // isbns of the patron's active loans past their due date
    fn overdue_loans(&self, patron: &Patron) -> Vec<String>;
}
