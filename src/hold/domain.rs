pub mod service;

use crate::core::library::{CirculationResult, ReservationOutcome};
use crate::patrons::domain::model::Patron;

pub(crate) trait HoldService {
    // queues the patron for the isbn unless a copy is already available;
    // queueing twice for the same isbn is a no-op
    fn reserve(&self, patron: &Patron, isbn: &str) -> CirculationResult<ReservationOutcome>;

    fn is_first_in_queue(&self, patron: &Patron, isbn: &str) -> bool;

    // 1-based rank in the isbn's queue, 0 when absent
    fn queue_position(&self, patron: &Patron, isbn: &str) -> usize;

    fn has_waiting(&self, isbn: &str) -> bool;

    fn pop_head(&self, isbn: &str) -> Option<String>;
}
