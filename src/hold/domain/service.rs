use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult, ReservationOutcome};
use crate::hold::domain::HoldService;
use crate::hold::repository::HoldRepository;
use crate::patrons::domain::model::Patron;

pub(crate) struct HoldServiceImpl {
    hold_repository: Rc<RefCell<dyn HoldRepository>>,
    catalog_service: Rc<dyn CatalogService>,
}

impl HoldServiceImpl {
    pub(crate) fn new(hold_repository: Rc<RefCell<dyn HoldRepository>>,
                      catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            hold_repository,
            catalog_service,
        }
    }
}

impl HoldService for HoldServiceImpl {
    fn reserve(&self, patron: &Patron, isbn: &str) -> CirculationResult<ReservationOutcome> {
        if !self.catalog_service.has_isbn(isbn) {
            return Err(CirculationError::unknown_title(
                format!("no copy of isbn {} was ever registered", isbn).as_str()));
        }
        if self.catalog_service.available_copy_count(isbn) > 0 {
            return Ok(ReservationOutcome::CopyAvailable);
        }
        if self.hold_repository.borrow_mut().enqueue(isbn, patron.id().as_str()) {
            tracing::debug!("patron {} queued for isbn {}", patron.id(), isbn);
        }
        Ok(ReservationOutcome::Recorded)
    }

    fn is_first_in_queue(&self, patron: &Patron, isbn: &str) -> bool {
        self.hold_repository.borrow().head(isbn)
            .map(|head| head == patron.id())
            .unwrap_or(false)
    }

    fn queue_position(&self, patron: &Patron, isbn: &str) -> usize {
        self.hold_repository.borrow().position(isbn, patron.id().as_str())
    }

    fn has_waiting(&self, isbn: &str) -> bool {
        self.hold_repository.borrow().waiting(isbn) > 0
    }

    fn pop_head(&self, isbn: &str) -> Option<String> {
        self.hold_repository.borrow_mut().pop_head(isbn)
    }
}
