use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::{create_catalog_repository, create_catalog_service};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::LoanDto;
use crate::circulation::factory::{create_circulation_service, create_loan_repository};
use crate::core::domain::Configuration;
use crate::core::library::{CirculationResult, ReservationOutcome};
use crate::hold::domain::HoldService;
use crate::hold::factory::{create_hold_repository, create_hold_service};
use crate::notify::log::LogNoticePublisher;
use crate::notify::NoticePublisher;
use crate::patrons::domain::model::Patron;
use crate::patrons::domain::PatronService;
use crate::patrons::factory::{create_patron_repository, create_patron_service};
use crate::utils::clock::{Clock, SharedClock, SystemClock};

// Library is the circulation engine: one stateful object owning the
// patron directory, the catalog pools, the active loans and the waiting
// queues, with every operation running to completion on the calling
// thread. Embedders wanting cross-thread use must serialize calls.
pub struct Library {
    config: Configuration,
    clock: SharedClock,
    patron_service: Rc<dyn PatronService>,
    catalog_service: Rc<dyn CatalogService>,
    hold_service: Rc<dyn HoldService>,
    circulation_service: Rc<dyn CirculationService>,
}

impl Library {
    pub fn new(config: Configuration) -> Self {
        Self::with_publisher(config, Rc::new(LogNoticePublisher))
    }

    // Builds the engine with a caller-supplied notice channel.
    pub fn with_publisher(config: Configuration, notice_publisher: Rc<dyn NoticePublisher>) -> Self {
        let clock = SharedClock::new(Box::new(SystemClock));
        let patron_service = create_patron_service(create_patron_repository());
        let catalog_service = create_catalog_service(create_catalog_repository());
        let hold_service = create_hold_service(create_hold_repository(), catalog_service.clone());
        let circulation_service = create_circulation_service(
            &config, create_loan_repository(), patron_service.clone(), catalog_service.clone(),
            hold_service.clone(), notice_publisher, clock.clone());
        tracing::debug!("circulation engine ready for {}", config.library_id);
        Library {
            config,
            clock,
            patron_service,
            catalog_service,
            hold_service,
            circulation_service,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    // Swaps the time source; takes effect on the next date computation,
    // existing due dates stay as written.
    pub fn set_clock(&self, clock: Box<dyn Clock>) {
        self.clock.replace(clock);
    }

    pub fn register_patron(&self, patron: &Patron) {
        self.patron_service.register_patron(patron);
    }

    pub fn add_copy(&self, isbn: &str, copy_number: u32) {
        self.catalog_service.add_copy(isbn, copy_number);
    }

    pub fn add_copy_with_title(&self, isbn: &str, copy_number: u32, title: &str, category: &str) {
        self.catalog_service.add_copy_with_title(isbn, copy_number, title, category);
    }

    pub fn identify(&self, patron: &Patron) -> CirculationResult<bool> {
        self.patron_service.identify(patron)
    }

    pub fn search_by_category(&self, category: &str) -> Vec<String> {
        self.catalog_service.search_by_category(category)
    }

    pub fn reserve(&self, patron: &Patron, isbn: &str) -> CirculationResult<ReservationOutcome> {
        self.hold_service.reserve(patron, isbn)
    }

    pub fn borrow(&self, patron: &Patron, isbn: &str) -> CirculationResult<LoanDto> {
        self.circulation_service.borrow(patron, isbn)
    }

    pub fn return_copy(&self, isbn: &str, copy_number: u32) {
        self.circulation_service.return_copy(isbn, copy_number);
    }

    pub fn overdue_loans(&self, patron: &Patron) -> Vec<String> {
        self.circulation_service.overdue_loans(patron)
    }

    pub fn is_first_in_queue(&self, patron: &Patron, isbn: &str) -> bool {
        self.hold_service.is_first_in_queue(patron, isbn)
    }

    pub fn queue_position(&self, patron: &Patron, isbn: &str) -> usize {
        self.hold_service.queue_position(patron, isbn)
    }

    pub fn available_copy_count(&self, isbn: &str) -> usize {
        self.catalog_service.available_copy_count(isbn)
    }
}
