use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::service::CirculationServiceImpl;
use crate::circulation::domain::CirculationService;
use crate::circulation::repository::{InMemoryLoanRepository, LoanRepository};
use crate::core::domain::Configuration;
use crate::hold::domain::HoldService;
use crate::notify::NoticePublisher;
use crate::patrons::domain::PatronService;
use crate::utils::clock::SharedClock;

pub(crate) fn create_loan_repository() -> Rc<RefCell<dyn LoanRepository>> {
    Rc::new(RefCell::new(InMemoryLoanRepository::new()))
}

pub(crate) fn create_circulation_service(
    config: &Configuration,
    loan_repository: Rc<RefCell<dyn LoanRepository>>,
    patron_service: Rc<dyn PatronService>,
    catalog_service: Rc<dyn CatalogService>,
    hold_service: Rc<dyn HoldService>,
    notice_publisher: Rc<dyn NoticePublisher>,
    clock: SharedClock) -> Rc<dyn CirculationService> {
    Rc::new(CirculationServiceImpl::new(config, loan_repository, patron_service,
                                        catalog_service, hold_service, notice_publisher, clock))
}
