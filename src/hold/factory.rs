use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::hold::domain::service::HoldServiceImpl;
use crate::hold::domain::HoldService;
use crate::hold::repository::{HoldRepository, InMemoryHoldRepository};

pub(crate) fn create_hold_repository() -> Rc<RefCell<dyn HoldRepository>> {
    Rc::new(RefCell::new(InMemoryHoldRepository::new()))
}

pub(crate) fn create_hold_service(
    hold_repository: Rc<RefCell<dyn HoldRepository>>,
    catalog_service: Rc<dyn CatalogService>) -> Rc<dyn HoldService> {
    Rc::new(HoldServiceImpl::new(hold_repository, catalog_service))
}
