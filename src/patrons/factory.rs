use std::cell::RefCell;
use std::rc::Rc;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::domain::PatronService;
use crate::patrons::repository::{InMemoryPatronRepository, PatronRepository};

pub(crate) fn create_patron_repository() -> Rc<RefCell<dyn PatronRepository>> {
    Rc::new(RefCell::new(InMemoryPatronRepository::new()))
}

pub(crate) fn create_patron_service(
    patron_repository: Rc<RefCell<dyn PatronRepository>>) -> Rc<dyn PatronService> {
    Rc::new(PatronServiceImpl::new(patron_repository))
}
