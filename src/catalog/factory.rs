use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::catalog::repository::{CatalogRepository, InMemoryCatalogRepository};

pub(crate) fn create_catalog_repository() -> Rc<RefCell<dyn CatalogRepository>> {
    Rc::new(RefCell::new(InMemoryCatalogRepository::new()))
}

pub(crate) fn create_catalog_service(
    catalog_repository: Rc<RefCell<dyn CatalogRepository>>) -> Rc<dyn CatalogService> {
    Rc::new(CatalogServiceImpl::new(catalog_repository))
}
