use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::catalog::repository::CatalogRepository;

pub(crate) struct CatalogServiceImpl {
    catalog_repository: Rc<RefCell<dyn CatalogRepository>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(catalog_repository: Rc<RefCell<dyn CatalogRepository>>) -> Self {
        Self {
            catalog_repository,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_copy(&self, isbn: &str, copy_number: u32) {
        self.catalog_repository.borrow_mut().add_copy(isbn, copy_number);
        tracing::debug!("copy {} of isbn {} registered", copy_number, isbn);
    }

    fn add_copy_with_title(&self, isbn: &str, copy_number: u32, title: &str, category: &str) {
        let mut repository = self.catalog_repository.borrow_mut();
        repository.add_copy(isbn, copy_number);
        repository.set_title(isbn, title);
        repository.set_category(isbn, category);
    }

    fn has_isbn(&self, isbn: &str) -> bool {
        self.catalog_repository.borrow().contains_isbn(isbn)
    }

    fn search_by_category(&self, category: &str) -> Vec<String> {
        let repository = self.catalog_repository.borrow();
        repository.find_isbns_by_category(category).iter()
            .map(|isbn| repository.title_of(isbn)
                .unwrap_or_else(|| format!("Titre inconnu ({})", isbn)))
            .collect()
    }

    fn available_copy_count(&self, isbn: &str) -> usize {
        self.catalog_repository.borrow().available_count(isbn)
    }

    fn take_copy(&self, isbn: &str) -> Option<u32> {
        self.catalog_repository.borrow_mut().take_copy(isbn)
    }

    fn restore_copy(&self, isbn: &str, copy_number: u32) {
        self.catalog_repository.borrow_mut().restore_copy(isbn, copy_number);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::repository::{CatalogRepository, InMemoryCatalogRepository};

    fn service() -> CatalogServiceImpl {
        CatalogServiceImpl::new(Rc::new(RefCell::new(InMemoryCatalogRepository::new())))
    }

    #[test]
    fn test_should_search_category_case_insensitively() {
        let catalog_svc = service();
        catalog_svc.add_copy_with_title("123-1", 1, "Sherlock Holmes", "Polar");
        catalog_svc.add_copy_with_title("456-1", 1, "Le Mystère de la chambre jaune", "polar");

        let titles = catalog_svc.search_by_category("POLAR");
        assert_eq!(2, titles.len());
        assert!(titles.contains(&"Sherlock Holmes".to_string()));
        assert!(titles.contains(&"Le Mystère de la chambre jaune".to_string()));
    }

    #[test]
    fn test_should_return_empty_for_unmatched_category() {
        let catalog_svc = service();
        catalog_svc.add_copy_with_title("123-1", 1, "Sherlock Holmes", "Polar");
        assert!(catalog_svc.search_by_category("Voyage").is_empty());
    }

    #[test]
    fn test_should_fall_back_to_placeholder_title() {
        let repository = Rc::new(RefCell::new(InMemoryCatalogRepository::new()));
        {
            let mut repository = repository.borrow_mut();
            repository.add_copy("789-1", 1);
            repository.set_category("789-1", "Polar");
        }
        let catalog_svc = CatalogServiceImpl::new(repository);
        assert_eq!(vec!["Titre inconnu (789-1)".to_string()],
                   catalog_svc.search_by_category("Polar"));
    }

    #[test]
    fn test_should_count_available_copies() {
        let catalog_svc = service();
        assert_eq!(0, catalog_svc.available_copy_count("123-1"));
        catalog_svc.add_copy("123-1", 1);
        catalog_svc.add_copy("123-1", 2);
        assert_eq!(2, catalog_svc.available_copy_count("123-1"));

        let taken = catalog_svc.take_copy("123-1").expect("should take");
        assert_eq!(1, catalog_svc.available_copy_count("123-1"));
        catalog_svc.restore_copy("123-1", taken);
        assert_eq!(2, catalog_svc.available_copy_count("123-1"));
    }
}
