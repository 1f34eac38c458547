pub mod service;

pub(crate) trait CatalogService {
    // data entry; duplicate copy numbers are the caller's responsibility
    fn add_copy(&self, isbn: &str, copy_number: u32);
    fn add_copy_with_title(&self, isbn: &str, copy_number: u32, title: &str, category: &str);

    // true iff at least one copy of the isbn was ever registered
    fn has_isbn(&self, isbn: &str) -> bool;

    // display titles of every isbn whose category matches, case-insensitive
    fn search_by_category(&self, category: &str) -> Vec<String>;

    fn available_copy_count(&self, isbn: &str) -> usize;

    // removes one copy number from the pool; which one is not part of the contract
    fn take_copy(&self, isbn: &str) -> Option<u32>;

    fn restore_copy(&self, isbn: &str, copy_number: u32);
}
