use std::collections::HashMap;

// CatalogRepository abstracts storage for title metadata and the
// per-isbn pools of available copy numbers.
pub(crate) trait CatalogRepository {
    fn add_copy(&mut self, isbn: &str, copy_number: u32);
    fn set_title(&mut self, isbn: &str, title: &str);
    fn set_category(&mut self, isbn: &str, category: &str);
    fn contains_isbn(&self, isbn: &str) -> bool;
    fn find_isbns_by_category(&self, category: &str) -> Vec<String>;
    fn title_of(&self, isbn: &str) -> Option<String>;
    fn take_copy(&mut self, isbn: &str) -> Option<u32>;
    fn restore_copy(&mut self, isbn: &str, copy_number: u32);
    fn available_count(&self, isbn: &str) -> usize;
}

// Catalog arenas: one pool of copy numbers per isbn plus two metadata
// tables. An isbn counts as registered once its pool key exists, even
// after every copy has gone out on loan.
#[derive(Debug, Default)]
pub(crate) struct InMemoryCatalogRepository {
    available: HashMap<String, Vec<u32>>,
    titles: HashMap<String, String>,
    categories: HashMap<String, String>,
}

impl InMemoryCatalogRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn add_copy(&mut self, isbn: &str, copy_number: u32) {
        self.available.entry(isbn.to_string()).or_default().push(copy_number);
    }

    fn set_title(&mut self, isbn: &str, title: &str) {
        self.titles.insert(isbn.to_string(), title.to_string());
    }

    fn set_category(&mut self, isbn: &str, category: &str) {
        self.categories.insert(isbn.to_string(), category.to_string());
    }

    fn contains_isbn(&self, isbn: &str) -> bool {
        self.available.contains_key(isbn)
    }

    fn find_isbns_by_category(&self, category: &str) -> Vec<String> {
        let needle = category.to_lowercase();
        self.categories.iter()
            .filter(|(_, stored)| stored.to_lowercase() == needle)
            .map(|(isbn, _)| isbn.to_string())
            .collect()
    }

    fn title_of(&self, isbn: &str) -> Option<String> {
        self.titles.get(isbn).cloned()
    }

    fn take_copy(&mut self, isbn: &str) -> Option<u32> {
        match self.available.get_mut(isbn) {
            Some(pool) if !pool.is_empty() => Some(pool.remove(0)),
            _ => None,
        }
    }

    fn restore_copy(&mut self, isbn: &str, copy_number: u32) {
        self.available.entry(isbn.to_string()).or_default().push(copy_number);
    }

    fn available_count(&self, isbn: &str) -> usize {
        self.available.get(isbn).map(Vec::len).unwrap_or(0)
    }
}
