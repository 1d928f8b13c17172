//! Corpus builder with interned page names
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) page and link lookups during construction.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::PageId;

/// A page under construction
#[derive(Debug, Clone)]
struct BuilderPage {
    /// The page's label (e.g. a filename)
    name: String,
    /// Outbound link targets
    links: FxHashSet<PageId>,
}

impl BuilderPage {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: FxHashSet::default(),
        }
    }
}

/// A mutable corpus builder optimized for incremental construction
///
/// Pages are interned on first registration and receive dense ids in
/// registration order. Links are directed, deduplicated, and never
/// self-referential.
#[derive(Debug)]
pub struct CorpusBuilder {
    /// Maps page name -> page ID
    name_to_id: FxHashMap<String, PageId>,
    /// Page storage
    pages: Vec<BuilderPage>,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusBuilder {
    /// Create a new empty corpus builder
    pub fn new() -> Self {
        Self {
            name_to_id: FxHashMap::default(),
            pages: Vec::new(),
        }
    }

    /// Create a corpus builder with pre-allocated capacity
    pub fn with_capacity(page_capacity: usize) -> Self {
        Self {
            name_to_id: FxHashMap::with_capacity_and_hasher(page_capacity, Default::default()),
            pages: Vec::with_capacity(page_capacity),
        }
    }

    /// Get or create a page for the given name, returning its ID
    pub fn add_page(&mut self, name: &str) -> PageId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.pages.len() as PageId;
        self.name_to_id.insert(name.to_string(), id);
        self.pages.push(BuilderPage::new(name));
        id
    }

    /// Record a directed link between two registered pages
    ///
    /// Self-links are dropped, and adding the same link twice is a no-op.
    pub fn add_link(&mut self, from: PageId, to: PageId) {
        if from == to {
            return; // No self-links
        }
        if (to as usize) >= self.pages.len() {
            return; // Target outside the corpus
        }

        if let Some(page) = self.pages.get_mut(from as usize) {
            page.links.insert(to);
        }
    }

    /// Get a page ID by name
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.name_to_id.get(name).copied()
    }

    /// Get the number of registered pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the total number of directed links
    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }

    /// Check if the builder holds no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over all pages as (id, name, links)
    pub(crate) fn pages(&self) -> impl Iterator<Item = (PageId, &str, &FxHashSet<PageId>)> {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, p)| (i as PageId, p.name.as_str(), &p.links))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_interning() {
        let mut builder = CorpusBuilder::new();

        let a = builder.add_page("1.html");
        let b = builder.add_page("2.html");
        let a_again = builder.add_page("1.html");

        assert_eq!(a, a_again); // Same name should get same ID
        assert_ne!(a, b);
        assert_eq!(builder.page_count(), 2);
    }

    #[test]
    fn test_link_dedup() {
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("1.html");
        let b = builder.add_page("2.html");

        builder.add_link(a, b);
        builder.add_link(a, b);

        assert_eq!(builder.link_count(), 1);
    }

    #[test]
    fn test_links_are_directed() {
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("1.html");
        let b = builder.add_page("2.html");

        builder.add_link(a, b);

        let links: Vec<_> = builder.pages().map(|(_, _, l)| l.clone()).collect();
        assert!(links[0].contains(&b));
        assert!(links[1].is_empty());
    }

    #[test]
    fn test_self_links_dropped() {
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("1.html");

        builder.add_link(a, a);

        assert_eq!(builder.link_count(), 0);
    }

    #[test]
    fn test_unknown_target_dropped() {
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("1.html");

        builder.add_link(a, 99);

        assert_eq!(builder.link_count(), 0);
    }

    #[test]
    fn test_empty_builder() {
        let builder = CorpusBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.page_count(), 0);
        assert_eq!(builder.link_count(), 0);
    }
}
