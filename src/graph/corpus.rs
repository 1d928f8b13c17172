//! Frozen corpus in Compressed Sparse Row (CSR) form
//!
//! CSR stores outbound links contiguously, making iteration over a page's
//! links very fast. Both ranking algorithms sweep the full link set
//! repeatedly, so this is the representation they consume. A `Corpus` is
//! immutable once built.

use rustc_hash::FxHashMap;

use super::builder::CorpusBuilder;
use crate::types::PageId;

/// A closed, read-only link graph over a set of pages
///
/// Invariants, enforced by [`CorpusBuilder`]: no self-links, every link
/// target is itself a page of the corpus, and a page may have zero
/// outbound links (a dangling page).
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Number of pages
    pub num_pages: usize,
    /// Row pointers: page i's links are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Link targets for each page
    pub col_idx: Vec<PageId>,
    /// Out-degree for each page
    pub out_degree: Vec<u32>,
    /// Page names, indexed by page ID
    pub names: Vec<String>,
    /// Maps page name -> page ID
    name_to_id: FxHashMap<String, PageId>,
}

impl Corpus {
    /// Convert a CorpusBuilder into CSR form
    pub fn from_builder(builder: &CorpusBuilder) -> Self {
        let num_pages = builder.page_count();
        let mut row_ptr = Vec::with_capacity(num_pages + 1);
        let mut col_idx = Vec::new();
        let mut out_degree = Vec::with_capacity(num_pages);
        let mut names = Vec::with_capacity(num_pages);
        let mut name_to_id =
            FxHashMap::with_capacity_and_hasher(num_pages, Default::default());

        row_ptr.push(0);

        for (id, name, links) in builder.pages() {
            names.push(name.to_string());
            name_to_id.insert(name.to_string(), id);

            // Sort links for deterministic iteration
            let mut targets: Vec<PageId> = links.iter().copied().collect();
            targets.sort_unstable();

            out_degree.push(targets.len() as u32);
            col_idx.extend_from_slice(&targets);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_pages,
            row_ptr,
            col_idx,
            out_degree,
            names,
            name_to_id,
        }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.num_pages
    }

    /// Check if the corpus has no pages
    pub fn is_empty(&self) -> bool {
        self.num_pages == 0
    }

    /// Total number of directed links
    pub fn num_links(&self) -> usize {
        self.col_idx.len()
    }

    /// Iterate over the outbound links of a page
    pub fn links(&self, page: PageId) -> impl Iterator<Item = PageId> + '_ {
        let start = self.row_ptr[page as usize];
        let end = self.row_ptr[page as usize + 1];
        self.col_idx[start..end].iter().copied()
    }

    /// Get the out-degree of a page
    pub fn degree(&self, page: PageId) -> u32 {
        self.out_degree[page as usize]
    }

    /// Get the name of a page
    pub fn name(&self, page: PageId) -> &str {
        &self.names[page as usize]
    }

    /// Get a page ID by name
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.name_to_id.get(name).copied()
    }

    /// Check whether a page name belongs to the corpus
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Iterate over all page IDs
    pub fn pages(&self) -> impl Iterator<Item = PageId> {
        0..self.num_pages as PageId
    }

    /// Find dangling pages (pages with no outbound links)
    pub fn dangling_pages(&self) -> Vec<PageId> {
        (0..self.num_pages as PageId)
            .filter(|&p| self.out_degree[p as usize] == 0)
            .collect()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            num_pages: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            names: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }
}
