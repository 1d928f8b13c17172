//! Random-surfer transition model
//!
//! Given a corpus, a current page, and a damping factor, the model produces
//! the next-click probability distribution over every page. Both the
//! sampling and the iterative estimator are defined against this model; it
//! is the only place the damping semantics live.

use rand::Rng;

use crate::errors::RankError;
use crate::graph::Corpus;
use crate::types::PageId;

/// A probability distribution over every page of a corpus
///
/// Entries are non-negative and sum to 1.0 (within floating-point
/// tolerance). Only [`TransitionModel`] constructs these, so a
/// `Distribution` is never empty.
#[derive(Debug, Clone)]
pub struct Distribution {
    probs: Vec<f64>,
}

impl Distribution {
    /// Probability assigned to a page; 0.0 for out-of-range ids
    pub fn probability(&self, page: PageId) -> f64 {
        self.probs.get(page as usize).copied().unwrap_or(0.0)
    }

    /// The full probability vector, indexed by page ID
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Draw a page at random, weighted by probability
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> PageId {
        let mut target = rng.gen::<f64>();
        let last = self.probs.len() - 1;

        for (page, &p) in self.probs.iter().enumerate() {
            if target < p {
                return page as PageId;
            }
            target -= p;
        }

        // Rounding can leave the total mass a hair under 1.0
        last as PageId
    }
}

/// The next-click distribution for a fixed corpus and damping factor
///
/// With probability `damping`, the surfer follows one of the current
/// page's outbound links uniformly at random. With probability
/// `1 - damping`, the surfer teleports to a uniformly random corpus page.
/// A dangling page is treated as linking to every page, itself included,
/// so the walk is well-defined everywhere.
#[derive(Debug, Clone)]
pub struct TransitionModel<'a> {
    corpus: &'a Corpus,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    /// Create a transition model over a corpus
    ///
    /// Fails with [`RankError::EmptyCorpus`] for a zero-page corpus and
    /// [`RankError::InvalidDampingFactor`] when `damping` is outside the
    /// open interval (0, 1).
    pub fn new(corpus: &'a Corpus, damping: f64) -> Result<Self, RankError> {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(RankError::InvalidDampingFactor(damping));
        }
        if corpus.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        Ok(Self { corpus, damping })
    }

    /// The damping factor this model was built with
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Compute the next-click distribution for a page
    ///
    /// Fails with [`RankError::InvalidPage`] when the id does not belong
    /// to the corpus.
    pub fn distribution(&self, page: PageId) -> Result<Distribution, RankError> {
        let n = self.corpus.len();
        if page as usize >= n {
            return Err(RankError::InvalidPage(format!("id {page}")));
        }

        let base = (1.0 - self.damping) / n as f64;
        let mut probs = vec![base; n];

        let degree = self.corpus.degree(page);
        if degree == 0 {
            // Dangling page: pretend it links to every page, itself included
            let share = self.damping / n as f64;
            for p in probs.iter_mut() {
                *p += share;
            }
        } else {
            let share = self.damping / degree as f64;
            for target in self.corpus.links(page) {
                probs[target as usize] += share;
            }
        }

        Ok(Distribution { probs })
    }

    /// Compute the next-click distribution for a page by name
    pub fn distribution_for(&self, name: &str) -> Result<Distribution, RankError> {
        let page = self
            .corpus
            .page_id(name)
            .ok_or_else(|| RankError::InvalidPage(name.to_string()))?;
        self.distribution(page)
    }
}
