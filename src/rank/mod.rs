//! PageRank estimators
//!
//! This module provides the shared transition model and the two estimators
//! built on top of it: random-walk sampling and power iteration.

pub mod iterative;
pub mod sampling;
pub mod transition;

use crate::graph::Corpus;
use crate::types::PageId;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each page (indexed by page ID), summing to 1.0
    pub scores: Vec<f64>,
    /// Number of sweeps (iterative) or draws (sampling) performed
    pub iterations: usize,
    /// Final convergence delta; 0.0 for the sampling estimator
    pub delta: f64,
    /// Whether the estimator converged; always true for sampling
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific page
    pub fn score(&self, page: PageId) -> f64 {
        self.scores.get(page as usize).copied().unwrap_or(0.0)
    }

    /// Get the score for a page by name
    pub fn score_of(&self, corpus: &Corpus, name: &str) -> Option<f64> {
        corpus.page_id(name).map(|id| self.score(id))
    }

    /// Get top N pages by score
    pub fn top_n(&self, n: usize) -> Vec<(PageId, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as PageId, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CorpusBuilder;

    #[test]
    fn test_top_n() {
        let result = RankResult::new(vec![0.2, 0.5, 0.3], 10, 0.0005, true);

        let top = result.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, 1);
        assert_eq!(top[1].0, 2);
    }

    #[test]
    fn test_score_accessors() {
        let mut builder = CorpusBuilder::new();
        builder.add_page("1.html");
        builder.add_page("2.html");
        let corpus = Corpus::from_builder(&builder);

        let result = RankResult::new(vec![0.6, 0.4], 1, 0.0, true);

        assert_eq!(result.score(0), 0.6);
        assert_eq!(result.score(7), 0.0);
        assert_eq!(result.score_of(&corpus, "2.html"), Some(0.4));
        assert_eq!(result.score_of(&corpus, "nope.html"), None);
    }
}
