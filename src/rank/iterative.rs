//! Iterative PageRank solver
//!
//! Applies the PageRank recurrence
//!
//! ```text
//! rank(p) = (1 - d)/N + d * Σ rank(i) / outdegree(i)   over pages i linking to p
//! ```
//!
//! until the ranks stabilize. Dangling pages are treated as linking to
//! every page (themselves included) with weight `rank/N`, the same
//! convention the transition model uses, so total mass is conserved across
//! sweeps.
//!
//! # Convergence
//!
//! Every sweep computes all new ranks from a snapshot of the previous
//! sweep's values (two buffers, swapped at sweep end), never from values
//! mutated mid-sweep. The stopping criterion is the maximum absolute
//! per-page change across the whole sweep falling below the threshold;
//! no single page converging can end the loop on its own.

use tracing::debug;

use super::RankResult;
use crate::errors::RankError;
use crate::graph::Corpus;
use crate::types::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};

/// Deterministic fixed-point PageRank solver
#[derive(Debug, Clone)]
pub struct IterativePageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the sweep-wide maximum change
    pub threshold: f64,
    /// Safety cap on sweeps for graphs that refuse to settle
    pub max_iterations: usize,
}

impl Default for IterativePageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterativePageRank {
    /// Create a new IterativePageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the maximum number of sweeps
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Solve for the stationary distribution
    ///
    /// Returns the result even when the iteration cap is hit, with
    /// `converged = false`. Fails with [`RankError::EmptyCorpus`] or
    /// [`RankError::InvalidDampingFactor`] on bad inputs.
    pub fn run(&self, corpus: &Corpus) -> Result<RankResult, RankError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidDampingFactor(self.damping));
        }
        if corpus.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let n = corpus.len();
        let n_f64 = n as f64;

        // Initialize ranks uniformly
        let mut scores = vec![1.0 / n_f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling_pages = corpus.dangling_pages();
        let teleport = (1.0 - self.damping) / n_f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Dangling mass spreads uniformly, teleport included up front
            let dangling_mass: f64 = dangling_pages
                .iter()
                .map(|&p| scores[p as usize])
                .sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n_f64);

            // Push each page's rank to its link targets, reading only the
            // previous sweep's snapshot
            for (page, &score) in scores.iter().enumerate() {
                let degree = corpus.degree(page as u32);
                if degree > 0 {
                    let share = self.damping * score / degree as f64;
                    for target in corpus.links(page as u32) {
                        new_scores[target as usize] += share;
                    }
                }
            }

            // Sweep-wide maximum change: every page must settle in the
            // same sweep before the loop may stop
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            debug!(iteration = iterations, delta, "sweep complete");
        }

        // Mass is conserved analytically; renormalize to absorb float drift
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ok(RankResult::new(
            scores,
            iterations,
            delta,
            delta <= self.threshold,
        ))
    }
}
