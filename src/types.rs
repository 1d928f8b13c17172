//! Shared identifiers and default parameters.

/// Identifier of a page inside a [`Corpus`](crate::graph::Corpus).
///
/// Ids are dense indices assigned in page-registration order, so they can
/// be used directly to index score and probability vectors.
pub type PageId = u32;

/// Probability of following an outbound link rather than teleporting to a
/// uniformly random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Number of random-walk steps taken by the sampling estimator.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Maximum per-page rank change at which the iterative solver stops.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Safety cap on power-iteration sweeps.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
