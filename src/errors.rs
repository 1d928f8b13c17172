//! Error types for the ranking core.
//!
//! Every public ranking operation returns `Result<_, RankError>`; callers
//! decide whether to report or abort. The core never retries and never
//! substitutes degenerate output for a failed precondition.

use thiserror::Error;

/// Failures surfaced by the transition model and both rank estimators.
#[derive(Debug, Error)]
pub enum RankError {
    /// The corpus contains no pages, so no distribution is defined.
    #[error("corpus is empty")]
    EmptyCorpus,

    /// A page was requested that is not part of the corpus.
    #[error("unknown page: {0}")]
    InvalidPage(String),

    /// Damping factor outside the open interval (0, 1).
    #[error("damping factor {0} is outside (0, 1)")]
    InvalidDampingFactor(f64),

    /// The sampling estimator needs at least one draw.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
}
