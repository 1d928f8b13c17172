//! Corpus graph construction and representation
//!
//! This module provides the link graph over a closed set of pages: a
//! mutable builder for construction time and a frozen CSR form for the
//! ranking algorithms.

pub mod builder;
pub mod corpus;

pub use builder::CorpusBuilder;
pub use corpus::Corpus;
