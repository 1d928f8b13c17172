//! # linkrank
//!
//! PageRank over a small, closed web corpus, computed two independent
//! ways: by sampling the random-surfer Markov chain and by iterating the
//! PageRank recurrence to a fixed point. Both estimators share one
//! [`TransitionModel`](rank::transition::TransitionModel), which is the
//! only place the damping and dangling-page semantics live.
//!
//! The [`crawl`](crawl::crawl) collaborator turns a directory of HTML
//! pages into a [`Corpus`](graph::Corpus); the core itself never touches
//! markup.
//!
//! # Quick start
//!
//! ```
//! use linkrank::graph::{Corpus, CorpusBuilder};
//! use linkrank::rank::iterative::IterativePageRank;
//!
//! let mut builder = CorpusBuilder::new();
//! let a = builder.add_page("a.html");
//! let b = builder.add_page("b.html");
//! builder.add_link(a, b);
//! builder.add_link(b, a);
//! let corpus = Corpus::from_builder(&builder);
//!
//! let ranks = IterativePageRank::new().run(&corpus)?;
//! assert!((ranks.score(a) - 0.5).abs() < 0.01);
//! # Ok::<(), linkrank::RankError>(())
//! ```

pub mod crawl;
pub mod errors;
pub mod graph;
pub mod rank;
pub mod report;
pub mod types;

pub use crate::crawl::CrawlError;
pub use crate::errors::RankError;
pub use crate::graph::{Corpus, CorpusBuilder};
pub use crate::rank::iterative::IterativePageRank;
pub use crate::rank::sampling::SamplingPageRank;
pub use crate::rank::transition::{Distribution, TransitionModel};
pub use crate::rank::RankResult;
pub use crate::report::{RankEntry, RankReport};
pub use crate::types::PageId;
