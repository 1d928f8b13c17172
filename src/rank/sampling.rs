//! Sampling PageRank estimator
//!
//! Estimates the stationary distribution of the random-surfer chain by
//! walking it: start on a uniformly random page, take `samples` weighted
//! steps through the transition model, and report visit frequencies.
//! The estimate is statistically noisy; accuracy improves with the number
//! of samples but carries no convergence guarantee.

use rand::Rng;
use tracing::debug;

use super::transition::{Distribution, TransitionModel};
use super::RankResult;
use crate::errors::RankError;
use crate::graph::Corpus;
use crate::types::{DEFAULT_DAMPING, DEFAULT_SAMPLES};

/// Random-walk PageRank estimator
#[derive(Debug, Clone)]
pub struct SamplingPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of walk steps to take
    pub samples: usize,
}

impl Default for SamplingPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl SamplingPageRank {
    /// Create a new SamplingPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of walk steps
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Estimate PageRank by sampling the random-surfer chain
    ///
    /// The generator is an explicit parameter so callers control
    /// reproducibility; tests seed a `StdRng`, the CLI can seed from
    /// entropy.
    ///
    /// Fails with [`RankError::InvalidSampleCount`] when `samples` is
    /// zero; corpus and damping preconditions are checked by the
    /// underlying [`TransitionModel`].
    pub fn run<R: Rng + ?Sized>(
        &self,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Result<RankResult, RankError> {
        if self.samples < 1 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }

        let model = TransitionModel::new(corpus, self.damping)?;
        let n = corpus.len();

        // The corpus is immutable, so each page's next-click distribution
        // is fixed for the whole walk. Compute every row once up front
        // instead of once per step.
        let rows: Vec<Distribution> = corpus
            .pages()
            .map(|page| model.distribution(page))
            .collect::<Result<_, _>>()?;

        let mut visits = vec![0u64; n];
        let mut current = rng.gen_range(0..n as u32);

        for _ in 0..self.samples {
            current = rows[current as usize].draw(rng);
            visits[current as usize] += 1;
        }

        debug!(
            samples = self.samples,
            pages = n,
            "sampling walk complete"
        );

        let scores: Vec<f64> = visits
            .iter()
            .map(|&v| v as f64 / self.samples as f64)
            .collect();

        Ok(RankResult::new(scores, self.samples, 0.0, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CorpusBuilder;
    use crate::rank::iterative::IterativePageRank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build_two_cycle() -> Corpus {
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("a.html");
        let b = builder.add_page("b.html");
        builder.add_link(a, b);
        builder.add_link(b, a);
        Corpus::from_builder(&builder)
    }

    fn build_chain() -> Corpus {
        // 1 -> 2 -> 3, 3 dangling
        let mut builder = CorpusBuilder::new();
        let a = builder.add_page("1.html");
        let b = builder.add_page("2.html");
        let c = builder.add_page("3.html");
        builder.add_link(a, b);
        builder.add_link(b, c);
        Corpus::from_builder(&builder)
    }

    #[test]
    fn test_scores_sum_to_one() {
        let corpus = build_chain();
        let mut rng = StdRng::seed_from_u64(1);

        let result = SamplingPageRank::new().run(&corpus, &mut rng).unwrap();

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(result.iterations, DEFAULT_SAMPLES);
        assert!(result.converged);
    }

    #[test]
    fn test_single_page_corpus() {
        let mut builder = CorpusBuilder::new();
        builder.add_page("a.html");
        let corpus = Corpus::from_builder(&builder);
        let mut rng = StdRng::seed_from_u64(2);

        let result = SamplingPageRank::new()
            .with_samples(50)
            .run(&corpus, &mut rng)
            .unwrap();

        assert!((result.score(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_cycle_near_half() {
        let corpus = build_two_cycle();
        let mut rng = StdRng::seed_from_u64(3);

        let result = SamplingPageRank::new().run(&corpus, &mut rng).unwrap();

        assert!((result.score(0) - 0.5).abs() < 0.05);
        assert!((result.score(1) - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let corpus = build_chain();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let sampler = SamplingPageRank::new().with_samples(2_000);
        let a = sampler.run(&corpus, &mut rng_a).unwrap();
        let b = sampler.run(&corpus, &mut rng_b).unwrap();

        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn test_agrees_with_iterative_solver() {
        let corpus = build_chain();
        let mut rng = StdRng::seed_from_u64(4);

        let sampled = SamplingPageRank::new()
            .with_samples(50_000)
            .run(&corpus, &mut rng)
            .unwrap();
        let iterated = IterativePageRank::new().run(&corpus).unwrap();

        for page in corpus.pages() {
            assert!(
                (sampled.score(page) - iterated.score(page)).abs() < 0.05,
                "page {page} diverges between estimators"
            );
        }
    }

    #[test]
    fn test_zero_samples_rejected() {
        let corpus = build_two_cycle();
        let mut rng = StdRng::seed_from_u64(5);

        let err = SamplingPageRank::new()
            .with_samples(0)
            .run(&corpus, &mut rng);

        assert!(matches!(err, Err(RankError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_transition_errors_propagate() {
        let corpus = build_two_cycle();
        let mut rng = StdRng::seed_from_u64(6);

        let err = SamplingPageRank::new()
            .with_damping(1.5)
            .run(&corpus, &mut rng);
        assert!(matches!(err, Err(RankError::InvalidDampingFactor(_))));

        let empty = Corpus::default();
        let err = SamplingPageRank::new().run(&empty, &mut rng);
        assert!(matches!(err, Err(RankError::EmptyCorpus)));
    }
}
