//! Rank reporting
//!
//! Formats a [`RankResult`] for display: entries sorted by page name with
//! fixed-precision scores, plus a serde shape for machine consumption.
//! Formatting lives here so the ranking core stays output-agnostic.

use std::fmt;

use serde::Serialize;

use crate::graph::Corpus;
use crate::rank::RankResult;

/// One page's line in a report
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub page: String,
    pub score: f64,
}

/// A titled, page-name-sorted view of a rank result
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub title: String,
    pub entries: Vec<RankEntry>,
}

impl RankReport {
    /// Build a report from a rank result, sorted by page name
    pub fn from_result(title: impl Into<String>, corpus: &Corpus, result: &RankResult) -> Self {
        let mut entries: Vec<RankEntry> = corpus
            .pages()
            .map(|p| RankEntry {
                page: corpus.name(p).to_string(),
                score: result.score(p),
            })
            .collect();
        entries.sort_by(|a, b| a.page.cmp(&b.page));

        Self {
            title: title.into(),
            entries,
        }
    }
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for entry in &self.entries {
            writeln!(f, "  {}: {:.4}", entry.page, entry.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CorpusBuilder;

    fn fixture() -> (Corpus, RankResult) {
        let mut builder = CorpusBuilder::new();
        builder.add_page("b.html");
        builder.add_page("a.html");
        let corpus = Corpus::from_builder(&builder);
        let result = RankResult::new(vec![0.75, 0.25], 12, 0.0004, true);
        (corpus, result)
    }

    #[test]
    fn test_entries_sorted_by_page_name() {
        let (corpus, result) = fixture();
        let report = RankReport::from_result("Results", &corpus, &result);

        assert_eq!(report.entries[0].page, "a.html");
        assert_eq!(report.entries[1].page, "b.html");
        assert_eq!(report.entries[1].score, 0.75);
    }

    #[test]
    fn test_display_format() {
        let (corpus, result) = fixture();
        let report = RankReport::from_result("PageRank Results from Iteration", &corpus, &result);

        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "PageRank Results from Iteration\n  a.html: 0.2500\n  b.html: 0.7500\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let (corpus, result) = fixture();
        let report = RankReport::from_result("Results", &corpus, &result);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["title"], "Results");
        assert_eq!(value["entries"][0]["page"], "a.html");
        assert_eq!(value["entries"][0]["score"], 0.25);
    }
}
