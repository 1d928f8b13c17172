//! Corpus crawling
//!
//! Builds a [`Corpus`] from a directory of HTML pages: every `*.html` file
//! becomes a page, and every `href` target that names another page of the
//! same directory becomes a link. Self-links and targets outside the
//! corpus are dropped. The ranking core never parses markup; this module
//! is the collaborator that feeds it a finished graph.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::graph::{Corpus, CorpusBuilder};

/// Matches anchor tags and captures the href target.
const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

fn href_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HREF_PATTERN).expect("hard-coded pattern compiles"))
}

/// Failures while reading the corpus directory
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to read corpus directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read page {path}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Crawl a directory of HTML pages into a corpus
///
/// Page ids are assigned in filename order, so the same directory always
/// yields the same corpus regardless of directory-listing order. Files
/// whose names don't end in `.html` are ignored.
pub fn crawl(directory: &Path) -> Result<Corpus, CrawlError> {
    let entries = fs::read_dir(directory).map_err(|source| CrawlError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CrawlError::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".html") && path.is_file() {
            files.push((name, path));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    // Parse pages in parallel, then assemble the graph sequentially
    let parsed: Vec<(String, Vec<String>)> = files
        .par_iter()
        .map(|(name, path)| {
            let contents = fs::read_to_string(path).map_err(|source| CrawlError::ReadPage {
                path: path.clone(),
                source,
            })?;
            let targets: Vec<String> = href_regex()
                .captures_iter(&contents)
                .map(|cap| cap[1].to_string())
                .collect();
            debug!(page = %name, targets = targets.len(), "parsed page");
            Ok((name.clone(), targets))
        })
        .collect::<Result<_, CrawlError>>()?;

    let mut builder = CorpusBuilder::with_capacity(parsed.len());
    for (name, _) in &parsed {
        builder.add_page(name);
    }
    for (name, targets) in &parsed {
        let from = match builder.page_id(name) {
            Some(id) => id,
            None => continue,
        };
        for target in targets {
            // Only keep links to other pages of the corpus
            if let Some(to) = builder.page_id(target) {
                builder.add_link(from, to);
            }
        }
    }

    let corpus = Corpus::from_builder(&builder);
    info!(
        pages = corpus.len(),
        links = corpus.num_links(),
        "crawled corpus"
    );
    Ok(corpus)
}
