//! Labeled sentences and the corpus format they are loaded from.
//!
//! # Core Components
//!
//! - [`document::Document`] - A tokenized sentence with its topic labels
//! - [`parser::CorpusLoader`] - Parses the two-line-per-record corpus format
//! - [`parser::Corpus`] - Loaded documents plus their topic occurrence counts
//!
//! # Examples
//!
//! ```
//! use topic_bayes::document::parser::CorpusLoader;
//!
//! let corpus = CorpusLoader::new()
//!     .parse_str("doc\t1\tfinance.\nbuy stock\n")
//!     .unwrap();
//!
//! assert_eq!(corpus.documents.len(), 1);
//! assert_eq!(corpus.documents[0].topics(), ["finance"]);
//! assert_eq!(corpus.topic_counts.count("finance"), 1);
//! ```

#[allow(clippy::module_inception)]
pub mod document;
pub mod parser;
