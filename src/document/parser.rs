//! Corpus loader for the two-line-per-record sentence format.
//!
//! A corpus is a sequence of non-empty line pairs. Exactly-empty lines are
//! skipped anywhere and do not affect the pairing.
//!
//! ```text
//! <tag>\t<sentence id>\t<topic>\t...\t<topic><trailing char>
//! <token> <token> <token> ...
//! ```
//!
//! - The header's first field is ignored and the second is the integer
//!   sentence id. All remaining fields are topic labels. A label listed twice
//!   in one header is kept once, at its first position. Empty labels are
//!   valid.
//! - The last topic field carries one trailing character that is removed
//!   before use. See [`HeaderOptions::strip_trailing_char`].
//! - The body is split on single spaces.
//!
//! Both splits drop trailing empty fields but keep interior ones, so
//! `"a  b"` yields the tokens `["a", "", "b"]`.
//!
//! # Architecture
//!
//! ```text
//! file → CorpusLoader → Corpus { documents, topic_counts }
//! ```
//!
//! Topic counts are returned as part of the [`Corpus`] value. Nothing is
//! shared between loads.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classifier::types::TopicCounts;
use crate::document::document::Document;
use crate::error::{Result, TopicBayesError};

/// Options controlling how header lines are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    /// Remove the final character of the last topic field.
    ///
    /// Corpora in this format end every header with one extra character
    /// after the last label.
    pub strip_trailing_char: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            strip_trailing_char: true,
        }
    }
}

/// Documents loaded from one corpus together with their topic occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents in file order.
    pub documents: Vec<Document>,
    /// One count per topic label occurrence across all documents.
    pub topic_counts: TopicCounts,
}

impl Corpus {
    /// Append a document and count its topic labels.
    pub fn push(&mut self, document: Document) {
        for topic in document.topics() {
            self.topic_counts.increment(topic);
        }
        self.documents.push(document);
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// A parsed header line waiting for its body.
#[derive(Debug)]
struct Header {
    line_number: usize,
    sentence_id: i64,
    topics: Vec<String>,
}

/// Loader for the header/body corpus format.
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    options: HeaderOptions,
}

impl CorpusLoader {
    /// Create a loader with default header options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the given header options.
    pub fn with_options(options: HeaderOptions) -> Self {
        CorpusLoader { options }
    }

    /// The header options in use.
    pub fn options(&self) -> HeaderOptions {
        self.options
    }

    /// Load a corpus file.
    ///
    /// A missing or unreadable file is reported as [`TopicBayesError::Load`],
    /// including read failures such as invalid UTF-8 part way through.
    /// The file is closed when this function returns, on success or failure.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TopicBayesError::load(path, e))?;
        let corpus = self
            .parse_reader(BufReader::new(file))
            .map_err(|e| match e {
                TopicBayesError::Io(source) => TopicBayesError::load(path, source),
                other => other,
            })?;

        info!(
            "Loaded {} documents from {}",
            corpus.len(),
            path.display()
        );
        debug!(
            "{} distinct topics, {} topic occurrences",
            corpus.topic_counts.len(),
            corpus.topic_counts.total()
        );

        Ok(corpus)
    }

    /// Parse a corpus held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Corpus> {
        self.parse_reader(text.as_bytes())
    }

    /// Parse a corpus from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Corpus> {
        let mut corpus = Corpus::default();
        let mut pending: Option<Header> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            match pending.take() {
                None => pending = Some(self.parse_header(&line, index + 1)?),
                Some(header) => {
                    let tokens = parse_body(&line);
                    corpus.push(Document::new(tokens, header.topics, header.sentence_id));
                }
            }
        }

        if let Some(header) = pending {
            return Err(TopicBayesError::format_at(
                header.line_number,
                format!("sentence {} has a header but no body line", header.sentence_id),
            ));
        }

        Ok(corpus)
    }

    fn parse_header(&self, line: &str, line_number: usize) -> Result<Header> {
        let fields = split_fields(line, '\t');
        if fields.len() < 2 {
            return Err(TopicBayesError::format_at(
                line_number,
                format!(
                    "expected at least 2 tab-separated header fields, found {}",
                    fields.len()
                ),
            ));
        }

        let sentence_id = fields[1].parse::<i64>().map_err(|e| {
            TopicBayesError::format_at(
                line_number,
                format!("invalid sentence id {:?}: {}", fields[1], e),
            )
        })?;

        let last = fields.len() - 1;
        let mut topics: Vec<String> = Vec::with_capacity(fields.len() - 2);
        for (i, field) in fields.iter().enumerate().skip(2) {
            let topic = if i == last && self.options.strip_trailing_char {
                strip_trailing_char(field)
            } else {
                field
            };

            // Labels form a set per sentence.
            if !topics.iter().any(|t| t == topic) {
                topics.push(topic.to_string());
            }
        }

        Ok(Header {
            line_number,
            sentence_id,
            topics,
        })
    }
}

/// Split a body line into tokens.
fn parse_body(line: &str) -> Vec<String> {
    split_fields(line, ' ')
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split on `separator`, dropping trailing empty fields.
fn split_fields(line: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(separator).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Remove the final character of `field`.
fn strip_trailing_char(field: &str) -> &str {
    let mut chars = field.chars();
    chars.next_back();
    chars.as_str()
}
