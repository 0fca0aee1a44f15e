pub mod pubmed;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One literature record handed to the extractor.
///
/// Immutable once built; a missing abstract is an empty string, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Article title.
    pub title: String,
    /// Abstract body, empty when the record has none.
    #[serde(default)]
    pub abstract_text: String,
    /// PubMed identifier.
    pub pmid: String,
}

impl Document {
    /// Build a document record.
    pub fn new(title: &str, abstract_text: &str, pmid: &str) -> Self {
        Self {
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            pmid: pmid.to_string(),
        }
    }
}

/// Errors emitted while talking to a literature search service.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure.
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Service answered with a non-success status.
    #[error("search service returned status {0}")]
    Status(u16),
    /// Response body did not have the expected shape.
    #[error("unexpected search payload: {0}")]
    Payload(String),
}

/// Abstract literature source.
///
/// The extractor only ever sees `Vec<Document>`, so the network client can
/// be swapped for a stub in tests and the provider can change without
/// touching the core.
pub trait DocumentSource {
    /// Fetch up to `max_results` documents matching `query`.
    ///
    /// Records the provider cannot parse are omitted, not reported.
    fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<Document>, SourceError>;
}

/// Fixed-list source for tests and offline runs.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    /// Documents returned by every fetch.
    pub documents: Vec<Document>,
}

impl StaticSource {
    /// Source that always answers with `documents`.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self, _query: &str, max_results: usize) -> Result<Vec<Document>, SourceError> {
        Ok(self
            .documents
            .iter()
            .take(max_results)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_respects_max_results() {
        let source = StaticSource::new(vec![
            Document::new("one", "", "1"),
            Document::new("two", "", "2"),
            Document::new("three", "", "3"),
        ]);
        let docs = source.fetch("anything", 2).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].pmid, "1");
    }

    #[test]
    fn document_deserializes_without_abstract() {
        let doc: Document =
            serde_json::from_str(r#"{"title":"t","pmid":"42"}"#).unwrap();
        assert_eq!(doc.abstract_text, "");
        assert_eq!(doc.pmid, "42");
    }
}
