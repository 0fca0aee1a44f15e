/// This crate is a Research Trend Analysis Engine over PubMed search results.
pub mod analyzer;
pub mod config;
pub mod render;
pub mod report;
pub mod source;
pub mod summarize;

/// Keyword Extractor
/// The top-level struct of the extraction core. It turns a collection of
/// documents (title + abstract pairs) into frequency tables of single
/// terms and two-word phrases.
///
/// Internally, each document is tokenized into lowercase alphabetic tokens
/// of length >= 3, stopwords are dropped, and counts accumulate over the
/// whole collection. Phrase adjacency is computed after filtering, and the
/// document-boundary behavior is selected with `PhrasePolicy`.
///
/// The extractor holds no state between runs; the same collection always
/// produces the same tables.
///
/// # Parallelism
/// `extract_par` distributes documents over rayon. Tables merge by
/// key-wise addition, so partitioning never changes the counts.
pub use analyzer::KeywordExtractor;

/// Result of one extraction run
/// Holds the two granularities the renderer and summarizer consume:
/// - `terms`: single-term counts
/// - `phrases`: two-word phrase counts, keys joined by one space
pub use analyzer::Extraction;

/// Phrase boundary policy
/// `PerDocument` resets adjacency at each document (default).
/// `AcrossDocuments` treats the collection as one concatenated sequence,
/// so a phrase may join the tail of one abstract to the head of the next.
pub use analyzer::PhrasePolicy;

/// Term Frequency structure
/// A struct for analyzing/managing term occurrence frequency.
/// It manages:
/// - The count of occurrences of each term
/// - The total number of terms counted
///
/// Keys keep first-seen order, which makes top-N ties deterministic.
/// Tables merge by key-wise addition.
pub use analyzer::token::TermFrequency;

/// Stopword Set
/// An immutable, injectable set of terms excluded from analysis. The
/// default carries common English words plus medical boilerplate; callers
/// extend or replace it per domain.
pub use analyzer::stopwords::StopwordSet;

/// Ranking structure
/// A ranked view over a frequency table providing top-N listings.
/// Ordered by descending count; ties keep first-seen order.
pub use analyzer::rank::Ranking;

/// Document record and source capability
/// `Document` is one literature record (title, abstract, PMID).
/// `DocumentSource` abstracts the literature search collaborator so the
/// core stays testable with `StaticSource`.
pub use source::{Document, DocumentSource, StaticSource};

/// PubMed client
/// Blocking E-utilities client: ESearch for PMIDs, EFetch for records,
/// relevance order, malformed records skipped.
pub use source::pubmed::PubMedClient;

/// Summarizer capability
/// Abstract trend summarizer plus the prompt builder that formats the top
/// terms as "term(count)" pairs with a sample of paper titles.
pub use summarize::{trend_prompt, Summarizer};

/// Ollama client
/// Blocking chat client for a hosted or local Ollama endpoint. A failed
/// call surfaces as an error the orchestrator reports without aborting the
/// run.
pub use summarize::ollama::OllamaClient;
