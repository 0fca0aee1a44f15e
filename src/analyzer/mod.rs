pub mod rank;
pub mod stopwords;
pub mod token;
pub mod tokenize;

use rayon::prelude::*;

use crate::source::Document;

use self::stopwords::StopwordSet;
use self::token::TermFrequency;
use self::tokenize::tokens;

/// How two-word phrases treat document boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhrasePolicy {
    /// Adjacency resets at each document. A phrase never joins the tail of
    /// one abstract to the head of the next.
    #[default]
    PerDocument,
    /// One token sequence over the whole collection, in input order.
    /// Phrases may span document boundaries (the behavior of treating the
    /// collection as a single concatenated text).
    AcrossDocuments,
}

/// Keyword and phrase frequency extraction over a document collection.
///
/// Each document's title and abstract are joined (title first), tokenized,
/// and stopword-filtered; counts accumulate over the whole collection.
/// Phrases are adjacent token pairs of the filtered sequence, so a stopword
/// between two terms still leaves them adjacent ("cardiac the arrest"
/// counts "cardiac arrest").
///
/// # Examples
/// ```
/// use trend_analyzer::analyzer::KeywordExtractor;
/// use trend_analyzer::source::Document;
///
/// let docs = vec![Document::new(
///     "GLP-1 agonist reduces cardiovascular risk",
///     "",
///     "1",
/// )];
/// let extraction = KeywordExtractor::new().extract(&docs);
/// assert_eq!(extraction.terms.term_count("agonist"), 1);
/// assert_eq!(extraction.phrases.term_count("cardiovascular risk"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    stopwords: StopwordSet,
    phrase_policy: PhrasePolicy,
}

/// Result of one extraction run: unigram and phrase tables.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Single-term counts.
    pub terms: TermFrequency,
    /// Two-word phrase counts, keys joined by a single space.
    pub phrases: TermFrequency,
}

impl KeywordExtractor {
    /// Extractor with the default stopword set and per-document phrases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the phrase boundary policy.
    pub fn with_phrase_policy(mut self, policy: PhrasePolicy) -> Self {
        self.phrase_policy = policy;
        self
    }

    /// Filtered token sequence of one document, title then abstract.
    /// Missing fields are just empty text.
    fn filtered_tokens(&self, doc: &Document) -> Vec<String> {
        let text = format!("{} {}", doc.title, doc.abstract_text);
        tokens(&text)
            .filter(|t| !self.stopwords.contains(t))
            .collect()
    }

    /// Count single terms across the collection.
    ///
    /// # Arguments
    /// * `docs` - zero or more documents; empty input yields an empty table
    pub fn term_frequencies(&self, docs: &[Document]) -> TermFrequency {
        let mut freq = TermFrequency::new();
        for doc in docs {
            let toks = self.filtered_tokens(doc);
            freq.add_terms(&toks);
        }
        freq
    }

    /// Parallel variant of [`term_frequencies`](Self::term_frequencies).
    ///
    /// Tables merge by key-wise addition, so the partitioning rayon picks
    /// cannot change the counts.
    pub fn term_frequencies_par(&self, docs: &[Document]) -> TermFrequency {
        docs.par_iter()
            .fold(TermFrequency::new, |mut freq, doc| {
                let toks = self.filtered_tokens(doc);
                freq.add_terms(&toks);
                freq
            })
            .reduce(TermFrequency::new, |mut a, b| {
                a.merge(&b);
                a
            })
    }

    /// Count adjacent two-word phrases across the collection.
    ///
    /// A filtered sequence of 0 or 1 tokens contributes nothing. Boundary
    /// handling follows the configured [`PhrasePolicy`].
    pub fn phrase_frequencies(&self, docs: &[Document]) -> TermFrequency {
        match self.phrase_policy {
            PhrasePolicy::PerDocument => {
                let mut freq = TermFrequency::new();
                for doc in docs {
                    Self::count_pairs(&self.filtered_tokens(doc), &mut freq);
                }
                freq
            }
            PhrasePolicy::AcrossDocuments => {
                let mut all = Vec::new();
                for doc in docs {
                    all.extend(self.filtered_tokens(doc));
                }
                let mut freq = TermFrequency::new();
                Self::count_pairs(&all, &mut freq);
                freq
            }
        }
    }

    /// Parallel phrase counting.
    ///
    /// Only `PerDocument` runs in parallel; `AcrossDocuments` stays
    /// sequential because a partitioned fold would lose the pairs that sit
    /// on partition seams.
    pub fn phrase_frequencies_par(&self, docs: &[Document]) -> TermFrequency {
        match self.phrase_policy {
            PhrasePolicy::PerDocument => docs
                .par_iter()
                .fold(TermFrequency::new, |mut freq, doc| {
                    Self::count_pairs(&self.filtered_tokens(doc), &mut freq);
                    freq
                })
                .reduce(TermFrequency::new, |mut a, b| {
                    a.merge(&b);
                    a
                }),
            PhrasePolicy::AcrossDocuments => self.phrase_frequencies(docs),
        }
    }

    /// Run both granularities sequentially.
    pub fn extract(&self, docs: &[Document]) -> Extraction {
        Extraction {
            terms: self.term_frequencies(docs),
            phrases: self.phrase_frequencies(docs),
        }
    }

    /// Run both granularities with rayon across documents.
    pub fn extract_par(&self, docs: &[Document]) -> Extraction {
        Extraction {
            terms: self.term_frequencies_par(docs),
            phrases: self.phrase_frequencies_par(docs),
        }
    }

    fn count_pairs(toks: &[String], freq: &mut TermFrequency) {
        for pair in toks.windows(2) {
            freq.add_term(&format!("{} {}", pair[0], pair[1]));
        }
    }
}
