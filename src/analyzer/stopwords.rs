use std::collections::HashSet;

/// Common English function words plus medical boilerplate terms that are
/// too generic to signal a trend ("study", "patients", "results", ...).
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "shall", "can", "need",
    "this", "that", "these", "those", "it", "its", "we", "our", "their",
    "them", "they", "he", "she", "his", "her", "i", "you", "your", "my",
    "which", "who", "whom", "what", "where", "when", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "just", "also", "now", "here", "there",
    // medical boilerplate
    "study", "studies", "patients", "patient", "results", "conclusion",
    "methods", "method", "objective", "objectives", "background",
    "data", "analysis", "using", "used", "use", "based", "associated",
    "between", "among", "after", "before", "during", "within", "without",
    "however", "including", "included", "include", "found", "showed",
    "significantly", "significant", "compared", "increased",
    "decreased", "higher", "lower", "effect", "effects", "group", "groups",
];

/// Immutable set of terms excluded from frequency analysis.
///
/// The set is a plain value, built once and handed to the extractor, so
/// callers can extend or replace the default vocabulary per domain instead
/// of patching a process-wide constant.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    /// Empty set, nothing is filtered.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from a word list. Words are lowercased on the way in.
    pub fn from_words<T>(words: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add extra words to the set, returning it for chaining.
    pub fn with_words<T>(mut self, words: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        for w in words {
            self.words.insert(w.as_ref().to_lowercase());
        }
        self
    }

    /// Check whether a token is filtered. Tokens are expected lowercase.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set filters nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_english_and_medical_terms() {
        let set = StopwordSet::default();
        for w in ["the", "with", "patients", "study", "significant"] {
            assert!(set.contains(w), "{w} should be a stopword");
        }
        assert!(!set.contains("cardiovascular"));
        assert!(!set.contains("agonist"));
    }

    #[test]
    fn custom_words_extend_the_default() {
        let set = StopwordSet::default().with_words(&["Trial", "cohort"]);
        assert!(set.contains("trial"));
        assert!(set.contains("cohort"));
        assert!(set.contains("the"));
    }

    #[test]
    fn empty_set_filters_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }

    #[test]
    fn from_words_lowercases() {
        let set = StopwordSet::from_words(&["FOO", "Bar"]);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert_eq!(set.len(), 2);
    }
}
