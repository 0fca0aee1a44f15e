use std::fmt::Write;

use serde::Serialize;

use crate::analyzer::rank::Ranking;
use crate::analyzer::token::TermFrequency;

/// Terms handed to the word-cloud renderer.
pub const CLOUD_MAX_TERMS: usize = 100;

/// One weighted term for the external word-cloud collaborator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CloudWeight {
    /// Term or phrase.
    pub term: String,
    /// Relative weight in (0, 1], 1.0 for the most frequent term.
    pub weight: f64,
}

/// Top `max_terms` entries as a normalized term -> weight mapping.
///
/// The renderer scales font sizes from these weights, so they are relative
/// to the most frequent term, not absolute counts. An empty table yields an
/// empty mapping.
pub fn cloud_weights(freq: &TermFrequency, max_terms: usize) -> Vec<CloudWeight> {
    let max_count = freq.most_frequent_count();
    if max_count == 0 {
        return Vec::new();
    }
    Ranking::from_table(freq)
        .top(max_terms)
        .iter()
        .map(|(term, count)| CloudWeight {
            term: term.clone(),
            weight: f64::from(*count) / f64::from(max_count),
        })
        .collect()
}

/// Terminal bar chart of the top `n` ranked entries.
///
/// Bars scale to `width` characters for the highest count.
pub fn bar_chart(ranking: &Ranking, n: usize, width: usize) -> String {
    let entries = ranking.top(n);
    let Some(&(_, max_count)) = entries.first() else {
        return String::new();
    };
    let term_width = entries
        .iter()
        .map(|(term, _)| term.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, (term, count)) in entries.iter().enumerate() {
        let bar_len =
            ((f64::from(*count) / f64::from(max_count)) * width as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:2}. {:<term_width$} {} {}",
            i + 1,
            term,
            "#".repeat(bar_len.max(1)),
            count,
        );
    }
    out
}
