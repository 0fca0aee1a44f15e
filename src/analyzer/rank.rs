use std::fmt::{self, Debug, Display};

use crate::analyzer::token::TermFrequency;

/// Structure to store ranked terms
///
/// Entries are ordered by descending count; terms with equal counts keep
/// the order they were first seen during extraction, so a top-N listing is
/// reproducible run to run.
pub struct Ranking {
    /// (Term, Count)
    pub list: Vec<(String, u32)>,
}

impl Ranking {
    /// Rank a frequency table.
    ///
    /// The table iterates in first-seen order and the sort is stable, which
    /// is what makes the tie-break observable and deterministic.
    pub fn from_table(freq: &TermFrequency) -> Self {
        Ranking {
            list: freq.sorted_frequency_vector(),
        }
    }

    /// The `n` highest-count entries.
    ///
    /// `n` greater than the table size returns every entry; `n = 0` returns
    /// an empty slice. (A negative bound is unrepresentable here.)
    pub fn top(&self, n: usize) -> &[(String, u32)] {
        &self.list[..n.min(self.list.len())]
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the ranking holds no entries.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each entry on a new line
            writeln!(f, "Ranking [")?;
            for (term, count) in &self.list {
                writeln!(f, "    {term}: {count}")?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (term, count)) in self.list.iter().enumerate() {
            writeln!(f, "{:2}. {}: {}", i + 1, term, count)?;
        }
        Ok(())
    }
}
