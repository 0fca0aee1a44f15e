pub mod ollama;

use std::fmt::Write;

use thiserror::Error;

use crate::analyzer::token::TermFrequency;
use crate::source::Document;

/// Terms quoted in the analysis prompt.
pub const PROMPT_TOP_TERMS: usize = 20;
/// Paper titles quoted in the analysis prompt.
pub const PROMPT_SAMPLE_TITLES: usize = 10;

/// Errors emitted while calling a summarization model.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Transport-level failure.
    #[error("summarizer request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Service answered with a non-success status.
    #[error("summarizer returned status {0}")]
    Status(u16),
    /// Response body did not have the expected shape.
    #[error("unexpected summarizer payload: {0}")]
    Payload(String),
}

/// Abstract trend summarizer.
///
/// Takes a ready-made prompt so providers stay interchangeable; a failure
/// here is reported to the user and never aborts the analysis run.
pub trait Summarizer {
    /// Produce a trend analysis for the prompt.
    fn summarize(&self, prompt: &str) -> Result<String, SummarizeError>;
}

/// Build the research-trend prompt: the keyword, the top terms as
/// `term(count)` pairs, and a sample of paper titles.
pub fn trend_prompt(keyword: &str, documents: &[Document], terms: &TermFrequency) -> String {
    let ranked = crate::analyzer::rank::Ranking::from_table(terms);
    let top_terms = ranked
        .top(PROMPT_TOP_TERMS)
        .iter()
        .map(|(term, count)| format!("{term}({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    let sample_titles = documents
        .iter()
        .take(PROMPT_SAMPLE_TITLES)
        .map(|d| format!("- {}", d.title))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a research analyst. Analyze the following PubMed search results for \"{keyword}\"."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "**Top {PROMPT_TOP_TERMS} Most Frequent Terms:**");
    let _ = writeln!(prompt, "{top_terms}");
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "**Sample Paper Titles ({} of {}):**",
        documents.len().min(PROMPT_SAMPLE_TITLES),
        documents.len()
    );
    let _ = writeln!(prompt, "{sample_titles}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Based on this data, provide:");
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "1. **Main Research Areas** (3-5 key areas where most research is concentrated)"
    );
    let _ = writeln!(
        prompt,
        "2. **Emerging Topics** (any newer or trending subtopics you notice)"
    );
    let _ = writeln!(
        prompt,
        "3. **Research Gaps** (areas that seem underrepresented)"
    );
    let _ = writeln!(
        prompt,
        "4. **Summary** (2-3 sentences overview of the research landscape)"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Be specific and use the actual terms from the data.");
    prompt
}
