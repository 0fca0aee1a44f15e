use std::fmt::Write;

use crate::analyzer::rank::Ranking;
use crate::source::Document;

/// Papers listed at the end of the report.
pub const REPORT_MAX_PAPERS: usize = 50;

/// Assemble the markdown run report: the artifact the user keeps after a
/// run — keyword, top listings, the optional AI analysis, and the paper
/// list with PubMed links.
pub fn markdown(
    keyword: &str,
    documents: &[Document],
    terms: &Ranking,
    phrases: &Ranking,
    analysis: Option<&str>,
    top_n: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Research Trend Report: {keyword}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Papers analyzed: {}", documents.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "## Top {top_n} Terms");
    let _ = writeln!(out);
    for (term, count) in terms.top(top_n) {
        let _ = writeln!(out, "- {term}: {count}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Top {top_n} Phrases");
    let _ = writeln!(out);
    for (phrase, count) in phrases.top(top_n) {
        let _ = writeln!(out, "- {phrase}: {count}");
    }
    let _ = writeln!(out);

    if let Some(analysis) = analysis {
        let _ = writeln!(out, "## AI Trend Analysis");
        let _ = writeln!(out);
        let _ = writeln!(out, "{analysis}");
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Papers");
    let _ = writeln!(out);
    for doc in documents.iter().take(REPORT_MAX_PAPERS) {
        let _ = writeln!(
            out,
            "- [{}](https://pubmed.ncbi.nlm.nih.gov/{}/)",
            doc.title, doc.pmid
        );
    }
    if documents.len() > REPORT_MAX_PAPERS {
        let _ = writeln!(
            out,
            "- ... and {} more",
            documents.len() - REPORT_MAX_PAPERS
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::token::TermFrequency;

    fn ranking(pairs: &[(&str, u32)]) -> Ranking {
        let mut freq = TermFrequency::new();
        for (term, count) in pairs {
            for _ in 0..*count {
                freq.add_term(term);
            }
        }
        Ranking::from_table(&freq)
    }

    #[test]
    fn report_contains_listings_and_links() {
        let documents = vec![Document::new("Statin outcomes", "", "12345")];
        let report = markdown(
            "statin",
            &documents,
            &ranking(&[("statin", 3), ("stroke", 1)]),
            &ranking(&[("statin therapy", 2)]),
            None,
            10,
        );
        assert!(report.contains("# Research Trend Report: statin"));
        assert!(report.contains("Papers analyzed: 1"));
        assert!(report.contains("- statin: 3"));
        assert!(report.contains("- statin therapy: 2"));
        assert!(report.contains("https://pubmed.ncbi.nlm.nih.gov/12345/"));
        assert!(!report.contains("## AI Trend Analysis"));
    }

    #[test]
    fn analysis_section_appears_when_present() {
        let report = markdown(
            "statin",
            &[],
            &ranking(&[]),
            &ranking(&[]),
            Some("Research is concentrated on outcomes."),
            10,
        );
        assert!(report.contains("## AI Trend Analysis"));
        assert!(report.contains("concentrated on outcomes"));
    }

    #[test]
    fn paper_list_is_capped() {
        let documents: Vec<Document> = (0..60)
            .map(|i| Document::new(&format!("Paper {i}"), "", &i.to_string()))
            .collect();
        let report = markdown("x", &documents, &ranking(&[]), &ranking(&[]), None, 5);
        assert!(report.contains("Paper 49"));
        assert!(!report.contains("[Paper 50]"));
        assert!(report.contains("... and 10 more"));
    }
}
