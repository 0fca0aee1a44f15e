use trend_analyzer::summarize::{trend_prompt, SummarizeError};
use trend_analyzer::{
    Document, KeywordExtractor, PhrasePolicy, Ranking, StopwordSet, Summarizer,
};

/// Canned summarizer so the demo runs without any network access.
struct CannedSummarizer;

impl Summarizer for CannedSummarizer {
    fn summarize(&self, _prompt: &str) -> Result<String, SummarizeError> {
        Ok("Main areas: cardiovascular outcomes and statin therapy.".to_string())
    }
}

fn main() {
    // build a small document collection by hand
    let documents = vec![
        Document::new(
            "Statin therapy and cardiovascular outcomes",
            "A cohort of adults received statin therapy; cardiovascular outcomes improved.",
            "1",
        ),
        Document::new(
            "Cardiovascular risk after stroke",
            "Stroke survivors show elevated cardiovascular risk.",
            "2",
        ),
    ];

    // domain-specific stopwords on top of the default set
    let extractor = KeywordExtractor::new()
        .with_stopwords(StopwordSet::default().with_words(&["adults"]))
        .with_phrase_policy(PhrasePolicy::PerDocument);
    let extraction = extractor.extract(&documents);

    println!("terms:\n{}", Ranking::from_table(&extraction.terms));
    println!("phrases:\n{}", Ranking::from_table(&extraction.phrases));

    // same prompt the real LLM would see
    let prompt = trend_prompt("statin", &documents, &extraction.terms);
    println!("prompt:\n{prompt}");

    let analysis = CannedSummarizer.summarize(&prompt).expect("canned");
    println!("analysis: {analysis}");
}
