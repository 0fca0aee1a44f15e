use criterion::{criterion_group, criterion_main, Criterion};
use trend_analyzer::{Document, KeywordExtractor, PhrasePolicy, Ranking};

// Deterministic synthetic corpus so the bench runs offline.
fn synthetic_corpus(docs: usize) -> Vec<Document> {
    let vocabulary = [
        "statin", "therapy", "cardiovascular", "outcomes", "stroke", "cohort",
        "glucose", "agonist", "receptor", "inhibitor", "mortality", "trial",
        "randomized", "placebo", "dosage", "adherence", "hypertension",
        "diabetes", "lipid", "biomarker",
    ];
    (0..docs)
        .map(|i| {
            let title: Vec<&str> = (0..8)
                .map(|j| vocabulary[(i * 3 + j) % vocabulary.len()])
                .collect();
            let body: Vec<&str> = (0..120)
                .map(|j| vocabulary[(i * 7 + j * 5) % vocabulary.len()])
                .collect();
            Document::new(&title.join(" "), &body.join(" "), &i.to_string())
        })
        .collect()
}

fn extraction_benchmark(c: &mut Criterion) {
    let documents = synthetic_corpus(500);

    c.bench_function("extract_sequential", |b| {
        let extractor = KeywordExtractor::new();
        b.iter(|| extractor.extract(&documents));
    });

    c.bench_function("extract_parallel", |b| {
        let extractor = KeywordExtractor::new();
        b.iter(|| extractor.extract_par(&documents));
    });

    c.bench_function("extract_across_documents", |b| {
        let extractor =
            KeywordExtractor::new().with_phrase_policy(PhrasePolicy::AcrossDocuments);
        b.iter(|| extractor.extract(&documents));
    });

    let extraction = KeywordExtractor::new().extract(&documents);
    c.bench_function("rank_top_30", |b| {
        b.iter(|| {
            let ranking = Ranking::from_table(&extraction.terms);
            ranking.top(30).len()
        });
    });
}

criterion_group!(benches, extraction_benchmark);
criterion_main!(benches);
