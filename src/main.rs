use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trend_analyzer::config::Settings;
use trend_analyzer::render;
use trend_analyzer::report;
use trend_analyzer::summarize::trend_prompt;
use trend_analyzer::{
    DocumentSource, KeywordExtractor, OllamaClient, PhrasePolicy, PubMedClient, Ranking,
    StopwordSet, Summarizer,
};

/// Analyze research trends by keyword using PubMed and AI.
#[derive(Parser, Debug)]
#[command(name = "trend-analyzer", version, about)]
struct Args {
    /// Research keyword, e.g. "GLP-1 agonist cardiovascular"
    keyword: String,

    /// Maximum papers to fetch
    #[arg(long, default_value_t = 200)]
    max_results: usize,

    /// Entries listed per table
    #[arg(long, default_value_t = 30)]
    top: usize,

    /// NCBI contact email (overrides ENTREZ_EMAIL)
    #[arg(long)]
    email: Option<String>,

    /// Ollama model (overrides OLLAMA_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Skip the AI trend analysis
    #[arg(long)]
    no_ai: bool,

    /// Let phrases span document boundaries (reference behavior)
    #[arg(long)]
    across_documents: bool,

    /// Extra stopwords, comma separated
    #[arg(long, value_delimiter = ',')]
    stopwords: Vec<String>,

    /// Write a markdown report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write word-cloud weights (term -> weight JSON) to this path
    #[arg(long)]
    cloud_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::from_env();

    let Some(email) = args.email.clone().or(settings.entrez_email.clone()) else {
        bail!("an NCBI contact email is required: pass --email or set ENTREZ_EMAIL");
    };

    // PubMed 検索
    let start = Instant::now();
    eprintln!("[stage] searching pubmed for '{}' ...", args.keyword);
    let client = PubMedClient::new(&email)?;
    let documents = client
        .fetch(&args.keyword, args.max_results)
        .context("pubmed search failed")?;
    if documents.is_empty() {
        eprintln!("[done] no papers found, try a different keyword");
        return Ok(());
    }
    eprintln!("[stage] found {} papers", documents.len());

    // 抽出は文書単位で並列化
    eprintln!("[stage] extracting keywords ...");
    let policy = if args.across_documents {
        PhrasePolicy::AcrossDocuments
    } else {
        PhrasePolicy::PerDocument
    };
    let stopwords = StopwordSet::default().with_words(&args.stopwords);
    let extractor = KeywordExtractor::new()
        .with_stopwords(stopwords)
        .with_phrase_policy(policy);
    let extraction = extractor.extract_par(&documents);

    let term_ranking = Ranking::from_table(&extraction.terms);
    let phrase_ranking = Ranking::from_table(&extraction.phrases);

    println!("## Top {} Single Words\n", args.top);
    print!("{}", render::bar_chart(&term_ranking, args.top, 40));
    println!();
    println!("## Top {} Bigrams\n", args.top);
    print!("{}", render::bar_chart(&phrase_ranking, args.top, 40));
    println!();

    if let Some(path) = &args.cloud_json {
        let weights = render::cloud_weights(&extraction.terms, render::CLOUD_MAX_TERMS);
        let json = serde_json::to_string_pretty(&weights)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("[stage] wrote cloud weights to {}", path.display());
    }

    // AI 分析は失敗しても解析結果は残す
    let mut analysis = None;
    if !args.no_ai {
        if let Some(api_key) = settings.ollama_api_key.as_deref() {
            let model = args.model.as_deref().unwrap_or(&settings.ollama_model);
            eprintln!("[stage] requesting AI trend analysis ({model}) ...");
            let mut ollama = OllamaClient::new(model, Some(api_key))?;
            if let Some(host) = settings.ollama_host.as_deref() {
                ollama = ollama.with_host(host);
            }
            let prompt = trend_prompt(&args.keyword, &documents, &extraction.terms);
            match ollama.summarize(&prompt) {
                Ok(text) => {
                    println!("## AI Trend Analysis\n");
                    println!("{text}");
                    analysis = Some(text);
                }
                Err(e) => eprintln!("[warn] AI analysis failed: {e}"),
            }
        } else {
            eprintln!("[warn] OLLAMA_API_KEY not set, skipping AI analysis");
        }
    }

    if let Some(path) = &args.report {
        let markdown = report::markdown(
            &args.keyword,
            &documents,
            &term_ranking,
            &phrase_ranking,
            analysis.as_deref(),
            args.top,
        );
        fs::write(path, markdown).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("[stage] wrote report to {}", path.display());
    }

    eprintln!(
        "[done] analyzed {} papers | {} terms | {} phrases | elapsed {:.2}s",
        documents.len(),
        extraction.terms.unique_terms(),
        extraction.phrases.unique_terms(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
