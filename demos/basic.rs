use trend_analyzer::{DocumentSource, KeywordExtractor, PubMedClient, Ranking};

fn main() {
    // needs a contact email for NCBI
    let email = std::env::var("ENTREZ_EMAIL").unwrap_or_else(|_| "user@example.com".to_string());

    // search pubmed
    let client = PubMedClient::new(&email).expect("http client");
    let documents = client
        .fetch("GLP-1 agonist cardiovascular", 50)
        .expect("pubmed search");
    println!("fetched {} papers", documents.len());

    // extract and rank
    let extraction = KeywordExtractor::new().extract(&documents);
    let ranking = Ranking::from_table(&extraction.terms);

    // print result
    println!("{:#?}", ranking.top(10));
}
