use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use super::{Document, DocumentSource, SourceError};

/// NCBI E-utilities endpoint.
pub const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const TOOL_NAME: &str = "trend-analyzer";

/// Blocking PubMed client: ESearch for PMIDs, EFetch for records.
///
/// NCBI asks callers to identify themselves, so every request carries
/// `tool` and `email` parameters. Results are sorted by relevance, the way
/// a trend query wants them.
pub struct PubMedClient {
    http: reqwest::blocking::Client,
    base_url: String,
    email: String,
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Deserialize)]
struct ESearchResponse {
    esearchresult: ESearchResult,
}

#[derive(Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

impl PubMedClient {
    /// Create a client. `email` is the contact address NCBI etiquette
    /// requires.
    pub fn new(email: &str) -> Result<Self, SourceError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: EUTILS_BASE.to_string(),
            email: email.to_string(),
        })
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// ESearch: query -> PMID list, relevance order.
    fn esearch(&self, query: &str, max_results: usize) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let retmax = max_results.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("db", "pubmed"),
                ("term", query),
                ("retmax", retmax.as_str()),
                ("sort", "relevance"),
                ("retmode", "json"),
                ("tool", TOOL_NAME),
                ("email", self.email.as_str()),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        let parsed: ESearchResponse = response
            .json()
            .map_err(|e| SourceError::Payload(format!("esearch response: {e}")))?;
        Ok(parsed.esearchresult.idlist)
    }

    /// EFetch: PMID list -> record XML.
    fn efetch(&self, ids: &[String]) -> Result<String, SourceError> {
        let url = format!("{}/efetch.fcgi", self.base_url);
        let id_list = ids.join(",");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("db", "pubmed"),
                ("id", id_list.as_str()),
                ("retmode", "xml"),
                ("tool", TOOL_NAME),
                ("email", self.email.as_str()),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.text()?)
    }
}

impl DocumentSource for PubMedClient {
    fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<Document>, SourceError> {
        let ids = self.esearch(query, max_results)?;
        tracing::info!(count = ids.len(), %query, "pubmed esearch done");
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let xml = self.efetch(&ids)?;
        let documents = ArticleParser::new().parse(&xml);
        tracing::info!(count = documents.len(), "pubmed efetch parsed");
        Ok(documents)
    }
}

/// Field extraction over EFetch XML.
///
/// The records are regular enough that regex capture beats carrying a full
/// XML stack: one `<PubmedArticle>` block per record, one `<ArticleTitle>`,
/// zero or more `<AbstractText>` sections (structured abstracts have
/// several). A record missing its title or PMID is skipped.
pub struct ArticleParser {
    article: Regex,
    title: Regex,
    abstract_text: Regex,
    pmid: Regex,
    tag: Regex,
}

impl ArticleParser {
    /// Compile the record patterns.
    pub fn new() -> Self {
        Self {
            article: Regex::new(r"(?s)<PubmedArticle[\s>].*?</PubmedArticle>")
                .expect("static pattern"),
            title: Regex::new(r"(?s)<ArticleTitle[^>]*>(.*?)</ArticleTitle>")
                .expect("static pattern"),
            abstract_text: Regex::new(r"(?s)<AbstractText[^>]*>(.*?)</AbstractText>")
                .expect("static pattern"),
            pmid: Regex::new(r"<PMID[^>]*>(\d+)</PMID>").expect("static pattern"),
            tag: Regex::new(r"<[^>]*>").expect("static pattern"),
        }
    }

    /// Parse every well-formed record in the XML, skipping the rest.
    pub fn parse(&self, xml: &str) -> Vec<Document> {
        let mut documents = Vec::new();
        for article in self.article.find_iter(xml) {
            let block = article.as_str();
            let Some(title) = self.capture_clean(&self.title, block) else {
                tracing::debug!("skipping record without title");
                continue;
            };
            let Some(pmid) = self
                .pmid
                .captures(block)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
            else {
                tracing::debug!("skipping record without pmid");
                continue;
            };
            let abstract_text = self
                .abstract_text
                .captures_iter(block)
                .filter_map(|c| c.get(1))
                .map(|m| self.clean(m.as_str()))
                .collect::<Vec<_>>()
                .join(" ");
            documents.push(Document {
                title,
                abstract_text,
                pmid,
            });
        }
        documents
    }

    fn capture_clean(&self, re: &Regex, block: &str) -> Option<String> {
        let text = self.clean(re.captures(block)?.get(1)?.as_str());
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Strip inline markup, unescape entities, collapse whitespace.
    fn clean(&self, raw: &str) -> String {
        let stripped = self.tag.replace_all(raw, " ");
        let unescaped = unescape_entities(&stripped);
        unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for ArticleParser {
    fn default() -> Self {
        Self::new()
    }
}

fn unescape_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" does not double-decode
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">11111</PMID>
      <Article>
        <ArticleTitle>Effects of <i>GLP-1</i> agonists &amp; statins</ArticleTitle>
        <Abstract>
          <AbstractText Label="BACKGROUND">Cardiovascular outcomes improve.</AbstractText>
          <AbstractText Label="METHODS">Randomized cohort of 2,400 adults.</AbstractText>
        </Abstract>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">22222</PMID>
      <Article>
        <ArticleTitle>Stroke prevention without an abstract</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <Article>
        <ArticleTitle>Record with no PMID gets skipped</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn parses_title_abstract_and_pmid() {
        let docs = ArticleParser::new().parse(SAMPLE_XML);
        assert_eq!(docs.len(), 2);

        assert_eq!(docs[0].pmid, "11111");
        assert_eq!(docs[0].title, "Effects of GLP-1 agonists & statins");
        assert_eq!(
            docs[0].abstract_text,
            "Cardiovascular outcomes improve. Randomized cohort of 2,400 adults."
        );
    }

    #[test]
    fn missing_abstract_becomes_empty_text() {
        let docs = ArticleParser::new().parse(SAMPLE_XML);
        assert_eq!(docs[1].pmid, "22222");
        assert_eq!(docs[1].abstract_text, "");
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let docs = ArticleParser::new().parse(SAMPLE_XML);
        assert!(docs.iter().all(|d| d.pmid != ""));
        assert!(!docs.iter().any(|d| d.title.contains("no PMID")));

        assert!(ArticleParser::new().parse("not xml at all").is_empty());
        assert!(ArticleParser::new().parse("").is_empty());
    }

    #[test]
    fn entities_unescape_once() {
        assert_eq!(unescape_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
        // literal "&amp;lt;" decodes to "&lt;", not "<"
        assert_eq!(unescape_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn esearch_response_shape_deserializes() {
        let body = r#"{"header":{},"esearchresult":{"count":"2","idlist":["111","222"]}}"#;
        let parsed: ESearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.esearchresult.idlist, ["111", "222"]);

        let empty = r#"{"esearchresult":{}}"#;
        let parsed: ESearchResponse = serde_json::from_str(empty).unwrap();
        assert!(parsed.esearchresult.idlist.is_empty());
    }
}
