// fetch.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::{Html, Node};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

// Subtrees that never carry listing copy.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "svg", "head", "template"];

/// Seam between the orchestrator and the network. A fetch either yields the
/// page's readable text or None; transport failures, error statuses, and
/// empty bodies all collapse to None so one dead source can never take down
/// a batch.
pub trait TextFetcher {
    fn fetch(&self, url: &str) -> Option<String>;
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    fn try_fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let text = readable_text(&body);
        if text.is_empty() {
            return Err(ScraperError::NoContent);
        }

        Ok(text)
    }
}

impl TextFetcher for PageFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url) {
            Ok(text) => Some(text),
            Err(e) => {
                eprintln!("⚠️ Fetch failed for {url}: {e}");
                None
            }
        }
    }
}

/// Flatten an HTML document to its visible text: depth-first over the node
/// tree, skipping non-content subtrees, trimming each text node and joining
/// fragments with single spaces.
pub fn readable_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) => {
                if SKIPPED_TAGS.contains(&element.name()) {
                    continue;
                }
            }
            Node::Text(text) => {
                let fragment = text.trim();
                if !fragment.is_empty() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(fragment);
                }
            }
            _ => {}
        }

        // Children pushed in reverse so the traversal keeps document order.
        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    out
}
