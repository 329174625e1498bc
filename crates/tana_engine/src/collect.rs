use clip_logging::clip_debug;
use scraper::{ElementRef, Html, Selector};
use tana_core::PageRecord;
use url::Url;

/// Where the selection comes from when a whole document is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource<'a> {
    /// No selection: metadata only.
    Nothing,
    /// First element matching a CSS selector.
    Css(&'a str),
    /// Live-page mode: `article`, `.entry-content`, then `#content`, with the
    /// title taken from the first `h1` / `.entry-title`.
    ArticleHeuristic,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CollectError {
    #[error("invalid selection selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

const ARTICLE_SELECTORS: [&str; 3] = ["article", ".entry-content", "#content"];
const TITLE_SELECTORS: [&str; 2] = ["h1", ".entry-title"];

/// Builds a [`PageRecord`] from a full HTML document, the way the page-side
/// collector reads a live tab.
#[derive(Debug, Default)]
pub struct PageCollector;

impl PageCollector {
    pub fn collect(
        &self,
        html: &str,
        page_url: &str,
        selection: SelectionSource<'_>,
    ) -> Result<PageRecord, CollectError> {
        let doc = Html::parse_document(html);

        let mut record = PageRecord {
            title: first_text(&doc, &["title"]).unwrap_or_default(),
            url: resolved_url(page_url),
            author: meta_chain(&doc, &[("name", "author"), ("property", "article:author")]),
            publication: meta_chain(
                &doc,
                &[("property", "og:site_name"), ("name", "publication")],
            ),
            date: meta_chain(
                &doc,
                &[("property", "article:published_time"), ("name", "date")],
            ),
            image: meta_chain(&doc, &[("property", "og:image")]),
            ..PageRecord::default()
        };

        let selected = match selection {
            SelectionSource::Nothing => None,
            SelectionSource::Css(raw) => {
                let selector =
                    Selector::parse(raw).map_err(|err| CollectError::InvalidSelector {
                        selector: raw.to_string(),
                        message: err.to_string(),
                    })?;
                let found = doc.select(&selector).next();
                found
            }
            SelectionSource::ArticleHeuristic => {
                if let Some(title) = first_text(&doc, &TITLE_SELECTORS) {
                    record.title = title;
                }
                first_match(&doc, &ARTICLE_SELECTORS)
            }
        };

        if let Some(element) = selected {
            let inner = element.inner_html();
            record.selection = normalized_text(element);
            record.selection_html = (!inner.trim().is_empty()).then_some(inner);
        }

        clip_debug!(
            "collected page url={} title_len={} has_selection={}",
            record.url,
            record.title.len(),
            record.selection_html.is_some()
        );
        Ok(record)
    }
}

/// Normalizes the address the same way a browser reports `location.href`;
/// unparseable input is kept verbatim.
fn resolved_url(raw: &str) -> String {
    let trimmed = raw.trim();
    Url::parse(trimmed)
        .map(String::from)
        .unwrap_or_else(|_| trimmed.to_string())
}

/// `content` of the first present meta tag in `chain` with a non-empty value.
fn meta_chain(doc: &Html, chain: &[(&str, &str)]) -> String {
    chain
        .iter()
        .filter_map(|(attr, value)| meta_content(doc, attr, value))
        .find(|content| !content.is_empty())
        .unwrap_or_default()
}

fn meta_content(doc: &Html, attr: &str, value: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[{attr}="{value}"]"#)).ok()?;
    let content = doc
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string);
    content
}

fn first_match<'a>(doc: &'a Html, selectors: &[&str]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .filter_map(|raw| Selector::parse(raw).ok())
        .find_map(|selector| {
            let found = doc.select(&selector).next();
            found
        })
}

fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    first_match(doc, selectors)
        .map(normalized_text)
        .filter(|text| !text.is_empty())
}

fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
