use once_cell::sync::Lazy;
use regex::Regex;

const MAX_FALLBACK_CHARS: usize = 80;

static LEADING_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\s\[(<"'`\-–—]+"#).expect("valid leading noise regex"));
static TRAILING_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s\])>"'`\-–—]+$"#).expect("valid trailing noise regex"));
static LONG_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{1,2},\s+\d{4}\b",
    )
    .expect("valid long-form date regex")
});
// A `T` may follow directly, as in RFC 3339 timestamps.
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})(?:T|\b)").expect("valid iso date regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DATE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^date:\s*").expect("valid date prefix regex"));
static SEGMENT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}|;|\||,").expect("valid separator regex"));
static EDGE_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\[(]+|[\])\s]+$").expect("valid bracket regex"));
static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year regex"));
static URL_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(20\d{2})(?:/|$)").expect("valid url year regex"));

/// Picks the first human-readable date out of a noisy string.
///
/// Long-form English dates (`July 22, 2025`) win over ISO dates
/// (`2025-07-22`); when neither is present the first separator-delimited
/// segment is returned, capped at 80 characters.
pub fn extract_first_date(candidate: &str) -> String {
    if candidate.is_empty() {
        return String::new();
    }
    let stripped = LEADING_NOISE.replace(candidate, "");
    let stripped = TRAILING_NOISE.replace(&stripped, "");

    if let Some(found) = LONG_FORM.find(&stripped) {
        return found.as_str().trim().to_string();
    }
    if let Some(caps) = ISO_DATE.captures(&stripped) {
        return caps[1].to_string();
    }

    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let collapsed = DATE_PREFIX.replace(collapsed.trim(), "");
    let first = SEGMENT_SEPARATOR
        .split(&collapsed)
        .next()
        .unwrap_or_default()
        .trim();
    first.chars().take(MAX_FALLBACK_CHARS).collect()
}

/// [`extract_first_date`] plus bracket cleanup and a year borrowed from
/// `/20YY/` in the page URL when the date has none.
pub fn normalize_date(candidate: &str, url: &str) -> String {
    let extracted = extract_first_date(candidate);
    let mut date = EDGE_BRACKETS
        .replace_all(&extracted, "")
        .replace(['[', ']'], "")
        .trim()
        .to_string();

    if !FOUR_DIGITS.is_match(&date) && !url.is_empty() {
        if let Some(caps) = URL_YEAR.captures(url) {
            let year = &caps[1];
            date = if date.is_empty() {
                year.to_string()
            } else {
                format!("{date}, {year}")
            };
        }
    }
    date
}
