use clip_logging::{clip_debug, clip_trace};
use once_cell::sync::Lazy;
use regex::Regex;
use tana_core::{Options, PageRecord, Strictness};

use crate::dates::{extract_first_date, normalize_date};
use crate::linearize::linearize;

static BOLD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \*\*(.*)\*\*").expect("valid bold line regex"));
static BOILERPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(share this post:?|click to share(?: on)?|related|posted in|tagged|posted on|share this|leave a comment|comments?)$",
    )
    .expect("valid boilerplate regex")
});

const METADATA_PREFIXES: [&str; 4] = ["publication::", "date::", "author::", "source::"];
const IMAGE_EMBED: &str = "![](";

/// Builds the Tana Paste outline for one page snapshot.
///
/// Output is one parent line, then the metadata block (when enabled), then
/// the selection body indented one level. Never fails: missing fields turn
/// into blank values or omitted lines.
pub fn compose(record: &PageRecord, options: &Options) -> String {
    let mut linearized = linearize(record.selection_markup());
    let bold_parent = take_bold_parent(&mut linearized);

    let mut lines = Vec::new();
    lines.push(parent_line(record, bold_parent.as_deref(), &options.tag_suffix()));

    let scan = scan_body(&linearized, bold_parent.as_deref(), options.strictness);
    if options.include_metadata {
        lines.extend(metadata_block(record, &scan, options.omit_empty_metadata));
    }

    let selection = record.selection.trim();
    if linearized.is_empty() && !selection.is_empty() {
        lines.push(format!("  - {selection}"));
    } else {
        lines.extend(scan.body);
    }

    clip_debug!(
        "composed outline: {} lines, bold_parent={}, extracted_date={:?}, extracted_author={:?}",
        lines.len(),
        bold_parent.is_some(),
        scan.extracted_date,
        scan.extracted_author
    );
    lines.join("\n")
}

/// Removes a leading heading line and returns its text.
fn take_bold_parent(lines: &mut Vec<String>) -> Option<String> {
    let first = lines.first()?;
    if !first.starts_with("- **") {
        return None;
    }
    let bold = BOLD_LINE.replace(first, "$1").trim().to_string();
    lines.remove(0);
    Some(bold)
}

fn parent_line(record: &PageRecord, bold_parent: Option<&str>, tag: &str) -> String {
    if let Some(bold) = bold_parent {
        format!("- **{bold}**{tag}")
    } else if !record.url.is_empty() {
        format!("- [{}]({}){tag}", link_label(record), record.url)
    } else if record.title.is_empty() {
        format!("- Untitled{tag}")
    } else {
        format!("- {}{tag}", record.title)
    }
}

fn link_label(record: &PageRecord) -> &str {
    if record.title.is_empty() {
        &record.url
    } else {
        &record.title
    }
}

#[derive(Debug, Default)]
struct BodyScan {
    body: Vec<String>,
    extracted_date: Option<String>,
    extracted_author: Option<String>,
}

fn scan_body(lines: &[String], bold_parent: Option<&str>, strictness: Strictness) -> BodyScan {
    let mut scan = BodyScan::default();
    let bold_line = bold_parent.map(|bold| format!("- **{bold}**"));
    let strict = strictness == Strictness::Strict;

    let mut idx = 0;
    while idx < lines.len() {
        let raw = &lines[idx];
        idx += 1;
        let trimmed = raw.trim();
        let content = bullet_content(trimmed);

        if content.eq_ignore_ascii_case("posted on") {
            if let Some(value) = take_labelled_value(lines, &mut idx) {
                scan.extracted_date = Some(value);
            }
            continue;
        }
        if content.eq_ignore_ascii_case("by") {
            if let Some(value) = take_labelled_value(lines, &mut idx) {
                scan.extracted_author = Some(value);
            }
            continue;
        }

        if bold_line.as_deref() == Some(trimmed) {
            continue;
        }
        if strict && BOILERPLATE.is_match(content) {
            clip_trace!("Dropping boilerplate line {:?}", content);
            continue;
        }
        let lower = content.to_lowercase();
        if METADATA_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
            continue;
        }
        if content.starts_with(IMAGE_EMBED) || raw.contains(IMAGE_EMBED) {
            continue;
        }
        if strict && is_degenerate(content) {
            continue;
        }

        scan.body.push(format!("  {raw}"));
    }
    scan
}

/// Consumes the line after a "Posted on" / "by" label. A blank neighbour is
/// left in place; an empty value keeps whatever was extracted before.
fn take_labelled_value(lines: &[String], idx: &mut usize) -> Option<String> {
    let next = lines.get(*idx)?.trim();
    if next.is_empty() {
        return None;
    }
    *idx += 1;
    let content = bullet_content(next);
    (!content.is_empty()).then(|| content.to_string())
}

fn bullet_content(trimmed: &str) -> &str {
    trimmed
        .strip_prefix("- ")
        .map(str::trim)
        .unwrap_or(trimmed)
}

fn is_degenerate(content: &str) -> bool {
    content.chars().count() < 2
        || content
            .chars()
            .all(|c| c.is_whitespace() || c.is_ascii_punctuation() || is_typographic_mark(c))
}

fn is_typographic_mark(c: char) -> bool {
    matches!(
        c,
        '–' | '—' | '…' | '•' | '·' | '‘' | '’' | '“' | '”' | '«' | '»' | '¶' | '§'
    )
}

fn metadata_block(record: &PageRecord, scan: &BodyScan, omit_empty: bool) -> Vec<String> {
    let keep = |value: &str| should_emit(omit_empty, value);
    let mut meta = Vec::new();

    if keep(record.publication.as_str()) {
        meta.push(format!("  - Publication:: {}", record.publication));
    }

    let date_source = scan.extracted_date.as_deref().unwrap_or(&record.date);
    let date = normalize_date(date_source, &record.url);
    if keep(date.as_str()) {
        meta.push(format!("  - Date:: [[date:{date}]]"));
    }

    let author = scan.extracted_author.as_deref().unwrap_or(&record.author);
    if keep(author) {
        meta.push(format!("  - Author:: {author}"));
    }

    if keep(record.url.as_str()) {
        meta.push(source_line(record));
    }

    if keep(record.image.as_str()) && !image_in_selection(record) {
        meta.push(format!("  - ![]({})", record.image));
    }

    if meta.is_empty() {
        return fallback_metadata(record, scan, omit_empty);
    }
    meta
}

/// Second pass used when every field was suppressed: raw page values and the
/// date without URL-year completion.
fn fallback_metadata(record: &PageRecord, scan: &BodyScan, omit_empty: bool) -> Vec<String> {
    let keep = |value: &str| should_emit(omit_empty, value);
    let mut meta = Vec::new();

    if keep(record.publication.as_str()) {
        meta.push(format!("  - Publication:: {}", record.publication));
    }
    let date = extract_first_date(scan.extracted_date.as_deref().unwrap_or(&record.date));
    if keep(date.as_str()) {
        meta.push(format!("  - Date:: [[date:{date}]]"));
    }
    if keep(record.author.as_str()) {
        meta.push(format!("  - Author:: {}", record.author));
    }
    if keep(record.url.as_str()) {
        meta.push(source_line(record));
    }
    if keep(record.image.as_str()) && !image_in_selection(record) {
        meta.push(format!("  - ![]({})", record.image));
    }
    meta
}

/// The hero image already shows up in the selection body.
fn image_in_selection(record: &PageRecord) -> bool {
    !record.image.is_empty() && record.selection_markup().contains(&record.image)
}

fn should_emit(omit_empty: bool, value: &str) -> bool {
    !omit_empty || !value.trim().is_empty()
}

fn source_line(record: &PageRecord) -> String {
    format!("  - Source:: [{}]({})", link_label(record), record.url)
}
