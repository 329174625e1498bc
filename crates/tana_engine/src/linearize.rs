use clip_logging::clip_debug;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Flattens a selection fragment into Tana bullet lines, in document order.
///
/// Headings, images, anchors and list items each collapse to a single line and
/// are not descended into; every other element is transparent. Markup the
/// parser cannot make sense of simply yields fewer lines.
pub fn linearize(fragment_html: &str) -> Vec<String> {
    if fragment_html.trim().is_empty() {
        return Vec::new();
    }

    let fragment = Html::parse_fragment(fragment_html);
    let mut lines = Vec::new();
    for child in fragment.root_element().children() {
        visit_node(child, &mut lines);
    }

    clip_debug!(
        "linearized {} bytes of selection into {} lines",
        fragment_html.len(),
        lines.len()
    );
    lines
}

fn visit_node(node: NodeRef<'_, Node>, lines: &mut Vec<String>) {
    match node.value() {
        Node::Text(text) => {
            // Collapsed, not just trimmed: one text node is one line, `<pre>` included.
            let text = collapse_whitespace(text);
            if !text.is_empty() {
                lines.push(format!("- {text}"));
            }
        }
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                visit_element(element, lines);
            }
        }
        _ => {}
    }
}

fn visit_element(element: ElementRef<'_>, lines: &mut Vec<String>) {
    let tag = element.value().name().to_ascii_lowercase();
    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let text = text_content(element);
            if !text.is_empty() {
                lines.push(format!("- **{text}**"));
            }
        }
        "img" => {
            if let Some(src) = image_source(element) {
                lines.push(format!("- ![]({src})"));
            }
        }
        "a" => {
            let href = element.value().attr("href").unwrap_or("");
            let text = text_content(element);
            let label = if text.is_empty() { href } else { text.as_str() };
            lines.push(format!("- [{label}]({href})"));
        }
        "li" => lines.push(format!("- {}", text_content(element))),
        _ => {
            for child in element.children() {
                visit_node(child, lines);
            }
        }
    }
}

/// `src`, falling back to the lazy-loading `data-src`.
fn image_source<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    ["src", "data-src"]
        .into_iter()
        .filter_map(|name| element.value().attr(name))
        .find(|value| !value.is_empty())
}

fn text_content(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Trims and folds inner whitespace runs (including newlines) to one space so
/// a single node never spills over several output lines.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
