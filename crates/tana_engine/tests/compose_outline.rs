use std::sync::Once;

use pretty_assertions::assert_eq;
use tana_core::{Options, PageRecord, Strictness};
use tana_engine::compose;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(clip_logging::initialize_for_tests);
}

fn without_metadata() -> Options {
    Options {
        include_metadata: false,
        ..Options::default()
    }
}

fn record_with_html(html: &str) -> PageRecord {
    PageRecord {
        title: "Title".into(),
        url: "https://x.test/a".into(),
        selection_html: Some(html.into()),
        ..PageRecord::default()
    }
}

#[test]
fn heading_becomes_parent_without_metadata() {
    init_logging();
    let record = record_with_html("<h1>Title</h1><p>Body text</p>");
    assert_eq!(
        compose(&record, &without_metadata()),
        "- **Title** #webclip\n  - Body text"
    );
}

#[test]
fn url_only_page_with_defaults_emits_source_only() {
    init_logging();
    let record = PageRecord {
        url: "https://x.test".into(),
        ..PageRecord::default()
    };
    assert_eq!(
        compose(&record, &Options::default()),
        "- [https://x.test](https://x.test) #webclip\n  - Source:: [https://x.test](https://x.test)"
    );
}

#[test]
fn keeping_empty_metadata_emits_every_field() {
    init_logging();
    let options = Options {
        omit_empty_metadata: false,
        ..Options::default()
    };
    assert_eq!(
        compose(&PageRecord::default(), &options),
        "- Untitled #webclip\n  - Publication:: \n  - Date:: [[date:]]\n  - Author:: \n  - Source:: []()\n  - ![]()"
    );
}

#[test]
fn omitted_publication_has_no_line() {
    init_logging();
    let record = PageRecord {
        url: "https://x.test".into(),
        author: "Ann".into(),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    assert!(!out.contains("Publication::"));
    assert!(out.contains("\n  - Author:: Ann"));
}

#[test]
fn plain_selection_is_used_when_no_markup() {
    init_logging();
    let record = PageRecord {
        title: "Doc".into(),
        url: "https://x.test/doc".into(),
        selection: "  hello world \n".into(),
        selection_html: None,
        ..PageRecord::default()
    };
    assert_eq!(
        compose(&record, &without_metadata()),
        "- [Doc](https://x.test/doc) #webclip\n  - hello world"
    );
}

#[test]
fn untitled_without_url_or_tag() {
    init_logging();
    let options = Options {
        include_metadata: false,
        default_tag: String::new(),
        ..Options::default()
    };
    let record = PageRecord {
        selection: "quote".into(),
        ..PageRecord::default()
    };
    assert_eq!(compose(&record, &options), "- Untitled\n  - quote");
}

#[test]
fn repeated_heading_is_not_duplicated() {
    init_logging();
    let record = record_with_html("<h2>Head</h2><p>x y</p><h2>Head</h2>");
    let out = compose(&record, &without_metadata());
    assert_eq!(out, "- **Head** #webclip\n  - x y");
    assert_eq!(out.matches("- **Head**").count(), 1);
}

#[test]
fn later_heading_stays_in_body() {
    init_logging();
    let record = record_with_html("<p>Lead</p><h3>Section</h3>");
    assert_eq!(
        compose(&record, &without_metadata()),
        "- [Title](https://x.test/a) #webclip\n  - Lead\n  - **Section**"
    );
}

#[test]
fn blog_selection_yields_metadata_block() {
    init_logging();
    let html = r#"
<h1>The Simpler.Grants.gov Search Experience Is Now Available on Grants.gov</h1>
<ul>
<li>Publication:: Grants.gov Community Blog</li>
<li>Posted on</li>
<li>July 22, 2025</li>
<li>by</li>
<li>Grants.gov</li>
</ul>
<p>An improved search feature is now available on Grants.gov.</p>
"#;
    let record = PageRecord {
        title: "The Simpler.Grants.gov Search Experience Is Now Available on Grants.gov".into(),
        url: "https://www.grants.gov/simpler-search".into(),
        author: "Someone Else".into(),
        publication: "Grants.gov Community Blog".into(),
        date: "August 26, 2025".into(),
        selection_html: Some(html.into()),
        ..PageRecord::default()
    };

    let expected = [
        "- **The Simpler.Grants.gov Search Experience Is Now Available on Grants.gov** #webclip",
        "  - Publication:: Grants.gov Community Blog",
        "  - Date:: [[date:July 22, 2025]]",
        "  - Author:: Grants.gov",
        "  - Source:: [The Simpler.Grants.gov Search Experience Is Now Available on Grants.gov](https://www.grants.gov/simpler-search)",
        "  - An improved search feature is now available on Grants.gov.",
    ]
    .join("\n");
    assert_eq!(compose(&record, &Options::default()), expected);
}

#[test]
fn extracted_date_borrows_year_from_url() {
    init_logging();
    let record = PageRecord {
        url: "https://b.test/2024/03/x".into(),
        selection_html: Some("<ul><li>Posted on</li><li>March 3</li></ul><p>Body</p>".into()),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    assert!(out.contains("\n  - Date:: [[date:March 3, 2024]]\n"), "{out}");
    assert!(out.ends_with("\n  - Body"));
}

#[test]
fn page_date_is_normalized() {
    init_logging();
    let record = PageRecord {
        url: "https://x.test".into(),
        date: "2025-07-22T10:00:00Z".into(),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    assert!(out.contains("\n  - Date:: [[date:2025-07-22]]"));
}

#[test]
fn embedded_hero_image_is_not_repeated() {
    init_logging();
    let record = PageRecord {
        url: "https://x.test".into(),
        publication: "Blog".into(),
        image: "https://cdn.test/hero.jpg".into(),
        selection_html: Some(r#"<p>Intro text</p><img src="https://cdn.test/hero.jpg">"#.into()),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    assert!(!out.contains("![]("), "{out}");
    assert!(out.ends_with("\n  - Intro text"));
}

#[test]
fn hero_image_is_added_when_not_in_selection() {
    init_logging();
    let record = PageRecord {
        url: "https://x.test".into(),
        image: "https://cdn.test/hero.jpg".into(),
        selection_html: Some("<p>Intro text</p>".into()),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    assert!(out.contains("\n  - Source:: [https://x.test](https://x.test)\n  - ![](https://cdn.test/hero.jpg)\n"));
}

#[test]
fn fallback_metadata_skips_embedded_image() {
    init_logging();
    let record = PageRecord {
        title: "T".into(),
        image: "https://cdn.test/a.png".into(),
        selection_html: Some(r#"<img src="https://cdn.test/a.png"><p>Words here</p>"#.into()),
        ..PageRecord::default()
    };
    assert_eq!(
        compose(&record, &Options::default()),
        "- T #webclip\n  - Words here"
    );
}

#[test]
fn embedded_image_is_skipped_when_keeping_empty_metadata() {
    init_logging();
    let options = Options {
        omit_empty_metadata: false,
        ..Options::default()
    };
    let record = PageRecord {
        title: "T".into(),
        url: "https://x.test/t".into(),
        image: "https://cdn.test/a.png".into(),
        selection_html: Some(r#"<p>Words here</p><img src="https://cdn.test/a.png">"#.into()),
        ..PageRecord::default()
    };
    assert_eq!(
        compose(&record, &options),
        [
            "- [T](https://x.test/t) #webclip",
            "  - Publication:: ",
            "  - Date:: [[date:]]",
            "  - Author:: ",
            "  - Source:: [T](https://x.test/t)",
            "  - Words here",
        ]
        .join("\n")
    );
}

#[test]
fn strictness_controls_boilerplate() {
    init_logging();
    let record = record_with_html("<p>Body</p><h4>Related</h4><p>Share this</p><p>!</p>");
    let strict = compose(&record, &without_metadata());
    assert_eq!(strict, "- [Title](https://x.test/a) #webclip\n  - Body\n  - **Related**");

    let lenient = Options {
        strictness: Strictness::Lenient,
        ..without_metadata()
    };
    assert_eq!(
        compose(&record, &lenient),
        "- [Title](https://x.test/a) #webclip\n  - Body\n  - **Related**\n  - Share this\n  - !"
    );
}

#[test]
fn metadata_precedes_body_and_no_line_is_empty() {
    init_logging();
    let record = PageRecord {
        title: "T".into(),
        url: "https://x.test/t".into(),
        author: "A".into(),
        selection_html: Some("<div><p>one</p>\n\n<p>two</p></div>".into()),
        ..PageRecord::default()
    };
    let out = compose(&record, &Options::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "- [T](https://x.test/t) #webclip",
            "  - Author:: A",
            "  - Source:: [T](https://x.test/t)",
            "  - one",
            "  - two",
        ]
    );
    assert!(lines.iter().all(|line| !line.trim().is_empty()));
    assert!(!out.ends_with('\n'));
}

#[test]
fn compose_is_idempotent() {
    init_logging();
    let record = record_with_html("<h1>X</h1><ul><li>by</li><li>Writer</li></ul><p>Text</p>");
    let options = Options::default();
    assert_eq!(compose(&record, &options), compose(&record, &options));
}
