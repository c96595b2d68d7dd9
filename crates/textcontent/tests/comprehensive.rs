//! Comprehensive tests for textcontent
//!
//! End-to-end: HTML source -> html5ever -> arena tree -> text content.

use textcontent::{CollectOptions, TextCollector, TextContent, text_content, text_nodes};
use textcontent_html::parse;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// LIST ITEMS AND SIMPLE DOCUMENTS
// ============================================================================

#[test]
fn test_single_node() -> anyhow::Result<()> {
    init_tracing();
    let doc = parse("<div>hello world</div>")?;
    assert_eq!(doc.text_content()?, "hello world");
    Ok(())
}

#[test]
fn test_wiki_page_li() -> anyhow::Result<()> {
    let html = concat!(
        "<li>",
        "<a href=\"https://github.com/stephenmathieson/str-copy.c\">",
        "stephenmathieson/str-copy.c",
        "</a>",
        "- drop-in replacement for <code>strdup</code> with a ",
        "less stupid name",
        "</li>",
    );
    let expected = concat!(
        "stephenmathieson/str-copy.c- ",
        "drop-in replacement for strdup ",
        "with a less stupid name",
    );

    let doc = parse(html)?;
    assert_eq!(doc.text_content()?, expected);
    Ok(())
}

#[test]
fn test_wiki_page_li_with_link() -> anyhow::Result<()> {
    let html = concat!(
        "<li>",
        "<a href=\"https://github.com/thlorenz/ee.c\">thlorenz/ee.c</a>",
        " - EventEmitter modeled after ",
        "<a href=\"http://nodejs.org/api/events.html\">",
        "nodejs event emitter",
        "</a>",
        "</li>",
    );

    let doc = parse(html)?;
    assert_eq!(
        doc.text_content()?,
        "thlorenz/ee.c - EventEmitter modeled after nodejs event emitter"
    );
    Ok(())
}

#[test]
fn test_deeply_nested_text() -> anyhow::Result<()> {
    let html = format!("{}hello world{}", "<div>".repeat(7), "</div>".repeat(7));
    let doc = parse(&html)?;
    assert_eq!(doc.text_content()?, "hello world");
    Ok(())
}

#[test]
fn test_no_separator_between_fragments() -> anyhow::Result<()> {
    assert_eq!(parse("<a>x</a>-y")?.text_content()?, "x-y");
    assert_eq!(parse("<a>x</a> -y")?.text_content()?, "x -y");
    Ok(())
}

// ============================================================================
// NODE KINDS
// ============================================================================

#[test]
fn test_comments_and_doctype_contribute_nothing() -> anyhow::Result<()> {
    let doc = parse("<!DOCTYPE html><p>a<!-- b -->c</p>")?;
    assert_eq!(doc.text_content()?, "ac");
    Ok(())
}

#[test]
fn test_attributes_contribute_nothing() -> anyhow::Result<()> {
    let doc = parse(r#"<img alt="picture" title="t"><a href="x" title="y">link</a>"#)?;
    assert_eq!(doc.text_content()?, "link");
    Ok(())
}

#[test]
fn test_whitespace_is_verbatim() -> anyhow::Result<()> {
    let doc = parse("<p>  two  spaces\n\tand tab  </p>")?;
    assert_eq!(doc.text_content()?, "  two  spaces\n\tand tab  ");
    Ok(())
}

#[test]
fn test_entities_arrive_decoded() -> anyhow::Result<()> {
    let doc = parse("<p>Fish &amp; Chips &mdash; &#x263A;</p>")?;
    assert_eq!(doc.text_content()?, "Fish & Chips \u{2014} \u{263A}");
    Ok(())
}

#[test]
fn test_subtree_text() -> anyhow::Result<()> {
    let doc = parse("<p>before</p><div id=x><b>in</b>side</div><p>after</p>")?;
    let tree = doc.tree();
    let div = tree
        .children(doc.body())
        .find(|(id, _)| tree.tag_name(*id) == Some("div"))
        .map(|(id, _)| id)
        .unwrap();

    assert_eq!(doc.node_text_content(div)?, "inside");
    assert_eq!(doc.node_text_content(doc.body())?, "beforeinsideafter");
    Ok(())
}

// ============================================================================
// NON-RENDERED CONTENT
// ============================================================================

#[test]
fn test_script_and_style_included_by_default() -> anyhow::Result<()> {
    let doc = parse("<style>p{}</style><p>text</p><script>run()</script>")?;
    assert_eq!(doc.text_content()?, "p{}textrun()");
    Ok(())
}

#[test]
fn test_rendered_options_skip_script_and_style() -> anyhow::Result<()> {
    let doc = parse("<style>p{}</style><p>text</p><script>run()</script>")?;
    let text = TextCollector::new(CollectOptions::rendered()).collect(doc.tree(), doc.root())?;
    assert_eq!(text, "text");
    Ok(())
}

// ============================================================================
// INVARIANTS
// ============================================================================

const SAMPLE: &str = r#"
    <html>
        <head><title>Sample</title></head>
        <body>
            <h1>Heading</h1>
            <!-- comment -->
            <ul><li>one</li><li>two <em>three</em></li></ul>
        </body>
    </html>
"#;

#[test]
fn test_deterministic() -> anyhow::Result<()> {
    let doc = parse(SAMPLE)?;
    let first = doc.text_content()?;
    let second = doc.text_content()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_length_equals_sum_of_fragments() -> anyhow::Result<()> {
    let doc = parse(SAMPLE)?;
    let fragments: Vec<&str> = text_nodes(doc.tree(), doc.root())?.collect();
    let text = text_content(doc.tree(), doc.root())?;

    assert_eq!(text.len(), fragments.iter().map(|f| f.len()).sum::<usize>());
    assert_eq!(text, fragments.concat());
    assert!(text.contains("Sample"));
    assert!(text.contains("two three"));
    assert!(!text.contains("comment"));
    Ok(())
}
