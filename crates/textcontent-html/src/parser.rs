//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena tree. The
//! conversion walks the RcDom with an explicit stack so nesting depth in
//! the source never turns into call-stack depth.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use textcontent_dom::{Document, DomTree, NodeId, QualName};

use crate::{ParseError, ParseOptions};

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a new HTML parser with explicit options
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        let url = &self.options.url;
        tracing::debug!("Parsing HTML document: {} ({} bytes)", url, html.len());

        let dom = parse_document(RcDom::default(), self.options.to_html5ever())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut tree = DomTree::new();
        convert(&dom.document, &mut tree)?;

        let document = Document::from_tree(tree, url);
        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }
}

/// Copy the RcDom rooted at `document` into `tree`.
///
/// Children are pushed last-to-first, so each parent receives its children
/// in document order.
fn convert(document: &Handle, tree: &mut DomTree) -> Result<(), ParseError> {
    let root = tree.root();
    let mut stack: Vec<(Handle, NodeId)> = document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), root))
        .collect();

    while let Some((handle, parent)) = stack.pop() {
        let Some(id) = convert_node(&handle, tree) else {
            continue;
        };
        tree.append_child(parent, id)?;

        if matches!(handle.data, RcNodeData::Element { .. }) {
            stack.extend(
                handle
                    .children
                    .borrow()
                    .iter()
                    .rev()
                    .map(|child| (child.clone(), id)),
            );
        }
    }

    Ok(())
}

/// Create the arena node for a single RcDom node (detached)
fn convert_node(handle: &Handle, tree: &mut DomTree) -> Option<NodeId> {
    let id = match &handle.data {
        // Only the top-level handle is a document; nested ones never occur
        RcNodeData::Document => return None,
        RcNodeData::Doctype {
            name,
            public_id,
            system_id,
        } => tree.create_doctype(name, public_id, system_id),
        RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
        RcNodeData::Comment { contents } => tree.create_comment(contents),
        RcNodeData::ProcessingInstruction { target, contents } => {
            tree.create_processing_instruction(target, contents)
        }
        // `<template>` contents live in a separate fragment, not among the
        // element's children, so they never enter the arena
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element_ns(&name.ns, &name.local);

            let attrs: Vec<(QualName, String)> = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let interner = tree.interner_mut();
                    let ns = interner.intern(&attr.name.ns);
                    let local = interner.intern(&attr.name.local);
                    (QualName::new(ns, local), attr.value.to_string())
                })
                .collect();

            if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                for (name, value) in attrs {
                    elem.set_attr(name, value);
                }
            }
            id
        }
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textcontent_dom::NodeKind;

    fn parse(html: &str) -> Document {
        HtmlParser::default().parse(html).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let doc = parse("<html><head><title>Test</title></head><body><p>Hello</p></body></html>");

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert!(doc.body().is_valid());
        assert!(doc.head().is_valid());
    }

    #[test]
    fn test_parse_fragment_gets_wrapped() {
        let doc = parse("<div><span>Text</span></div>");

        // Fragments get wrapped in html/head/body by html5ever
        let body = doc.body();
        let (div, _) = doc.tree().children(body).next().unwrap();
        assert_eq!(doc.tree().tag_name(div), Some("div"));
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let doc = parse("<p><b>a</b> <i>b</i></p>");
        let body = doc.body();
        let (p, _) = doc.tree().children(body).next().unwrap();

        let texts: Vec<_> = doc
            .tree()
            .children(p)
            .filter(|(_, n)| n.kind() == NodeKind::Text)
            .filter_map(|(_, n)| n.as_text())
            .collect();
        assert_eq!(texts, [" "]);
    }

    #[test]
    fn test_attributes_copied() {
        let doc = parse(r#"<a href="https://example.com" id="x">link</a>"#);
        let tree = doc.tree();
        let (a, node) = tree.children(doc.body()).next().unwrap();
        assert_eq!(tree.tag_name(a), Some("a"));

        let href = tree.interner().lookup("href").unwrap();
        assert_eq!(node.as_element().unwrap().get_attr(href), Some("https://example.com"));
    }

    #[test]
    fn test_template_contents_not_converted() {
        let doc = parse("<template><p>inert</p></template><p>live</p>");
        let tree = doc.tree();
        let template = tree
            .children(doc.head())
            .find(|(id, _)| tree.tag_name(*id) == Some("template"))
            .map(|(id, _)| id)
            .unwrap();
        assert!(tree.children(template).next().is_none());
    }

    #[test]
    fn test_doctype_kept_or_dropped() {
        let html = "<!DOCTYPE html><p>x</p>";

        let doc = parse(html);
        let first = doc.tree().children(doc.root()).next().unwrap().1;
        assert_eq!(first.kind(), NodeKind::Other);

        let opts = ParseOptions {
            drop_doctype: true,
            ..ParseOptions::default()
        };
        let doc = HtmlParser::new(opts).parse(html).unwrap();
        let first = doc.tree().children(doc.root()).next().unwrap().1;
        assert_eq!(first.kind(), NodeKind::Element);
    }
}
