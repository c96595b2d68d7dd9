//! Document - High-level document API

use crate::{DomTree, NodeId};

/// A parsed document: the tree plus cached landmarks
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create an empty document (document node only)
    pub fn empty(url: &str) -> Self {
        Self::from_tree(DomTree::new(), url)
    }

    /// Wrap an already-built tree and locate its landmarks
    pub fn from_tree(tree: DomTree, url: &str) -> Self {
        let mut doc = Self {
            tree,
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        };
        doc.finalize();
        doc
    }

    /// Locate `<html>`, `<head>` and `<body>` after the tree was built
    pub fn finalize(&mut self) {
        self.html_element = self.find_child(self.tree.root(), "html");
        self.head_element = self.find_child(self.html_element, "head");
        self.body_element = self.find_child(self.html_element, "body");

        tracing::debug!(
            url = %self.url,
            nodes = self.tree.len(),
            has_body = self.body_element.is_valid(),
            "document finalized"
        );
    }

    fn find_child(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree
            .children(parent)
            .find(|(id, _)| self.tree.tag_name(*id) == Some(tag))
            .map_or(NodeId::NONE, |(id, _)| id)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Get <html> element (NONE if absent)
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element (NONE if absent)
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element (NONE if absent)
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.tree.memory_usage() + self.url.capacity()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty("about:blank")
    }
}
