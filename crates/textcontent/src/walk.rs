//! Document-order text walk
//!
//! Pre-order depth-first traversal driven by an explicit stack of pending
//! node ids. Popping a node pushes its next sibling, then its first child,
//! so the child is visited first and the stack holds at most one pending
//! sibling per ancestor level.

use textcontent_dom::{DomTree, NodeData, NodeId};

use crate::TextError;
use crate::options::is_skipped;

/// Iterator over the text fragments under a root, in document order.
///
/// Yields borrowed `&str`s; nothing is copied.
#[derive(Debug, Clone)]
pub struct TextNodes<'a> {
    tree: &'a DomTree,
    root: NodeId,
    stack: Vec<NodeId>,
    skip: &'a [String],
}

impl<'a> TextNodes<'a> {
    /// Walk every text node under `root`
    pub fn new(tree: &'a DomTree, root: NodeId) -> Result<Self, TextError> {
        Self::with_skipped(tree, root, &[])
    }

    /// Walk text nodes under `root`, not descending into elements whose
    /// local name is in `skip`. The root itself is never skipped.
    pub fn with_skipped(
        tree: &'a DomTree,
        root: NodeId,
        skip: &'a [String],
    ) -> Result<Self, TextError> {
        if !tree.contains(root) {
            return Err(TextError::InvalidInput(root));
        }

        Ok(Self {
            tree,
            root,
            stack: vec![root],
            skip,
        })
    }

    /// Queue `id` if it names a node
    #[inline]
    fn push(&mut self, id: NodeId) {
        if id.is_valid() {
            self.stack.push(id);
        }
    }
}

impl<'a> Iterator for TextNodes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let tree = self.tree;
        while let Some(id) = self.stack.pop() {
            let Some(node) = tree.get(id) else {
                continue;
            };
            // Siblings of the root lie outside the walked subtree
            if id != self.root {
                self.push(node.next_sibling);
            }

            match &node.data {
                NodeData::Text(text) => return Some(&text.content),
                NodeData::Element(elem)
                    if id != self.root && is_skipped(self.skip, tree.resolve(elem.name.local)) =>
                {
                    tracing::trace!(node = %id, tag = tree.resolve(elem.name.local), "skipping subtree");
                }
                NodeData::Element(_) | NodeData::Document => self.push(node.first_child),
                // Comments, doctypes and processing instructions hold no text children
                NodeData::Comment(_)
                | NodeData::Doctype { .. }
                | NodeData::ProcessingInstruction { .. } => {}
            }
        }
        None
    }
}
