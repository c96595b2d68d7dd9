//! textcontent - Text extraction
//!
//! Concatenates every text node reachable from a root, in document order,
//! the way a DOM `textContent` getter does. Tags, attributes, comments and
//! doctypes contribute nothing; text is copied verbatim with no separators.
//!
//! # Example
//! ```rust,ignore
//! use textcontent::TextContent;
//!
//! let doc = textcontent_html::parse("<li><a>x</a>-y</li>")?;
//! assert_eq!(doc.text_content()?, "x-y");
//! ```

mod collector;
mod options;
mod walk;

pub use collector::TextCollector;
pub use options::{CollectOptions, NON_RENDERED_ELEMENTS};
pub use walk::TextNodes;

pub use textcontent_dom::{Document, DomTree, NodeId};

/// Collect the text content of `root` with default options
pub fn text_content(tree: &DomTree, root: NodeId) -> Result<String, TextError> {
    TextCollector::default().collect(tree, root)
}

/// Iterate over the text fragments under `root` without copying them
pub fn text_nodes(tree: &DomTree, root: NodeId) -> Result<TextNodes<'_>, TextError> {
    TextNodes::new(tree, root)
}

/// Text extraction error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Invalid root node: {0}")]
    InvalidInput(NodeId),

    #[error("Out of memory while collecting text ({requested} bytes requested)")]
    AllocationFailure { requested: usize },
}

/// `textContent`-style access on tree holders
pub trait TextContent {
    /// Text content of the whole document
    fn text_content(&self) -> Result<String, TextError>;

    /// Text content of the subtree rooted at `id`
    fn node_text_content(&self, id: NodeId) -> Result<String, TextError>;
}

impl TextContent for DomTree {
    fn text_content(&self) -> Result<String, TextError> {
        text_content(self, self.root())
    }

    fn node_text_content(&self, id: NodeId) -> Result<String, TextError> {
        text_content(self, id)
    }
}

impl TextContent for Document {
    fn text_content(&self) -> Result<String, TextError> {
        self.tree().text_content()
    }

    fn node_text_content(&self, id: NodeId) -> Result<String, TextError> {
        self.tree().node_text_content(id)
    }
}
