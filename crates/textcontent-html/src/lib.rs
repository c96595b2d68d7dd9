//! textcontent HTML Parser
//!
//! HTML5 parsing built on html5ever. Parses HTML and converts it to the
//! arena tree from `textcontent-dom`.

mod options;
mod parser;

pub use options::ParseOptions;
pub use parser::HtmlParser;
pub use textcontent_dom::{Document, DomError, DomTree, Node, NodeId};

/// Parse an HTML string into a Document using default options
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new(ParseOptions::default()).parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build document tree: {0}")]
    Tree(#[from] DomError),
}
