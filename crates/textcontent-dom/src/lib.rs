//! textcontent DOM - Document tree
//!
//! Memory-efficient, arena-backed document tree. Nodes live in a single
//! `Vec` and refer to each other by 4-byte [`NodeId`]s.

mod document;
mod interner;
mod node;
mod tree;

pub use document::Document;
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData, NodeKind, QualName, TextData};
pub use tree::{Children, DomTree, HTML_NAMESPACE};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);
    /// Absent node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Build an id from a raw arena index
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        NodeId(index)
    }

    /// Raw arena index
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Whether this id refers to a node (i.e. is not `NONE`)
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("Hierarchy request error: cannot insert {child} under {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Invalid node type for {0}: node cannot have children")]
    InvalidNodeType(NodeId),
}
