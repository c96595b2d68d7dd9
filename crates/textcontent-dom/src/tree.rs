//! DOM Tree (arena-based allocation)

use crate::{
    DomError, DomResult, InternedString, Node, NodeData, NodeId, NodeKind, QualName,
    StringInterner,
};

/// HTML namespace URI
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Arena-based DOM tree.
///
/// Index 0 always holds the document node. Nodes are never removed, so a
/// `NodeId` handed out by this tree stays valid for its whole lifetime.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Kind of the node at `id`, if it exists
    #[inline]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    /// Whether `id` names a node of this tree
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    /// Number of nodes in the tree (including the document node)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document node has no children
    pub fn is_empty(&self) -> bool {
        !self.nodes[0].has_children()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    /// Local tag name of an element, `None` for other node kinds
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.resolve(elem.name.local))
    }

    /// Store a node. Once the arena holds `u32::MAX` nodes no further node
    /// is stored and `NodeId::NONE` comes back, which `append_child` then
    /// rejects with `DomError::NotFound`.
    fn push(&mut self, node: Node) -> NodeId {
        let Some(id) = next_id(self.nodes.len()) else {
            tracing::warn!(nodes = self.nodes.len(), "node arena is full");
            return NodeId::NONE;
        };
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element
    pub fn create_element(&mut self, local: &str) -> NodeId {
        self.create_element_ns(HTML_NAMESPACE, local)
    }

    /// Create a detached element in namespace `ns`
    pub fn create_element_ns(&mut self, ns: &str, local: &str) -> NodeId {
        let name = QualName::new(self.interner.intern(ns), self.interner.intern(local));
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(content.to_string())))
    }

    /// Create a detached DOCTYPE node
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        let name = self.interner.intern(name);
        self.push(Node::new(NodeData::Doctype {
            name,
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }))
    }

    /// Create a detached processing instruction
    pub fn create_processing_instruction(&mut self, target: &str, data: &str) -> NodeId {
        let target = self.interner.intern(target);
        self.push(Node::new(NodeData::ProcessingInstruction {
            target,
            data: data.to_string(),
        }))
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// Fails if either node is unknown, if `parent` cannot hold children,
    /// or if `child` is already attached or is an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_kind = self.kind(parent).ok_or(DomError::NotFound(parent))?;
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;

        if !parent_kind.is_container() {
            return Err(DomError::InvalidNodeType(parent));
        }
        if child == parent
            || child == NodeId::ROOT
            || child_node.parent.is_valid()
            || (child_node.has_children() && self.is_ancestor(child, parent))
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        let prev = self.nodes[parent.0 as usize].last_child;
        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = NodeId::NONE;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
        Ok(())
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.nodes[current.0 as usize].parent;
        }
        false
    }

    /// Iterate over the children of `id` in document order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Approximate heap usage in bytes
    pub fn memory_usage(&self) -> usize {
        let payload: usize = self
            .nodes
            .iter()
            .map(|n| match &n.data {
                NodeData::Text(t) => t.content.capacity(),
                NodeData::Comment(c) => c.capacity(),
                NodeData::Doctype {
                    public_id,
                    system_id,
                    ..
                } => public_id.capacity() + system_id.capacity(),
                NodeData::ProcessingInstruction { data, .. } => data.capacity(),
                NodeData::Element(e) => {
                    e.attrs.capacity() * std::mem::size_of::<crate::Attribute>()
                        + e.attrs.iter().map(|a| a.value.capacity()).sum::<usize>()
                }
                NodeData::Document => 0,
            })
            .sum();

        self.nodes.capacity() * std::mem::size_of::<Node>() + payload + self.interner.memory_usage()
    }
}

/// Id for the node stored at arena index `len`; `u32::MAX` is reserved for `NONE`
fn next_id(len: usize) -> Option<NodeId> {
    u32::try_from(len)
        .ok()
        .filter(|&index| index != u32::MAX)
        .map(NodeId)
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children, yielding `(id, node)` pairs
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_document() {
        let tree = DomTree::new();
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
        assert_eq!(tree.kind(tree.root()), Some(NodeKind::Document));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_text("a");
        let b = tree.create_text("b");
        let c = tree.create_text("c");

        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();
        tree.append_child(div, c).unwrap();

        let texts: Vec<_> = tree.children(div).filter_map(|(_, n)| n.as_text()).collect();
        assert_eq!(texts, ["a", "b", "c"]);

        let node = tree.get(div).unwrap();
        assert_eq!(node.first_child, a);
        assert_eq!(node.last_child, c);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
        assert_eq!(tree.get(b).unwrap().next_sibling, c);
    }

    #[test]
    fn test_append_to_text_fails() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        let other = tree.create_text("y");
        assert_eq!(tree.append_child(text, other), Err(DomError::InvalidNodeType(text)));
    }

    #[test]
    fn test_append_attached_child_fails() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let text = tree.create_text("x");
        tree.append_child(a, text).unwrap();

        assert!(matches!(
            tree.append_child(b, text),
            Err(DomError::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_append_ancestor_fails() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("span");
        tree.append_child(outer, inner).unwrap();

        // outer is detached but is inner's parent
        assert!(matches!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_append_unknown_node() {
        let mut tree = DomTree::new();
        let missing = NodeId::from_index(42);
        assert_eq!(tree.append_child(tree.root(), missing), Err(DomError::NotFound(missing)));
        assert_eq!(
            tree.append_child(NodeId::NONE, NodeId::ROOT),
            Err(DomError::NotFound(NodeId::NONE))
        );
    }

    #[test]
    fn test_next_id_reserves_none() {
        assert_eq!(next_id(0), Some(NodeId::ROOT));
        assert_eq!(next_id(u32::MAX as usize - 1), Some(NodeId(u32::MAX - 1)));
        assert_eq!(next_id(u32::MAX as usize), None);
        assert_eq!(next_id(usize::MAX), None);
    }

    #[test]
    fn test_tag_name() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let t = tree.create_text("x");
        assert_eq!(tree.tag_name(p), Some("p"));
        assert_eq!(tree.tag_name(t), None);
    }
}
