//! Arena-based tree model for the browsable remote hierarchy.
//!
//! Nodes live in a flat arena and reference each other through [`NodeId`]
//! indices, so swapping a placeholder for real children is a plain arena
//! update and parent/child links stay explicit edges. Nodes are never freed
//! individually; detaching a node only unlinks it from its parent.

use connection::{DirEntry, EntryType};

use crate::path::normalize;

/// Display label for not-yet-loaded placeholder nodes.
pub const LOADING_LABEL: &str = "loading...";

/// Stable identifier of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic root of the tree.
    Root,
    /// A remote directory.
    Directory,
    /// A remote regular file.
    File,
    /// A remote entry that is neither a file nor a directory.
    Other,
    /// Synthetic "not yet loaded" marker under an unexpanded directory.
    Placeholder,
}

impl NodeKind {
    /// Map a remote entry type onto a node kind.
    ///
    /// Total over [`EntryType`]: a new entry type added to the contract
    /// fails to compile here instead of silently falling through.
    pub fn classify(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Directory => NodeKind::Directory,
            EntryType::File => NodeKind::File,
            EntryType::Other => NodeKind::Other,
        }
    }

    /// Whether nodes of this kind can hold children.
    pub fn is_expandable(self) -> bool {
        matches!(self, NodeKind::Root | NodeKind::Directory)
    }
}

/// One position in the browsable hierarchy.
#[derive(Debug)]
pub struct Node {
    name: String,
    path: String,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    entry: Option<DirEntry>,
}

impl Node {
    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical full remote path. Computed once at insertion and stable
    /// for the node's lifetime.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child node ids, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The listing entry this node was built from.
    ///
    /// `None` for the root and for placeholders.
    pub fn entry(&self) -> Option<&DirEntry> {
        self.entry.as_ref()
    }
}

/// The browsable tree.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing the root node with a single placeholder
    /// child, ready for lazy expansion.
    pub fn new() -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.nodes.push(Node {
            name: "/".to_string(),
            path: "/".to_string(),
            kind: NodeKind::Root,
            parent: None,
            children: Vec::new(),
            entry: None,
        });
        tree.push_placeholder(tree.root());
        tree
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Borrow a node if the id is valid.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Whether a node is an unexpanded directory: exactly one child, and
    /// that child is a placeholder. This is the expansion gate; files,
    /// placeholders, and already-expanded directories all report `false`.
    pub fn is_unexpanded(&self, id: NodeId) -> bool {
        let children = self.node(id).children();
        children.len() == 1 && self.node(children[0]).kind == NodeKind::Placeholder
    }

    /// Unlink a node from its parent's children.
    ///
    /// Used by callers after a successful remote delete; the arena slot
    /// itself is retained, so outstanding [`NodeId`]s stay valid.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.nodes[parent.0].children.retain(|&child| child != id);
        }
    }

    /// Drop all children links of a node (placeholder removal on expansion).
    pub(crate) fn clear_children(&mut self, id: NodeId) {
        self.nodes[id.0].children.clear();
    }

    /// Append a child built from a listing entry, seeding a placeholder
    /// under it when the entry is a directory.
    pub(crate) fn push_entry_child(&mut self, parent: NodeId, entry: DirEntry) -> NodeId {
        let name = entry.file_name().to_string();
        let path = normalize(&format!("{}/{}", self.node(parent).path, name));
        let kind = NodeKind::classify(entry.entry_type);
        let id = self.push_node(Node {
            name,
            path,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            entry: Some(entry),
        });
        if kind == NodeKind::Directory {
            self.push_placeholder(id);
        }
        id
    }

    fn push_placeholder(&mut self, parent: NodeId) -> NodeId {
        // Placeholders are display artifacts; they borrow the parent's path
        // and carry no entry.
        let path = self.node(parent).path.clone();
        self.push_node(Node {
            name: LOADING_LABEL.to_string(),
            path,
            kind: NodeKind::Placeholder,
            parent: Some(parent),
            children: Vec::new(),
            entry: None,
        })
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let parent = node.parent;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
