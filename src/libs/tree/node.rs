use itertools::Itertools;

use super::algo;
use super::error::TreeError;
use super::parser;
use super::payload;
use super::traversal::{self, Traversal, TraversalMode};
use super::writer;

/// A node of an n-ary tree; the tree is identified by its root node, there
/// is no separate container.
///
/// Every node exclusively owns its children, so the structure is acyclic by
/// construction and a subtree is dropped together with its parent.
/// `add_child` takes the child by value - attaching one node to two parents
/// does not type-check.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Node name/label (e.g., "Homo", "Hominini")
    pub name: Option<String>,

    /// Branch length to parent.
    /// In rooted trees, edge length is an attribute of the child node.
    pub length: Option<f64>,

    /// Free-text comment, commonly a bootstrap/support value.
    /// Kept verbatim, never interpreted numerically.
    pub comment: Option<String>,

    /// Owned child nodes; sibling order is meaningful.
    pub children: Vec<Node>,

    /// Default traversal order used by `order()`, `leaves()`, `size()` and
    /// `apply()`.
    pub mode: TraversalMode,
}

impl Node {
    /// Create a new empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the node (builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the branch length (builder pattern)
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the comment (builder pattern)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Parse a Newick string into a tree.
    ///
    /// # Example
    /// ```
    /// use nwt::libs::tree::Node;
    ///
    /// let tree = Node::from_newick("(A:0.1,B:0.2)Root;").unwrap();
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.name.as_deref(), Some("Root"));
    ///
    /// // Error handling
    /// let result = Node::from_newick("(A,B:invalid)C;");
    /// assert!(result.is_err());
    /// ```
    pub fn from_newick(text: &str) -> Result<Self, TreeError> {
        parser::parse_newick(text)
    }

    /// Append a child to the children list, taking ownership of it.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Create a named leaf and append it.
    pub fn new_child(&mut self, name: impl Into<String>) {
        self.add_child(Node::new().with_name(name));
    }

    /// Check if the node is a leaf (no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Select the default traversal order for subsequent queries.
    pub fn set_mode(&mut self, mode: TraversalMode) {
        self.mode = mode;
    }

    /// Start a fresh traversal session in the node's active mode.
    ///
    /// The session is lazy and single-pass; callers needing a second pass
    /// call `traverse()` again.
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal::new(self, self.mode)
    }

    /// Materialize the active traversal into a list, root first.
    pub fn order(&self) -> Vec<&Node> {
        self.traverse().collect()
    }

    /// The leaves of the tree, in active-traversal order.
    pub fn leaves(&self) -> Vec<&Node> {
        self.traverse().filter(|node| node.is_leaf()).collect()
    }

    /// Number of nodes in the subtree, including this node.
    /// Recomputed on every call, so it reflects the current structure.
    pub fn size(&self) -> usize {
        self.traverse().count()
    }

    /// Apply `f` to every node in active-traversal order, for side effects
    /// (e.g., annotating nodes). Returns the number of nodes visited.
    pub fn apply<F>(&mut self, f: F) -> usize
    where
        F: FnMut(&mut Node),
    {
        let mode = self.mode;
        traversal::apply(self, mode, f)
    }

    /// Re-sort the immediate children of every node by subtree size
    /// (ladderize). Children of equal size keep their relative order.
    ///
    /// # Example
    /// ```
    /// use nwt::libs::tree::Node;
    ///
    /// let mut tree = Node::from_newick("((A,B),C);").unwrap();
    /// tree.sort_by_size(false);
    /// assert_eq!(tree.to_newick(), "(C,(A,B))");
    /// ```
    pub fn sort_by_size(&mut self, descending: bool) {
        algo::sort_by_size(self, descending);
    }

    /// The encoded payload fragment: `name`, `name:length`,
    /// `name:length[comment]`, or the leading-`:` forms when unnamed.
    pub fn info(&self) -> String {
        payload::encode_info(self.name.as_deref(), self.length, self.comment.as_deref())
    }

    /// Render the tree as compact Newick text.
    ///
    /// The result carries no trailing `;`; callers wanting a complete Newick
    /// file append it themselves.
    pub fn to_newick(&self) -> String {
        writer::write_newick(self)
    }

    /// Render with one child per line, `indent` repeated per depth.
    pub fn to_newick_with_format(&self, indent: &str) -> String {
        writer::write_newick_with_format(self, indent)
    }

    /// Human-readable multi-line listing of nodes and their immediate
    /// children, one line per node in depth-first order. Diagnostic only -
    /// not a machine-parseable format.
    pub fn dump(&self, indent: &str) -> String {
        let mut out = String::new();
        self.dump_recursive(indent, 0, &mut out);
        out
    }

    fn dump_recursive(&self, indent: &str, depth: usize, out: &mut String) {
        out.push_str(&indent.repeat(depth));
        out.push_str(&self.dump_label());
        if !self.is_leaf() {
            out.push_str(" -> ");
            out.push_str(&self.children.iter().map(|c| c.dump_label()).join(", "));
        }
        out.push('\n');

        for child in &self.children {
            child.dump_recursive(indent, depth + 1, out);
        }
    }

    fn dump_label(&self) -> String {
        let info = self.info();
        if info.is_empty() {
            "()".to_string()
        } else {
            info
        }
    }
}
