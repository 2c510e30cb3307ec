use super::node::Node;
use std::collections::VecDeque;

/// Which sequence the generic iteration interface yields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    #[default]
    DepthFirst,
    BreadthFirst,
}

/// A lazy, single-pass traversal session over a tree.
///
/// Each session owns its pending work-list (a stack for depth-first, a queue
/// for breadth-first) and produces one node per `next()` call, so deep trees
/// never hit a recursion limit and abandoning a traversal costs nothing.
///
/// A session is independent of the tree's own `mode`; any number of sessions
/// may run over the same tree at once. Iteration consumes the session - a
/// second pass needs a fresh one.
#[derive(Debug)]
pub enum Traversal<'a> {
    DepthFirst { stack: Vec<&'a Node> },
    BreadthFirst { queue: VecDeque<&'a Node> },
}

impl<'a> Traversal<'a> {
    pub fn new(root: &'a Node, mode: TraversalMode) -> Self {
        match mode {
            TraversalMode::DepthFirst => Self::preorder(root),
            TraversalMode::BreadthFirst => Self::levelorder(root),
        }
    }

    /// Depth-first (preorder) session: root, then each child's full
    /// depth-first sequence in child order.
    pub fn preorder(root: &'a Node) -> Self {
        Traversal::DepthFirst { stack: vec![root] }
    }

    /// Breadth-first (level order) session: root, then all children in
    /// sibling order, then all grandchildren.
    pub fn levelorder(root: &'a Node) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Traversal::BreadthFirst { queue }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::DepthFirst { stack } => {
                let node = stack.pop()?;
                // Push children in reverse order so the first child is processed next
                for child in node.children.iter().rev() {
                    stack.push(child);
                }
                Some(node)
            }
            Traversal::BreadthFirst { queue } => {
                let node = queue.pop_front()?;
                for child in &node.children {
                    queue.push_back(child);
                }
                Some(node)
            }
        }
    }
}

/// Recursive preorder. Yields the same sequence as `Traversal::preorder`,
/// node for node.
pub fn preorder_recursive(root: &Node) -> Vec<&Node> {
    fn helper<'a>(node: &'a Node, result: &mut Vec<&'a Node>) {
        result.push(node);
        for child in &node.children {
            helper(child, result);
        }
    }

    let mut result = Vec::new();
    helper(root, &mut result);
    result
}

/// Apply `f` to every node in the given order, for side effects.
/// Returns the number of nodes visited.
pub fn apply<F>(root: &mut Node, mode: TraversalMode, mut f: F) -> usize
where
    F: FnMut(&mut Node),
{
    let mut count = 0;
    match mode {
        TraversalMode::DepthFirst => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                f(&mut *node);
                count += 1;
                for child in node.children.iter_mut().rev() {
                    stack.push(child);
                }
            }
        }
        TraversalMode::BreadthFirst => {
            let mut queue = VecDeque::new();
            queue.push_back(root);
            while let Some(node) = queue.pop_front() {
                f(&mut *node);
                count += 1;
                for child in node.children.iter_mut() {
                    queue.push_back(child);
                }
            }
        }
    }
    count
}
