use super::node::Node;

/// Re-sort the immediate children of every node by subtree size, also known
/// as ladderize.
///
/// A leaf counts 1; an internal node counts itself plus all descendants.
/// The sort is stable, so children of equal size keep their relative order.
/// One bottom-up pass: each child's size is computed exactly once, as the
/// recursion returns.
///
/// # Arguments
///
/// * `node` - the (sub)tree to reorder in place.
/// * `descending` - if true, children with larger subtrees come first.
///
/// # Example
/// ```
/// use nwt::libs::tree::{algo, Node};
///
/// // ((A,B),C)
/// // (A,B) has subtree size 3, C has size 1.
/// let mut tree = Node::from_newick("((A,B),C);").unwrap();
///
/// // Ascending: C (1) < (A,B) (3)
/// algo::sort_by_size(&mut tree, false);
/// assert_eq!(tree.to_newick(), "(C,(A,B))");
///
/// // Descending: (A,B) (3) > C (1)
/// algo::sort_by_size(&mut tree, true);
/// assert_eq!(tree.to_newick(), "((A,B),C)");
/// ```
pub fn sort_by_size(node: &mut Node, descending: bool) {
    sort_recursive(node, descending);
}

fn sort_recursive(node: &mut Node, descending: bool) -> usize {
    let children = std::mem::take(&mut node.children);

    let mut sized: Vec<(usize, Node)> = children
        .into_iter()
        .map(|mut child| {
            let size = sort_recursive(&mut child, descending);
            (size, child)
        })
        .collect();

    // Vec::sort_by is stable, so equal-size children keep their input order
    // in either direction.
    if descending {
        sized.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        sized.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let size = 1 + sized.iter().map(|(s, _)| *s).sum::<usize>();
    node.children = sized.into_iter().map(|(_, child)| child).collect();
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_size() {
        let mut tree = Node::from_newick("(C,(A,B));").unwrap();

        sort_by_size(&mut tree, true);
        assert_eq!(tree.to_newick(), "((A,B),C)");

        sort_by_size(&mut tree, false);
        assert_eq!(tree.to_newick(), "(C,(A,B))");
    }

    #[test]
    fn test_sort_by_size_recurses() {
        // Inner nodes are reordered too, not just the root's children.
        let mut tree = Node::from_newick("(((a,b)x,c)y,d);").unwrap();

        sort_by_size(&mut tree, false);
        assert_eq!(tree.to_newick(), "(d,(c,(a,b)x)y)");
    }

    #[test]
    fn test_sort_by_size_stable() {
        // Sizes: a=1, b=1, (c,d)=3, e=1, (f,g)=3
        let mut tree = Node::from_newick("(a,b,(c,d),e,(f,g));").unwrap();

        sort_by_size(&mut tree, true);
        assert_eq!(tree.to_newick(), "((c,d),(f,g),a,b,e)");

        sort_by_size(&mut tree, false);
        assert_eq!(tree.to_newick(), "(a,b,e,(c,d),(f,g))");
    }

    #[test]
    fn test_sort_by_size_keeps_payload() {
        let mut tree = Node::from_newick("((A:1,B:2)x:3[90],C:4);").unwrap();

        sort_by_size(&mut tree, false);
        assert_eq!(tree.to_newick(), "(C:4,(A:1,B:2)x:3[90])");
    }
}
