use super::error::TreeError;
use super::node::Node;
use super::payload;

/// Parse a Newick string into a `Node` tree.
///
/// A single left-to-right scan over the text, with an explicit stack of open
/// parent nodes and an accumulating token buffer. `[...]` comment delimiters
/// are not special-cased here - they pass through the buffer and are split
/// out by the payload codec.
///
/// The trimmed text must begin with `(`; a trailing `;` is stripped if
/// present; whitespace is ignored everywhere and is never part of a name or
/// number.
pub fn parse_newick(text: &str) -> Result<Node, TreeError> {
    let text = text.trim();
    let text = text.strip_suffix(';').unwrap_or(text).trim_end();

    if !text.starts_with('(') {
        return Err(TreeError::Format {
            message: "missing root parenthesis".to_string(),
        });
    }

    // `current` is the node under construction; the stack holds its open
    // ancestors, outermost first.
    let mut stack: Vec<Node> = Vec::new();
    let mut current = Node::new();
    let mut buffer = String::new();

    for ch in text.chars() {
        match ch {
            '(' => {
                // Open a child group: the current node becomes a parent,
                // construction descends into its first child.
                stack.push(std::mem::take(&mut current));
                buffer.clear();
            }
            ',' => {
                // Close the current sibling, open the next one under the
                // same parent.
                finalize(&mut current, &buffer)?;
                buffer.clear();
                let mut parent = stack.pop().ok_or_else(unbalanced)?;
                parent.add_child(std::mem::take(&mut current));
                stack.push(parent);
            }
            ')' => {
                // Close the last sibling and the group, return to the parent.
                finalize(&mut current, &buffer)?;
                buffer.clear();
                let mut parent = stack.pop().ok_or_else(unbalanced)?;
                parent.add_child(std::mem::take(&mut current));
                current = parent;
            }
            c if c.is_whitespace() => {}
            c => buffer.push(c),
        }
    }

    if !stack.is_empty() {
        return Err(unbalanced());
    }

    // Whatever remains in the buffer is the payload of the root.
    finalize(&mut current, &buffer)?;
    Ok(current)
}

fn finalize(node: &mut Node, buffer: &str) -> Result<(), TreeError> {
    let info = payload::decode_info(buffer)?;
    node.name = info.name;
    node.length = info.length;
    node.comment = info.comment;
    Ok(())
}

fn unbalanced() -> TreeError {
    TreeError::Format {
        message: "unbalanced parentheses".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parser_simple() {
        let tree = parse_newick("(A,B)C;").unwrap();
        assert_eq!(tree.name.as_deref(), Some("C"));
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].name.as_deref(), Some("A"));
        assert_eq!(tree.children[1].name.as_deref(), Some("B"));
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn test_parser_lengths() {
        let tree = parse_newick("(A:0.1, B:0.2e-1)Root:100;").unwrap();

        assert_eq!(tree.name.as_deref(), Some("Root"));
        assert_relative_eq!(tree.length.unwrap(), 100.0);
        assert_relative_eq!(tree.children[0].length.unwrap(), 0.1);
        assert_relative_eq!(tree.children[1].length.unwrap(), 0.02);
    }

    #[test]
    fn test_parser_comments() {
        // Comment delimiters travel through the scanner buffer untouched
        // and are split out by the payload codec.
        let tree = parse_newick("((Homo:6,Pan:6):17[94],Gorilla:23);").unwrap();

        let inner = &tree.children[0];
        assert_eq!(inner.name, None);
        assert_relative_eq!(inner.length.unwrap(), 17.0);
        assert_eq!(inner.comment.as_deref(), Some("94"));

        let gorilla = &tree.children[1];
        assert_eq!(gorilla.name.as_deref(), Some("Gorilla"));
        assert_eq!(gorilla.comment, None);
    }

    #[test]
    fn test_parser_multiway() {
        let tree = parse_newick("((a,b),(c,d,e),f);").unwrap();
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[1].children.len(), 3);
        assert_eq!(tree.size(), 9);
    }

    #[test]
    fn test_parser_whitespace() {
        let tree = parse_newick("  (  A : 0.1 ,  B  )  ;  ").unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.children[0].name.as_deref(), Some("A"));
        assert_relative_eq!(tree.children[0].length.unwrap(), 0.1);
        assert_eq!(tree.children[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn test_parser_multiline_whitespace() {
        let input = "
        (
            A : 0.1,
            B : 0.2
        ) Root ;
        ";
        let tree = parse_newick(input).unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.name.as_deref(), Some("Root"));
    }

    #[test]
    fn test_parser_unnamed_nodes() {
        let tree = parse_newick("(:1.0,(:2.0,:3.0));").unwrap();
        assert_eq!(tree.name, None);
        assert_relative_eq!(tree.children[0].length.unwrap(), 1.0);

        let inner = &tree.children[1];
        assert_eq!(inner.length, None);
        assert_eq!(inner.children.len(), 2);
    }

    #[test]
    fn test_parser_missing_root_parenthesis() {
        for input in ["a,b)", "A;", ""] {
            let res = parse_newick(input);
            match res {
                Err(TreeError::Format { message }) => {
                    assert_eq!(message, "missing root parenthesis");
                }
                _ => panic!("expected Format error, got {:?}", res),
            }
        }
    }

    #[test]
    fn test_parser_unbalanced() {
        for input in ["((A,B);", "(A,B));", "((A,(B,C));"] {
            let res = parse_newick(input);
            match res {
                Err(TreeError::Format { message }) => {
                    assert_eq!(message, "unbalanced parentheses");
                }
                _ => panic!("expected Format error, got {:?}", res),
            }
        }
    }

    #[test]
    fn test_parser_malformed_payload() {
        assert!(matches!(
            parse_newick("(a:xyz)"),
            Err(TreeError::MalformedPayload { .. })
        ));
        assert!(matches!(
            parse_newick("(a:1.5[94,b)"),
            Err(TreeError::MalformedPayload { .. })
        ));
    }
}
