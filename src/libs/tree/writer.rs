use super::node::Node;

/// Render a tree as compact Newick text.
///
/// A leaf renders as its encoded payload alone; an internal node renders as
/// `(` + comma-joined children in current order + `)` + its own payload.
/// The result carries no trailing `;` - callers wanting a complete Newick
/// file append it themselves.
pub fn write_newick(node: &Node) -> String {
    write_newick_with_format(node, "")
}

/// Render a tree as Newick text with optional indentation.
///
/// With a non-empty `indent`, children are placed one per line with the
/// indent repeated per depth; the output is still valid Newick as long as
/// `indent` is whitespace. An empty `indent` degenerates to the compact form.
pub fn write_newick_with_format(node: &Node, indent: &str) -> String {
    write_recursive(node, indent, 0)
}

fn write_recursive(node: &Node, indent: &str, depth: usize) -> String {
    let is_pretty = !indent.is_empty();
    let my_indent = if is_pretty {
        indent.repeat(depth)
    } else {
        String::new()
    };

    let info = node.info();

    if node.is_leaf() {
        format!("{}{}", my_indent, info)
    } else {
        let children: Vec<String> = node
            .children
            .iter()
            .map(|child| write_recursive(child, indent, depth + 1))
            .collect();

        if is_pretty {
            format!(
                "{}(\n{}\n{}){}",
                my_indent,
                children.join(",\n"),
                my_indent,
                info
            )
        } else {
            format!("({}){}", children.join(","), info)
        }
    }
}
