use super::node::Node;
use std::io::Read;

/// Read Newick trees from a file.
///
/// Every `;`-separated tree in the input is parsed; blank segments between
/// and after trees are skipped.
///
/// # Arguments
/// * `infile` - Path to the input file (or "stdin" for stdin).
pub fn from_file(infile: &str) -> anyhow::Result<Vec<Node>> {
    let mut reader = intspan::reader(infile);
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| anyhow::anyhow!("Read error: {}", e))?;

    let mut trees = Vec::new();
    for chunk in content.split(';') {
        if chunk.trim().is_empty() {
            continue;
        }
        trees.push(Node::from_newick(chunk)?);
    }

    Ok(trees)
}
