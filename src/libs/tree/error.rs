use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The input text violates the Newick grammar
    /// (missing root parenthesis, unbalanced parentheses)
    Format {
        /// A human-readable message explaining the error
        message: String,
    },
    /// A per-node payload fragment could not be decoded
    /// (non-numeric branch length, unterminated comment bracket)
    MalformedPayload {
        /// The offending fragment
        text: String,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Format { message } => {
                write!(f, "Newick format error: {}", message)
            }
            TreeError::MalformedPayload { text } => {
                write!(f, "Malformed node payload: \"{}\"", text)
            }
        }
    }
}

impl std::error::Error for TreeError {}
