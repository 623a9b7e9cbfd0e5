#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a source line.
pub enum LexerError {
    /// Found input that matches none of the token rules.
    UnrecognizedSequence {
        /// The rejected piece of input.
        text:   String,
        /// The byte offset where the sequence starts.
        offset: usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The byte offset where the literal starts.
        offset: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSequence { text, offset } => write!(f,
                                                                  "Error at offset {offset}: Unrecognized character sequence '{text}'."),

            Self::LiteralTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Integer literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
