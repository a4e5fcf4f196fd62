use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query is empty")]
    Empty,

    #[error("Unbalanced brackets in '{0}'")]
    UnbalancedBrackets(String),

    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("Unrecognized test: '{0}'")]
    InvalidTest(String),

    #[error("Tests nest deeper than {0} levels")]
    TooDeep(usize),

    #[error("Invalid token sequence at position {position}: {message}")]
    InvalidSequence { position: usize, message: String },
}
