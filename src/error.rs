// src/error.rs
use crate::datasources::DocumentError;
use docsieve_xpath::QueryError;
use thiserror::Error;

/// Errors raised while loading query sets and documents.
///
/// Evaluation itself never fails: invalid queries simply never match.
#[derive(Error, Debug)]
pub enum DocsieveError {
    #[error("Document failed to load: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query file is malformed: {0}")]
    QueryFile(#[from] serde_json::Error),
}
