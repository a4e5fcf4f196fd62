//! A compact XPath subset and a backtracking matcher for document trees.
//!
//! Queries are absolute child paths such as `/body/article[@id="x"]`, where
//! each name may carry bracketed tests:
//!
//! - `@name="value"`: attribute equality
//! - `text()="value"`: first text child equality
//! - `contains(text(),"value")`: first text child substring
//! - a nested relative path like `[f/foo]`: some matching descendant exists
//!
//! ```
//! use docsieve_xpath::{compile, is_valid};
//!
//! assert!(is_valid("/d/e[f/foo]/f/bar[text()=\"else\"]"));
//! assert!(compile("test/to/path").is_none());
//! ```

pub mod compiler;
pub mod cursor;
pub mod datasource;
pub mod engine;
pub mod error;
pub mod parser;
pub mod token;

pub use compiler::{CompiledQuery, MAX_NESTING, classify, compile, is_valid};
pub use cursor::TokenCursor;
pub use datasource::DocumentNode;
pub use engine::{evaluate, match_token};
pub use error::QueryError;
pub use parser::{is_valid_identifier, tokenize};
pub use token::{TestKind, Token, TokenKind};

// Re-export test utilities for integration testing in downstream crates
pub use datasource::tests;
