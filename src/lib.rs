//! Batch evaluation of compact XPath queries against document trees.
//!
//! ```
//! use docsieve::{BatchEvaluator, XmlDocument};
//!
//! let doc = XmlDocument::parse(r#"<body><article id="x">News</article></body>"#).unwrap();
//! let mut evaluator = BatchEvaluator::new();
//! evaluator.set_queries([
//!     r#"/body/article[@id="x"][contains(text(),"News")]"#,
//!     "/body/aside",
//!     "body",
//! ]);
//! assert_eq!(evaluator.evaluate(doc.root_node()), vec![true, false, false]);
//! ```

pub mod batch;
pub mod config;
pub mod datasources;
pub mod error;

pub use batch::BatchEvaluator;
pub use config::{EvaluatorConfig, QuerySet};
pub use datasources::{
    DocType, DocumentError, XmlDocument, XmlNode, read_document, strip_processing_instructions,
};
pub use error::DocsieveError;

// Re-export the query language so callers need a single dependency
pub use docsieve_xpath::{
    CompiledQuery, DocumentNode, MAX_NESTING, QueryError, TestKind, Token, TokenKind, compile,
    is_valid,
};
