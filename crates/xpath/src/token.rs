//! Defines the token model produced by the query tokenizer.

use crate::compiler::CompiledQuery;
use std::fmt;

/// The payload of every axis token. Only the child axis is supported.
pub const AXIS_CHILD: &str = "/";

/// The category of a token in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic head of every compiled query. Never produced by the tokenizer.
    Root,
    /// The `/` separator, a descent to the child level.
    Axis,
    /// A bracketed predicate attached to the preceding name.
    Test,
    /// An element name that must equal the name of the node under test.
    NodeName,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenKind::Root => "ROOT",
            TokenKind::Axis => "AXIS",
            TokenKind::Test => "TEST",
            TokenKind::NodeName => "NODENAME",
        };
        f.write_str(label)
    }
}

/// A single lexical unit of a query. Two tokens are equal iff their kind and
/// payload are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn root() -> Self {
        Self::new(TokenKind::Root, "")
    }

    pub fn axis() -> Self {
        Self::new(TokenKind::Axis, AXIS_CHILD)
    }

    pub fn node_name(name: impl Into<String>) -> Self {
        Self::new(TokenKind::NodeName, name)
    }

    pub fn test(payload: impl Into<String>) -> Self {
        Self::new(TokenKind::Test, payload)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

/// The resolved meaning of a `Test` token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestKind {
    /// `@name="value"`: the named attribute must exist and equal `value`.
    Attribute { name: String, value: String },
    /// `text()="value"`: the first text child must equal `value`.
    TextEquals(String),
    /// `contains(text(),"value")`: the first text child must contain `value`.
    Contains(String),
    /// A nested path that must match somewhere below the node under test.
    Step(Box<CompiledQuery>),
}

impl TestKind {
    /// Short label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::Attribute { .. } => "attribute",
            TestKind::TextEquals(_) => "text",
            TestKind::Contains(_) => "contains",
            TestKind::Step(_) => "step",
        }
    }
}
