//! Validates token sequences against the query grammar and resolves tests.
//!
//! Grammar of a compiled query:
//!
//! ```text
//! query := ROOT body
//! body  := (AXIS NODENAME TEST*)+
//! ```
//!
//! A `TEST` payload is one of `@name="v"`, `text()="v"`,
//! `contains(text(),"v")`, or a nested relative path that is itself a valid
//! query once prefixed with `/`.

use crate::cursor::TokenCursor;
use crate::error::QueryError;
use crate::parser::tokenize;
use crate::token::{AXIS_CHILD, TestKind, Token, TokenKind};
use std::fmt;
use std::str::FromStr;

pub const TEXT: &str = "text()";
pub const CONTAINS: &str = "contains";

/// How many step tests may nest inside one another, e.g. `/a[b[c]]` nests two.
pub const MAX_NESTING: usize = 64;

/// A query that passed tokenization and validation.
///
/// Test tokens are classified once here; the matcher reads the resolved
/// [`TestKind`] instead of re-parsing payloads on every visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    source: String,
    tokens: Vec<Token>,
    /// One slot per token, `Some` exactly for test tokens.
    tests: Vec<Option<TestKind>>,
}

impl CompiledQuery {
    /// Compiles `query`, reporting why it was rejected.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        Self::parse_at(query, 0)
    }

    /// Compiles a query sitting `depth` step tests below the top level.
    fn parse_at(query: &str, depth: usize) -> Result<Self, QueryError> {
        let body = tokenize(query)?;
        if body.is_empty() {
            return Err(QueryError::Empty);
        }

        let mut tokens = Vec::with_capacity(body.len() + 1);
        tokens.push(Token::root());
        tokens.extend(body);

        let tests = validate_sequence(&tokens, depth)?;
        Ok(Self {
            source: query.to_string(),
            tokens,
            tests,
        })
    }

    /// The query text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All tokens, starting with the synthetic root.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The resolved test at token `index`, if that token is a test.
    pub fn test_kind(&self, index: usize) -> Option<&TestKind> {
        self.tests.get(index).and_then(Option::as_ref)
    }

    /// Iterates over the resolved tests in query order.
    pub fn tests(&self) -> impl Iterator<Item = &TestKind> {
        self.tests.iter().flatten()
    }

    /// A fresh cursor positioned on the root token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(&self.tokens)
    }
}

impl FromStr for CompiledQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compiles `query`, returning `None` if it is not a valid query.
pub fn compile(query: &str) -> Option<CompiledQuery> {
    match CompiledQuery::parse(query) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            log::debug!("Rejected query '{}': {}", query, e);
            None
        }
    }
}

/// Checks whether `query` compiles.
pub fn is_valid(query: &str) -> bool {
    CompiledQuery::parse(query).is_ok()
}

/// Resolves the meaning of a test token. Returns `None` for tokens that are not
/// tests and for payloads that match no known test form.
pub fn classify(token: &Token) -> Option<TestKind> {
    if !token.is(TokenKind::Test) {
        return None;
    }
    resolve_test(token.value(), 0).ok()
}

/// Classifies a test payload found `depth` levels below the top-level query.
fn resolve_test(payload: &str, depth: usize) -> Result<TestKind, QueryError> {
    if let Some(value) = text_equals_value(payload) {
        return Ok(TestKind::TextEquals(value));
    }
    if let Some(value) = contains_value(payload) {
        return Ok(TestKind::Contains(value));
    }
    if let Some((name, value)) = attribute_test(payload) {
        return Ok(TestKind::Attribute { name, value });
    }

    if depth >= MAX_NESTING {
        return Err(QueryError::TooDeep(MAX_NESTING));
    }
    // A nested path is only legal where it would be a valid query on its own.
    match CompiledQuery::parse_at(&format!("{AXIS_CHILD}{payload}"), depth + 1) {
        Ok(nested) => Ok(TestKind::Step(Box::new(nested))),
        Err(e @ QueryError::TooDeep(_)) => Err(e),
        Err(_) => Err(QueryError::InvalidTest(payload.to_string())),
    }
}

// --- Test Payload Forms ---

/// `text()="value"`
fn text_equals_value(payload: &str) -> Option<String> {
    let (left, right) = payload.split_once('=')?;
    if left != TEXT {
        return None;
    }
    unquote(right).map(str::to_string)
}

/// `contains(text(),"value")`. Only the leading keyword is stripped, so a
/// `contains` inside the quoted value survives.
fn contains_value(payload: &str) -> Option<String> {
    let args = payload.strip_prefix(CONTAINS)?;
    let inner = args.strip_prefix('(')?.strip_suffix(')')?;
    let (left, right) = inner.split_once(',')?;
    if left.trim() != TEXT {
        return None;
    }
    unquote(right.trim()).map(str::to_string)
}

/// `@name="value"`
fn attribute_test(payload: &str) -> Option<(String, String)> {
    let rest = payload.strip_prefix('@')?;
    let (name, right) = rest.split_once('=')?;
    let value = unquote(right)?;
    Some((name.to_string(), value.to_string()))
}

/// Strips the surrounding double quotes of a string literal.
fn unquote(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    s.strip_prefix('"')?.strip_suffix('"')
}

// --- Sequence Validation ---

fn invalid(position: usize, message: impl Into<String>) -> QueryError {
    QueryError::InvalidSequence {
        position,
        message: message.into(),
    }
}

/// Checks the grammar of `tokens` (root included) and classifies every test.
fn validate_sequence(
    tokens: &[Token],
    depth: usize,
) -> Result<Vec<Option<TestKind>>, QueryError> {
    let mut tests = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| tokens.get(p)).map(Token::kind);
        let next = tokens.get(i + 1).map(Token::kind);

        let test = match token.kind() {
            TokenKind::Root => {
                if i != 0 {
                    return Err(invalid(i, "root token inside query body"));
                }
                if next != Some(TokenKind::Axis) {
                    return Err(invalid(i, "query must start with '/'"));
                }
                None
            }
            TokenKind::Axis => {
                if token.value() != AXIS_CHILD {
                    return Err(invalid(i, format!("unsupported axis '{}'", token.value())));
                }
                if next != Some(TokenKind::NodeName) {
                    return Err(invalid(i, "axis must be followed by a node name"));
                }
                None
            }
            TokenKind::NodeName => {
                if prev != Some(TokenKind::Axis) {
                    return Err(invalid(i, format!("node name '{}' must follow an axis", token.value())));
                }
                None
            }
            TokenKind::Test => {
                if !matches!(prev, Some(TokenKind::NodeName | TokenKind::Test)) {
                    return Err(invalid(i, "test must follow a node name or another test"));
                }
                Some(resolve_test(token.value(), depth)?)
            }
        };
        tests.push(test);
    }

    Ok(tests)
}
