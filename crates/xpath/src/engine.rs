//! The matching engine: decides whether a document satisfies a compiled query.
//!
//! Matching is a recursive descent over the token sequence that searches the
//! document tree with backtracking. Each path segment after an axis is tried
//! against every child in document order until one succeeds; the cursor
//! position is saved before the search and restored before every attempt.

use crate::compiler::{CompiledQuery, classify};
use crate::cursor::TokenCursor;
use crate::datasource::DocumentNode;
use crate::token::{AXIS_CHILD, TestKind, TokenKind};

/// Matches `query` against the document rooted at `node`.
pub fn evaluate<'a, N>(node: N, query: &CompiledQuery) -> bool
where
    N: DocumentNode<'a>,
{
    let mut it = query.cursor();
    let matched = match_token(node, query, &mut it);
    log::trace!("Query '{}' matched: {}", query.source(), matched);
    matched
}

/// One step of the descent, driven by the token under the cursor.
///
/// The cursor normally ranges over `query.tokens()`; with any other cursor the
/// tests it visits are classified afresh instead of read from `query`. On return the cursor has been
/// moved past whatever this step consumed; callers that need to retry restore
/// it themselves.
pub fn match_token<'a, N>(node: N, query: &CompiledQuery, it: &mut TokenCursor<'_>) -> bool
where
    N: DocumentNode<'a>,
{
    let Some(curr) = it.current() else {
        return true;
    };

    match curr.kind() {
        // query -> axis step
        TokenKind::Root => match_axis_step(node, query, it),
        // axis -> /
        TokenKind::Axis => {
            it.advance(1);
            curr.value() == AXIS_CHILD
        }
        // step -> nodename test* (axis step)?
        TokenKind::NodeName => {
            if node.name() != Some(curr.value()) {
                return false;
            }
            it.advance(1);

            while it.current().is_some_and(|t| t.is(TokenKind::Test)) {
                if !match_test(node, query, it) {
                    return false;
                }
                it.advance(1);
            }

            match it.current() {
                None => true,
                Some(next) if next.is(TokenKind::Axis) => {
                    it.retreat(1);
                    match_axis_step(node, query, it)
                }
                Some(_) => false,
            }
        }
        // a test is only meaningful right after a node name
        TokenKind::Test => false,
    }
}

/// Consumes the axis after the current position, then tries the following
/// name against each child of `node`.
fn match_axis_step<'a, N>(node: N, query: &CompiledQuery, it: &mut TokenCursor<'_>) -> bool
where
    N: DocumentNode<'a>,
{
    let start = it.position();
    it.advance(1);
    if !match_token(node, query, it) {
        return false;
    }

    for child in node.children() {
        it.seek(start);
        it.advance(2);
        if match_token(child, query, it) {
            return true;
        }
    }
    false
}

/// Evaluates the test token under the cursor against `node`.
fn match_test<'a, N>(node: N, query: &CompiledQuery, it: &TokenCursor<'_>) -> bool
where
    N: DocumentNode<'a>,
{
    let Some(token) = it.current() else {
        return false;
    };

    // The cached kind only applies when the cursor walks this query's tokens.
    let cached = usize::try_from(it.position())
        .ok()
        .filter(|&i| query.tokens().get(i) == Some(token))
        .and_then(|i| query.test_kind(i));

    let resolved;
    let kind = match cached {
        Some(kind) => kind,
        None => match classify(token) {
            Some(kind) => {
                resolved = kind;
                &resolved
            }
            None => return false,
        },
    };

    match kind {
        TestKind::Attribute { name, value } => node.attribute(name) == Some(value.as_str()),
        TestKind::TextEquals(expected) => node.first_text() == Some(expected.as_str()),
        TestKind::Contains(needle) => node
            .first_text()
            .is_some_and(|text| text.contains(needle.as_str())),
        // the nested path starts at `node` and searches its children
        TestKind::Step(nested) => {
            let mut nested_it = nested.cursor();
            match_token(node, nested, &mut nested_it)
        }
    }
}
