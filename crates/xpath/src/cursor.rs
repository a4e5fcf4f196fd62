//! A movable position over a token sequence.
//!
//! The matcher backtracks by saving [`TokenCursor::position`] before trying a
//! child and restoring it with [`TokenCursor::seek`] afterwards. Moving does
//! not clamp, so the position may leave the valid range; reads then return
//! `None` until the cursor is moved back.

use crate::token::Token;

#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: isize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn get(&self, index: isize) -> Option<&'t Token> {
        usize::try_from(index).ok().and_then(|i| self.tokens.get(i))
    }

    /// The token under the cursor.
    pub fn current(&self) -> Option<&'t Token> {
        self.get(self.pos)
    }

    /// The token `offset` places ahead, without moving.
    pub fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.get(self.pos.saturating_add_unsigned(offset))
    }

    /// The token `offset` places behind, without moving.
    pub fn peek_back(&self, offset: usize) -> Option<&'t Token> {
        self.get(self.pos.saturating_sub_unsigned(offset))
    }

    pub fn has_current(&self) -> bool {
        self.current().is_some()
    }

    pub fn has_next(&self, offset: usize) -> bool {
        self.peek(offset).is_some()
    }

    pub fn has_prev(&self, offset: usize) -> bool {
        self.peek_back(offset).is_some()
    }

    pub fn advance(&mut self, steps: usize) {
        self.pos = self.pos.saturating_add_unsigned(steps);
    }

    pub fn retreat(&mut self, steps: usize) {
        self.pos = self.pos.saturating_sub_unsigned(steps);
    }

    pub fn position(&self) -> isize {
        self.pos
    }

    pub fn seek(&mut self, position: isize) {
        self.pos = position;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
