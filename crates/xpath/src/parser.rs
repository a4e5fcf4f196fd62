//! The tokenizer for the query language.
//!
//! Scanning is driven by the first character of the remaining input: `/` is an
//! axis, `[` opens a test that runs to its matching `]`, anything else is a
//! node name running up to the next `[` or `/`.

use crate::error::QueryError;
use crate::token::Token;
use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map, recognize},
    sequence::pair,
};

// --- Main Public Tokenizer ---

/// Splits a raw query into tokens. The synthetic root token is not emitted.
pub fn tokenize(query: &str) -> Result<Vec<Token>, QueryError> {
    let mut tokens = Vec::new();
    let mut rest = query;

    while !rest.is_empty() {
        if let Ok((remaining, token)) = axis(rest) {
            tokens.push(token);
            rest = remaining;
            continue;
        }

        if rest.starts_with('[') {
            let close = matching_bracket(rest)
                .ok_or_else(|| QueryError::UnbalancedBrackets(query.to_string()))?;
            let body = normalize_test(rest[1..close].trim());
            rest = &rest[close + 1..];
            // `[]` carries no predicate
            if !body.is_empty() {
                tokens.push(Token::test(body));
            }
            continue;
        }

        let (name, remaining) = rest.split_at(name_end(rest));
        let name = name.trim();
        if !is_valid_identifier(name) {
            return Err(QueryError::InvalidIdentifier(name.to_string()));
        }
        tokens.push(Token::node_name(name));
        rest = remaining;
    }

    Ok(tokens)
}

/// Checks whether `name` is an acceptable element name: an ASCII letter or
/// underscore followed by letters, digits, `_`, `-` or `.`, and not starting
/// with `xml` in any case.
pub fn is_valid_identifier(name: &str) -> bool {
    let reserved = name
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml"));
    !reserved && all_consuming(identifier).parse(name).is_ok()
}

// --- Combinators & Helpers ---

fn axis(input: &str) -> IResult<&str, Token> {
    map(char('/'), |_| Token::axis()).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(1, 1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')),
    ))
    .parse(input)
}

/// Finds the byte index of the `]` closing the `[` at the start of `input`.
/// Brackets inside double-quoted strings do not count.
fn matching_bracket(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut prev = None;

    for (i, c) in input.char_indices() {
        match c {
            '"' if prev != Some('\\') => in_quotes = !in_quotes,
            '[' if !in_quotes => depth += 1,
            ']' if !in_quotes => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        prev = Some(c);
    }
    None
}

/// Removes whitespace around the `=` of `name = "value"` style tests. Only an
/// `=` that appears before the first quote is considered.
fn normalize_test(body: &str) -> String {
    match (body.find('='), body.find('"')) {
        (Some(eq), Some(quote)) if eq < quote => {
            format!("{}={}", body[..eq].trim(), body[eq + 1..].trim())
        }
        _ => body.to_string(),
    }
}

/// The end of a node name: the nearest `[` or `/`, or the end of input.
fn name_end(input: &str) -> usize {
    match (input.find('['), input.find('/')) {
        (Some(bracket), Some(slash)) => bracket.min(slash),
        (Some(idx), None) | (None, Some(idx)) => idx,
        (None, None) => input.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_path() {
        let tokens = tokenize("/a/b/c").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::axis(),
                Token::node_name("a"),
                Token::axis(),
                Token::node_name("b"),
                Token::axis(),
                Token::node_name("c"),
            ]
        );
    }

    #[test]
    fn test_tokenize_attribute_test() {
        let tokens = tokenize("/abc[@att=\"test\"]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::axis(),
                Token::node_name("abc"),
                Token::test("@att=\"test\""),
            ]
        );
    }

    #[test]
    fn test_tokenize_normalizes_whitespace_around_equals() {
        let tokens = tokenize("/f[  @att =  \"a b\" ][bar ]").unwrap();
        assert_eq!(tokens[2], Token::test("@att=\"a b\""));
        assert_eq!(tokens[3], Token::test("bar"));
    }

    #[test]
    fn test_tokenize_keeps_equals_inside_quotes() {
        let tokens = tokenize("/f[text()=\"a = b\"]").unwrap();
        assert_eq!(tokens[2], Token::test("text()=\"a = b\""));
    }

    #[test]
    fn test_tokenize_nested_brackets() {
        let tokens = tokenize("/d/e/f[foo[text()=\"x\"]][bar]").unwrap();
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[6], Token::test("foo[text()=\"x\"]"));
        assert_eq!(tokens[7], Token::test("bar"));
    }

    #[test]
    fn test_tokenize_ignores_brackets_in_quotes() {
        let tokens = tokenize("/b[foo[text()=\"#$(/][]\"]]").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::test("foo[text()=\"#$(/][]\"]"));
    }

    #[test]
    fn test_tokenize_escaped_quote_does_not_close_string() {
        let tokens = tokenize("/b[text()=\"say \\\"]\\\" now\"]").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::test("text()=\"say \\\"]\\\" now\""));
    }

    #[test]
    fn test_tokenize_skips_empty_test() {
        let tokens = tokenize("/a[ ]/b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::axis(),
                Token::node_name("a"),
                Token::axis(),
                Token::node_name("b"),
            ]
        );
    }

    #[test]
    fn test_tokenize_trims_names() {
        let tokens = tokenize("/a /b/c [text()=\"abc\"]").unwrap();
        assert_eq!(tokens[1], Token::node_name("a"));
        assert_eq!(tokens[5], Token::node_name("c"));
        assert_eq!(tokens[6], Token::test("text()=\"abc\""));
    }

    #[test]
    fn test_tokenize_unbalanced_brackets() {
        assert_eq!(
            tokenize("/a[b"),
            Err(QueryError::UnbalancedBrackets("/a[b".to_string()))
        );
        assert!(tokenize("/a[text()=\"]\"").is_err());
    }

    #[test]
    fn test_tokenize_invalid_identifier() {
        assert_eq!(
            tokenize("/a b"),
            Err(QueryError::InvalidIdentifier("a b".to_string()))
        );
        assert!(tokenize("/a]").is_err());
    }

    #[test]
    fn test_tokenize_does_not_require_leading_axis() {
        let tokens = tokenize("test/to").unwrap();
        assert_eq!(tokens[0], Token::node_name("test"));
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("abc"));
        assert!(is_valid_identifier("_abc"));
        assert!(is_valid_identifier("a-b.c_9"));
        assert!(is_valid_identifier("xm"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("xml_abc"));
        assert!(!is_valid_identifier("xMLabc"));
        assert!(!is_valid_identifier("test,asd"));
        assert!(!is_valid_identifier("test()=\"asd\""));
        assert!(!is_valid_identifier("9lives"));
        assert!(!is_valid_identifier("-dash"));
        assert!(!is_valid_identifier("a|b"));
        assert!(!is_valid_identifier("caf\u{e9}"));
    }
}
