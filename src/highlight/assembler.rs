//! Token Assembler
//!
//! Cuts the original text into Literal and Annotated tokens. Concatenating
//! the output always reproduces the input byte for byte.

use super::types::{MatchSpan, Token};

/// Assemble tokens from non-overlapping winning spans.
///
/// Empty text yields no tokens. Text with no spans yields a single Literal.
pub fn assemble(text: &str, spans: &mut [MatchSpan]) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }
    if spans.is_empty() {
        return vec![Token::literal(text)];
    }

    spans.sort_by_key(|s| s.start);

    let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans.iter() {
        debug_assert!(span.start < span.end, "inverted span {:?}", span);
        debug_assert!(span.end <= text.len(), "span out of range {:?}", span);
        debug_assert!(span.start >= cursor, "overlapping span {:?}", span);

        if span.start > cursor {
            tokens.push(Token::literal(&text[cursor..span.start]));
        }
        tokens.push(Token::Annotated {
            text: text[span.start..span.end].to_string(),
            category: span.category.clone(),
            weight: span.weight,
        });
        cursor = span.end;
    }

    if cursor < text.len() {
        tokens.push(Token::literal(&text[cursor..]));
    }

    tokens
}
