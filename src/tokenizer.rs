/*
    MIT License

    Copyright (c) 2020 Lars Krueger <lars_e_krueger@gmx.de>

    Permission is hereby granted, free of charge, to any person obtaining a copy
    of this software and associated documentation files (the "Software"), to deal
    in the Software without restriction, including without limitation the rights
    to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
    copies of the Software, and to permit persons to whom the Software is
    furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in all
    copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
    OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
    SOFTWARE.
*/

//! A reference tokenizer, sketched for the demo binary and for tests.
//!
//! Not part of the core contract: the recognizer consumes anything
//! implementing [`Token`]. Ported from `tokenize()` in
//! `examples/original_source/grammarboy/__init__.py` — alphabetic runs
//! become `sym` (or `keyword` if the run matches a caller-supplied keyword
//! set), digit runs become `num` carrying their parsed value, whitespace is
//! swallowed without emitting a token but suppresses `near` on the token
//! that follows it, and any other single character becomes `unk`.

use crate::token::{Token, TokenValue};

/// A concrete token produced by [`tokenize`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleToken {
    type_name: String,
    value: TokenValue,
    near: bool,
    position: usize,
    length: usize,
}

impl SimpleToken {
    pub fn new(
        type_name: impl Into<String>,
        value: TokenValue,
        near: bool,
        position: usize,
        length: usize,
    ) -> Self {
        SimpleToken {
            type_name: type_name.into(),
            value,
            near,
            position,
            length,
        }
    }
}

impl Token for SimpleToken {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn value(&self) -> &TokenValue {
        &self.value
    }

    fn is_near(&self) -> bool {
        self.near
    }

    fn position(&self) -> usize {
        self.position
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Tokenize `text`, classifying alphabetic runs as `sym` (or `keyword` if
/// the run's text is in `keywords`), digit runs as `num`, and any other
/// single non-whitespace character as `unk`. Positions are encoded as
/// `line * 1000 + column`; a run of whitespace resets `near` on the
/// following token without producing a token of its own.
pub fn tokenize(text: &str, keywords: &[&str]) -> Vec<SimpleToken> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    let mut line = 0usize;
    let mut column = 0usize;
    let mut near = false;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' {
            line += 1;
            column = 0;
            i += 1;
            near = false;
            continue;
        }
        if c.is_whitespace() {
            column += 1;
            i += 1;
            near = false;
            continue;
        }

        let start_col = column;
        let start_line = line;
        let position = start_line * 1000 + start_col;

        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
                column += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let type_name = if keywords.contains(&text.as_str()) {
                "keyword"
            } else {
                "sym"
            };
            let length = i - start;
            tokens.push(SimpleToken::new(
                type_name,
                TokenValue::Str(text),
                near,
                position,
                length,
            ));
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
                column += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let value: i64 = text.parse().unwrap_or(0);
            let length = i - start;
            tokens.push(SimpleToken::new(
                "num",
                TokenValue::Int(value),
                near,
                position,
                length,
            ));
        } else {
            i += 1;
            column += 1;
            tokens.push(SimpleToken::new(
                "unk",
                TokenValue::Str(c.to_string()),
                near,
                position,
                1,
            ));
        }
        near = true;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_sym_keyword_num_unk() {
        let toks = tokenize("hello plus 12 !", &["plus"]);
        let names: Vec<&str> = toks.iter().map(|t| t.type_name()).collect();
        assert_eq!(names, vec!["sym", "keyword", "num", "unk"]);
        assert_eq!(*toks[2].value(), TokenValue::Int(12));
    }

    #[test]
    fn whitespace_suppresses_near_on_next_token() {
        let toks = tokenize("a b", &[]);
        assert!(!toks[0].is_near());
        assert!(!toks[1].is_near());
    }

    #[test]
    fn adjacent_tokens_are_near() {
        let toks = tokenize("a!b", &[]);
        assert!(!toks[0].is_near());
        assert!(toks[1].is_near());
        assert!(toks[2].is_near());
    }

    #[test]
    fn newline_resets_column_and_bumps_line() {
        let toks = tokenize("a\nb", &[]);
        assert_eq!(toks[0].position(), 0);
        assert_eq!(toks[1].position(), 1000);
    }
}
