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

//! Specifiers: extensible per-token matchers treated as first-class RHS symbols.
//!
//! Mirrors `sesd`'s `Matcher<T>` trait (a value that knows how to accept or
//! reject a single token) but is a closed enum rather than an open trait,
//! per the reference implementation's `near`/`far`/`keyword` classes in
//! `grammarboy/__init__.py`: behaviorally open (anyone can call `matches`),
//! lexically closed to the three variants a given build supports.

use std::collections::HashSet;
use std::fmt;

use crate::error::GrammarError;
use crate::token::{Token, TokenValue};

/// The argument of a `Near`/`Far` specifier: either a terminal name or
/// another specifier, nested arbitrarily.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Inner {
    Terminal(String),
    Specifier(Box<Specifier>),
}

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inner::Terminal(t) => write!(f, "{}", t),
            Inner::Specifier(s) => write!(f, "{}", s),
        }
    }
}

/// A token matcher attached as an RHS symbol in a grammar rule.
///
/// `Keyword(value)` matches any token whose value equals `value`, regardless
/// of type. `Near(inner)`/`Far(inner)` match `inner` but additionally
/// require/forbid that the token immediately follow its predecessor (see
/// [`Token::is_near`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Specifier {
    Keyword(String),
    Near(Inner),
    Far(Inner),
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Keyword(v) => write!(f, "keyword({})", v),
            Specifier::Near(i) => write!(f, "near({})", i),
            Specifier::Far(i) => write!(f, "far({})", i),
        }
    }
}

impl Specifier {
    /// Match this specifier against a single token.
    ///
    /// `Near`/`Far` wrapping a terminal test adjacency/separation against
    /// `token.near()` directly. `Near` wrapping another specifier instead
    /// requires separation, not adjacency, matching the reference
    /// `near.match`'s nested-specifier branch (`not token.near`) rather than
    /// its own plain-terminal branch.
    pub fn matches<T: Token>(&self, token: &T) -> bool {
        match self {
            Specifier::Keyword(v) => *token.value() == TokenValue::Str(v.clone()),
            Specifier::Near(Inner::Terminal(name)) => token.is_near() && token.type_name() == name,
            Specifier::Near(Inner::Specifier(spec)) => !token.is_near() && spec.matches(token),
            Specifier::Far(Inner::Terminal(name)) => !token.is_near() && token.type_name() == name,
            Specifier::Far(Inner::Specifier(spec)) => !token.is_near() && spec.matches(token),
        }
    }

    /// Check that this specifier (and any nested specifier/terminal it
    /// wraps) refers only to known terminals.
    pub fn validate(&self, terminals: &HashSet<String>) -> Result<(), GrammarError> {
        match self {
            Specifier::Keyword(_) => Ok(()),
            Specifier::Near(inner) | Specifier::Far(inner) => validate_inner(inner, terminals),
        }
    }
}

fn validate_inner(inner: &Inner, terminals: &HashSet<String>) -> Result<(), GrammarError> {
    match inner {
        Inner::Terminal(name) => {
            if terminals.contains(name) {
                Ok(())
            } else {
                Err(GrammarError::SpecifierValidation(format!(
                    "{} is not a known terminal",
                    name
                )))
            }
        }
        Inner::Specifier(spec) => spec.validate(terminals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::SimpleToken;

    #[test]
    fn keyword_matches_value_not_type() {
        let spec = Specifier::Keyword("plus".to_string());
        let tok = SimpleToken::new("sym", TokenValue::Str("plus".to_string()), true, 0, 4);
        assert!(spec.matches(&tok));
        let tok2 = SimpleToken::new("keyword", TokenValue::Str("plus".to_string()), true, 0, 4);
        assert!(spec.matches(&tok2));
        let tok3 = SimpleToken::new("sym", TokenValue::Str("minus".to_string()), true, 0, 5);
        assert!(!spec.matches(&tok3));
    }

    #[test]
    fn near_requires_adjacency() {
        let spec = Specifier::Near(Inner::Terminal("sym".to_string()));
        let adjacent = SimpleToken::new("sym", TokenValue::None, true, 0, 1);
        let separated = SimpleToken::new("sym", TokenValue::None, false, 0, 1);
        assert!(spec.matches(&adjacent));
        assert!(!spec.matches(&separated));
    }

    #[test]
    fn far_requires_separation() {
        let spec = Specifier::Far(Inner::Terminal("sym".to_string()));
        let adjacent = SimpleToken::new("sym", TokenValue::None, true, 0, 1);
        let separated = SimpleToken::new("sym", TokenValue::None, false, 0, 1);
        assert!(!spec.matches(&adjacent));
        assert!(spec.matches(&separated));
    }

    #[test]
    fn validate_rejects_unknown_terminal() {
        let spec = Specifier::Near(Inner::Terminal("missing".to_string()));
        let terms: HashSet<String> = ["sym".to_string()].iter().cloned().collect();
        assert!(spec.validate(&terms).is_err());
    }

    #[test]
    fn validate_recurses_into_nested_specifier() {
        let spec = Specifier::Near(Inner::Specifier(Box::new(Specifier::Far(Inner::Terminal(
            "sym".to_string(),
        )))));
        let terms: HashSet<String> = ["sym".to_string()].iter().cloned().collect();
        assert!(spec.validate(&terms).is_ok());
    }
}
