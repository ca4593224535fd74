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

//! Token contract consumed by the core.
//!
//! The core never constructs tokens itself (aside from the demo tokenizer in
//! [`crate::tokenizer`]); it only reads what `Specifier::matches` demands.

/// The value carried by a token, read by specifiers such as `Keyword`.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// A symbolic or keyword value, e.g. the literal text `"plus"`.
    Str(String),
    /// A numeric value, e.g. the parsed value of a `num` token.
    Int(i64),
    /// No value carried beyond the token's type.
    None,
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Str(s) => write!(f, "{}", s),
            TokenValue::Int(i) => write!(f, "{}", i),
            TokenValue::None => write!(f, ""),
        }
    }
}

/// A single input token, as consumed by the recognizer and by specifiers.
///
/// `type_name` is the terminal name matched by `InitTerm`/rule RHS symbols.
/// `near`, `position` and `length` are auxiliary fields used only by
/// specifiers (`Near`/`Far`) and by diagnostics (interval visualization);
/// the core recognizer itself only ever reads `type_name` and `value`.
pub trait Token: Clone {
    /// The terminal name this token was classified as.
    fn type_name(&self) -> &str;

    /// The token's value, read by value-sensitive specifiers like `Keyword`.
    fn value(&self) -> &TokenValue;

    /// Whether this token immediately follows its predecessor with no
    /// intervening whitespace. Used by the `Near`/`Far` specifiers.
    fn is_near(&self) -> bool;

    /// Encoded source position (`line * 1000 + column` for the reference
    /// tokenizer). Used only by diagnostics.
    fn position(&self) -> usize;

    /// Length, in source characters, of the token's text. Used only by
    /// diagnostics.
    fn length(&self) -> usize;
}
