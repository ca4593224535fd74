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

//! The shared key type for table cells and leads-closure rows.
//!
//! `sesd` identifies symbols by a small integer `SymbolId` resolved through
//! a compiled table. CNF here instead mixes four genuinely different key
//! shapes (terminal name, nonterminal name, specifier value, anonymous
//! implicit), so a tagged sum type is the honest representation (see
//! Design Notes: "Dynamic dispatch over symbols and rule forms").

use std::fmt;

use crate::specifier::Specifier;

/// Id of an anonymous nonterminal introduced by right-binarization.
pub type ImplicitId = u32;

/// A key that can appear in a `tab`/`apl` cell: a terminal name, a
/// nonterminal name, a specifier value (self-identifying as a nonterminal),
/// or an implicit introduced by binarization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
    Spec(Specifier),
    Implicit(ImplicitId),
}

impl Symbol {
    /// True for any key that is not user-visible (binarization artifact).
    pub fn is_implicit(&self) -> bool {
        matches!(self, Symbol::Implicit(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(n) => write!(f, "{}", n),
            Symbol::Nonterminal(n) => write!(f, "{}", n),
            Symbol::Spec(s) => write!(f, "{}", s),
            Symbol::Implicit(id) => write!(f, "imp{}", id),
        }
    }
}
