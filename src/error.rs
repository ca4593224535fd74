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

//! Error types for grammar construction, traversal and result enumeration.

use std::fmt;

/// Errors raised while building or compiling a [`Grammar`](crate::Grammar).
///
/// All of these are detected once, at CNF-build time, and are fatal: there is
/// no partial recovery from a malformed grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarError {
    /// A symbol is declared as a terminal and also appears as a rule head.
    TerminalNonterminalClash(String),

    /// A right-hand-side symbol is neither a known terminal, a known
    /// nonterminal, nor a valid specifier.
    UnknownSymbol(String),

    /// A unit rule `X -> X` was found; such a rule would make the leads
    /// closure loop forever and can never be satisfied regardless.
    DegenerateUnitRule(String),

    /// A specifier rejected the grammar's terminal set during its own
    /// `validate` check (e.g. `Near`/`Far` wrapping an unknown terminal).
    SpecifierValidation(String),

    /// Grammar exceeds the internal symbol-id space (`Implicit` ids and
    /// rule counts are capped the same way `sesd`'s `SymbolId` is).
    TooManySymbols(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::TerminalNonterminalClash(name) => write!(
                f,
                "{} is both a terminal and a nonterminal, remove the rules or the terminal of this name",
                name
            ),
            GrammarError::UnknownSymbol(name) => write!(
                f,
                "{} is neither a terminal, a nonterminal nor a valid specifier",
                name
            ),
            GrammarError::DegenerateUnitRule(head) => {
                write!(f, "degenerate rule {} -> {}", head, head)
            }
            GrammarError::SpecifierValidation(msg) => write!(f, "specifier validation failed: {}", msg),
            GrammarError::TooManySymbols(what) => write!(f, "too many symbols to compile: {}", what),
        }
    }
}

impl std::error::Error for GrammarError {}

/// Raised by [`Result::traverse`](crate::ForestResult::traverse) when called
/// on a result whose ambiguity is greater than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalError {
    /// The ambiguity (product of per-segment counts) that made traversal
    /// impossible to resolve unambiguously.
    pub ambiguity: u64,
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ambiguous result (ambiguity = {}) does not produce an unambiguous traversal",
            self.ambiguity
        )
    }
}

impl std::error::Error for TraversalError {}

/// Raised by [`Table::just`](crate::Table::just) when asked for a cover size
/// below 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractError {
    pub requested_size: i64,
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "just(size) requires size >= 1, got {}",
            self.requested_size
        )
    }
}

impl std::error::Error for ContractError {}
