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

//! `cykparse`: a general context-free grammar parser built on CYK.
//!
//! A [`Grammar`] is built up from terminals, rules and [`Specifier`]
//! matchers, compiled to Chomsky Normal Form on first [`Grammar::parse`],
//! and parsed against a token sequence into a packed [`Table`] of every
//! derivation. [`Table::just`] and iteration enumerate [`ForestResult`]
//! covers; [`ForestResult::traverse`] reconstructs a concrete tree for
//! unambiguous covers, and [`ForestResult::explain`] lists the rules that
//! could have derived each segment. The [`diagnostics`] module adds
//! shortest-interval and relevant-ruleset reporting for ungrammatical or
//! ambiguous input.

mod applied;
mod cnf;
mod cyk;
pub mod diagnostics;
mod error;
mod grammar;
mod result;
mod rule;
mod smallmap;
mod specifier;
mod symbol;
mod table;
mod token;
pub mod tokenizer;

pub use applied::{InitSpec, InitTerm, Lead, Pair};
pub use cnf::Cnf;
pub use error::{ContractError, GrammarError, TraversalError};
pub use grammar::{Grammar, IntoRhsSymbol};
pub use result::{Explanation, ForestResult, TreeValue};
pub use rule::{RhsSymbol, Rule, RuleHandle};
pub use specifier::{Inner, Specifier};
pub use symbol::{ImplicitId, Symbol};
pub use table::Table;
pub use token::{Token, TokenValue};
