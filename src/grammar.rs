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

//! The public, user-authored grammar surface.
//!
//! Mirrors `sesd`'s `Grammar` / `CompiledGrammar` split: terminals and rules
//! are built up incrementally, and the CNF artifact is derived lazily and
//! cached until the next mutation, rather than recomputed on every parse.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::cnf::{self, Cnf};
use crate::cyk;
use crate::error::GrammarError;
use crate::rule::{RhsSymbol, Rule, RuleHandle};
use crate::specifier::Specifier;
use crate::table::Table;
use crate::token::Token;

/// One right-hand-side element as accepted by [`Grammar::add_rule`]: a
/// symbol name (terminal or nonterminal) or a specifier value.
pub trait IntoRhsSymbol {
    fn into_rhs_symbol(self) -> RhsSymbol;
}

impl IntoRhsSymbol for &str {
    fn into_rhs_symbol(self) -> RhsSymbol {
        RhsSymbol::Name(self.to_string())
    }
}

impl IntoRhsSymbol for String {
    fn into_rhs_symbol(self) -> RhsSymbol {
        RhsSymbol::Name(self)
    }
}

impl IntoRhsSymbol for Specifier {
    fn into_rhs_symbol(self) -> RhsSymbol {
        RhsSymbol::Spec(self)
    }
}

impl IntoRhsSymbol for RhsSymbol {
    fn into_rhs_symbol(self) -> RhsSymbol {
        self
    }
}

/// A user-authored grammar: a terminal set plus a rule set.
///
/// `parse` is the only operation that compiles to CNF; the compiled form is
/// cached behind a `RefCell` and invalidated by any later call to
/// `add_terminal`, `add_rule` or `union` (§5: mutating a grammar after its
/// first parse invalidates the cached CNF).
pub struct Grammar {
    terminals: HashSet<String>,
    rules: Vec<RuleHandle>,
    cnf: RefCell<Option<Rc<Cnf>>>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar {
            terminals: HashSet::new(),
            rules: Vec::new(),
            cnf: RefCell::new(None),
        }
    }

    /// Declare a terminal symbol. No-op if already declared.
    pub fn add_terminal(&mut self, name: impl Into<String>) {
        self.terminals.insert(name.into());
        self.invalidate();
    }

    /// Add a rule `head -> rhs...`. `rhs` elements are either symbol names
    /// (terminal or nonterminal) or [`Specifier`] values. An empty `rhs` is
    /// rejected, since a CNF decomposition has nothing to binarize or
    /// terminate on.
    pub fn add_rule<S: IntoRhsSymbol>(
        &mut self,
        head: impl Into<String>,
        rhs: Vec<S>,
    ) -> Result<RuleHandle, GrammarError> {
        if rhs.is_empty() {
            return Err(GrammarError::UnknownSymbol(
                "rule rhs must not be empty".to_string(),
            ));
        }
        let rule = Rule {
            head: head.into(),
            rhs: rhs.into_iter().map(IntoRhsSymbol::into_rhs_symbol).collect(),
        };
        let handle = RuleHandle::new(rule);
        self.rules.push(handle.clone());
        self.invalidate();
        Ok(handle)
    }

    /// Merge another grammar's terminals and rules into this one.
    pub fn union(&mut self, other: &Grammar) {
        self.terminals.extend(other.terminals.iter().cloned());
        self.rules.extend(other.rules.iter().cloned());
        self.invalidate();
    }

    fn invalidate(&mut self) {
        *self.cnf.borrow_mut() = None;
    }

    /// Compile to CNF if the cache is stale, returning the shared artifact.
    fn compiled(&self) -> Result<Rc<Cnf>, GrammarError> {
        if let Some(cnf) = self.cnf.borrow().as_ref() {
            return Ok(Rc::clone(cnf));
        }
        let built = Rc::new(cnf::build(&self.rules, &self.terminals)?);
        *self.cnf.borrow_mut() = Rc::clone(&built);
        Ok(built)
    }

    /// Parse a token sequence, compiling to CNF first if needed.
    pub fn parse<T: Token>(&self, tokens: Vec<T>) -> Result<Table<T>, GrammarError> {
        let cnf = self.compiled()?;
        let tables = cyk::recognize(&cnf, tokens);
        Ok(Table::new(tables))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::SimpleToken;
    use crate::token::TokenValue;

    fn tok(type_name: &str) -> SimpleToken {
        SimpleToken::new(type_name, TokenValue::Str(type_name.to_string()), true, 0, 1)
    }

    #[test]
    fn empty_rhs_is_rejected() {
        let mut g = Grammar::new();
        g.add_terminal("sym");
        let err = g.add_rule::<&str>("X", vec![]).unwrap_err();
        assert!(matches!(err, GrammarError::UnknownSymbol(_)));
    }

    #[test]
    fn union_merges_terminals_and_rules() {
        let mut a = Grammar::new();
        a.add_terminal("sym");
        a.add_rule("term", vec!["sym"]).unwrap();

        let mut b = Grammar::new();
        b.add_terminal("num");
        b.add_rule("digit", vec!["num"]).unwrap();

        a.union(&b);
        let table = a.parse(vec![tok("num")]).unwrap();
        assert!(table.len() >= 1);
    }

    #[test]
    fn cnf_cache_is_invalidated_by_mutation() {
        let mut g = Grammar::new();
        g.add_terminal("sym");
        g.add_rule("term", vec!["sym"]).unwrap();
        let _ = g.parse(vec![tok("sym")]).unwrap();

        g.add_rule("other", vec!["sym"]).unwrap();
        let table = g.parse(vec![tok("sym")]).unwrap();
        // Both `term` and `other` must now be reachable from `sym`.
        assert!(table.len() >= 2);
    }
}
