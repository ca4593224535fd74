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

//! Grammar rules, in their user-authored (pre-CNF) form.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::specifier::Specifier;

/// One right-hand-side element: a symbol name (terminal or nonterminal) or
/// a specifier value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RhsSymbol {
    Name(String),
    Spec(Specifier),
}

impl fmt::Display for RhsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhsSymbol::Name(n) => write!(f, "{}", n),
            RhsSymbol::Spec(s) => write!(f, "{}", s),
        }
    }
}

/// A production `head -> rhs[0] rhs[1] ...`, as authored through
/// [`Grammar::add_rule`](crate::Grammar::add_rule).
#[derive(Debug)]
pub struct Rule {
    pub head: String,
    pub rhs: Vec<RhsSymbol>,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-", self.head)?;
        for s in &self.rhs {
            write!(f, " {}", s)?;
        }
        Ok(())
    }
}

/// A handle to a rule, compared and hashed by reference identity rather
/// than by structural equality (two textually-identical rules added twice
/// are two distinct rules, matching §4.A: "Rules carry identity by handle,
/// not by structural equality").
#[derive(Clone, Debug)]
pub struct RuleHandle(pub Rc<Rule>);

impl RuleHandle {
    pub fn new(rule: Rule) -> Self {
        RuleHandle(Rc::new(rule))
    }
}

impl PartialEq for RuleHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RuleHandle {}

impl Hash for RuleHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state)
    }
}

impl std::ops::Deref for RuleHandle {
    type Target = Rule;
    fn deref(&self) -> &Rule {
        &self.0
    }
}

impl fmt::Display for RuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
