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

//! The four applied-rule shapes recorded in `apl`, mirroring `cyk.py`'s
//! `InitSym`/`InitSpecifier`/`Pair`/`Lead` classes.

use std::fmt;
use std::rc::Rc;

use crate::rule::RuleHandle;
use crate::specifier::Specifier;
use crate::symbol::Symbol;

/// `var` is derivable from one terminal token named `terminal`.
#[derive(Debug)]
pub struct InitTerm {
    pub var: Symbol,
    pub rule: Option<RuleHandle>,
    pub terminal: String,
}

/// A specifier treated as a self-identifying nonterminal, matched directly
/// against tokens.
#[derive(Debug)]
pub struct InitSpec {
    pub spec: Specifier,
}

impl InitSpec {
    pub fn var(&self) -> Symbol {
        Symbol::Spec(self.spec.clone())
    }
}

/// Binary production `var -> lhs rhs`.
#[derive(Debug)]
pub struct Pair {
    pub var: Symbol,
    pub rule: Option<RuleHandle>,
    pub lhs: Symbol,
    pub rhs: Symbol,
}

/// Unit production recorded as a closure edge: `node` leads to `var`.
#[derive(Debug)]
pub struct Lead {
    pub var: Symbol,
    pub rule: Option<RuleHandle>,
    pub node: Symbol,
}

/// One entry of the `apl` table: which applied rule fired, and at what
/// left-side split length (`1` for unit-length cells).
#[derive(Clone)]
pub enum AppliedRule {
    InitTerm(Rc<InitTerm>),
    InitSpec(Rc<InitSpec>),
    Pair(Rc<Pair>),
    Lead(Rc<Lead>),
}

impl AppliedRule {
    /// The nonterminal/specifier/implicit this application produces.
    pub fn var(&self) -> Symbol {
        match self {
            AppliedRule::InitTerm(i) => i.var.clone(),
            AppliedRule::InitSpec(i) => i.var(),
            AppliedRule::Pair(p) => p.var.clone(),
            AppliedRule::Lead(l) => l.var.clone(),
        }
    }

    /// The user-authored rule this application traces back to, if any
    /// (implicit pairs and specifier inits have none).
    pub fn rule(&self) -> Option<&RuleHandle> {
        match self {
            AppliedRule::InitTerm(i) => i.rule.as_ref(),
            AppliedRule::InitSpec(_) => None,
            AppliedRule::Pair(p) => p.rule.as_ref(),
            AppliedRule::Lead(l) => l.rule.as_ref(),
        }
    }
}

impl fmt::Debug for AppliedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedRule::InitTerm(i) => write!(f, "InitTerm({} <- {})", i.var, i.terminal),
            AppliedRule::InitSpec(i) => write!(f, "InitSpec({})", i.spec),
            AppliedRule::Pair(p) => write!(f, "Pair({} <- {} {})", p.var, p.lhs, p.rhs),
            AppliedRule::Lead(l) => write!(f, "Lead({} leads to {})", l.node, l.var),
        }
    }
}
