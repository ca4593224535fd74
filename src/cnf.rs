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

//! Chomsky Normal Form builder.
//!
//! Decomposes a [`Grammar`](crate::Grammar)'s rules into the four applied-rule
//! shapes consumed by the CYK recognizer, right-binarizing long
//! right-hand-sides through a tail-keyed registry of [`Implicit`](Symbol::Implicit)
//! heads, and closes the unit-production ("lead") map to a fixed point.
//! Ported from `cnf()` in `examples/original_source/cyk.py`.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use log::{debug, trace};

use crate::applied::{AppliedRule, InitSpec, InitTerm, Lead, Pair};
use crate::error::GrammarError;
use crate::rule::{RhsSymbol, RuleHandle};
use crate::specifier::Specifier;
use crate::symbol::{ImplicitId, Symbol};

/// The compiled, CNF-equivalent form of a grammar. Immutable once built and
/// cached by [`Grammar`](crate::Grammar) until the grammar is mutated again.
pub struct Cnf {
    pub(crate) leads: HashMap<Symbol, Vec<Rc<Lead>>>,
    pub(crate) init_terms: Vec<Rc<InitTerm>>,
    pub(crate) init_specs: Vec<Rc<InitSpec>>,
    pub(crate) pairs: Vec<Rc<Pair>>,
    pub(crate) specifiers: HashSet<Specifier>,
}

impl Cnf {
    /// The (transitively closed) leads triggered by a given symbol, i.e.
    /// every `Lead` whose `node` is `sym`.
    pub fn leads_from(&self, sym: &Symbol) -> &[Rc<Lead>] {
        self.leads.get(sym).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build a [`Cnf`] from a rule set and terminal set. Mirrors `cnf()` in
/// `cyk.py`, including its two-pass validation (head clash, then RHS
/// symbol/specifier checks) ahead of decomposition.
pub fn build(rules: &[RuleHandle], terminals: &HashSet<String>) -> Result<Cnf, GrammarError> {
    let nonterminal_names: HashSet<String> = rules.iter().map(|r| r.head.clone()).collect();

    for rule in rules {
        if terminals.contains(&rule.head) {
            return Err(GrammarError::TerminalNonterminalClash(rule.head.clone()));
        }
    }

    let mut specifiers: HashSet<Specifier> = HashSet::new();
    let mut init_specs: Vec<Rc<InitSpec>> = Vec::new();

    for rule in rules {
        for arg in &rule.rhs {
            match arg {
                RhsSymbol::Spec(spec) => {
                    if !specifiers.contains(spec) {
                        spec.validate(terminals)?;
                        specifiers.insert(spec.clone());
                        init_specs.push(Rc::new(InitSpec { spec: spec.clone() }));
                    }
                }
                RhsSymbol::Name(name) => {
                    if !nonterminal_names.contains(name) && !terminals.contains(name) {
                        return Err(GrammarError::UnknownSymbol(name.clone()));
                    }
                }
            }
        }
    }

    let mut builder = Builder {
        terminals,
        leads: Vec::new(),
        init_terms: Vec::new(),
        pairs: Vec::new(),
        implicits: HashMap::new(),
        next_implicit: 0,
    };

    for rule in rules {
        let head = Symbol::Nonterminal(rule.head.clone());
        let sequence: Vec<Symbol> = rule
            .rhs
            .iter()
            .map(|s| resolve(s, terminals))
            .collect();
        builder.decompose(head, Some(rule.clone()), sequence)?;
    }

    let leads = builder.close_leads(&nonterminal_names, &specifiers);

    debug!(
        "CNF built: {} init-terms, {} init-specs, {} pairs, {} implicits",
        builder.init_terms.len(),
        init_specs.len(),
        builder.pairs.len(),
        builder.next_implicit
    );

    Ok(Cnf {
        leads,
        init_terms: builder.init_terms,
        init_specs,
        pairs: builder.pairs,
        specifiers,
    })
}

fn resolve(item: &RhsSymbol, terminals: &HashSet<String>) -> Symbol {
    match item {
        RhsSymbol::Name(name) => {
            if terminals.contains(name) {
                Symbol::Terminal(name.clone())
            } else {
                Symbol::Nonterminal(name.clone())
            }
        }
        RhsSymbol::Spec(spec) => Symbol::Spec(spec.clone()),
    }
}

struct Builder<'a> {
    terminals: &'a HashSet<String>,
    leads: Vec<Rc<Lead>>,
    init_terms: Vec<Rc<InitTerm>>,
    pairs: Vec<Rc<Pair>>,
    implicits: HashMap<Vec<Symbol>, ImplicitId>,
    next_implicit: ImplicitId,
}

impl<'a> Builder<'a> {
    fn decompose(
        &mut self,
        var: Symbol,
        rule: Option<RuleHandle>,
        sequence: Vec<Symbol>,
    ) -> Result<(), GrammarError> {
        trace!("decompose {} <- {:?}", var, sequence);
        match sequence.len() {
            0 => unreachable!("empty rhs is rejected at add_rule time"),
            1 => {
                let rhs = sequence.into_iter().next().unwrap();
                if rhs == var {
                    return Err(GrammarError::DegenerateUnitRule(var.to_string()));
                }
                if let Symbol::Terminal(t) = &rhs {
                    self.init_terms.push(Rc::new(InitTerm {
                        var,
                        rule,
                        terminal: t.clone(),
                    }));
                } else {
                    self.leads.push(Rc::new(Lead {
                        var,
                        rule,
                        node: rhs,
                    }));
                }
                Ok(())
            }
            2 => {
                let mut it = sequence.into_iter();
                let lhs = it.next().unwrap();
                let rhs = it.next().unwrap();
                self.pairs.push(Rc::new(Pair { var, rule, lhs, rhs }));
                Ok(())
            }
            _ => {
                let mut it = sequence.into_iter();
                let lhs = it.next().unwrap();
                let tail: Vec<Symbol> = it.collect();
                let implicit = if let Some(id) = self.implicits.get(&tail) {
                    Symbol::Implicit(*id)
                } else {
                    let id = self.next_implicit;
                    self.next_implicit = self
                        .next_implicit
                        .checked_add(1)
                        .ok_or_else(|| GrammarError::TooManySymbols("implicit ids".to_string()))?;
                    self.implicits.insert(tail.clone(), id);
                    self.decompose(Symbol::Implicit(id), None, tail)?;
                    Symbol::Implicit(id)
                };
                self.pairs.push(Rc::new(Pair {
                    var,
                    rule,
                    lhs,
                    rhs: implicit,
                }));
                Ok(())
            }
        }
    }

    /// Build and transitively close the leads table. Mirrors the
    /// fixed-point loop at the end of `cnf()` in `cyk.py`: a row is closed
    /// when, for every lead it contains, the target row's leads are also
    /// present.
    fn close_leads(
        &self,
        nonterminals: &HashSet<String>,
        specifiers: &HashSet<Specifier>,
    ) -> HashMap<Symbol, Vec<Rc<Lead>>> {
        let mut leadtab: HashMap<Symbol, Vec<Rc<Lead>>> = HashMap::new();
        for name in nonterminals {
            leadtab.entry(Symbol::Nonterminal(name.clone())).or_default();
        }
        for spec in specifiers {
            leadtab.entry(Symbol::Spec(spec.clone())).or_default();
        }
        for lead in &self.leads {
            leadtab.entry(lead.node.clone()).or_default().push(Rc::clone(lead));
        }

        let mut pass = 0;
        loop {
            pass += 1;
            let mut changed = false;
            let keys: Vec<Symbol> = leadtab.keys().cloned().collect();
            for key in keys {
                let row = leadtab.get(&key).cloned().unwrap_or_default();
                let mut additions: Vec<Rc<Lead>> = Vec::new();
                for lead in &row {
                    if let Some(target_row) = leadtab.get(&lead.var) {
                        for candidate in target_row {
                            let already = row
                                .iter()
                                .chain(additions.iter())
                                .any(|r| Rc::ptr_eq(r, candidate));
                            if !already {
                                additions.push(Rc::clone(candidate));
                            }
                        }
                    }
                }
                if !additions.is_empty() {
                    changed = true;
                    leadtab.get_mut(&key).unwrap().extend(additions);
                }
            }
            if !changed {
                break;
            }
        }
        debug!("leads closure reached fixed point after {} pass(es)", pass);
        leadtab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn rule(head: &str, rhs: Vec<RhsSymbol>) -> RuleHandle {
        RuleHandle::new(Rule {
            head: head.to_string(),
            rhs,
        })
    }

    fn name(s: &str) -> RhsSymbol {
        RhsSymbol::Name(s.to_string())
    }

    #[test]
    fn degenerate_unit_rule_is_rejected() {
        let terminals: HashSet<String> = HashSet::new();
        let rules = vec![rule("X", vec![name("X")])];
        let err = build(&rules, &terminals).unwrap_err();
        assert!(matches!(err, GrammarError::DegenerateUnitRule(_)));
    }

    #[test]
    fn head_terminal_clash_is_rejected() {
        let terminals: HashSet<String> = ["X".to_string()].iter().cloned().collect();
        let rules = vec![rule("X", vec![name("X")])];
        let err = build(&rules, &terminals).unwrap_err();
        assert!(matches!(err, GrammarError::TerminalNonterminalClash(_)));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let terminals: HashSet<String> = HashSet::new();
        let rules = vec![rule("X", vec![name("nowhere")])];
        let err = build(&rules, &terminals).unwrap_err();
        assert!(matches!(err, GrammarError::UnknownSymbol(_)));
    }

    #[test]
    fn long_rhs_shares_tail_implicit() {
        let terminals: HashSet<String> = ["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string(), "q".to_string()]
            .iter()
            .cloned()
            .collect();
        let rules = vec![
            rule("X", vec![name("a"), name("b"), name("c"), name("d")]),
            rule("Y", vec![name("q"), name("b"), name("c"), name("d")]),
        ];
        let cnf = build(&rules, &terminals).expect("should compile");
        // Two implicits total: (c,d) and (b,imp0); X and Y both reuse them.
        let implicit_vars: HashSet<Symbol> = cnf
            .pairs
            .iter()
            .filter_map(|p| match &p.rhs {
                Symbol::Implicit(_) => Some(p.rhs.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(implicit_vars.len(), 2);
        // Exactly two pairs should target each implicit id (one per X/Y use plus the
        // implicit's own internal decomposition) -- check total implicit count.
        let max_id = cnf
            .pairs
            .iter()
            .flat_map(|p| match (&p.lhs, &p.rhs) {
                (Symbol::Implicit(a), Symbol::Implicit(b)) => vec![*a, *b],
                (Symbol::Implicit(a), _) => vec![*a],
                (_, Symbol::Implicit(b)) => vec![*b],
                _ => vec![],
            })
            .max();
        assert_eq!(max_id, Some(1));
    }
}
