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

//! Diagnostics for ungrammatical or ambiguous input: shortest-interval
//! reporting and the ruleset relevant to a partial forest.
//!
//! Ported from `intervals()`, `relevant_ruleset()`, `rule_inversions()` and
//! `visualize_intervals()` in `examples/original_source/grammarboy/__init__.py`.
//! Additive only: these read the public `Table`/`Result` surface and
//! introduce no new grammar semantics.

use std::collections::HashSet;
use std::rc::Rc;

use itertools::Itertools;

use crate::applied::AppliedRule;
use crate::result::ForestResult;
use crate::rule::{RhsSymbol, RuleHandle};
use crate::symbol::Symbol;
use crate::table::Table;
use crate::token::Token;

/// The segment lengths used by one cover, in order. Ported from
/// `intervals()`: a thin projection of a [`ForestResult`] onto its
/// per-segment lengths, useful for comparing covers without dragging
/// along heads or counts.
pub fn intervals<T: Token>(result: &ForestResult<'_, T>) -> Vec<usize> {
    (0..result.len()).map(|i| result.segment_len(i)).collect()
}

/// The distinct interval tuples across every shortest-length cover of the
/// whole span, i.e. every top-level partition achieving exactly
/// `table.shortest()` segments of minimal total reach. Ported from the
/// `shortest`-driven half of `visualize_intervals()`.
pub fn shortest_intervals<T: Token>(table: &Table<T>) -> Vec<Vec<usize>> {
    let n = table.token_count();
    if n == 0 {
        return Vec::new();
    }
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut out = Vec::new();
    for result in table {
        let ivs = intervals(&result);
        if ivs.len() == table.shortest() && seen.insert(ivs.clone()) {
            out.push(ivs);
        }
    }
    out
}

/// The set of multi-symbol rules (`Pair` applications with a user-authored
/// source rule) whose head or RHS mentions a key that appears somewhere in
/// the forest reached by the shortest covers of `table`. Ported from
/// `relevant_ruleset()`/`rule_inversions()`: used to explain why a parse
/// failed or to point at the rules most likely responsible for an
/// ambiguity, without requiring a full traversal.
///
/// Returned sorted by head (then by rule text, for rules sharing a head),
/// for a stable, readable ordering rather than hash-order.
pub fn relevant_ruleset<T: Token>(table: &Table<T>) -> Vec<RuleHandle> {
    let n = table.token_count();
    let mut keys: HashSet<Symbol> = HashSet::new();
    for length in 1..=n {
        for start in 0..=(n - length) {
            keys.extend(table.tab_cell(length, start).keys().cloned());
        }
    }

    let mut out = Vec::new();
    for length in 1..=n {
        for start in 0..=(n - length) {
            for (applied, _) in table.apl_cell(length, start) {
                let rule = match applied {
                    AppliedRule::Pair(pair) => pair.rule.clone(),
                    AppliedRule::Lead(lead) => lead.rule.clone(),
                    AppliedRule::InitTerm(init) => init.rule.clone(),
                    AppliedRule::InitSpec(_) => None,
                };
                let rule = match rule {
                    Some(r) => r,
                    None => continue,
                };
                let mentions_forest_key = keys.contains(&Symbol::Nonterminal(rule.head.clone()))
                    || rule.rhs.iter().any(|sym| match sym {
                        RhsSymbol::Name(name) => {
                            keys.contains(&Symbol::Nonterminal(name.clone()))
                                || keys.contains(&Symbol::Terminal(name.clone()))
                        }
                        RhsSymbol::Spec(spec) => keys.contains(&Symbol::Spec(spec.clone())),
                    });
                if mentions_forest_key {
                    out.push(rule);
                }
            }
        }
    }
    out.into_iter()
        .unique_by(|r| Rc::as_ptr(&r.0) as usize)
        .sorted_by(|a, b| a.head.cmp(&b.head).then_with(|| a.to_string().cmp(&b.to_string())))
        .collect()
}

/// Render one text line per distinct shortest interval, marking the span
/// covered by each segment under the source text with tick marks aligned
/// to `token.position()` / `token.length()`. Ported from
/// `visualize_intervals()`; spacing mirrors the Python reference's use of
/// `pos % 1000` to recover the column from the `line * 1000 + column`
/// position encoding.
pub fn visualize_shortest<T: Token>(table: &Table<T>, tokens: &[T]) -> Vec<String> {
    let mut lines = Vec::new();
    for ivs in shortest_intervals(table) {
        let mut line = String::new();
        let mut index = 0;
        for len in &ivs {
            let span_tokens = &tokens[index..index + len];
            let start_col = span_tokens
                .first()
                .map(|t| t.position() % 1000)
                .unwrap_or(0);
            let end_col = span_tokens
                .last()
                .map(|t| (t.position() % 1000) + t.length())
                .unwrap_or(start_col);
            while line.len() < start_col {
                line.push(' ');
            }
            while line.len() < end_col {
                line.push('^');
            }
            index += len;
        }
        lines.push(line);
    }
    lines
}
