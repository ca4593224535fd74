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

//! Result enumeration, traversal and explanation.
//!
//! Ported from `iter_results`/`Result`/`traverse`/`traverse_item`/`explain`
//! in `examples/original_source/grammarboy/__init__.py`.

use crate::applied::AppliedRule;
use crate::error::TraversalError;
use crate::rule::RuleHandle;
use crate::symbol::Symbol;
use crate::table::Table;
use crate::token::Token;

/// One witnessed cover of the token span: an ordered list of segments,
/// each `(head, length, per-segment-derivation-count)`, plus the product
/// of those counts (the "ambiguity").
pub struct ForestResult<'t, T: Token> {
    table: &'t Table<T>,
    pub ambiguity: u64,
    segments: Vec<(Symbol, usize, u64)>,
}

impl<'t, T: Token> ForestResult<'t, T> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The head symbol at segment `i`.
    pub fn head(&self, i: usize) -> &Symbol {
        &self.segments[i].0
    }

    /// The token length spanned by segment `i`.
    pub fn segment_len(&self, i: usize) -> usize {
        self.segments[i].1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.segments.iter().map(|(s, _, _)| s)
    }

    /// Walk the packed forest along this (necessarily unambiguous) cover,
    /// calling `visitor(rule, children)` bottom-up for every applied rule,
    /// and returning one [`TreeValue`] per top-level segment.
    ///
    /// Fails with [`TraversalError`] if `ambiguity > 1` — an ambiguous
    /// result has no single tree to reconstruct.
    pub fn traverse<V>(
        &self,
        visitor: &mut dyn FnMut(Option<RuleHandle>, Vec<TreeValue<T, V>>) -> V,
    ) -> Result<Vec<TreeValue<T, V>>, TraversalError> {
        if self.ambiguity > 1 {
            return Err(TraversalError {
                ambiguity: self.ambiguity,
            });
        }
        let mut index = 0;
        let mut output = Vec::with_capacity(self.segments.len());
        for (var, length, _) in &self.segments {
            output.push(traverse_item(self.table, var, *length, index, visitor));
            index += length;
        }
        Ok(output)
    }

    /// For every segment, the set of candidate applied rules (excluding
    /// `InitSpec`) whose head matches the segment's head — i.e. every rule
    /// that could have derived that span.
    pub fn explain(&self) -> Vec<Vec<Explanation>> {
        let mut index = 0;
        let mut output = Vec::with_capacity(self.segments.len());
        for (var, length, _) in &self.segments {
            let mut rules = Vec::new();
            for (obj, k) in self.table.tables.apl_cell(*length, index) {
                if matches!(obj, AppliedRule::InitSpec(_)) {
                    continue;
                }
                if obj.var() == *var {
                    rules.push(Explanation {
                        rule: obj.rule().cloned(),
                        index,
                        length: *length,
                        middle: *k,
                    });
                }
            }
            index += length;
            output.push(rules);
        }
        output
    }
}

/// A single candidate rule application surfaced by
/// [`ForestResult::explain`].
#[derive(Clone)]
pub struct Explanation {
    /// The user-authored rule, if this application traces back to one
    /// (synthetic implicit-only applications carry `None`).
    pub rule: Option<RuleHandle>,
    pub index: usize,
    pub length: usize,
    pub middle: usize,
}

/// The value produced while walking the forest: either a raw input token
/// (a leaf that no rule application covers — a bare terminal or specifier
/// match), a value the caller's visitor produced, or an anonymous list
/// used only internally to thread implicit-binarization chains back to
/// their nearest real rule.
pub enum TreeValue<T: Token, V> {
    Leaf(T),
    Value(V),
    List(Vec<TreeValue<T, V>>),
}

fn traverse_item<T: Token, V>(
    table: &Table<T>,
    var: &Symbol,
    length: usize,
    index: usize,
    visitor: &mut dyn FnMut(Option<RuleHandle>, Vec<TreeValue<T, V>>) -> V,
) -> TreeValue<T, V> {
    let found = table
        .tables
        .apl_cell(length, index)
        .iter()
        .find(|(obj, _)| obj.var() == *var);

    match found {
        Some((AppliedRule::Lead(lead), _)) => {
            let child = traverse_item(table, &lead.node, length, index, visitor);
            TreeValue::Value(visitor(lead.rule.clone(), vec![child]))
        }
        Some((obj, _)) if length == 1 => {
            if matches!(var, Symbol::Spec(_)) {
                TreeValue::Leaf(table.tokens()[index].clone())
            } else {
                let leaf = TreeValue::Leaf(table.tokens()[index].clone());
                TreeValue::Value(visitor(obj.rule().cloned(), vec![leaf]))
            }
        }
        Some((AppliedRule::Pair(pair), k)) => {
            let left = traverse_item(table, &pair.lhs, *k, index, visitor);
            let right = traverse_item(table, &pair.rhs, length - *k, index + *k, visitor);
            if pair.var.is_implicit() {
                TreeValue::List(vec![left, right])
            } else if pair.rhs.is_implicit() {
                let mut children = vec![left];
                if let TreeValue::List(items) = right {
                    children.extend(items);
                }
                TreeValue::Value(visitor(pair.rule.clone(), children))
            } else {
                TreeValue::Value(visitor(pair.rule.clone(), vec![left, right]))
            }
        }
        Some((AppliedRule::InitTerm(_), _)) | Some((AppliedRule::InitSpec(_), _)) => {
            unreachable!("InitTerm/InitSpec only ever apply at length 1")
        }
        None => TreeValue::Leaf(table.tokens()[index].clone()),
    }
}

/// Depth-first enumeration of covers using exactly `size` top-level
/// segments, trying longer segments first at each position and skipping
/// Implicit keys. Ported from `iter_results()`.
pub(crate) fn enumerate<T: Token>(table: &Table<T>, size: usize) -> Vec<ForestResult<'_, T>> {
    let n = table.tables.token_count();
    let mut out = Vec::new();
    let mut prefix = Vec::new();
    enumerate_rec(table, n, size, 0, &mut prefix, 1, &mut out);
    out
}

fn enumerate_rec<'t, T: Token>(
    table: &'t Table<T>,
    n: usize,
    size: usize,
    index: usize,
    prefix: &mut Vec<(Symbol, usize, u64)>,
    ambiguity: u64,
    out: &mut Vec<ForestResult<'t, T>>,
) {
    if size == 0 {
        if index == n {
            out.push(ForestResult {
                table,
                ambiguity,
                segments: prefix.clone(),
            });
        }
        return;
    }
    if index > n {
        return;
    }
    let max_len = match (n + 1).checked_sub(size + index) {
        Some(v) => v,
        None => return,
    };
    for length in (1..=max_len).rev() {
        let cell = table.tables.tab_cell(length, index);
        for (var, count) in cell.iter() {
            if var.is_implicit() {
                continue;
            }
            prefix.push((var.clone(), length, *count));
            enumerate_rec(table, n, size - 1, index + length, prefix, ambiguity * *count, out);
            prefix.pop();
        }
    }
}
