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

//! The CYK recognizer: fills the triangular `tab`/`apl` tables bottom-up.
//!
//! Ported from `cyk()` in `examples/original_source/cyk.py`. The counting
//! discipline is intentionally asymmetric and must be reproduced exactly
//! (see Design Notes, "Leads vs. pairs multiplicity"): a `Pair` increments
//! by the product of left/right derivation counts, but every `Lead` it
//! triggers increments by exactly 1, regardless of that product.

use log::{log_enabled, trace, Level};

use crate::applied::AppliedRule;
use crate::cnf::Cnf;
use crate::smallmap::SmallMap;
use crate::symbol::Symbol;
use crate::token::Token;

/// Triangular `tab`/`apl` tables for one parse, indexed by `(length, start)`
/// with `1 <= length <= n` and `0 <= start <= n - length`.
///
/// Stored as a single flat buffer (per Design Notes, "Ownership of
/// tables") rather than `Vec<Vec<_>>`, to avoid `n` small heap allocations.
pub struct Tables<T: Token> {
    pub(crate) n: usize,
    pub(crate) tokens: Vec<T>,
    /// `bases[length]` is the flat-buffer offset of the first cell at that
    /// length, for `length` in `1..=n`. `bases[0]` is unused.
    bases: Vec<usize>,
    tab: Vec<SmallMap<Symbol, u64>>,
    apl: Vec<Vec<(AppliedRule, usize)>>,
}

impl<T: Token> Tables<T> {
    fn cell_index(&self, length: usize, start: usize) -> usize {
        debug_assert!(length >= 1 && length <= self.n);
        debug_assert!(start <= self.n - length);
        self.bases[length] + start
    }

    pub fn tab_cell(&self, length: usize, start: usize) -> &SmallMap<Symbol, u64> {
        &self.tab[self.cell_index(length, start)]
    }

    pub fn apl_cell(&self, length: usize, start: usize) -> &[(AppliedRule, usize)] {
        &self.apl[self.cell_index(length, start)]
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.n
    }
}

/// Run the CYK recognizer over `tokens` against the given CNF artifact.
pub fn recognize<T: Token>(cnf: &Cnf, tokens: Vec<T>) -> Tables<T> {
    let n = tokens.len();

    let mut bases = vec![0usize; n + 2];
    for length in 1..=n {
        bases[length + 1] = bases[length] + (n - length + 1);
    }
    let total_cells = if n == 0 { 0 } else { bases[n + 1] };

    let mut tables = Tables {
        n,
        tokens,
        bases,
        tab: (0..total_cells).map(|_| SmallMap::new()).collect(),
        apl: (0..total_cells).map(|_| Vec::new()).collect(),
    };

    for i in 0..n {
        let token = tables.tokens[i].clone();
        let idx = tables.cell_index(1, i);
        tables
            .tab[idx]
            .increment(Symbol::Terminal(token.type_name().to_string()), 1u64);

        for init in &cnf.init_terms {
            if init.terminal == token.type_name() {
                let var = init.var.clone();
                tables.tab[idx].increment(var.clone(), 1);
                tables.apl[idx].push((AppliedRule::InitTerm(init.clone()), 1));
                apply_leads(cnf, &mut tables.tab[idx], &mut tables.apl[idx], &var, 1);
            }
        }
        for init in &cnf.init_specs {
            if init.spec.matches(&token) {
                let var = init.var();
                tables.tab[idx].increment(var.clone(), 1);
                tables.apl[idx].push((AppliedRule::InitSpec(init.clone()), 1));
                apply_leads(cnf, &mut tables.tab[idx], &mut tables.apl[idx], &var, 1);
            }
        }
    }

    for length in 2..=n {
        for i in 0..=(n - length) {
            let cur_idx = tables.cell_index(length, i);
            for k in 1..length {
                let l_idx = tables.cell_index(k, i);
                let r_idx = tables.cell_index(length - k, i + k);

                // `l_idx`/`r_idx` are both strictly below `cur_idx`: split the
                // buffer so the borrow checker can see the current cell is
                // disjoint from the ones being read.
                let (read, write) = tables.tab.split_at_mut(cur_idx);
                let cur_tab = &mut write[0];
                let lcell = &read[l_idx];
                let rcell = &read[r_idx];

                for pair in &cnf.pairs {
                    if let (Some(&lc), Some(&rc)) = (lcell.get(&pair.lhs), rcell.get(&pair.rhs)) {
                        cur_tab.increment(pair.var.clone(), lc * rc);
                        tables.apl[cur_idx].push((AppliedRule::Pair(pair.clone()), k));
                        apply_leads(
                            cnf,
                            cur_tab,
                            &mut tables.apl[cur_idx],
                            &pair.var,
                            k,
                        );
                    }
                }
            }
            if log_enabled!(Level::Trace) {
                trace!(
                    "tab[{}][{}] = {:?}",
                    length,
                    i,
                    tables.tab[cur_idx].keys().collect::<Vec<_>>()
                );
            }
        }
    }

    tables
}

/// Propagate every lead triggered by `var`, incrementing its target by
/// exactly 1 regardless of how `var` itself was derived (see module docs).
fn apply_leads(
    cnf: &Cnf,
    cell: &mut SmallMap<Symbol, u64>,
    acell: &mut Vec<(AppliedRule, usize)>,
    var: &Symbol,
    split: usize,
) {
    for lead in cnf.leads_from(var) {
        cell.increment(lead.var.clone(), 1);
        acell.push((AppliedRule::Lead(lead.clone()), split));
    }
}
