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

//! The per-parse `Table`: counting/shortest-cover indices and result
//! enumeration. Ported from `Table`/`count`/`build_mintab`/`iter_results`
//! in `examples/original_source/grammarboy/__init__.py` and `cyk.py`.

use std::cell::Cell;

use crate::cyk::Tables;
use crate::error::ContractError;
use crate::result::ForestResult;
use crate::token::Token;

/// Immutable view produced by [`Grammar::parse`](crate::Grammar::parse):
/// the recognition/applied-rule tables for one token sequence, plus the
/// counting and shortest-cover indices derived from them.
pub struct Table<T: Token> {
    pub(crate) tables: Tables<T>,
    /// `shortest[i]`: minimum non-Implicit segment length starting at `i`
    /// that participates in a valid cover, or `n+1` if none does.
    shortest: Vec<usize>,
    count_cache: Cell<Option<u64>>,
}

impl<T: Token> Table<T> {
    pub(crate) fn new(tables: Tables<T>) -> Self {
        let shortest = build_shortest(&tables);
        Table {
            tables,
            shortest,
            count_cache: Cell::new(None),
        }
    }

    /// Number of tokens parsed.
    pub fn token_count(&self) -> usize {
        self.tables.token_count()
    }

    pub fn tokens(&self) -> &[T] {
        self.tables.tokens()
    }

    /// The raw recognition cell at `(length, start)`, for diagnostics that
    /// need to inspect the forest directly rather than through a `Result`.
    pub fn tab_cell(&self, length: usize, start: usize) -> &crate::smallmap::SmallMap<crate::symbol::Symbol, u64> {
        self.tables.tab_cell(length, start)
    }

    /// The raw applied-rule cell at `(length, start)`.
    pub fn apl_cell(&self, length: usize, start: usize) -> &[(crate::applied::AppliedRule, usize)] {
        self.tables.apl_cell(length, start)
    }

    /// Minimum non-Implicit segment length reachable from position 0 in
    /// any valid cover, or `n + 1` if no cover exists at all.
    pub fn shortest(&self) -> usize {
        self.shortest[0]
    }

    /// `shortest[i]`: same as [`Table::shortest`] but from position `i`.
    pub fn shortest_from(&self, i: usize) -> usize {
        self.shortest[i]
    }

    /// Total number of distinct covers of the whole token span by
    /// non-Implicit-headed segments. Computed lazily and cached, as in the
    /// reference `Table.__len__`.
    pub fn len(&self) -> u64 {
        if let Some(cached) = self.count_cache.get() {
            return cached;
        }
        let n = self.tables.token_count();
        let mut count = vec![0u64; n + 1];
        count[n] = 1;
        for i in (0..n).rev() {
            let mut score = 0u64;
            for length in 1..=(n - i) {
                let cell = self.tables.tab_cell(length, i);
                let non_implicit = cell.keys().filter(|k| !k.is_implicit()).count() as u64;
                if non_implicit > 0 {
                    score += non_implicit * count[i + length];
                }
            }
            count[i] = score;
        }
        self.count_cache.set(Some(count[0]));
        count[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerate every [`ForestResult`] whose cover uses exactly `size`
    /// top-level, non-Implicit-headed segments.
    pub fn just(&self, size: i64) -> Result<Vec<ForestResult<'_, T>>, ContractError> {
        if size < 1 {
            return Err(ContractError {
                requested_size: size,
            });
        }
        Ok(crate::result::enumerate(self, size as usize))
    }

    /// Enumerate every [`ForestResult`] of every size from 1 to the token
    /// count.
    pub fn enumerate_all(&self) -> Vec<ForestResult<'_, T>> {
        let n = self.tables.token_count();
        let mut out = Vec::new();
        for size in 1..=n.max(1) {
            if n == 0 {
                break;
            }
            out.extend(crate::result::enumerate(self, size));
        }
        out
    }
}

impl<'t, T: Token> IntoIterator for &'t Table<T> {
    type Item = ForestResult<'t, T>;
    type IntoIter = std::vec::IntoIter<ForestResult<'t, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate_all().into_iter()
    }
}

/// Build the `shortest[i]` array via the right-to-left recurrence in
/// `build_mintab()`. `shortest[n] = 0`; `shortest[i]` is the minimum
/// segment length starting at `i` that reaches a complete cover.
fn build_shortest<T: Token>(tables: &Tables<T>) -> Vec<usize> {
    let n = tables.token_count();
    let nom = n + 1;
    let mut shortest = vec![nom; n + 1];
    shortest[n] = 0;
    for i in (0..n).rev() {
        let mut score = nom;
        for length in 1..=(n - i) {
            let cell = tables.tab_cell(length, i);
            let has_solution = cell.keys().any(|k| !k.is_implicit());
            if has_solution {
                score = score.min(length);
            }
        }
        shortest[i] = score;
    }
    shortest
}
