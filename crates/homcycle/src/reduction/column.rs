//! Sparse integer column with pivot tracking.
//!
//! Invariants:
//! - Rows strictly ascending, no stored zero coefficient.
//! - The last entry is the pivot ("low").

use nalgebra::DVector;

/// One boundary column: `(row, coefficient)` pairs in ascending row order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseColumn {
    entries: Vec<(usize, i64)>,
}

impl SparseColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    /// Append `(row, value)` unless `value == 0`. Rows must arrive in increasing order.
    #[inline]
    pub fn set(&mut self, row: usize, value: i64) {
        if value == 0 {
            return;
        }
        debug_assert!(
            self.entries.last().map_or(true, |&(r, _)| r < row),
            "rows must be appended in increasing order (row={row})"
        );
        self.entries.push((row, value));
    }

    /// Pivot row, `None` for a dead column.
    #[inline]
    pub fn low(&self) -> Option<usize> {
        self.entries.last().map(|&(r, _)| r)
    }

    /// Pivot coefficient, `None` for a dead column.
    #[inline]
    pub fn low_value(&self) -> Option<i64> {
        self.entries.last().map(|&(_, v)| v)
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drop every entry (column paired or reduced to zero).
    pub fn die(&mut self) {
        self.entries.clear();
    }

    /// Normalize a `-1` pivot to `+1` by negating the column.
    pub fn adjust_sign(&mut self) {
        if self.low_value() == Some(-1) {
            for (_, v) in self.entries.iter_mut() {
                *v = -*v;
            }
        }
    }

    /// `self := self - low_value(self) * other` in one ascending merge.
    ///
    /// Pre: `self` is alive and `other` has a unit pivot on `self`'s pivot row,
    /// so that row cancels. Returns `false` and leaves `self` untouched if a
    /// coefficient of the result does not fit in `i64`.
    #[must_use]
    pub fn reduce_step(&mut self, other: &SparseColumn) -> bool {
        debug_assert!(self.is_alive(), "reduce_step on a dead column");
        debug_assert_eq!(self.low(), other.low());
        let Some(scale) = self.low_value() else {
            return true;
        };
        let sub = |va: i64, vb: i64| vb.checked_mul(scale).and_then(|p| va.checked_sub(p));
        let (a, b) = (&self.entries, &other.entries);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0usize, 0usize);
        loop {
            let (row, value) = match (a.get(i), b.get(j)) {
                (Some(&(ra, va)), Some(&(rb, _))) if ra < rb => {
                    i += 1;
                    (ra, Some(va))
                }
                (Some(&(ra, va)), None) => {
                    i += 1;
                    (ra, Some(va))
                }
                (Some(&(ra, _)), Some(&(rb, vb))) if rb < ra => {
                    j += 1;
                    (rb, sub(0, vb))
                }
                (None, Some(&(rb, vb))) => {
                    j += 1;
                    (rb, sub(0, vb))
                }
                (Some(&(ra, va)), Some(&(_, vb))) => {
                    i += 1;
                    j += 1;
                    (ra, sub(va, vb))
                }
                (None, None) => break,
            };
            let Some(value) = value else {
                return false;
            };
            if value != 0 {
                out.push((row, value));
            }
        }
        self.entries = out;
        true
    }

    /// Dense length-`n` vector with coefficients at their rows.
    pub fn vectorize(&self, n: usize) -> DVector<i64> {
        let mut dense = DVector::zeros(n);
        for &(r, v) in &self.entries {
            dense[r] = v;
        }
        dense
    }

    /// Re-sparsify a dense vector (zeros dropped).
    pub fn from_dense(dense: &DVector<i64>) -> Self {
        let mut col = Self::new();
        for (r, &v) in dense.iter().enumerate() {
            col.set(r, v);
        }
        col
    }

    /// Stored `(row, coefficient)` pairs in ascending row order.
    pub fn entries(&self) -> &[(usize, i64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
