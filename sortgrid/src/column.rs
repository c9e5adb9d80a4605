//! Column identity and list-move arithmetic.

use std::collections::BTreeSet;

/// Zero-based column position.
pub type ColumnIndex = usize;

/// Move of one column from `from` to `to`; the columns in between shift by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnMove {
    pub from: ColumnIndex,
    pub to: ColumnIndex,
}

impl ColumnMove {
    pub fn new(from: ColumnIndex, to: ColumnIndex) -> Self {
        Self { from, to }
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Whether a sequence of `len` items contains both positions.
    pub fn fits(&self, len: usize) -> bool {
        self.from < len && self.to < len
    }

    /// Apply the move to `items` in place.
    ///
    /// Sequences too short to contain both positions are left untouched.
    pub fn apply<T>(&self, items: &mut Vec<T>) {
        if self.is_identity() || !self.fits(items.len()) {
            return;
        }
        let item = items.remove(self.from);
        items.insert(self.to, item);
    }

    /// Position an element had before the move, given its position after it.
    pub fn original_index(&self, current: ColumnIndex) -> ColumnIndex {
        let (from, to) = (self.from, self.to);
        if current == to {
            from
        } else if from < to && (from..to).contains(&current) {
            current + 1
        } else if from > to && (to + 1..=from).contains(&current) {
            current - 1
        } else {
            current
        }
    }

    /// Position an element will have after the move, given its original position.
    pub fn current_index(&self, original: ColumnIndex) -> ColumnIndex {
        let (from, to) = (self.from, self.to);
        if original == from {
            to
        } else if from < to && (from + 1..=to).contains(&original) {
            original - 1
        } else if from > to && (to..from).contains(&original) {
            original + 1
        } else {
            original
        }
    }
}

/// Columns that carry a drag handle in the current render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortableSet(BTreeSet<ColumnIndex>);

impl SortableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: ColumnIndex) -> bool {
        self.0.insert(column)
    }

    pub fn contains(&self, column: ColumnIndex) -> bool {
        self.0.contains(&column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColumnIndex> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<ColumnIndex> {
        self.iter().collect()
    }
}

impl FromIterator<ColumnIndex> for SortableSet {
    fn from_iter<I: IntoIterator<Item = ColumnIndex>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
