// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal scale: labels to a repeating cycle of output values.
//!
//! This is how callers attach per-band or per-slice attributes (typically
//! fill colors) to a label domain. The scale is generic over its output so
//! palette choice stays entirely with the caller.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Maps each label of a domain to one of a fixed cycle of output values.
///
/// Labels are keyed in first-occurrence order; when there are more labels
/// than values, the value cycle repeats.
#[derive(Clone, Debug)]
pub struct ScaleOrdinal<T> {
    values: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> ScaleOrdinal<T> {
    /// Creates an ordinal scale over the given label domain and value cycle.
    ///
    /// Duplicate labels collapse to their first occurrence.
    pub fn new<I, S>(labels: I, values: Vec<T>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        for label in labels {
            let label = label.into();
            let next = index.len();
            index.entry(label).or_insert(next);
        }
        Self { values, index }
    }

    /// Returns the value assigned to `label`.
    ///
    /// `None` for labels outside the domain, and for every label when the
    /// value cycle is empty.
    pub fn map(&self, label: &str) -> Option<&T> {
        if self.values.is_empty() {
            return None;
        }
        let i = *self.index.get(label)?;
        self.values.get(i % self.values.len())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn labels_cycle_through_values_in_first_seen_order() {
        let scale = ScaleOrdinal::new(["a", "b", "c"], alloc::vec![10, 20]);
        assert_eq!(scale.map("a"), Some(&10));
        assert_eq!(scale.map("b"), Some(&20));
        assert_eq!(scale.map("c"), Some(&10));
    }

    #[test]
    fn duplicate_labels_keep_their_first_assignment() {
        let scale = ScaleOrdinal::new(["a", "b", "a"], alloc::vec![1, 2, 3]);
        assert_eq!(scale.map("a"), Some(&1));
        assert_eq!(scale.map("b"), Some(&2));
    }

    #[test]
    fn unknown_labels_and_empty_cycles_map_to_none() {
        let scale = ScaleOrdinal::new(["a"], alloc::vec![1]);
        assert_eq!(scale.map("z"), None);

        let empty: ScaleOrdinal<i32> = ScaleOrdinal::new(["a"], Vec::new());
        assert_eq!(empty.map("a"), None);
    }
}
