// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series value validation.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::LayoutError;

/// Collects each datum's value, rejecting values layout cannot place.
///
/// Bar and pie layout measure against a zero baseline, so values must be
/// finite and non-negative; the first offender fails the whole call with its
/// series index.
pub(crate) fn checked_values<D>(
    series: &[D],
    value_of: impl Fn(&D) -> f64,
) -> Result<Vec<f64>, LayoutError> {
    series
        .iter()
        .enumerate()
        .map(|(index, d)| {
            let v = value_of(d);
            if !v.is_finite() {
                Err(LayoutError::NonFiniteValue { index })
            } else if v < 0.0 {
                Err(LayoutError::NegativeValue { index })
            } else {
                Ok(v)
            }
        })
        .collect()
}
