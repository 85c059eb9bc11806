// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout failure taxonomy.
//!
//! Only genuinely invalid input is an error. Degenerate geometry (empty
//! series, zero-span domains, a viewport fully consumed by its margins) has
//! well-defined empty/zero outputs and never reaches this type.

use thiserror::Error;

/// An invalid-input failure from a layout function.
///
/// Layout is deterministic and idempotent, so none of these are retryable:
/// the same input always fails the same way.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A value accessor returned NaN or an infinity.
    #[error("value at series index {index} is not finite")]
    NonFiniteValue {
        /// Index of the offending datum within the series.
        index: usize,
    },
    /// A value accessor returned a negative number.
    ///
    /// Bar and pie layout measure values against a zero baseline, so negative
    /// values have no geometric meaning here.
    #[error("value at series index {index} is negative")]
    NegativeValue {
        /// Index of the offending datum within the series.
        index: usize,
    },
    /// Pie layout was given a series whose values sum to zero.
    ///
    /// Slice spans are shares of the total; a zero total has no defined
    /// shares. Callers must guard or supply at least one positive value.
    #[error("pie layout requires a positive value total")]
    ZeroValueSum,
}
