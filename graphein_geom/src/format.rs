// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using the tick step to pick a decimal count.
///
/// Ticks on a fractional grid print exactly the decimals the step calls for
/// (step 0.1 → one decimal), so neighboring labels stay consistent and
/// float noise like `0.30000000000000004` never leaks into a label. Integer
/// grids print without a decimal point. A zero or unknown step falls back to
/// the value's shortest representation.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if step > 0.0 && step < 1.0 {
        let decimals = -step.log10().floor();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to a small positive decimal count"
        )]
        let decimals = decimals.clamp(1.0, 12.0) as usize;
        format!("{value:.decimals$}")
    } else if step >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_steps_print_without_decimals() {
        assert_eq!(format_tick_with_step(50.0, 5.0), "50");
        assert_eq!(format_tick_with_step(0.0, 10.0), "0");
        assert_eq!(format_tick_with_step(1000.0, 500.0), "1000");
    }

    #[test]
    fn fractional_steps_print_the_step_decimals() {
        assert_eq!(format_tick_with_step(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(2.5, 0.5), "2.5");
    }

    #[test]
    fn unknown_step_falls_back_to_shortest_form() {
        assert_eq!(format_tick_with_step(4.0, 0.0), "4");
        assert_eq!(format_tick_with_step(0.125, 0.0), "0.125");
    }
}
