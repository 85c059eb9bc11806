// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick layout.
//!
//! A tick set is the geometric skeleton of an axis: positions along one
//! screen axis plus display labels, in domain order. Rendering the rule
//! line, tick marks, and text is the consumer's job.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::format_tick_with_step;
use crate::scale::{ScaleBand, ScaleLinear};

/// The screen axis a tick set runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Positions are x offsets.
    Horizontal,
    /// Positions are y offsets.
    Vertical,
}

/// One tick: a position in range units and its display label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in bounded coordinates.
    pub position: f64,
    /// Display label.
    pub label: String,
}

/// An ordered set of ticks along one screen axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    /// Which screen axis the positions run along.
    pub orient: AxisOrient,
    /// Ticks in the scale's domain order.
    pub ticks: Vec<Tick>,
}

impl TickSet {
    /// An empty tick set for the given axis.
    pub fn empty(orient: AxisOrient) -> Self {
        Self {
            orient,
            ticks: Vec::new(),
        }
    }

    /// Returns the number of ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns `true` when there are no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Lays out ticks for a linear scale.
///
/// Tick values come from [`ScaleLinear::ticks`]; labels are step-aware so a
/// fractional grid prints consistent decimals.
pub fn linear_ticks(scale: &ScaleLinear, orient: AxisOrient, count: usize) -> TickSet {
    let values = scale.ticks(count);
    let step = tick_step(&values);
    TickSet {
        orient,
        ticks: values
            .into_iter()
            .map(|v| Tick {
                position: scale.map(v),
                label: format_tick_with_step(v, step),
            })
            .collect(),
    }
}

/// Lays out ticks for a band scale: one per label, centered on its band.
pub fn band_ticks(scale: &ScaleBand, orient: AxisOrient) -> TickSet {
    TickSet {
        orient,
        ticks: scale
            .labels()
            .iter()
            .map(|label| {
                let band = scale.band(label).expect("label from the scale's own domain");
                Tick {
                    position: band.center(),
                    label: label.clone(),
                }
            })
            .collect(),
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
