// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/arc geometry.
//!
//! A value series becomes proportional angular slices in series order. Angles
//! are *chart angles*: 0 at 12 o'clock, increasing clockwise, a full turn
//! being `2π` — the convention the rest of the charting world shares. Path
//! construction converts to kurbo's screen-space angles internally.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Shape};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::LayoutError;

/// Curve flattening tolerance used when no explicit tolerance is given.
pub const DEFAULT_ARC_TOLERANCE: f64 = 0.1;

/// One pie slice: an angular interval proportional to its value's share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSlice {
    /// Position of the originating datum within the series.
    pub index: usize,
    /// Value of the originating datum, in data units.
    pub value: f64,
    /// Start of the visible wedge, in chart radians.
    pub start_angle: f64,
    /// End of the visible wedge, in chart radians. Never less than
    /// [`ArcSlice::start_angle`].
    pub end_angle: f64,
    /// The pad angle that was subtracted across this slice's two boundaries.
    pub pad_angle: f64,
}

impl ArcSlice {
    /// Returns the angular extent of the visible wedge.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the wedge's center angle.
    ///
    /// Padding shrinks a wedge symmetrically, so this is also the center of
    /// the slice's unpadded share.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }
}

/// Computes proportional slices for a value series.
///
/// Each slice's unpadded share is `2π · value / sum(values)`, laid out in
/// series order from angle 0. `pad_angle` (clamped non-negative) is split
/// evenly across each slice's two boundaries; a slice narrower than the pad
/// collapses to its center angle rather than inverting.
///
/// An empty series produces no slices. A non-empty series whose values sum
/// to zero has no defined shares and fails with
/// [`LayoutError::ZeroValueSum`]; non-finite and negative values fail with
/// the corresponding [`LayoutError`] variant.
pub fn layout_pie<D>(
    series: &[D],
    value_of: impl Fn(&D) -> f64,
    pad_angle: f64,
) -> Result<Vec<ArcSlice>, LayoutError> {
    let values = crate::series::checked_values(series, value_of)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let sum: f64 = values.iter().sum();
    if sum <= 0.0 {
        return Err(LayoutError::ZeroValueSum);
    }

    let pad = pad_angle.max(0.0);
    let mut cum = 0.0;
    Ok(values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| {
            let raw_start = TAU * cum / sum;
            cum += value;
            let raw_end = TAU * cum / sum;

            let mut start_angle = raw_start + 0.5 * pad;
            let mut end_angle = raw_end - 0.5 * pad;
            if end_angle < start_angle {
                let mid = 0.5 * (raw_start + raw_end);
                start_angle = mid;
                end_angle = mid;
            }

            ArcSlice {
                index,
                value,
                start_angle,
                end_angle,
                pad_angle: pad,
            }
        })
        .collect())
}

/// Builds the flattened outline of a slice's annular sector.
///
/// `inner_radius` of 0 gives a plain pie wedge; larger values carve a donut.
/// The returned path is in bounded coordinates around `center`;
/// [`BezPath::to_svg`] yields its SVG path string.
pub fn sector_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    slice: &ArcSlice,
    tolerance: f64,
) -> BezPath {
    let circle = Circle::new(center, outer_radius);
    // Chart angle 0 is 12 o'clock; kurbo's is 3 o'clock.
    let segment = circle.segment(inner_radius, slice.start_angle - FRAC_PI_2, slice.span());
    segment.path_elements(tolerance).collect()
}

/// Returns the slice's anchor point: mid-radius at the wedge's center angle.
///
/// This is where a slice label sits. A full-turn wedge (a single-slice
/// series) has no meaningful mid-angle; callers should anchor that case at
/// the chart center instead, as the chart layer does.
pub fn centroid(center: Point, inner_radius: f64, outer_radius: f64, slice: &ArcSlice) -> Point {
    let r = 0.5 * (inner_radius + outer_radius);
    let a = slice.mid_angle();
    Point::new(center.x + r * a.sin(), center.y - r * a.cos())
}
