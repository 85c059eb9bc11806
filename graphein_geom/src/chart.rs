// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition: viewport in, shape descriptors out.
//!
//! These specs wire the scale and shape modules together the way a chart
//! actually uses them: the viewport's bounded area fixes the scale ranges,
//! orientation decides which screen axis carries which scale, and the value
//! domain is always anchored at zero. Everything here is a convenience over
//! the lower-level modules; callers with unusual wiring can use those
//! directly.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::axis::{AxisOrient, TickSet, band_ticks, linear_ticks};
use crate::bar::{BarOrient, BarRect, layout_bars};
use crate::error::LayoutError;
use crate::pie::{ArcSlice, DEFAULT_ARC_TOLERANCE, centroid, layout_pie, sector_path};
use crate::scale::{ScaleBandSpec, ScaleLinearSpec};
use crate::series::checked_values;
use crate::viewport::Viewport;

/// A bar chart description: viewport, orientation, and scale options.
#[derive(Clone, Copy, Debug)]
pub struct BarChartSpec {
    /// Viewport the chart is laid out into.
    pub viewport: Viewport,
    /// Which screen axis carries the bands.
    pub orient: BarOrient,
    /// Band padding fraction in `[0, 1]`.
    pub padding: f64,
    /// Approximate number of value-axis ticks.
    pub tick_count: usize,
}

/// Bar chart layout output: bars plus both axis tick sets.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    /// One rect per series entry, in series order.
    pub bars: Vec<BarRect>,
    /// Ticks for the discrete axis, one per label, centered on the bands.
    pub band_axis: TickSet,
    /// Ticks for the value axis.
    pub value_axis: TickSet,
}

impl BarChartSpec {
    /// Creates a bar chart spec with band padding `0.1` and ~10 value ticks.
    pub fn new(viewport: Viewport, orient: BarOrient) -> Self {
        Self {
            viewport,
            orient,
            padding: 0.1,
            tick_count: 10,
        }
    }

    /// Sets the band padding fraction.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the approximate value-axis tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Lays the series out as bars and axis ticks.
    ///
    /// The value domain is `[0, max(values)]` regardless of the data minimum:
    /// bars always measure from a zero baseline. A collapsed viewport
    /// produces an empty chart; invalid values fail with [`LayoutError`].
    pub fn layout<D>(
        &self,
        series: &[D],
        label_of: impl Fn(&D) -> &str,
        value_of: impl Fn(&D) -> f64,
    ) -> Result<BarChart, LayoutError> {
        let (band_orient, value_orient) = match self.orient {
            BarOrient::Vertical => (AxisOrient::Horizontal, AxisOrient::Vertical),
            BarOrient::Horizontal => (AxisOrient::Vertical, AxisOrient::Horizontal),
        };
        if self.viewport.is_collapsed() {
            return Ok(BarChart {
                bars: Vec::new(),
                band_axis: TickSet::empty(band_orient),
                value_axis: TickSet::empty(value_orient),
            });
        }

        let values = checked_values(series, &value_of)?;
        let max = values.iter().copied().fold(0.0, f64::max);

        let bounded = self.viewport.bounded();
        let (band_range, value_range) = match self.orient {
            BarOrient::Vertical => ((0.0, bounded.width), (bounded.height, 0.0)),
            BarOrient::Horizontal => ((0.0, bounded.height), (0.0, bounded.width)),
        };

        let band = ScaleBandSpec::new(series.iter().map(|d| String::from(label_of(d))))
            .with_padding(self.padding)
            .instantiate(band_range);
        let linear = ScaleLinearSpec::new((0.0, max)).instantiate(value_range);

        let bars = layout_bars(
            series,
            &label_of,
            &value_of,
            &band,
            &linear,
            self.orient,
            bounded,
        );

        Ok(BarChart {
            bars,
            band_axis: band_ticks(&band, band_orient),
            value_axis: linear_ticks(&linear, value_orient, self.tick_count),
        })
    }
}

/// A pie/donut chart description.
#[derive(Clone, Copy, Debug)]
pub struct PieChartSpec {
    /// Viewport the chart is laid out into.
    pub viewport: Viewport,
    /// Inner radius as a fraction of the outer radius, in `[0, 1]`.
    ///
    /// `0` is a solid pie; anything larger carves a donut hole.
    pub inner_radius: f64,
    /// Pad angle subtracted across each slice's boundaries, in radians.
    pub pad_angle: f64,
    /// Curve flattening tolerance for sector paths.
    pub tolerance: f64,
}

/// One laid-out sector: slice angles, outline path, and label anchor.
#[derive(Clone, Debug)]
pub struct SectorShape {
    /// Label of the originating datum (the caller's key).
    pub label: String,
    /// Value of the originating datum, in data units.
    pub value: f64,
    /// The slice's angular interval.
    pub slice: ArcSlice,
    /// Flattened sector outline in bounded coordinates.
    pub path: BezPath,
    /// Label anchor: the sector centroid, or the chart center for a
    /// single-slice series.
    pub anchor: Point,
}

/// Pie chart layout output.
#[derive(Clone, Debug)]
pub struct PieChart {
    /// Chart center in bounded coordinates.
    pub center: Point,
    /// Inner radius in pixels.
    pub inner_radius: f64,
    /// Outer radius in pixels.
    pub outer_radius: f64,
    /// One sector per series entry, in series order.
    pub sectors: Vec<SectorShape>,
}

impl PieChartSpec {
    /// Creates a solid-pie spec with no pad angle.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            inner_radius: 0.0,
            pad_angle: 0.0,
            tolerance: DEFAULT_ARC_TOLERANCE,
        }
    }

    /// Sets the inner radius fraction (clamped to `[0, 1]` at layout).
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Sets the pad angle in radians.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Lays the series out as sectors around the bounded area's center.
    ///
    /// The outer radius is half the smaller bounded dimension, matching how
    /// a pie fills its frame. A collapsed viewport produces an empty chart;
    /// a zero value total or invalid value fails with [`LayoutError`].
    pub fn layout<D>(
        &self,
        series: &[D],
        label_of: impl Fn(&D) -> &str,
        value_of: impl Fn(&D) -> f64,
    ) -> Result<PieChart, LayoutError> {
        if self.viewport.is_collapsed() {
            return Ok(PieChart {
                center: Point::ZERO,
                inner_radius: 0.0,
                outer_radius: 0.0,
                sectors: Vec::new(),
            });
        }

        let bounded = self.viewport.bounded();
        let outer_radius = 0.5 * bounded.width.min(bounded.height);
        let inner_radius = outer_radius * self.inner_radius.clamp(0.0, 1.0);
        let center = Point::new(0.5 * bounded.width, 0.5 * bounded.height);

        let slices = layout_pie(series, &value_of, self.pad_angle)?;
        let single = slices.len() == 1;
        let sectors = slices
            .into_iter()
            .map(|slice| {
                let anchor = if single {
                    center
                } else {
                    centroid(center, inner_radius, outer_radius, &slice)
                };
                SectorShape {
                    label: String::from(label_of(&series[slice.index])),
                    value: slice.value,
                    path: sector_path(center, inner_radius, outer_radius, &slice, self.tolerance),
                    anchor,
                    slice,
                }
            })
            .collect();

        Ok(PieChart {
            center,
            inner_radius,
            outer_radius,
            sectors,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;
    use crate::viewport::Margins;

    struct Datum {
        label: &'static str,
        value: f64,
    }

    fn datum(label: &'static str, value: f64) -> Datum {
        Datum { label, value }
    }

    #[test]
    fn vertical_bar_chart_matches_the_worked_example() {
        // series [a: 0, b: 50], viewport 200x100, no margins, padding 0.
        let series = alloc::vec![datum("a", 0.0), datum("b", 50.0)];
        let spec = BarChartSpec::new(Viewport::new(200.0, 100.0), BarOrient::Vertical)
            .with_padding(0.0);
        let chart = spec.layout(&series, |d| d.label, |d| d.value).unwrap();

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].rect, Rect::new(0.0, 100.0, 100.0, 100.0));
        assert_eq!(chart.bars[1].rect, Rect::new(100.0, 0.0, 200.0, 100.0));

        // Band ticks center on the two 100px bands.
        let positions: Vec<f64> = chart.band_axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, alloc::vec![50.0, 150.0]);
        assert_eq!(chart.band_axis.orient, AxisOrient::Horizontal);

        // Value axis spans domain [0, 50] over range [100, 0].
        assert_eq!(chart.value_axis.orient, AxisOrient::Vertical);
        let first = chart.value_axis.ticks.first().unwrap();
        let last = chart.value_axis.ticks.last().unwrap();
        assert_eq!((first.position, first.label.as_str()), (100.0, "0"));
        assert_eq!((last.position, last.label.as_str()), (0.0, "50"));
    }

    #[test]
    fn horizontal_orientation_swaps_the_axes() {
        let series = alloc::vec![datum("a", 10.0), datum("b", 40.0)];
        let spec = BarChartSpec::new(Viewport::new(200.0, 100.0), BarOrient::Horizontal)
            .with_padding(0.0);
        let chart = spec.layout(&series, |d| d.label, |d| d.value).unwrap();

        assert_eq!(chart.band_axis.orient, AxisOrient::Vertical);
        assert_eq!(chart.value_axis.orient, AxisOrient::Horizontal);
        // Bands split the 100px height; values grow across the 200px width.
        assert_eq!(chart.bars[0].rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(chart.bars[1].rect, Rect::new(0.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn margins_shrink_the_bounded_area_but_not_the_cardinality() {
        let series = alloc::vec![datum("a", 1.0), datum("b", 2.0), datum("c", 3.0)];
        let viewport =
            Viewport::new(200.0, 100.0).with_margins(Margins::new(30.0, 30.0, 40.0, 45.0));
        let spec = BarChartSpec::new(viewport, BarOrient::Vertical);
        let chart = spec.layout(&series, |d| d.label, |d| d.value).unwrap();
        assert_eq!(chart.bars.len(), 3);
        for bar in &chart.bars {
            // Bounded area is 125x30.
            assert!(bar.rect.x1 <= 125.0 + 1e-9);
            assert!(bar.rect.y1 <= 30.0 + 1e-9);
        }
    }

    #[test]
    fn collapsed_viewport_renders_nothing() {
        let series = alloc::vec![datum("a", 1.0)];
        let viewport = Viewport::new(40.0, 40.0).with_margins(Margins::uniform(30.0));
        let bar = BarChartSpec::new(viewport, BarOrient::Vertical)
            .layout(&series, |d| d.label, |d| d.value)
            .unwrap();
        assert!(bar.bars.is_empty());
        assert!(bar.band_axis.is_empty());
        assert!(bar.value_axis.is_empty());

        let pie = PieChartSpec::new(viewport)
            .layout(&series, |d| d.label, |d| d.value)
            .unwrap();
        assert!(pie.sectors.is_empty());
        assert_eq!(pie.outer_radius, 0.0);
    }

    #[test]
    fn invalid_values_surface_from_the_chart_layer() {
        let series = alloc::vec![datum("a", 1.0), datum("b", f64::NAN)];
        let err = BarChartSpec::new(Viewport::new(100.0, 100.0), BarOrient::Vertical)
            .layout(&series, |d| d.label, |d| d.value)
            .unwrap_err();
        assert_eq!(err, LayoutError::NonFiniteValue { index: 1 });

        let series = alloc::vec![datum("a", 0.0), datum("b", 0.0)];
        let err = PieChartSpec::new(Viewport::new(100.0, 100.0))
            .layout(&series, |d| d.label, |d| d.value)
            .unwrap_err();
        assert_eq!(err, LayoutError::ZeroValueSum);
    }

    #[test]
    fn pie_fills_the_bounded_frame_from_its_center() {
        let series = alloc::vec![datum("a", 1.0), datum("b", 3.0)];
        let spec = PieChartSpec::new(Viewport::new(200.0, 100.0)).with_inner_radius(0.5);
        let chart = spec.layout(&series, |d| d.label, |d| d.value).unwrap();

        assert_eq!(chart.center, Point::new(100.0, 50.0));
        assert_eq!(chart.outer_radius, 50.0);
        assert_eq!(chart.inner_radius, 25.0);
        assert_eq!(chart.sectors.len(), 2);
        assert_eq!(chart.sectors[0].label, "a");
        // Anchors sit strictly between the hole and the rim.
        for s in &chart.sectors {
            let d = s.anchor.distance(chart.center);
            assert!(d > chart.inner_radius && d < chart.outer_radius);
        }
    }

    #[test]
    fn single_slice_anchors_at_the_chart_center() {
        let series = alloc::vec![datum("only", 5.0)];
        let chart = PieChartSpec::new(Viewport::new(100.0, 100.0))
            .layout(&series, |d| d.label, |d| d.value)
            .unwrap();
        assert_eq!(chart.sectors.len(), 1);
        assert_eq!(chart.sectors[0].anchor, chart.center);
        let slice = chart.sectors[0].slice;
        assert!((slice.span() - core::f64::consts::TAU).abs() < 1e-12);
    }
}
