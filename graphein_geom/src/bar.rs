// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry.
//!
//! Bars measure a value against a zero baseline: the discrete scale places
//! the bar across the band axis, the linear scale sizes it along the value
//! axis. Orientation decides which screen axis is which.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::scale::{Band, ScaleBand, ScaleLinear};

/// Which screen axis carries the bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarOrient {
    /// Bands along x, values grow upward from the bottom edge.
    Vertical,
    /// Bands along y, values grow rightward from the left edge.
    Horizontal,
}

/// One bar: the originating label/value pair plus its screen rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    /// Label of the originating datum (the caller's key).
    pub label: String,
    /// Value of the originating datum, in data units.
    pub value: f64,
    /// Bar geometry in bounded coordinates.
    pub rect: Rect,
}

/// Computes one rectangle per series entry, in series order.
///
/// Every entry produces exactly one rect: a zero value yields a zero-size
/// bar, never an omitted one, and a label missing from the band domain
/// degenerates to a zero-width band at the range start. For
/// [`BarOrient::Vertical`] the linear scale is expected to map the domain
/// onto `(bounded.height, 0)`; for [`BarOrient::Horizontal`] onto
/// `(0, bounded.width)`.
pub fn layout_bars<D>(
    series: &[D],
    label_of: impl Fn(&D) -> &str,
    value_of: impl Fn(&D) -> f64,
    band: &ScaleBand,
    linear: &ScaleLinear,
    orient: BarOrient,
    bounded: Size,
) -> Vec<BarRect> {
    series
        .iter()
        .map(|d| {
            let label = label_of(d);
            let value = value_of(d);
            let b = band.band(label).unwrap_or(Band {
                start: 0.0,
                bandwidth: 0.0,
            });
            let v = linear.map(value);
            let rect = match orient {
                BarOrient::Vertical => {
                    let h = (bounded.height - v).max(0.0);
                    Rect::new(b.start, v, b.start + b.bandwidth, v + h)
                }
                BarOrient::Horizontal => {
                    let w = v.max(0.0);
                    Rect::new(0.0, b.start, w, b.start + b.bandwidth)
                }
            };
            BarRect {
                label: String::from(label),
                value,
                rect,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec};

    struct Pepper {
        label: &'static str,
        value: f64,
    }

    fn series() -> Vec<Pepper> {
        alloc::vec![
            Pepper { label: "ghost", value: 16.0 },
            Pepper { label: "habanero", value: 0.0 },
            Pepper { label: "bell", value: 50.0 },
        ]
    }

    fn scales(
        series: &[Pepper],
        band_range: (f64, f64),
        linear_range: (f64, f64),
    ) -> (ScaleBand, ScaleLinear) {
        let band = ScaleBandSpec::new(series.iter().map(|p| p.label))
            .with_padding(0.0)
            .instantiate(band_range);
        let linear = ScaleLinearSpec::new((0.0, 50.0)).instantiate(linear_range);
        (band, linear)
    }

    #[test]
    fn every_entry_yields_one_rect_in_series_order() {
        let series = series();
        for (orient, band_range, linear_range) in [
            (BarOrient::Vertical, (0.0, 120.0), (90.0, 0.0)),
            (BarOrient::Horizontal, (0.0, 90.0), (0.0, 120.0)),
        ] {
            let (band, linear) = scales(&series, band_range, linear_range);
            let bars = layout_bars(
                &series,
                |p| p.label,
                |p| p.value,
                &band,
                &linear,
                orient,
                Size::new(120.0, 90.0),
            );
            assert_eq!(bars.len(), series.len());
            for (bar, p) in bars.iter().zip(&series) {
                assert_eq!(bar.label, p.label);
                assert!(bar.rect.width() >= 0.0);
                assert!(bar.rect.height() >= 0.0);
            }
        }
    }

    #[test]
    fn zero_value_produces_a_zero_size_bar_not_an_omission() {
        let series = series();
        let (band, linear) = scales(&series, (0.0, 120.0), (90.0, 0.0));
        let bars = layout_bars(
            &series,
            |p| p.label,
            |p| p.value,
            &band,
            &linear,
            BarOrient::Vertical,
            Size::new(120.0, 90.0),
        );
        assert_eq!(bars[1].rect.height(), 0.0);
        assert!(bars[1].rect.width() > 0.0);

        let (band, linear) = scales(&series, (0.0, 90.0), (0.0, 120.0));
        let bars = layout_bars(
            &series,
            |p| p.label,
            |p| p.value,
            &band,
            &linear,
            BarOrient::Horizontal,
            Size::new(120.0, 90.0),
        );
        assert_eq!(bars[1].rect.width(), 0.0);
        assert!(bars[1].rect.height() > 0.0);
    }

    #[test]
    fn vertical_bars_grow_up_from_the_bottom_edge() {
        let series = series();
        let (band, linear) = scales(&series, (0.0, 120.0), (90.0, 0.0));
        let bars = layout_bars(
            &series,
            |p| p.label,
            |p| p.value,
            &band,
            &linear,
            BarOrient::Vertical,
            Size::new(120.0, 90.0),
        );
        // Every bar's base sits on the bottom edge of the bounded area.
        for bar in &bars {
            assert!((bar.rect.y1 - 90.0).abs() < 1e-9);
        }
        // The full-scale value spans the whole bounded height.
        assert!((bars[2].rect.y0 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn horizontal_bars_grow_right_from_the_left_edge() {
        let series = series();
        let (band, linear) = scales(&series, (0.0, 90.0), (0.0, 120.0));
        let bars = layout_bars(
            &series,
            |p| p.label,
            |p| p.value,
            &band,
            &linear,
            BarOrient::Horizontal,
            Size::new(120.0, 90.0),
        );
        for bar in &bars {
            assert_eq!(bar.rect.x0, 0.0);
        }
        assert!((bars[2].rect.x1 - 120.0).abs() < 1e-9);
    }
}
