// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and margin arithmetic.
//!
//! All shape placement happens in the *bounded* coordinate space: the
//! viewport with its margins subtracted. A viewport fully consumed by its
//! margins is not an error; it collapses to an empty bounded area and layout
//! produces no shapes.

use kurbo::{Rect, Size};

/// Margins around the bounded area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the bounded area.
    pub top: f64,
    /// Space to the right of the bounded area.
    pub right: f64,
    /// Space below the bounded area.
    pub bottom: f64,
    /// Space to the left of the bounded area.
    pub left: f64,
}

impl Margins {
    /// Creates margins from the conventional top/right/bottom/left order.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform margins on all four sides.
    pub fn uniform(m: f64) -> Self {
        Self::new(m, m, m, m)
    }
}

/// A pixel viewport plus margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Total width in pixels.
    pub width: f64,
    /// Total height in pixels.
    pub height: f64,
    /// Margins subtracted from the viewport to form the bounded area.
    pub margins: Margins,
}

impl Viewport {
    /// Creates a viewport with no margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns the bounded size: viewport minus margins, clamped at zero.
    pub fn bounded(&self) -> Size {
        let m = self.margins;
        Size::new(
            (self.width - m.left - m.right).max(0.0),
            (self.height - m.top - m.bottom).max(0.0),
        )
    }

    /// Returns the bounded rectangle in viewport coordinates.
    pub fn bounds(&self) -> Rect {
        let b = self.bounded();
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.margins.left + b.width,
            self.margins.top + b.height,
        )
    }

    /// Returns `true` when the bounded area has no extent on either axis.
    ///
    /// Layout over a collapsed viewport renders nothing rather than failing.
    pub fn is_collapsed(&self) -> bool {
        let b = self.bounded();
        b.width <= 0.0 || b.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bounded_size_subtracts_margins() {
        let vp = Viewport::new(200.0, 100.0).with_margins(Margins::new(30.0, 30.0, 40.0, 45.0));
        let b = vp.bounded();
        assert_eq!(b.width, 125.0);
        assert_eq!(b.height, 30.0);
        assert!(!vp.is_collapsed());
    }

    #[test]
    fn bounds_rect_is_offset_by_the_margins() {
        let vp = Viewport::new(200.0, 100.0).with_margins(Margins::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(vp.bounds(), Rect::new(40.0, 10.0, 180.0, 70.0));
    }

    #[test]
    fn oversized_margins_collapse_instead_of_going_negative() {
        let vp = Viewport::new(50.0, 50.0).with_margins(Margins::uniform(40.0));
        let b = vp.bounded();
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
        assert!(vp.is_collapsed());
    }

    #[test]
    fn zero_viewport_is_collapsed() {
        assert!(Viewport::new(0.0, 0.0).is_collapsed());
        assert!(Viewport::new(100.0, 0.0).is_collapsed());
    }
}
