// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure scale/shape layout math for charts.
//!
//! This crate is the geometry half of a charting stack:
//! - **Scales** map labels and values into bounded pixel coordinates.
//! - **Shape layout** turns a data series into positioned descriptors — bar
//!   rectangles, pie sector paths, axis tick sets — ready for a renderer.
//!
//! Everything is a pure function of its inputs: no caching, no shared state,
//! no I/O. Rendering, transition animation, and interaction are downstream
//! concerns that consume these descriptors; the demo crate shows one such
//! consumer dumping them to SVG.
//!
//! Callers describe their data with two accessors (`label_of`, `value_of`)
//! over an opaque datum type, so no particular record shape is required.

#![no_std]

extern crate alloc;

mod axis;
mod bar;
mod chart;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod ordinal;
mod pie;
mod scale;
mod series;
mod viewport;

pub use axis::{AxisOrient, Tick, TickSet, band_ticks, linear_ticks};
pub use bar::{BarOrient, BarRect, layout_bars};
pub use chart::{BarChart, BarChartSpec, PieChart, PieChartSpec, SectorShape};
pub use error::LayoutError;
pub use format::format_tick_with_step;
pub use ordinal::ScaleOrdinal;
pub use pie::{ArcSlice, DEFAULT_ARC_TOLERANCE, centroid, layout_pie, sector_path};
pub use scale::{Band, ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
pub use viewport::{Margins, Viewport};
