// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale types: the coordinate mappings every chart layout starts from.
//!
//! A scale is split into a *spec* (domain + options, decided when the chart is
//! described) and an *instance* (spec bound to a pixel range, produced at
//! layout time once the bounded viewport is known).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A contiguous interval assigned to one label by a band scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Interval start in range units.
    pub start: f64,
    /// Interval width in range units.
    pub bandwidth: f64,
}

impl Band {
    /// Returns the midpoint of the band, where an axis tick centers on it.
    pub fn center(&self) -> f64 {
        self.start + 0.5 * self.bandwidth
    }
}

/// A discrete band scale mapping labels to contiguous intervals of the range.
///
/// Labels partition the range in first-occurrence order with uniform padding
/// between and around bands. Inverted ranges are normalized: bands always run
/// from the lower range endpoint upward, in domain order.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding: f64,
}

/// Specification for a band scale (label domain + padding, no range yet).
#[derive(Clone, Debug)]
pub struct ScaleBandSpec {
    labels: Vec<String>,
    padding: f64,
}

impl ScaleBand {
    /// Creates a band scale over `range` for the given label domain.
    ///
    /// Duplicate labels collapse to the band of their first occurrence.
    /// `padding` is a fraction of the band step, clamped to `[0, 1]`;
    /// `0` means bands touch, `1` shrinks every band to zero width.
    pub fn new<I, S>(labels: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.into();
            if !index.contains_key(&label) {
                index.insert(label.clone(), unique.len());
                unique.push(label);
            }
        }
        Self {
            labels: unique,
            index,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Returns the label domain in first-occurrence order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the configured padding fraction.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    fn step(&self) -> f64 {
        let n = self.labels.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let span = (r1 - r0).abs();
        span / (n - self.padding + n * self.padding)
    }

    /// Returns the computed band width.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Returns the band assigned to `label`, or `None` for an unknown label
    /// (and always `None` on an empty domain).
    pub fn band(&self, label: &str) -> Option<Band> {
        let i = *self.index.get(label)?;
        Some(self.band_at(i))
    }

    /// Returns the band at a domain index.
    ///
    /// Panics if `index >= self.len()`.
    pub fn band_at(&self, index: usize) -> Band {
        assert!(index < self.labels.len(), "band index out of domain");
        let (r0, r1) = self.range;
        let start = if r1 >= r0 { r0 } else { r1 };
        let step = self.step();
        Band {
            start: start + step * index as f64 + 0.5 * step * self.padding,
            bandwidth: self.bandwidth(),
        }
    }
}

impl ScaleBandSpec {
    /// Creates a band scale spec with no padding.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            padding: 0.0,
        }
    }

    /// Sets the padding fraction (clamped to `[0, 1]` at instantiation).
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(self.labels.iter().cloned(), range, self.padding)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
///
/// The mapping is a plain affine transform; inverted ranges (and domains) need
/// no special-casing. A zero-span domain maps every value to `range.0`.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain only, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" round tick values lying within the domain.
    ///
    /// The step is the `{1, 2, 5} × 10^k` value nearest to `span / count`;
    /// ticks are the multiples of that step inside the domain, inclusive of
    /// endpoints that fall on the grid.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        domain_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

fn domain_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count.max(1) as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).ceil();
    let stop = (max / step).floor();

    let n_f = (stop - start).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        return Vec::new();
    };
    (0..=n).map(|i| (start + i as f64) * step).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tick steps stay many orders of magnitude inside the i32 exponent range"
    )]
    let base = 10_f64.powi(power.clamp(-300.0, 300.0) as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
