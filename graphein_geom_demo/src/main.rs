// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout demos for `graphein_geom`.
//!
//! Each demo lays out the same small sample series and dumps the resulting
//! geometry as a standalone SVG file.

mod svg;

use graphein_geom::{
    AxisOrient, BarChartSpec, BarOrient, Margins, PieChartSpec, ScaleOrdinal, TickSet, Viewport,
};
use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::SvgDoc;

struct Pepper {
    label: &'static str,
    value: f64,
}

const PEPPERS: [Pepper; 5] = [
    Pepper { label: "ghost", value: 16.0 },
    Pepper { label: "jalapeño", value: 41.0 },
    Pepper { label: "habanero", value: 24.0 },
    Pepper { label: "bell", value: 50.0 },
    Pepper { label: "scotch", value: 20.0 },
];

const PALETTE: [Color; 5] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
];

const AXIS_COLOR: Color = css::BLACK;
const LABEL_FONT_SIZE: f64 = 12.0;

fn main() {
    let demos = [
        ("bar_chart.svg", bar_demo(BarOrient::Vertical)),
        ("horizontal_bar_chart.svg", bar_demo(BarOrient::Horizontal)),
        ("pie_chart.svg", pie_demo()),
    ];
    for (name, contents) in demos {
        std::fs::write(name, contents).expect("write demo svg");
        println!("wrote {name}");
    }
}

fn demo_viewport(width: f64, height: f64) -> Viewport {
    Viewport::new(width, height).with_margins(Margins::new(30.0, 30.0, 40.0, 45.0))
}

fn bar_demo(orient: BarOrient) -> String {
    let viewport = demo_viewport(480.0, 320.0);
    let chart = BarChartSpec::new(viewport, orient)
        .with_padding(0.1)
        .with_tick_count(5)
        .layout(&PEPPERS, |p| p.label, |p| p.value)
        .expect("sample series is valid");

    let colors = ScaleOrdinal::new(PEPPERS.iter().map(|p| p.label), PALETTE.to_vec());

    let mut doc = SvgDoc::new(viewport.width, viewport.height);
    doc.set_origin(viewport.bounds().origin());

    for bar in &chart.bars {
        let fill = colors.map(&bar.label).copied().unwrap_or(AXIS_COLOR);
        doc.push_rect(bar.rect, fill);
    }
    draw_axis(&mut doc, &chart.band_axis, viewport.bounded());
    draw_axis(&mut doc, &chart.value_axis, viewport.bounded());

    doc.finish()
}

fn pie_demo() -> String {
    let viewport = demo_viewport(360.0, 300.0);
    let chart = PieChartSpec::new(viewport)
        .with_inner_radius(0.4)
        .with_pad_angle(0.02)
        .layout(&PEPPERS, |p| p.label, |p| p.value)
        .expect("sample series is valid");

    let colors = ScaleOrdinal::new(PEPPERS.iter().map(|p| p.label), PALETTE.to_vec());

    let mut doc = SvgDoc::new(viewport.width, viewport.height);
    doc.set_origin(viewport.bounds().origin());

    for sector in &chart.sectors {
        let fill = colors.map(&sector.label).copied().unwrap_or(AXIS_COLOR);
        doc.push_path(&sector.path, fill);
        if sector.value > 0.0 {
            doc.push_text(
                sector.anchor,
                &format!("{}", sector.value),
                "middle",
                "middle",
                LABEL_FONT_SIZE,
                contrast_text_color(fill),
            );
        }
    }

    doc.finish()
}

/// Draws an axis rule, tick marks, and tick labels from a tick set.
///
/// Horizontal tick sets are placed along the bounded area's bottom edge,
/// vertical ones along its left edge.
fn draw_axis(doc: &mut SvgDoc, set: &TickSet, bounded: Size) {
    const TICK_LENGTH: f64 = 6.0;
    const TEXT_GAP: f64 = 3.0;

    match set.orient {
        AxisOrient::Horizontal => {
            let y = bounded.height;
            doc.push_line(
                Point::new(0.0, y),
                Point::new(bounded.width, y),
                AXIS_COLOR,
                1.0,
            );
            for tick in &set.ticks {
                doc.push_line(
                    Point::new(tick.position, y),
                    Point::new(tick.position, y + TICK_LENGTH),
                    AXIS_COLOR,
                    1.0,
                );
                doc.push_text(
                    Point::new(tick.position, y + TICK_LENGTH + TEXT_GAP),
                    &tick.label,
                    "middle",
                    "hanging",
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                );
            }
        }
        AxisOrient::Vertical => {
            doc.push_line(
                Point::new(0.0, 0.0),
                Point::new(0.0, bounded.height),
                AXIS_COLOR,
                1.0,
            );
            for tick in &set.ticks {
                doc.push_line(
                    Point::new(-TICK_LENGTH, tick.position),
                    Point::new(0.0, tick.position),
                    AXIS_COLOR,
                    1.0,
                );
                doc.push_text(
                    Point::new(-TICK_LENGTH - TEXT_GAP, tick.position),
                    &tick.label,
                    "end",
                    "middle",
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                );
            }
        }
    }
}

/// Picks black or white text for readability over the given fill.
fn contrast_text_color(fill: Color) -> Color {
    let rgba = fill.to_rgba8();
    let luma = 0.299 * f64::from(rgba.r) + 0.587 * f64::from(rgba.g) + 0.114 * f64::from(rgba.b);
    if luma > 128.0 { css::BLACK } else { css::WHITE }
}
