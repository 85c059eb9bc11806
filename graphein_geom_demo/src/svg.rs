// Copyright 2025 the Graphein Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `graphein_geom_demo`.

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;

/// A tiny SVG document builder.
///
/// All drawing calls take coordinates relative to the current origin, which
/// the demos set to the bounded area's top-left corner so layout output can
/// be passed through unchanged.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    width: f64,
    height: f64,
    origin: Point,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin: Point::ZERO,
            body: String::new(),
        }
    }

    /// Sets the origin added to all subsequent coordinates.
    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub(crate) fn push_rect(&mut self, rect: Rect, fill: Color) {
        let rect = rect + self.origin.to_vec2();
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex_color(fill),
        ));
        self.body.push('\n');
    }

    pub(crate) fn push_path(&mut self, path: &BezPath, fill: Color) {
        let path = Affine::translate(self.origin.to_vec2()) * path.clone();
        self.body.push_str(&format!(
            r#"<path d="{}" fill="{}"/>"#,
            path.to_svg(),
            hex_color(fill),
        ));
        self.body.push('\n');
    }

    pub(crate) fn push_line(&mut self, from: Point, to: Point, stroke: Color, width: f64) {
        let from = from + self.origin.to_vec2();
        let to = to + self.origin.to_vec2();
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            hex_color(stroke),
            width,
        ));
        self.body.push('\n');
    }

    pub(crate) fn push_text(
        &mut self,
        at: Point,
        text: &str,
        anchor: &str,
        baseline: &str,
        font_size: f64,
        fill: Color,
    ) {
        let at = at + self.origin.to_vec2();
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="{}" fill="{}">{}</text>"#,
            at.x,
            at.y,
            font_size,
            anchor,
            baseline,
            hex_color(fill),
            escape_xml(text),
        ));
        self.body.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height,
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
