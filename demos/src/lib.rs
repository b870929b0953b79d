// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the runnable demos: logging setup and a small SVG canvas.

use core::fmt::Write as _;

use garden_bed_paint::{Canvas, HAlign, RectShape, TextLabel, VAlign};
use garden_bed_tree::{Color, Paint};
use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    if tracing::dispatcher::has_been_set() {
        return;
    }
    if let Err(e) = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
    {
        eprintln!("Error: Failed to set up logging: {e}");
    }
}

/// Renders a figure as an SVG document.
///
/// Bed coordinates have y pointing up; SVG has y pointing down, so every shape
/// is flipped inside the viewport.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    out: String,
    viewport: Rect,
}

impl SvgCanvas {
    /// The document written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the canvas and return the document.
    pub fn into_string(self) -> String {
        self.out
    }

    fn flip_y(&self, y: f64) -> f64 {
        self.viewport.y1 - (y - self.viewport.y0)
    }
}

fn css_color(color: Color) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        color.r,
        color.g,
        color.b,
        f64::from(color.a) / 255.0
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

fn css_paint(paint: Option<&Paint>) -> String {
    match paint {
        None => "none".into(),
        Some(Paint::Rgba(c)) => css_color(*c),
        Some(Paint::Named(name)) => name.clone(),
    }
}

impl Canvas for SvgCanvas {
    type Error = core::fmt::Error;

    fn begin(
        &mut self,
        viewport: Rect,
        size_inches: Size,
        _hide_ticks: bool,
    ) -> Result<(), Self::Error> {
        self.viewport = viewport;
        self.out.clear();
        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}in" height="{}in" viewBox="{} {} {} {}">"#,
            size_inches.width,
            size_inches.height,
            viewport.x0,
            viewport.y0,
            viewport.width(),
            viewport.height()
        )
    }

    fn fill_rect(&mut self, rect: &RectShape) -> Result<(), Self::Error> {
        let r = rect.rect();
        writeln!(
            self.out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="0.05"/>"#,
            r.x0,
            self.flip_y(r.y1),
            r.width(),
            r.height(),
            css_paint(rect.fill.as_ref()),
            css_color(rect.edge)
        )
    }

    fn draw_text(&mut self, label: &TextLabel) -> Result<(), Self::Error> {
        let anchor = match label.align.horizontal {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        };
        let baseline = match label.align.vertical {
            VAlign::Top => "hanging",
            VAlign::Center => "central",
            VAlign::Bottom => "alphabetic",
        };
        writeln!(
            self.out,
            r#"  <text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}" font-size="0.5">{}</text>"#,
            label.position.x,
            self.flip_y(label.position.y),
            css_color(label.color),
            escape(&label.text)
        )
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.out.push_str("</svg>\n");
        Ok(())
    }
}
