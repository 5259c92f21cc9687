use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::geometry::{PitchView, Point};
use crate::pitch::{Marking, pitch_markings};
use crate::raster::RasterSurface;
use crate::shot_map::DrawCommand;
use crate::style::ShotStyle;
use crate::surface::{Surface, TextAlign};
use crate::svg::SvgSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(anyhow!("unsupported output format {other:?}")),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Grid layout: title band, pitch band, endnote band, as fractions of the
/// figure height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    pub width_px: u32,
    pub pad_px: u32,
    pub title_height: f64,
    pub endnote_height: f64,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            width_px: 1000,
            pad_px: 30,
            title_height: 0.06,
            endnote_height: 0.04,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub title_band: f64,
    pub endnote_band: f64,
    pub pitch_origin: Point,
    pub scale: f64,
}

impl FigureLayout {
    pub fn frame(&self, view: &PitchView) -> Frame {
        let (units_w, units_h) = view.canvas_units();
        let pad = self.pad_px as f64;
        let scale = ((self.width_px as f64) - 2.0 * pad).max(1.0) / units_w;
        let pitch_band = units_h * scale + 2.0 * pad;
        let grid_share = (1.0 - self.title_height - self.endnote_height).clamp(0.1, 1.0);
        let height = (pitch_band / grid_share).ceil();
        let title_band = height * self.title_height;
        Frame {
            width: self.width_px,
            height: height as u32,
            title_band,
            endnote_band: height * self.endnote_height,
            pitch_origin: Point::new(pad, title_band + pad),
            scale,
        }
    }
}

impl Frame {
    pub fn to_px(&self, view: &PitchView, p: Point) -> Point {
        let c = view.to_canvas(p);
        Point::new(
            self.pitch_origin.x + c.x * self.scale,
            self.pitch_origin.y + c.y * self.scale,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub name: String,
    pub title: String,
    pub endnote: Option<String>,
    pub view: PitchView,
    pub commands: Vec<DrawCommand>,
}

pub fn draw_figure<S: Surface>(figure: &Figure, style: &ShotStyle, frame: &Frame, surface: &mut S) {
    let view = &figure.view;
    surface.fill_background(style.background);

    for marking in pitch_markings(view) {
        match marking {
            Marking::Polyline(points) => {
                let px: Vec<Point> = points.iter().map(|p| frame.to_px(view, *p)).collect();
                surface.polyline(&px, style.line_color, style.line_width);
            }
            Marking::Spot(p) => {
                let r = (0.4 * frame.scale).max(1.5);
                surface.circle(frame.to_px(view, p), r, style.line_color, 1.0, None);
            }
        }
    }

    // A label belongs to the circle drawn just before it.
    let mut hidden = false;
    for cmd in &figure.commands {
        match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
                opacity,
                outline,
            } => {
                hidden = !view.contains(*center);
                if hidden {
                    debug!(x = center.x, y = center.y, figure = %figure.name, "shot outside view");
                    continue;
                }
                surface.circle(
                    frame.to_px(view, *center),
                    radius * frame.scale,
                    *color,
                    *opacity,
                    *outline,
                );
            }
            DrawCommand::Label {
                text,
                anchor,
                color,
                font_px,
            } => {
                if hidden {
                    continue;
                }
                surface.text(frame.to_px(view, *anchor), text, *color, *font_px, TextAlign::Left);
            }
        }
    }

    let (width, height) = surface.size();
    surface.text(
        Point::new(width as f64 / 2.0, frame.title_band * 0.8),
        &figure.title,
        style.label_color,
        style.title_font_px,
        TextAlign::Center,
    );
    if let Some(endnote) = figure.endnote.as_deref() {
        surface.text(
            Point::new(frame.pitch_origin.x, height as f64 - frame.endnote_band * 0.35),
            endnote,
            style.label_color,
            style.endnote_font_px,
            TextAlign::Left,
        );
    }
}

pub fn save_figure(
    figure: &Figure,
    style: &ShotStyle,
    layout: &FigureLayout,
    format: OutputFormat,
    font: Option<&FontVec>,
    out_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;
    let path = out_dir.join(format!("{}.{}", figure.name, format.extension()));
    let frame = layout.frame(&figure.view);

    match format {
        OutputFormat::Png => {
            let mut surface = RasterSurface::new(frame.width, frame.height, font);
            draw_figure(figure, style, &frame, &mut surface);
            surface
                .into_image()
                .save(&path)
                .with_context(|| format!("write {}", path.display()))?;
        }
        OutputFormat::Svg => {
            let mut surface = SvgSurface::new(frame.width, frame.height);
            draw_figure(figure, style, &frame, &mut surface);
            fs::write(&path, surface.finish()).with_context(|| format!("write {}", path.display()))?;
        }
    }
    Ok(path)
}

/// File-name-safe form of a team name.
pub fn slugify(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() {
        "team".to_string()
    } else {
        trimmed.to_string()
    }
}
