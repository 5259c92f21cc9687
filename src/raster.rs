use ab_glyph::{FontVec, PxScale};
use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut, text_size};
use tracing::warn;

use crate::geometry::Point;
use crate::style::Color;
use crate::surface::{Surface, TextAlign};

pub struct RasterSurface<'f> {
    image: RgbaImage,
    font: Option<&'f FontVec>,
    warned_missing_font: bool,
}

fn rgba(color: Color, opacity: f32) -> Rgba<u8> {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([color.r, color.g, color.b, alpha])
}

impl<'f> RasterSurface<'f> {
    pub fn new(width: u32, height: u32, font: Option<&'f FontVec>) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
            font,
            warned_missing_font: false,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.get_pixel_mut(x as u32, y as u32).blend(&color);
    }
}

impl Surface for RasterSurface<'_> {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_background(&mut self, color: Color) {
        let fill = rgba(color, 1.0);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let stroke = rgba(color, 1.0);
        let passes = width.round().max(1.0) as i32;
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let len = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            if len == 0.0 {
                continue;
            }
            // Unit normal, used to thicken the one-pixel segment.
            let (nx, ny) = (-(b.y - a.y) / len, (b.x - a.x) / len);
            for k in 0..passes {
                let off = k as f64 - (passes - 1) as f64 / 2.0;
                draw_line_segment_mut(
                    &mut self.image,
                    ((a.x + nx * off) as f32, (a.y + ny * off) as f32),
                    ((b.x + nx * off) as f32, (b.y + ny * off) as f32),
                    stroke,
                );
            }
        }
    }

    // Scanline fill so each pixel is blended exactly once.
    fn circle(&mut self, center: Point, radius: f64, fill: Color, opacity: f32, outline: Option<Color>) {
        let color = rgba(fill, opacity);
        let r = radius.max(0.5);
        let y_min = (center.y - r).floor() as i64;
        let y_max = (center.y + r).ceil() as i64;
        for py in y_min..=y_max {
            let dy = py as f64 + 0.5 - center.y;
            if dy.abs() > r {
                continue;
            }
            let half = (r * r - dy * dy).sqrt();
            let x_start = (center.x - half - 0.5).ceil() as i64;
            let x_end = (center.x + half - 0.5).floor() as i64;
            for px in x_start..=x_end {
                self.blend_pixel(px, py, color);
            }
        }
        if let Some(edge) = outline {
            draw_hollow_circle_mut(
                &mut self.image,
                (center.x.round() as i32, center.y.round() as i32),
                r.round() as i32,
                rgba(edge, 1.0),
            );
        }
    }

    fn text(&mut self, anchor: Point, text: &str, color: Color, size_px: f32, align: TextAlign) {
        let Some(font) = self.font else {
            if !self.warned_missing_font {
                warn!("no font loaded, text is skipped");
                self.warned_missing_font = true;
            }
            return;
        };
        if text.is_empty() {
            return;
        }
        let scale = PxScale::from(size_px);
        let (w, h) = text_size(scale, font, text);
        let x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - w as f64 / 2.0,
        };
        let y = anchor.y - h as f64;
        draw_text_mut(
            &mut self.image,
            rgba(color, 1.0),
            x.round() as i32,
            y.round() as i32,
            scale,
            font,
            text,
        );
    }
}
