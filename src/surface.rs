use crate::geometry::Point;
use crate::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Pixel-space drawing target. Text anchors sit on the baseline.
pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn fill_background(&mut self, color: Color);

    fn polyline(&mut self, points: &[Point], color: Color, width: f64);

    fn circle(&mut self, center: Point, radius: f64, fill: Color, opacity: f32, outline: Option<Color>);

    fn text(&mut self, anchor: Point, text: &str, color: Color, size_px: f32, align: TextAlign);
}
