use crate::geometry::Point;
use crate::style::Color;
use crate::surface::{Surface, TextAlign};

pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_background(&mut self, color: Color) {
        self.body.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>
"#,
            self.width,
            self.height,
            color.to_hex()
        ));
    }

    fn polyline(&mut self, points: &[Point], color: Color, width: f64) {
        if points.len() < 2 {
            return;
        }
        let coords = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{:.2}"/>
"#,
            coords,
            color.to_hex(),
            width
        ));
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Color, opacity: f32, outline: Option<Color>) {
        let stroke = outline
            .map(|c| format!(r#" stroke="{}" stroke-width="1""#, c.to_hex()))
            .unwrap_or_default();
        self.body.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}"{}/>
"#,
            center.x,
            center.y,
            radius,
            fill.to_hex(),
            opacity,
            stroke
        ));
    }

    fn text(&mut self, anchor: Point, text: &str, color: Color, size_px: f32, align: TextAlign) {
        let anchor_attr = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
        };
        self.body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}px" fill="{}" text-anchor="{}">{}</text>
"#,
            anchor.x,
            anchor.y,
            size_px,
            color.to_hex(),
            anchor_attr,
            escape_xml(text)
        ));
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
