use anyhow::{Result, anyhow};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("red", Color::RED),
    ("blue", Color::BLUE),
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("green", Color::rgb(0, 128, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("grey", Color::rgb(128, 128, 128)),
];

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts a color name (`red`) or `#rrggbb`.
    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim().to_ascii_lowercase();
        if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == value) {
            return Ok(*color);
        }
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("unknown color {raw:?}"))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("expected #rrggbb, got {raw:?}"));
        }
        let channel = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 2], 16)
                .map_err(|_| anyhow!("invalid hex digits in {raw:?}"))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn describe(&self) -> String {
        self.name()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Primary,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOpacity {
    Full,
    Translucent,
}

/// Marker style derived for a single shot.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStyle {
    pub fill_opacity: FillOpacity,
    pub label: Option<String>,
    pub color_key: TeamSide,
}

/// Every visual constant used when drawing shot maps.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotStyle {
    pub circle_radius: f64,
    pub goal_opacity: f32,
    pub miss_opacity: f32,
    pub primary_color: Color,
    pub opponent_color: Color,
    pub label_offset: Point,
    pub label_color: Color,
    pub label_font_px: f32,
    pub title_font_px: f32,
    pub endnote_font_px: f32,
    pub batch_outline: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub background: Color,
}

impl Default for ShotStyle {
    fn default() -> Self {
        Self {
            circle_radius: 2.0,
            goal_opacity: 1.0,
            miss_opacity: 0.2,
            primary_color: Color::RED,
            opponent_color: Color::BLUE,
            label_offset: Point::new(1.0, -2.0),
            label_color: Color::BLACK,
            label_font_px: 16.0,
            title_font_px: 30.0,
            endnote_font_px: 14.0,
            batch_outline: Color::BLACK,
            line_color: Color::BLACK,
            line_width: 2.0,
            background: Color::WHITE,
        }
    }
}

impl ShotStyle {
    pub fn team_color(&self, side: TeamSide) -> Color {
        match side {
            TeamSide::Primary => self.primary_color,
            TeamSide::Opponent => self.opponent_color,
        }
    }

    pub fn alpha(&self, opacity: FillOpacity) -> f32 {
        match opacity {
            FillOpacity::Full => self.goal_opacity,
            FillOpacity::Translucent => self.miss_opacity,
        }
    }
}
