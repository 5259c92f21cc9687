use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

use crate::event_fetch::EventSource;
use crate::figure::{FigureLayout, OutputFormat};
use crate::geometry::PitchGeometry;
use crate::style::{Color, ShotStyle};

pub const DEFAULT_MATCH_ID: u64 = 69301;
const DEFAULT_OUT_DIR: &str = "shot_maps";

// (environment variable, command-line flag). Within one layer, settings apply
// in this order, so an events file set alongside a base url wins.
const SETTINGS: &[(&str, &str)] = &[
    ("SHOTMAP_MATCH_ID", "--match-id"),
    ("SHOTMAP_EVENTS_BASE_URL", "--base-url"),
    ("SHOTMAP_EVENTS_FILE", "--events"),
    ("SHOTMAP_PRIMARY_TEAM", "--team"),
    ("SHOTMAP_OUT_DIR", "--out"),
    ("SHOTMAP_FORMAT", "--format"),
    ("SHOTMAP_FONT", "--font"),
    ("SHOTMAP_EXPORT_XLSX", "--xlsx"),
    ("SHOTMAP_WIDTH_PX", "--width"),
    ("SHOTMAP_PRIMARY_COLOR", "--primary-color"),
    ("SHOTMAP_OPPONENT_COLOR", "--opponent-color"),
    ("SHOTMAP_MISS_OPACITY", "--miss-opacity"),
    ("SHOTMAP_CIRCLE_RADIUS", "--circle-radius"),
];

const FLAGS: &[&str] = &["--xlsx"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub match_id: u64,
    pub source: EventSource,
    pub primary_team: Option<String>,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub font_path: Option<PathBuf>,
    pub export_xlsx: bool,
    pub layout: FigureLayout,
    pub geometry: PitchGeometry,
    pub style: ShotStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            match_id: DEFAULT_MATCH_ID,
            source: EventSource::default(),
            primary_team: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: OutputFormat::Png,
            font_path: None,
            export_xlsx: false,
            layout: FigureLayout::default(),
            geometry: PitchGeometry::STATSBOMB,
            style: ShotStyle::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup(VAR)`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        for (key, _) in SETTINGS {
            let Some(raw) = lookup(key) else {
                continue;
            };
            if raw.trim().is_empty() {
                continue;
            }
            config.apply_setting(key, &raw)?;
        }
        Ok(config)
    }

    /// Applies `--flag=value` / `--flag value` arguments on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut pending: Vec<(usize, &str, String)> = Vec::new();
        let mut idx = 0;
        while idx < args.len() {
            let arg = args[idx].as_str();
            idx += 1;
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg, None),
            };
            let Some(rank) = SETTINGS.iter().position(|(_, f)| *f == flag) else {
                bail!("unknown argument {arg:?}");
            };
            let value = match inline {
                Some(value) => value,
                None if FLAGS.contains(&flag) => "true".to_string(),
                None => {
                    let Some(next) = args.get(idx) else {
                        bail!("missing value for {flag}");
                    };
                    idx += 1;
                    next.clone()
                }
            };
            pending.push((rank, SETTINGS[rank].0, value));
        }
        // Stable: repeated flags keep their command-line order.
        pending.sort_by_key(|(rank, _, _)| *rank);
        for (_, key, value) in pending {
            self.apply_setting(key, &value)?;
        }
        Ok(())
    }

    fn apply_setting(&mut self, key: &str, raw: &str) -> Result<()> {
        let value = raw.trim();
        match key {
            "SHOTMAP_MATCH_ID" => self.match_id = parse_number(key, value)?,
            "SHOTMAP_EVENTS_FILE" => self.source = EventSource::File(PathBuf::from(value)),
            "SHOTMAP_EVENTS_BASE_URL" => {
                self.source = EventSource::Remote {
                    base_url: value.to_string(),
                }
            }
            "SHOTMAP_PRIMARY_TEAM" => {
                self.primary_team = Some(value.to_string()).filter(|v| !v.is_empty())
            }
            "SHOTMAP_OUT_DIR" => self.out_dir = PathBuf::from(value),
            "SHOTMAP_FORMAT" => {
                self.format = OutputFormat::parse(value).with_context(|| key.to_string())?
            }
            "SHOTMAP_FONT" => self.font_path = Some(PathBuf::from(value)),
            "SHOTMAP_EXPORT_XLSX" => self.export_xlsx = parse_bool(key, value)?,
            "SHOTMAP_WIDTH_PX" => {
                let width: u32 = parse_number(key, value)?;
                if width < 200 {
                    bail!("{key} must be at least 200, got {width}");
                }
                self.layout.width_px = width;
            }
            "SHOTMAP_PRIMARY_COLOR" => {
                self.style.primary_color = Color::parse(value).with_context(|| key.to_string())?
            }
            "SHOTMAP_OPPONENT_COLOR" => {
                self.style.opponent_color = Color::parse(value).with_context(|| key.to_string())?
            }
            "SHOTMAP_MISS_OPACITY" => {
                let opacity: f32 = parse_number(key, value)?;
                if !(0.0..=1.0).contains(&opacity) {
                    bail!("{key} must be within 0..=1, got {opacity}");
                }
                self.style.miss_opacity = opacity;
            }
            "SHOTMAP_CIRCLE_RADIUS" => {
                let radius: f64 = parse_number(key, value)?;
                if radius <= 0.0 || !radius.is_finite() {
                    bail!("{key} must be positive, got {radius}");
                }
                self.style.circle_radius = radius;
            }
            other => bail!("unknown setting {other}"),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|err| anyhow!("{key}: invalid value {value:?}: {err}"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("{key}: expected a boolean, got {value:?}")),
    }
}
