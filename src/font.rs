use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use anyhow::{Context, Result};
use tracing::{debug, warn};

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font_file(path: &Path) -> Result<FontVec> {
    let bytes = fs::read(path).with_context(|| format!("read font {}", path.display()))?;
    FontVec::try_from_vec(bytes).with_context(|| format!("parse font {}", path.display()))
}

/// An explicitly configured font must load; otherwise the first system font
/// that parses is used, and `None` means labels and titles are not drawn.
pub fn load_font(explicit: Option<&Path>) -> Result<Option<FontVec>> {
    if let Some(path) = explicit {
        return load_font_file(path).map(Some);
    }
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        match load_font_file(path) {
            Ok(font) => {
                debug!(font = %path.display(), "loaded system font");
                return Ok(Some(font));
            }
            Err(err) => debug!("skipping font {}: {err:#}", path.display()),
        }
    }
    warn!("no usable font found; set SHOTMAP_FONT to draw labels");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_font_is_an_error() {
        let err = load_font(Some(Path::new("/nonexistent/shotmap-font.ttf"))).unwrap_err();
        assert!(err.to_string().contains("read font"));
    }
}
