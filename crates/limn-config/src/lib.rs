//! Configuration: render style (font family / size / color) and scroll
//! behavior, loaded from `limn.toml`.
//!
//! The style sets are enumerated, matching the toolbar collaborator's combo
//! boxes: selecting from them changes how the document is rendered, never
//! the document content. Unknown TOML fields are ignored and parse errors
//! fall back to defaults, so a broken config never prevents startup.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Font families offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    CourierNew,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str().eq_ignore_ascii_case(name))
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Point sizes offered by the toolbar.
pub const FONT_SIZES: [u16; 7] = [12, 14, 16, 18, 20, 22, 24];

/// Snap an arbitrary size to the nearest offered point size.
pub fn snap_font_size(size: u16) -> u16 {
    FONT_SIZES
        .into_iter()
        .min_by_key(|s| s.abs_diff(size))
        .unwrap_or(FONT_SIZES[0])
}

/// Font colors offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
}

impl FontColor {
    pub const ALL: [FontColor; 4] = [
        FontColor::Black,
        FontColor::Red,
        FontColor::Blue,
        FontColor::Green,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontColor::Black => "black",
            FontColor::Red => "red",
            FontColor::Blue => "blue",
            FontColor::Green => "green",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// The active render style. Document content is independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub family: FontFamily,
    pub size_pt: StylePt,
    pub color: FontColor,
}

/// Newtype keeping the point size inside the offered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePt(u16);

impl Default for StylePt {
    fn default() -> Self {
        Self(FONT_SIZES[0])
    }
}

impl StylePt {
    pub fn new(size: u16) -> Self {
        Self(snap_font_size(size))
    }
    pub fn get(self) -> u16 {
        self.0
    }
    pub fn larger(self) -> Self {
        let i = FONT_SIZES.iter().position(|s| *s == self.0).unwrap_or(0);
        Self(FONT_SIZES[(i + 1).min(FONT_SIZES.len() - 1)])
    }
    pub fn smaller(self) -> Self {
        let i = FONT_SIZES.iter().position(|s| *s == self.0).unwrap_or(0);
        Self(FONT_SIZES[i.saturating_sub(1)])
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FontConfig {
    #[serde(default = "FontConfig::default_family")]
    pub family: String,
    #[serde(default = "FontConfig::default_size")]
    pub size: u16,
    #[serde(default = "FontConfig::default_color")]
    pub color: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: Self::default_family(),
            size: Self::default_size(),
            color: Self::default_color(),
        }
    }
}

impl FontConfig {
    fn default_family() -> String {
        FontFamily::Arial.as_str().to_string()
    }
    const fn default_size() -> u16 {
        12
    }
    fn default_color() -> String {
        FontColor::Black.as_str().to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScrollConfig {
    /// Rows kept visible above/below the caret while scrolling.
    #[serde(default)]
    pub margin: u16,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub file: ConfigFile,
}

impl Config {
    /// Resolve the configured style, falling back field-wise on unknown
    /// names (a typoed family must not discard the configured color).
    pub fn style(&self) -> Style {
        let font = &self.file.font;
        let family = FontFamily::from_name(&font.family).unwrap_or_else(|| {
            warn!(target: "config", family = font.family.as_str(), "unknown_font_family");
            FontFamily::default()
        });
        let color = FontColor::from_name(&font.color).unwrap_or_else(|| {
            warn!(target: "config", color = font.color.as_str(), "unknown_font_color");
            FontColor::default()
        });
        Style {
            family,
            size_pt: StylePt::new(font.size),
            color,
        }
    }

    pub fn scroll_margin(&self) -> usize {
        self.file.scroll.margin as usize
    }
}

/// Best-effort config path: working directory `limn.toml` first, then the
/// platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("limn.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("limn").join("limn.toml");
    }
    PathBuf::from("limn.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(target: "config", path = %path.display(), "config_loaded");
                Ok(Config { file })
            }
            Err(e) => {
                warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_limn__.toml"))).unwrap();
        let style = cfg.style();
        assert_eq!(style.family, FontFamily::Arial);
        assert_eq!(style.size_pt.get(), 12);
        assert_eq!(style.color, FontColor::Black);
        assert_eq!(cfg.scroll_margin(), 0);
    }

    #[test]
    fn parses_font_and_scroll_sections() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[font]\nfamily = \"Courier New\"\nsize = 18\ncolor = \"blue\"\n[scroll]\nmargin = 2\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let style = cfg.style();
        assert_eq!(style.family, FontFamily::CourierNew);
        assert_eq!(style.size_pt.get(), 18);
        assert_eq!(style.color, FontColor::Blue);
        assert_eq!(cfg.scroll_margin(), 2);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[font\nfamily=").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.style().family, FontFamily::Arial);
    }

    #[test]
    fn unknown_names_fall_back_field_wise() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[font]\nfamily = \"Comic Sans\"\ncolor = \"green\"\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let style = cfg.style();
        assert_eq!(style.family, FontFamily::Arial);
        assert_eq!(style.color, FontColor::Green);
    }

    #[test]
    fn sizes_snap_to_offered_set() {
        assert_eq!(snap_font_size(12), 12);
        assert_eq!(snap_font_size(13), 12);
        assert_eq!(snap_font_size(17), 16);
        assert_eq!(snap_font_size(99), 24);
    }

    #[test]
    fn size_stepping_saturates_at_set_bounds() {
        let mut pt = StylePt::new(22);
        pt = pt.larger();
        assert_eq!(pt.get(), 24);
        pt = pt.larger();
        assert_eq!(pt.get(), 24);
        let mut pt = StylePt::new(14);
        pt = pt.smaller();
        assert_eq!(pt.get(), 12);
        pt = pt.smaller();
        assert_eq!(pt.get(), 12);
    }

    #[test]
    fn family_and_color_cycles_cover_the_sets() {
        let mut f = FontFamily::Arial;
        for _ in 0..FontFamily::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, FontFamily::Arial);
        let mut c = FontColor::Black;
        for _ in 0..FontColor::ALL.len() {
            c = c.next();
        }
        assert_eq!(c, FontColor::Black);
    }
}
