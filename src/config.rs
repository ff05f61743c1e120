// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration.
//!
//! Everything that used to be a hard-coded constant (release code, manual
//! overrides, colours, figure geometry, file locations) lives here and is
//! passed by reference into the classifier, the renderer and the
//! diagnostics. Defaults reproduce the stock SeedSigner map.

use crate::error::{MapError, MapResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "worldmap.yaml";

/// Points per inch of the SVG user space.
pub const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub release_code: String,
    /// Lowercase names that are always highlighted, whatever the lists say.
    pub manual_overrides: Vec<String>,
    pub colors: Palette,
    pub figure: FigureSettings,
    pub paths: InputPaths,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            release_code: "v0.8.6".to_string(),
            manual_overrides: vec!["venezuela".to_string(), "bolivia".to_string()],
            colors: Palette::default(),
            figure: FigureSettings::default(),
            paths: InputPaths::default(),
        }
    }
}

impl MapConfig {
    /// Load `worldmap.yaml` from the working directory, or fall back to the
    /// built-in defaults when it does not exist.
    pub fn load_default() -> MapResult<Self> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> MapResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| MapError::io(path, err))?;
        Self::from_yaml(&raw)
            .map_err(|err| MapError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn from_yaml(raw: &str) -> MapResult<Self> {
        let config: MapConfig =
            serde_yaml::from_str(raw).map_err(|err| MapError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MapResult<()> {
        let figure = &self.figure;
        if !(figure.width_in > 0.0 && figure.height_in > 0.0) {
            return Err(MapError::Config(format!(
                "figure size must be positive, got {}x{} in",
                figure.width_in, figure.height_in
            )));
        }
        if figure.dpi == 0 {
            return Err(MapError::Config("dpi must be greater than zero".to_string()));
        }
        if figure.padding_in < 0.0 || figure.logo_height_in < 0.0 || figure.label_size_pt <= 0.0 {
            return Err(MapError::Config(
                "padding, logo height and label size must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn png_path(&self) -> PathBuf {
        self.paths.output_dir.join("world_map.png")
    }

    pub fn svg_path(&self) -> PathBuf {
        self.paths.output_dir.join("world_map.svg")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub country: Color,
    pub country_edge: Color,
    pub accent: Color,
    pub highlight_edge: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1a, 0x1a, 0x1a),
            country: Color::rgb(0x32, 0x32, 0x32),
            country_edge: Color::rgb(0x22, 0x28, 0x31),
            accent: Color::rgb(0xff, 0x9f, 0x0a),
            highlight_edge: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSettings {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub padding_in: f64,
    pub logo_height_in: f64,
    pub label_size_pt: f64,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            width_in: 16.0,
            height_in: 9.0,
            dpi: 400,
            padding_in: 0.1,
            logo_height_in: 0.6,
            label_size_pt: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub highlighted: PathBuf,
    pub partial: PathBuf,
    pub shapefile: PathBuf,
    pub logo: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            highlighted: PathBuf::from("highlighted_countries.txt"),
            partial: PathBuf::from("partially_supported_countries.txt"),
            shapefile: PathBuf::from("data/ne_110m_admin_0_countries.shp"),
            logo: PathBuf::from("logo.png"),
            output_dir: PathBuf::from("."),
        }
    }
}

/// An opaque sRGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let hex = value.trim();
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("colour {:?} must start with '#'", value))?;
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(format!("colour {:?} must be #rgb or #rrggbb", value)),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| format!("colour {:?} is not valid hex", value))
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_map() {
        let config = MapConfig::default();
        assert_eq!(config.release_code, "v0.8.6");
        assert_eq!(config.manual_overrides, vec!["venezuela", "bolivia"]);
        assert_eq!(config.colors.accent.to_string(), "#ff9f0a");
        assert_eq!(config.figure.dpi, 400);
        assert_eq!(config.png_path(), PathBuf::from("./world_map.png"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = MapConfig::from_yaml(
            "release_code: v0.9.0\ncolors:\n  accent: \"#00ff00\"\nfigure:\n  dpi: 100\n",
        )
        .expect("config should parse");
        assert_eq!(config.release_code, "v0.9.0");
        assert_eq!(config.colors.accent, Color::rgb(0, 255, 0));
        assert_eq!(config.colors.background, Palette::default().background);
        assert_eq!(config.figure.dpi, 100);
        assert_eq!(config.figure.width_in, 16.0);
        assert_eq!(config.paths, InputPaths::default());
    }

    #[test]
    fn bad_colour_rejected() {
        assert!(MapConfig::from_yaml("colors:\n  accent: orange\n").is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!("#fff".parse::<Color>(), Ok(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn zero_dpi_rejected() {
        let err = MapConfig::from_yaml("figure:\n  dpi: 0\n").unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }
}
