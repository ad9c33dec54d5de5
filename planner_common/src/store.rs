//! Persistent defaults store.
//!
//! A single TOML archive of named constants (labels, paths, colors, fonts,
//! image filters, figure size, display resolution) written once per release
//! and read at startup. The path configuration never reads or writes it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::info;

use crate::consts::STORE_TIMESTAMP_FORMAT;

/// Defaults store error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store file could not be read or written.
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store could not be encoded as TOML.
    #[error("failed to encode store: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Store contents are not valid.
    #[error("failed to decode store: {0}")]
    Decode(#[from] toml::de::Error),

    /// Color string is not `#RRGGBB`.
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

// ─── Hex Color ──────────────────────────────────────────────────────

/// RGB color serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── File Filter ────────────────────────────────────────────────────

/// Named file-dialog filter, e.g. `Images` = `*.jpg *.png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    pub label: String,
    /// Space-separated `*.ext` glob patterns.
    pub patterns: String,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, patterns: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            patterns: patterns.into(),
        }
    }

    /// Extensions named by the patterns, without the `*.` prefix.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .split_whitespace()
            .filter_map(|p| p.strip_prefix("*."))
    }

    /// True if the file name's extension matches one of the patterns
    /// (case-insensitive).
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions().any(|p| p.eq_ignore_ascii_case(ext))
    }
}

// ─── Palette & Fonts ────────────────────────────────────────────────

/// GUI colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub black: HexColor,
    pub white: HexColor,
    pub offwhite: HexColor,
    pub darkgreen: HexColor,
    pub lightgreen: HexColor,
    pub red: HexColor,
    pub cherryred: HexColor,
    pub hotpink: HexColor,
    pub hotgreen: HexColor,
    pub hotyellow: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black: HexColor::rgb(0, 0, 0),
            white: HexColor::rgb(150, 150, 150),
            offwhite: HexColor::rgb(58, 58, 58),
            darkgreen: HexColor::rgb(0, 121, 52),
            lightgreen: HexColor::rgb(132, 182, 65),
            red: HexColor::rgb(136, 51, 46),
            cherryred: HexColor::rgb(200, 0, 0),
            hotpink: HexColor::rgb(255, 0, 153),
            hotgreen: HexColor::rgb(118, 255, 3),
            hotyellow: HexColor::rgb(247, 236, 18),
        }
    }
}

/// GUI font sizes and families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    pub size_large: u32,
    pub size_small: u32,
    /// Normal font family.
    pub normal: String,
    /// Fixed-width font family.
    pub uniform: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            size_large: 14,
            size_small: 10,
            normal: "Arial".to_string(),
            uniform: "Consolas".to_string(),
        }
    }
}

// ─── Embedded Settings ──────────────────────────────────────────────

/// Contents of the persistent defaults store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedSettings {
    /// Write time, `%Y/%m/%d %H:%M:%S` local time.
    pub timestamp: String,
    /// Home (code) directory.
    pub dir_home: PathBuf,
    /// Persistent variables directory.
    pub dir_pvars: PathBuf,
    pub software_name: String,
    /// Figure size [in, in].
    pub fig_size: [u32; 2],
    /// Displayed image resolution factor.
    pub disp_res: u32,
    pub colors: Palette,
    pub fonts: Fonts,
    pub recognized_image_extensions: Vec<FileFilter>,
}

impl EmbeddedSettings {
    /// Built-in constants stamped with the current local time.
    pub fn current() -> Self {
        Self::with_timestamp(
            chrono::Local::now()
                .format(STORE_TIMESTAMP_FORMAT)
                .to_string(),
        )
    }

    /// Built-in constants with an explicit timestamp.
    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            dir_home: PathBuf::from("../code/"),
            dir_pvars: PathBuf::from("../vars/"),
            software_name: "4265 Path Planner".to_string(),
            fig_size: [25, 25],
            disp_res: 10,
            colors: Palette::default(),
            fonts: Fonts::default(),
            recognized_image_extensions: vec![FileFilter::new(
                "Images",
                "*.jpg *.jpeg *.png *.tif *.tiff",
            )],
        }
    }

    /// True if `path` matches any recognized image filter.
    pub fn is_recognized_image(&self, path: &Path) -> bool {
        self.recognized_image_extensions
            .iter()
            .any(|f| f.matches(path))
    }
}

/// Write the store, creating parent directories as needed.
pub fn write_store(path: &Path, settings: &EmbeddedSettings) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)?;

    info!(path = %path.display(), timestamp = %settings.timestamp, "embedded settings saved");
    Ok(())
}

/// Load the store written by [`write_store`].
pub fn load_store(path: &Path) -> Result<EmbeddedSettings, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: EmbeddedSettings = toml::from_str(&content)?;
    info!(path = %path.display(), timestamp = %settings.timestamp, "embedded settings loaded");
    Ok(settings)
}
