//! Asset configuration.
//!
//! The stock defaults below *are* the asset lists: which favicons, icons,
//! screenshots and PWA assets get generated, at which sizes, into which
//! directories. An optional `assets.toml` can override any of it.
//!
//! ## Config File Location
//!
//! `assets.toml` in the working directory, or the file given with `--config`.
//! A missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "src/assets/base-logo.webp"  # Logo every asset is derived from
//! public_dir = "public"                  # Root all output dirs are relative to
//! quality = 90                           # Lossy WebP quality (1-100)
//!
//! [favicons]
//! dir = "assets/favicons"
//! sizes = [[16, 16], [32, 32], [48, 48]]
//!
//! [icons]
//! dir = "images/icons"
//! sizes = [[72, 72], [96, 96], ...]
//!
//! [[icons.special]]
//! name = "badge-72x72"
//! size = [72, 72]
//!
//! [screenshots]
//! dir = "images/screenshots"
//!
//! [[screenshots.assets]]
//! name = "home-screen"
//! size = [1280, 720]
//!
//! [pwa]
//! maskable_sizes = [[192, 192], [512, 512]]
//! safe_zone = 0.7
//! wide_name = "wide-dashboard"
//! wide_size = [1920, 1080]
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key; arrays replace the stock list wholesale:
//!
//! ```toml
//! # Only add a 64px favicon
//! [favicons]
//! sizes = [[16, 16], [32, 32], [48, 48], [64, 64]]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{Size, WEBP_MAX_EDGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Asset configuration loaded from `assets.toml`.
///
/// All fields have defaults reproducing the conventional PWA asset set. User
/// config files need only specify the values they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Source logo every asset is derived from.
    pub source: String,
    /// Web root; every output directory is relative to it.
    pub public_dir: String,
    /// Lossy WebP quality shared by all assets.
    pub quality: u32,
    pub favicons: FaviconsConfig,
    pub icons: IconsConfig,
    pub screenshots: ScreenshotsConfig,
    pub pwa: PwaConfig,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            source: "src/assets/base-logo.webp".to_string(),
            public_dir: "public".to_string(),
            quality: 90,
            favicons: FaviconsConfig::default(),
            icons: IconsConfig::default(),
            screenshots: ScreenshotsConfig::default(),
            pwa: PwaConfig::default(),
        }
    }
}

/// An asset with a fixed name rather than a size-derived one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedAsset {
    /// File stem; `.webp` is appended.
    pub name: String,
    pub size: Size,
}

impl NamedAsset {
    pub fn new(name: &str, size: Size) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

/// Browser tab favicons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconsConfig {
    pub dir: String,
    pub sizes: Vec<Size>,
}

impl Default for FaviconsConfig {
    fn default() -> Self {
        Self {
            dir: "assets/favicons".to_string(),
            sizes: [16, 32, 48].into_iter().map(Size::square).collect(),
        }
    }
}

/// App icons plus badge, shortcut and Apple launch images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsConfig {
    pub dir: String,
    /// Square app icons, named `icon-{w}x{h}`.
    pub sizes: Vec<Size>,
    /// Individually named icons written next to the app icons.
    pub special: Vec<NamedAsset>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            dir: "images/icons".to_string(),
            sizes: [72, 96, 128, 144, 152, 167, 180, 192, 384, 512]
                .into_iter()
                .map(Size::square)
                .collect(),
            special: vec![
                NamedAsset::new("badge-72x72", Size::square(72)),
                NamedAsset::new("shortcut-appointments", Size::square(192)),
                NamedAsset::new("shortcut-messages", Size::square(192)),
                NamedAsset::new("apple-launch-750x1334", Size::new(750, 1334)),
                NamedAsset::new("apple-launch-1125x2436", Size::new(1125, 2436)),
            ],
        }
    }
}

/// Placeholder screenshots: the logo stretched to a screen size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenshotsConfig {
    pub dir: String,
    pub assets: Vec<NamedAsset>,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        let hd = Size::new(1280, 720);
        Self {
            dir: "images/screenshots".to_string(),
            assets: vec![
                NamedAsset::new("home-screen", hd),
                NamedAsset::new("appointment-screen", hd),
                NamedAsset::new("profile-screen", hd),
            ],
        }
    }
}

/// Maskable icons and the wide dashboard mockup.
///
/// Maskable icons land in the icons directory, the mockup in the
/// screenshots directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PwaConfig {
    pub maskable_sizes: Vec<Size>,
    /// Fraction of the canvas edge the logo covers, in (0, 1].
    pub safe_zone: f64,
    pub wide_name: String,
    pub wide_size: Size,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            maskable_sizes: vec![Size::square(192), Size::square(512)],
            safe_zone: 0.7,
            wide_name: "wide-dashboard".to_string(),
            wide_size: Size::new(1920, 1080),
        }
    }
}

impl AssetConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        if !(self.pwa.safe_zone > 0.0 && self.pwa.safe_zone <= 1.0) {
            return Err(ConfigError::Validation(
                "pwa.safe_zone must be in (0, 1]".into(),
            ));
        }

        let sized = [
            ("favicons.sizes", &self.favicons.sizes),
            ("icons.sizes", &self.icons.sizes),
            ("pwa.maskable_sizes", &self.pwa.maskable_sizes),
        ];
        for (key, sizes) in sized {
            for &size in sizes.iter() {
                check_size(key, size)?;
            }
        }
        check_size("pwa.wide_size", self.pwa.wide_size)?;

        let named = [
            ("icons.special", &self.icons.special),
            ("screenshots.assets", &self.screenshots.assets),
        ];
        for (key, assets) in named {
            for asset in assets {
                if asset.name.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{key} entries need a name"
                    )));
                }
                check_size(&format!("{key} '{}'", asset.name), asset.size)?;
            }
        }
        Ok(())
    }
}

/// Every size must be non-zero and encodable as WebP.
fn check_size(key: &str, size: Size) -> Result<(), ConfigError> {
    if size.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{key} has empty size {size}"
        )));
    }
    if size.exceeds_webp_limit() {
        return Err(ConfigError::Validation(format!(
            "{key} size {size} exceeds the WebP limit of {WEBP_MAX_EDGE}px per edge"
        )));
    }
    Ok(())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(AssetConfig::default()).map_err(|e| {
        ConfigError::Validation(format!("default config failed to serialize: {e}"))
    })
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<AssetConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AssetConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the TOML file at `path`.
///
/// A missing file yields the stock defaults. Returns `Err` if the file exists
/// but is invalid TOML, has unknown keys, or fails validation.
pub fn load_config(path: &Path) -> Result<AssetConfig, ConfigError> {
    if !path.exists() {
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `assets.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# PWA Asset Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key by key with these defaults; lists replace them wholesale.
# Unknown keys will cause an error.

# Logo every asset is derived from
source = "src/assets/base-logo.webp"

# Web root; every output directory below is relative to it
public_dir = "public"

# Lossy WebP quality for all generated assets (1-100)
quality = 90

# ---------------------------------------------------------------------------
# Favicons: favicon-{w}x{h}.webp
# ---------------------------------------------------------------------------
[favicons]
dir = "assets/favicons"
sizes = [[16, 16], [32, 32], [48, 48]]

# ---------------------------------------------------------------------------
# App icons: icon-{w}x{h}.webp, plus individually named icons
# ---------------------------------------------------------------------------
[icons]
dir = "images/icons"
sizes = [
    [72, 72], [96, 96], [128, 128], [144, 144], [152, 152],
    [167, 167], [180, 180], [192, 192], [384, 384], [512, 512],
]

[[icons.special]]
name = "badge-72x72"
size = [72, 72]

[[icons.special]]
name = "shortcut-appointments"
size = [192, 192]

[[icons.special]]
name = "shortcut-messages"
size = [192, 192]

[[icons.special]]
name = "apple-launch-750x1334"
size = [750, 1334]

[[icons.special]]
name = "apple-launch-1125x2436"
size = [1125, 2436]

# ---------------------------------------------------------------------------
# Placeholder screenshots: the logo stretched to screen size
# ---------------------------------------------------------------------------
[screenshots]
dir = "images/screenshots"

[[screenshots.assets]]
name = "home-screen"
size = [1280, 720]

[[screenshots.assets]]
name = "appointment-screen"
size = [1280, 720]

[[screenshots.assets]]
name = "profile-screen"
size = [1280, 720]

# ---------------------------------------------------------------------------
# PWA assets
# ---------------------------------------------------------------------------
# Maskable icons go to icons.dir as maskable-icon-{w}x{h}.webp.
# The wide dashboard mockup goes to screenshots.dir.
[pwa]
maskable_sizes = [[192, 192], [512, 512]]

# Fraction of the icon edge covered by the logo; the rest is transparent
# padding that OS icon masks may crop.
safe_zone = 0.7

wide_name = "wide-dashboard"
wide_size = [1920, 1080]
"##
}
