//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`generate`](crate::generate) module (which decides
//! which assets to create) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing orchestration logic.
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1-100, default 90). Clamped on construction.
//! - [`Size`]: Target pixel dimensions of an asset.
//! - [`SafeZone`]: Fraction of a maskable icon's edge covered by the logo.
//! - [`ResizeParams`]: Stretch the source to an exact size.
//! - [`MaskableParams`]: Center the source inside a transparent safe-zone canvas.
//! - [`MockupParams`]: Paint a dashboard mockup with the source as its logo.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Largest edge libwebp can encode.
pub const WEBP_MAX_EDGE: u32 = 16383;

/// Pixel dimensions of a generated asset.
///
/// Serialized as a `[width, height]` pair so config files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether either edge is past [`WEBP_MAX_EDGE`].
    pub fn exceeds_webp_limit(self) -> bool {
        self.width > WEBP_MAX_EDGE || self.height > WEBP_MAX_EDGE
    }
}

impl From<[u32; 2]> for Size {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [u32; 2] {
    fn from(size: Size) -> Self {
        [size.width, size.height]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fraction of a maskable icon's edge occupied by the visible logo.
///
/// Installable-app icon masks may crop anything outside the central 80%
/// circle; 0.7 leaves comfortable margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZone(pub f64);

impl SafeZone {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SafeZone {
    fn default() -> Self {
        Self(0.7)
    }
}

/// Parameters for a plain resize: stretch `source` to exactly `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: Size,
    pub quality: Quality,
}

/// Parameters for a maskable icon composite.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskableParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: Size,
    pub safe_zone: SafeZone,
    pub quality: Quality,
}

/// Parameters for the wide dashboard mockup.
#[derive(Debug, Clone, PartialEq)]
pub struct MockupParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: Size,
    pub quality: Quality,
}
