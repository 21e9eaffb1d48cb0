//! Output filename conventions.
//!
//! Every generated asset is a WebP file. Size-derived assets follow the
//! `{prefix}-{width}x{height}` pattern browsers and manifests expect:
//! - `favicon-32x32.webp`
//! - `icon-192x192.webp`
//! - `maskable-icon-512x512.webp`
//!
//! Named assets (`badge-72x72`, `shortcut-messages`, `home-screen`) keep their
//! configured stem and only gain the extension.

use crate::imaging::Size;

/// Extension shared by every generated asset.
pub const EXTENSION: &str = "webp";

pub const FAVICON_PREFIX: &str = "favicon";
pub const ICON_PREFIX: &str = "icon";
pub const MASKABLE_PREFIX: &str = "maskable-icon";

/// `"icon"`, 192×192 → `"icon-192x192.webp"`.
pub fn sized_file_name(prefix: &str, size: Size) -> String {
    format!("{prefix}-{size}.{EXTENSION}")
}

/// `"home-screen"` → `"home-screen.webp"`.
///
/// A stem that already carries the extension is returned unchanged.
pub fn named_file_name(stem: &str) -> String {
    let suffix = format!(".{EXTENSION}");
    if stem.ends_with(&suffix) {
        stem.to_string()
    } else {
        format!("{stem}{suffix}")
    }
}
