//! # PWA Assets
//!
//! Derive every favicon, app icon, maskable icon and placeholder screenshot a
//! progressive web app needs from one source logo.
//!
//! # Procedures
//!
//! ```text
//! favicons  logo  →  public/assets/favicons/     (16, 32, 48)
//! icons     logo  →  public/images/icons/        (72…512, badge, shortcuts, launch)
//!                 →  public/images/screenshots/  (three 1280×720 placeholders)
//! pwa       logo  →  public/images/icons/        (maskable 192, 512)
//!                 →  public/images/screenshots/  (1920×1080 dashboard mockup)
//! ```
//!
//! Each procedure reads the same source independently; no asset depends on
//! another. Reruns overwrite outputs with identical files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Plans and runs the three procedures, recording per-asset outcomes |
//! | [`imaging`] | Resize, maskable and mockup composites, WebP encoding |
//! | [`config`] | Stock asset lists and optional `assets.toml` overrides |
//! | [`naming`] | `{prefix}-{w}x{h}.webp` filename convention |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## WebP Only
//!
//! Every asset is lossy WebP at quality 90. The `image` crate only encodes
//! lossless WebP, so encoding goes through `libwebp` via the `webp` crate.
//!
//! ## Stretch, Don't Letterbox
//!
//! Plain assets are resized to exactly the requested size, even when that
//! distorts a square logo into a 750×1334 launch image. Output dimensions
//! always match the request.
//!
//! ## Report and Continue
//!
//! A failing asset is reported with its path and the run carries on. The
//! process exits successfully even when individual assets failed.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
