//! Pure Rust pixel work plus `libwebp` for lossy encoding.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Paste with alpha | per-channel mask blend (`paste_masked`) |
//! | Opaque paste / flat fill | `image::imageops::replace` |
//! | Encode → WebP (lossy) | `webp::Encoder` |
//!
//! Every operation decodes the source afresh, so one unreadable source fails
//! each asset on its own rather than the whole run.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{Layer, calculate_dashboard_layers, calculate_maskable_placement};
use super::params::{MaskableParams, MockupParams, ResizeParams, SafeZone, Size, WEBP_MAX_EDGE};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgba, RgbaImage, RgbImage};
use std::path::Path;

/// Fully transparent white, the maskable canvas fill.
const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from content, so a mislabeled extension still loads.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

fn ensure_drawable(size: Size) -> Result<(), BackendError> {
    if size.is_empty() {
        return Err(BackendError::ProcessingFailed(format!(
            "Invalid target size {size}"
        )));
    }
    if size.exceeds_webp_limit() {
        return Err(BackendError::ProcessingFailed(format!(
            "Target size {size} exceeds the WebP limit of {WEBP_MAX_EDGE}px per edge"
        )));
    }
    Ok(())
}

/// Stretch `img` to exactly `size`. Aspect ratio is not preserved.
pub fn stretch(img: &DynamicImage, size: Size) -> Result<DynamicImage, BackendError> {
    ensure_drawable(size)?;
    Ok(img.resize_exact(size.width, size.height, FilterType::Lanczos3))
}

/// Paste `top` onto `canvas` at `(x, y)`.
///
/// Any layout with an alpha channel (`La8`, `Rgba8`, `La16`, `Rgba16`,
/// `Rgba32F`) is pasted through its own alpha as a mask, see
/// [`paste_masked`]. Sources without one land as an opaque rectangle.
fn paste(canvas: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let rgba = top.to_rgba8();
    if top.color().has_alpha() {
        paste_masked(canvas, &rgba, x, y);
    } else {
        imageops::replace(canvas, &rgba, x as i64, y as i64);
    }
}

/// Blend every channel, alpha included, toward `top` by its alpha.
///
/// With `m = alpha / 255` each output channel is `top * m + canvas * (1 - m)`,
/// rounded to nearest. On the transparent maskable canvas a half-transparent
/// black pixel therefore lands at about `(127, 127, 127, 64)`. Pixels past the
/// canvas edge are clipped.
fn paste_masked(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    for (tx, ty, src) in top.enumerate_pixels() {
        let (Some(cx), Some(cy)) = (x.checked_add(tx), y.checked_add(ty)) else {
            continue;
        };
        if cx >= canvas_w || cy >= canvas_h {
            continue;
        }
        let mask = src[3] as u32;
        let dst = canvas.get_pixel_mut(cx, cy);
        for c in 0..4 {
            let blended = src[c] as u32 * mask + dst[c] as u32 * (255 - mask);
            dst[c] = ((blended + 127) / 255) as u8;
        }
    }
}

/// Build a maskable icon: the source scaled to the safe zone and centered on
/// a transparent canvas of `size`.
pub fn compose_maskable(
    img: &DynamicImage,
    size: Size,
    safe_zone: SafeZone,
) -> Result<RgbaImage, BackendError> {
    ensure_drawable(size)?;
    let placement = calculate_maskable_placement(size, safe_zone);
    if placement.icon_edge == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "Safe zone {} leaves no room for the icon at {size}",
            safe_zone.value()
        )));
    }

    let mut canvas = RgbaImage::from_pixel(size.width, size.height, TRANSPARENT);
    let icon = stretch(img, Size::square(placement.icon_edge))?;
    paste(&mut canvas, &icon, placement.x, placement.y);
    Ok(canvas)
}

/// Paint the dashboard mockup with `logo` in its header.
pub fn compose_dashboard(logo: &DynamicImage, size: Size) -> Result<RgbImage, BackendError> {
    ensure_drawable(size)?;
    let mut canvas = RgbaImage::new(size.width, size.height);

    for layer in calculate_dashboard_layers(size) {
        match layer {
            Layer::Fill { rect, color } => {
                let [r, g, b] = color;
                let block = RgbaImage::from_pixel(rect.width, rect.height, Rgba([r, g, b, 255]));
                imageops::replace(&mut canvas, &block, rect.x as i64, rect.y as i64);
            }
            Layer::Logo(rect) => {
                let resized = stretch(logo, Size::new(rect.width, rect.height))?;
                paste(&mut canvas, &resized, rect.x, rect.y);
            }
        }
    }

    Ok(DynamicImage::ImageRgba8(canvas).into_rgb8())
}

/// Encode as lossy WebP and write to `path`.
///
/// `libwebp` only takes 8-bit RGB or RGBA, so other layouts are converted
/// first. Alpha is kept when the image has it.
pub fn save_webp(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let normalized = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => None,
        other if other.color().has_alpha() => Some(DynamicImage::ImageRgba8(other.to_rgba8())),
        other => Some(DynamicImage::ImageRgb8(other.to_rgb8())),
    };
    let img = normalized.as_ref().unwrap_or(img);

    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {}", e)))?;
    let encoded = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e:?}")))?;
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = stretch(&img, params.size)?;
        save_webp(&resized, &params.output, params.quality.value())
    }

    fn maskable(&self, params: &MaskableParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let icon = compose_maskable(&img, params.size, params.safe_zone)?;
        save_webp(
            &DynamicImage::ImageRgba8(icon),
            &params.output,
            params.quality.value(),
        )
    }

    fn mockup(&self, params: &MockupParams) -> Result<(), BackendError> {
        let logo = load_image(&params.source)?;
        let mockup = compose_dashboard(&logo, params.size)?;
        save_webp(
            &DynamicImage::ImageRgb8(mockup),
            &params.output,
            params.quality.value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::calculations::{SLATE_100, WHITE};
    use crate::imaging::params::Quality;
    use crate::test_helpers::{create_test_png, opaque_logo, split_alpha_logo};

    fn alpha_bounding_box(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, px) in img.enumerate_pixels() {
            if px[3] == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }

    fn is_webp(path: &Path) -> bool {
        let bytes = std::fs::read(path).unwrap();
        bytes.len() > 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
    }

    // =========================================================================
    // Resize
    // =========================================================================

    #[test]
    fn resize_stretches_to_exact_non_square_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 200, 200);

        let output = tmp.path().join("apple-launch-750x1334.webp");
        RustBackend::new()
            .resize(&ResizeParams {
                source,
                output: output.clone(),
                size: Size::new(750, 1334),
                quality: Quality::default(),
            })
            .unwrap();

        assert!(is_webp(&output));
        assert_eq!(image::image_dimensions(&output).unwrap(), (750, 1334));
    }

    #[test]
    fn resize_upscales_small_source() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 16, 16);

        let output = tmp.path().join("icon-512x512.webp");
        RustBackend::new()
            .resize(&ResizeParams {
                source,
                output: output.clone(),
                size: Size::square(512),
                quality: Quality::default(),
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (512, 512));
    }

    #[test]
    fn resize_missing_source_errors_without_writing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("icon.webp");

        let result = RustBackend::new().resize(&ResizeParams {
            source: tmp.path().join("missing.webp"),
            output: output.clone(),
            size: Size::square(72),
            quality: Quality::default(),
        });

        assert!(matches!(result, Err(BackendError::Io(_))));
        assert!(!output.exists());
    }

    #[test]
    fn resize_undecodable_source_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.webp");
        std::fs::write(&source, b"definitely not an image").unwrap();

        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: tmp.path().join("icon.webp"),
            size: Size::square(72),
            quality: Quality::default(),
        });

        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn stretch_rejects_zero_size() {
        let result = stretch(&opaque_logo(10, 10), Size::new(0, 10));
        assert!(result.is_err());
    }

    #[test]
    fn resize_past_webp_limit_errors_without_writing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 16, 16);

        let output = tmp.path().join("too-wide.webp");
        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: output.clone(),
            size: Size::new(17000, 1),
            quality: Quality::default(),
        });

        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
        assert!(!output.exists());
    }

    #[test]
    fn resize_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 120, 80);

        let output = tmp.path().join("icon-96x96.webp");
        let params = ResizeParams {
            source,
            output: output.clone(),
            size: Size::square(96),
            quality: Quality::default(),
        };
        let backend = RustBackend::new();

        backend.resize(&params).unwrap();
        let first = std::fs::read(&output).unwrap();
        backend.resize(&params).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    // =========================================================================
    // Maskable
    // =========================================================================

    #[test]
    fn maskable_192_foreground_is_134_at_offset_29() {
        let icon =
            compose_maskable(&opaque_logo(300, 300), Size::square(192), SafeZone(0.7)).unwrap();

        assert_eq!(icon.dimensions(), (192, 192));
        // Inclusive bounds: 29..=162 spans 134 pixels
        assert_eq!(alpha_bounding_box(&icon), Some((29, 29, 162, 162)));
    }

    #[test]
    fn maskable_padding_stays_transparent() {
        let icon =
            compose_maskable(&opaque_logo(64, 64), Size::square(512), SafeZone(0.7)).unwrap();

        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(76, 256)[3], 0);
        assert_eq!(icon.get_pixel(77, 256)[3], 255);
        assert_eq!(icon.get_pixel(511, 511)[3], 0);
    }

    #[test]
    fn maskable_without_alpha_pastes_opaque_rectangle() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, image::Rgb([0, 0, 255])));
        let icon = compose_maskable(&rgb, Size::square(100), SafeZone(0.5)).unwrap();

        assert_eq!(alpha_bounding_box(&icon), Some((25, 25, 74, 74)));
        assert_eq!(*icon.get_pixel(50, 50), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn maskable_keeps_transparent_source_pixels_transparent() {
        // Left half of the source is fully transparent
        let icon =
            compose_maskable(&split_alpha_logo(200, 200), Size::square(192), SafeZone(0.7))
                .unwrap();

        // Well inside the transparent half of the pasted logo
        assert_eq!(icon.get_pixel(29 + 20, 96)[3], 0);
        // Well inside the opaque half
        assert_eq!(icon.get_pixel(29 + 110, 96)[3], 255);
    }

    #[test]
    fn maskable_blends_semi_transparent_source_into_canvas() {
        let half_black = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            50,
            50,
            Rgba([0, 0, 0, 128]),
        ));
        let icon = compose_maskable(&half_black, Size::square(100), SafeZone(0.5)).unwrap();

        // (0 * 128 + 255 * 127) / 255 for color, (128 * 128) / 255 for alpha
        assert_eq!(*icon.get_pixel(50, 50), Rgba([127, 127, 127, 64]));
        assert_eq!(*icon.get_pixel(10, 10), TRANSPARENT);
    }

    #[test]
    fn maskable_masks_gray_alpha_sources_too() {
        let gray = DynamicImage::ImageLumaA8(image::ImageBuffer::from_pixel(
            50,
            50,
            image::LumaA([0u8, 128]),
        ));
        let icon = compose_maskable(&gray, Size::square(100), SafeZone(0.5)).unwrap();

        assert_eq!(*icon.get_pixel(50, 50), Rgba([127, 127, 127, 64]));
    }

    #[test]
    fn paste_masked_clips_at_canvas_edge() {
        let mut canvas = RgbaImage::from_pixel(4, 4, TRANSPARENT);
        let top = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 255]));

        paste_masked(&mut canvas, &top, 2, 2);

        assert_eq!(*canvas.get_pixel(3, 3), Rgba([10, 20, 30, 255]));
        assert_eq!(*canvas.get_pixel(1, 1), TRANSPARENT);
    }

    #[test]
    fn maskable_rejects_safe_zone_that_rounds_to_nothing() {
        let result = compose_maskable(&opaque_logo(10, 10), Size::square(1), SafeZone(0.7));
        assert!(result.is_err());
    }

    #[test]
    fn maskable_writes_webp_with_exact_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 256, 256);

        let output = tmp.path().join("maskable-icon-512x512.webp");
        RustBackend::new()
            .maskable(&MaskableParams {
                source,
                output: output.clone(),
                size: Size::square(512),
                safe_zone: SafeZone::default(),
                quality: Quality::default(),
            })
            .unwrap();

        assert!(is_webp(&output));
        assert_eq!(image::image_dimensions(&output).unwrap(), (512, 512));
    }

    // =========================================================================
    // Mockup
    // =========================================================================

    #[test]
    fn dashboard_paints_regions_and_logo() {
        let logo = opaque_logo(100, 100);
        let mockup = compose_dashboard(&logo, Size::new(1920, 1080)).unwrap();

        assert_eq!(mockup.dimensions(), (1920, 1080));
        // Header
        assert_eq!(mockup.get_pixel(960, 40).0, WHITE);
        // Logo center
        assert_eq!(mockup.get_pixel(45, 40).0, [220, 40, 60]);
        // First menu item
        assert_eq!(mockup.get_pixel(30, 110).0, SLATE_100);
        // Sidebar gap between menu items
        assert_eq!(mockup.get_pixel(30, 145).0, WHITE);
        // Top-left card
        assert_eq!(mockup.get_pixel(300, 150).0, SLATE_100);
        // Gutter between top cards
        assert_eq!(mockup.get_pixel(1085, 150).0, WHITE);
        // Bottom-right card
        assert_eq!(mockup.get_pixel(1500, 1000).0, SLATE_100);
        // Bottom margin below cards
        assert_eq!(mockup.get_pixel(1500, 1070).0, WHITE);
    }

    #[test]
    fn dashboard_logo_alpha_shows_header_behind() {
        let mockup = compose_dashboard(&split_alpha_logo(100, 100), Size::new(1920, 1080)).unwrap();

        // Transparent half of the logo reveals the white header
        assert_eq!(mockup.get_pixel(22, 40).0, WHITE);
        assert_eq!(mockup.get_pixel(65, 40).0, [220, 40, 60]);
    }

    #[test]
    fn dashboard_tiny_canvas_still_renders() {
        let mockup = compose_dashboard(&opaque_logo(10, 10), Size::new(100, 50)).unwrap();
        assert_eq!(mockup.dimensions(), (100, 50));
    }

    #[test]
    fn mockup_writes_webp_with_exact_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 64, 64);

        let output = tmp.path().join("wide-dashboard.webp");
        RustBackend::new()
            .mockup(&MockupParams {
                source,
                output: output.clone(),
                size: Size::new(1920, 1080),
                quality: Quality::default(),
            })
            .unwrap();

        assert!(is_webp(&output));
        assert_eq!(image::image_dimensions(&output).unwrap(), (1920, 1080));
    }

    // =========================================================================
    // save_webp
    // =========================================================================

    #[test]
    fn save_webp_converts_sixteen_bit_input() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("deep.webp");
        let deep = DynamicImage::ImageRgba16(image::ImageBuffer::from_pixel(
            8,
            8,
            Rgba([65535u16, 0, 0, 65535]),
        ));

        save_webp(&deep, &output, 90).unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (8, 8));
    }

    #[test]
    fn save_webp_oversize_image_errors_instead_of_panicking() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("huge.webp");
        let wide = DynamicImage::ImageRgb8(RgbImage::new(17000, 1));

        let result = save_webp(&wide, &output, 90);

        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
        assert!(!output.exists());
    }
}
