//! Shared test utilities: synthetic logos, in memory and on disk.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Flat color used by [`opaque_logo`] and the opaque half of [`split_alpha_logo`].
pub const LOGO_RED: Rgba<u8> = Rgba([220, 40, 60, 255]);

/// Uniform, fully opaque RGBA logo.
pub fn opaque_logo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, LOGO_RED))
}

/// Logo whose left half is fully transparent and right half [`LOGO_RED`].
pub fn split_alpha_logo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            LOGO_RED
        }
    }))
}

/// Write an opaque gradient PNG to `path`.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}
