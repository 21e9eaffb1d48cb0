//! Image processing: decode, resize, composite, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Resize** | Lanczos3 `resize_exact` (stretches, no letterboxing) |
//! | **Maskable** | transparent canvas + alpha-mask paste |
//! | **Mockup** | flat `imageops::replace` fills + alpha-mask logo paste |
//! | **Encode** | lossy WebP via `libwebp` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for placement and layout math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{
    Layer, MaskablePlacement, Rect, calculate_dashboard_layers, calculate_maskable_placement,
};
pub use params::{
    MaskableParams, MockupParams, Quality, ResizeParams, SafeZone, Size, WEBP_MAX_EDGE,
};
pub use rust_backend::RustBackend;
