//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend must
//! support: resize, maskable, and mockup. Each call decodes the source,
//! derives one new bitmap, and writes it to its output path.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate with `libwebp` for lossy encoding.

use super::params::{MaskableParams, MockupParams, ResizeParams};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Every backend must implement all three operations so the rest of the
/// codebase is backend-agnostic.
pub trait ImageBackend {
    /// Stretch the source to an exact size.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Center the source inside a transparent safe-zone canvas.
    fn maskable(&self, params: &MaskableParams) -> Result<(), BackendError>;

    /// Paint the wide dashboard mockup with the source as its logo.
    fn mockup(&self, params: &MockupParams) -> Result<(), BackendError>;
}
