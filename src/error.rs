// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::texture::TextureHandle;

/// Errors surfaced by texture loading, lookup and parameter resolution.
///
/// None of these are retried internally.  [`Error::UnsupportedPixelFormat`],
/// [`Error::EmptyImage`], [`Error::SizeMismatch`] and [`Error::InvalidConfiguration`]
/// are all detected before the backend is touched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The handle was never allocated, or has been released.
    #[error("no texture is registered for handle {0}")]
    NotFound(TextureHandle),
    /// The pixel buffer's format cannot be uploaded.
    #[error("cannot load images of format {format}; only RGBA8UNorm is supported")]
    UnsupportedPixelFormat { format: &'static str },
    /// The backend failed to allocate, fill or destroy the texture.  The backend's own error is
    /// the [`std::error::Error::source`].
    #[error("GPU failed to create a {width}x{height} texture")]
    GpuResourceError {
        width: u32,
        height: u32,
        #[source]
        source: crate::imp::Error,
    },
    /// A configuration value was present but not in the recognized vocabulary.
    #[error("invalid texture configuration at `{path}`: {reason}")]
    InvalidConfiguration { path: String, reason: String },
    #[error("image {width}x{height} has no pixels")]
    EmptyImage { width: u32, height: u32 },
    #[error("{len} pixels do not fill a {width}x{height} image")]
    SizeMismatch { width: u32, height: u32, len: usize },
    #[error("failed to decode image: {0}")]
    Decode(#[from] png::DecodingError),
}
