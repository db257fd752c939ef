// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Type-safe pixel format definitions for CPU-side pixel buffers.
//!
//! Each pixel format is a zero-sized type that encodes:
//!
//! - Number of channels and bytes per pixel
//! - The concrete C-layout pixel type ([`PixelFormat::CPixel`])
//! - Whether, and in what [`ChannelOrder`], the format can be uploaded
//!
//! Only [`RGBA8UNorm`] can be uploaded.  The other formats exist so that buffers produced by
//! other parts of a client can be typed honestly; trying to load one fails with
//! [`crate::Error::UnsupportedPixelFormat`] before any GPU work is issued.
//!
//! # Available Formats
//!
//! - [`RGBA8UNorm`] - 4-channel 8-bit normalized (4 bytes total), uploadable
//! - [`R8UNorm`] - 8-bit normalized single channel
//! - [`RGBA16Unorm`] - 4-channel 16-bit normalized (8 bytes total)
//! - [`RGBA32Float`] - 4-channel 32-bit float (16 bytes total)
//!
//! # Examples
//!
//! ```
//! use texture_manager::pixel_formats::{RGBA8UNorm, Unorm4};
//! use texture_manager::pixel_source::PixelBuffer;
//!
//! let red = Unorm4 { r: 255, g: 0, b: 0, a: 255 };
//! let buffer = PixelBuffer::<RGBA8UNorm>::new(1, 1, vec![red]).unwrap();
//! assert_eq!(buffer.width(), 1);
//! ```

pub(crate) mod png_support;

use crate::pixel_formats::sealed::ReprC;

/// Byte order of a 4-channel, 8-bit-per-channel pixel in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// `r, g, b, a`
    Rgba,
    /// `b, g, r, a`.  This is what most platform bitmap decoders hand back for "32bpp ARGB".
    Bgra,
}

impl ChannelOrder {
    pub const BYTES_PER_PIXEL: usize = 4;
}

/// Sealed traits for pixel format type safety.
///
/// Only the pixel formats defined in this crate can be used with [`crate::pixel_source::PixelBuffer`].
pub(crate) mod sealed {
    use std::fmt::Debug;

    /// Core trait for pixel format types.
    pub trait PixelFormat: Debug + Send + Sync + 'static {
        /// Number of bytes per pixel for this format.
        const BYTES_PER_PIXEL: u8;

        /// Channel order used when uploading, or `None` if the format cannot be uploaded.
        const UPLOAD_ORDER: Option<super::ChannelOrder>;

        /// Name used in diagnostics.
        const NAME: &'static str;

        /// The concrete pixel type with guaranteed C-compatible memory layout.
        type CPixel: Clone + Debug + Send + ReprC;
    }

    /// Marker trait indicating C-compatible memory layout.
    ///
    /// Types implementing this trait have predictable memory layout with:
    /// - No padding between fields
    /// - No uninitialized bytes
    /// - Stable field ordering
    ///
    /// # Safety
    ///
    /// This trait is unsafe to implement because incorrect implementation
    /// could lead to undefined behavior when casting to byte slices.
    pub unsafe trait ReprC {}
}

pub use sealed::PixelFormat;

/// View a slice of C-compatible pixels as raw bytes, without copying.
pub(crate) fn pixel_as_bytes<T: ReprC>(t: &[T]) -> &[u8] {
    //safe because we know that T is repr(C)
    //(we offloaded the safety check to the ReprC trait)
    unsafe { std::slice::from_raw_parts(t.as_ptr() as *const u8, std::mem::size_of_val(t)) }
}

/// 4-channel 8-bit normalized format, RGBA order.
///
/// This is the one format a [`crate::pixel_source::PixelBuffer`] can be uploaded from.
#[derive(Debug, Clone)]
pub struct RGBA8UNorm;
impl PixelFormat for RGBA8UNorm {
    const BYTES_PER_PIXEL: u8 = 4;
    const UPLOAD_ORDER: Option<ChannelOrder> = Some(ChannelOrder::Rgba);
    const NAME: &'static str = "RGBA8UNorm";
    type CPixel = Unorm4;
}

/// Pixel type for [`RGBA8UNorm`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unorm4 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
unsafe impl ReprC for Unorm4 {}

impl Unorm4 {
    pub const TRANSPARENT: Unorm4 = Unorm4 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Convert from floating point values in `0.0..=1.0`; out of range values are clamped.
    pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Unorm4 {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }
}

/// 8-bit normalized unsigned integer format with a single red channel.
#[derive(Debug, Clone)]
pub struct R8UNorm;
impl PixelFormat for R8UNorm {
    const BYTES_PER_PIXEL: u8 = 1;
    const UPLOAD_ORDER: Option<ChannelOrder> = None;
    const NAME: &'static str = "R8UNorm";
    type CPixel = u8;
}
unsafe impl ReprC for u8 {}

/// 16-bit normalized unsigned integer format with RGBA channels.
///
/// Each channel uses 16 bits (0-65535 mapped to 0.0-1.0). Total size is 8 bytes per pixel.
#[derive(Debug, Clone)]
pub struct RGBA16Unorm;
impl PixelFormat for RGBA16Unorm {
    const BYTES_PER_PIXEL: u8 = 2 * 4;
    const UPLOAD_ORDER: Option<ChannelOrder> = None;
    const NAME: &'static str = "RGBA16Unorm";
    type CPixel = RGBA16Pixel;
}

/// Pixel type for [`RGBA16Unorm`] format.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBA16Pixel {
    /// Red channel (0-65535)
    pub r: u16,
    /// Green channel (0-65535)
    pub g: u16,
    /// Blue channel (0-65535)
    pub b: u16,
    /// Alpha channel (0-65535)
    pub a: u16,
}
unsafe impl ReprC for RGBA16Pixel {}

/// 4-channel 32-bit float format.
#[derive(Debug, Clone)]
pub struct RGBA32Float;
impl PixelFormat for RGBA32Float {
    const BYTES_PER_PIXEL: u8 = 16;
    const UPLOAD_ORDER: Option<ChannelOrder> = None;
    const NAME: &'static str = "RGBA32Float";
    type CPixel = Float4;
}

/// Pixel type for [`RGBA32Float`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
unsafe impl ReprC for Float4 {}
