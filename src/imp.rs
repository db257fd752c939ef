// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
GPU backends.

A [`Backend`] owns native texture objects and names them by [`NativeTextureId`].  The upload
engine drives it in a fixed sequence: [`Backend::create_texture`], [`Backend::configure_sampling`],
[`Backend::write_texture`], and [`Backend::destroy_texture`] if any of those failed.

All methods are called on the GPU thread only.
*/
use crate::load_parameters::SampleParameters;
use crate::pixel_formats::ChannelOrder;
use crate::pixel_source::PixelView;
use std::fmt::Display;

mod error;
mod nop;
#[cfg(feature = "backend_wgpu")]
mod wgpu;

pub use error::Error;
pub use nop::{BackendCall, NopBackend, NopTexture, Operation};
#[cfg(feature = "backend_wgpu")]
pub use wgpu::{GpuTexture, WgpuBackend};

/// Mip levels allocated for every texture.
pub const MIP_LEVEL_COUNT: u32 = 1;

/// Backend-assigned id of a texture object.
///
/// Backends may hand out the same id again after [`Backend::destroy_texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeTextureId(pub u32);

impl Display for NativeTextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "native#{}", self.0)
    }
}

/// Storage request for one texture.
///
/// Storage is always 2D, 4 channels at 8 bits each, [`MIP_LEVEL_COUNT`] levels, and never
/// resized.  `source_order` is the byte order the pixels will arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAllocation<'a> {
    pub width: u32,
    pub height: u32,
    pub source_order: ChannelOrder,
    pub label: &'a str,
}

pub trait Backend {
    /// Whatever a renderer binds for a texture.
    type Resource;

    fn create_texture(&mut self, allocation: &TextureAllocation<'_>) -> Result<NativeTextureId, Error>;

    fn configure_sampling(&mut self, id: NativeTextureId, sampling: SampleParameters) -> Result<(), Error>;

    /// Copies the entire image in one operation.  `pixels` matches the allocation's size and order.
    fn write_texture(&mut self, id: NativeTextureId, pixels: &PixelView<'_>) -> Result<(), Error>;

    fn destroy_texture(&mut self, id: NativeTextureId) -> Result<(), Error>;

    fn resource(&self, id: NativeTextureId) -> Option<&Self::Resource>;
}
