// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::imp::{MIP_LEVEL_COUNT, TextureAllocation};
use crate::load_parameters::SampleParameters;
use crate::pixel_formats::ChannelOrder;

/// GPU objects backing one texture: the storage, a default view and its sampler.
#[derive(Debug)]
pub struct GpuTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    sampling: SampleParameters,
    source_order: ChannelOrder,
    label: String,
}

/// Storage format for pixels arriving in `order`.
///
/// Both are 8-bit RGBA-class formats; shaders sample `.rgba` either way, so BGRA sources need
/// no CPU swizzle.
pub(super) const fn storage_format(order: ChannelOrder) -> wgpu::TextureFormat {
    match order {
        ChannelOrder::Rgba => wgpu::TextureFormat::Rgba8Unorm,
        ChannelOrder::Bgra => wgpu::TextureFormat::Bgra8Unorm,
    }
}

pub(super) fn descriptor<'a>(allocation: &TextureAllocation<'a>) -> wgpu::TextureDescriptor<'a> {
    wgpu::TextureDescriptor {
        label: Some(allocation.label),
        size: wgpu::Extent3d {
            width: allocation.width,
            height: allocation.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: MIP_LEVEL_COUNT,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: storage_format(allocation.source_order),
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    }
}

impl GpuTexture {
    /// Allocates storage with a nearest-neighbour sampler; [`Self::replace_sampler`] swaps it.
    pub(super) fn new(device: &wgpu::Device, allocation: &TextureAllocation<'_>) -> Self {
        let texture = device.create_texture(&descriptor(allocation));
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampling = SampleParameters::NEAREST;
        let sampler = device.create_sampler(&super::sampler::descriptor(sampling, Some(allocation.label)));
        GpuTexture {
            texture,
            view,
            sampler,
            sampling,
            source_order: allocation.source_order,
            label: allocation.label.to_string(),
        }
    }

    pub(super) fn replace_sampler(&mut self, sampler: wgpu::Sampler, sampling: SampleParameters) {
        self.sampler = sampler;
        self.sampling = sampling;
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn sampling(&self) -> SampleParameters {
        self.sampling
    }

    pub fn source_order(&self) -> ChannelOrder {
        self.source_order
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
