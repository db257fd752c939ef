// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::imp::{Backend, Error, NativeTextureId, TextureAllocation};
use crate::load_parameters::SampleParameters;
use crate::pixel_source::PixelView;
use std::collections::HashMap;

mod sampler;
mod texture;

pub use texture::GpuTexture;

/**
Backend that drives a caller-supplied wgpu device.

Creating the instance, adapter and device is the windowing layer's business; this type only
needs the device and queue.  Every call runs inside a validation and out-of-memory error scope,
so failures come back as [`Error`] rather than through the device's uncaptured error handler.
*/
#[derive(Debug)]
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: HashMap<NativeTextureId, GpuTexture>,
    last_id: u32,
}

impl WgpuBackend {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            textures: HashMap::new(),
            last_id: 0,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    fn scoped<R>(device: &wgpu::Device, f: impl FnOnce() -> R) -> Result<R, Error> {
        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let r = f();
        let validation = test_executors::spin_on(device.pop_error_scope());
        let out_of_memory = test_executors::spin_on(device.pop_error_scope());
        if let Some(e) = validation {
            return Err(Error::Validation(e.to_string()));
        }
        if out_of_memory.is_some() {
            return Err(Error::OutOfMemory);
        }
        Ok(r)
    }
}

impl Backend for WgpuBackend {
    type Resource = GpuTexture;

    fn create_texture(&mut self, allocation: &TextureAllocation<'_>) -> Result<NativeTextureId, Error> {
        logwise::trace_sync!(
            "wgpu create_texture {w}x{h}",
            w = allocation.width,
            h = allocation.height
        );
        let texture = Self::scoped(&self.device, || GpuTexture::new(&self.device, allocation))?;
        self.last_id += 1;
        let id = NativeTextureId(self.last_id);
        self.textures.insert(id, texture);
        Ok(id)
    }

    fn configure_sampling(&mut self, id: NativeTextureId, sampling: SampleParameters) -> Result<(), Error> {
        let texture = self.textures.get_mut(&id).ok_or(Error::UnknownTexture(id))?;
        let sampler = Self::scoped(&self.device, || {
            self.device
                .create_sampler(&sampler::descriptor(sampling, Some(texture.label())))
        })?;
        texture.replace_sampler(sampler, sampling);
        Ok(())
    }

    fn write_texture(&mut self, id: NativeTextureId, pixels: &PixelView<'_>) -> Result<(), Error> {
        let texture = self.textures.get(&id).ok_or(Error::UnknownTexture(id))?;
        if texture.source_order() != pixels.order() {
            return Err(Error::Validation(format!(
                "{:?} pixels written to {:?} storage",
                pixels.order(),
                texture.texture().format()
            )));
        }
        logwise::trace_sync!(
            "wgpu write_texture {bytes} bytes",
            bytes = pixels.bytes().len()
        );
        Self::scoped(&self.device, || {
            self.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: texture.texture(),
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                pixels.bytes(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(pixels.bytes_per_row()),
                    rows_per_image: Some(pixels.height()),
                },
                wgpu::Extent3d {
                    width: pixels.width(),
                    height: pixels.height(),
                    depth_or_array_layers: 1,
                },
            );
        })
    }

    fn destroy_texture(&mut self, id: NativeTextureId) -> Result<(), Error> {
        let texture = self.textures.remove(&id).ok_or(Error::UnknownTexture(id))?;
        texture.texture().destroy();
        Ok(())
    }

    fn resource(&self, id: NativeTextureId) -> Option<&GpuTexture> {
        self.textures.get(&id)
    }
}
