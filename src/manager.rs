// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::gpu_thread::GpuThread;
use crate::imp::Backend;
use crate::load_parameters::TextureLoadParameters;
use crate::pixel_source::{ImageDecoder, PixelSource, PngDecoder};
use crate::registry::{LoadedTexture, TextureRegistry};
use crate::texture::Texture;
use crate::upload::upload;
use std::io::Read;

/**
Loads textures into a backend and keeps track of them.

A manager belongs to the thread that created it, which must be the thread that owns the GPU
context.  Every method except [`Self::backend`] and [`Self::gpu_thread`] asserts this.

# Example

```
use texture_manager::{TextureManager, TextureLoadParameters};
use texture_manager::imp::NopBackend;
use texture_manager::pixel_source::DecodedBitmap;

let mut manager = TextureManager::new(NopBackend::new());
let bitmap = DecodedBitmap::bgra(2, 2, vec![0; 16]).unwrap();
let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
assert_eq!(texture.size(), (2, 2));
```
*/
#[derive(Debug)]
pub struct TextureManager<B: Backend> {
    thread: GpuThread,
    backend: B,
    registry: TextureRegistry,
}

impl<B: Backend> TextureManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            thread: GpuThread::current(),
            backend,
            registry: TextureRegistry::new(),
        }
    }

    /// Uploads `source` and registers it.
    pub fn load(
        &mut self,
        source: &impl PixelSource,
        params: &TextureLoadParameters,
    ) -> Result<Texture, Error> {
        self.thread.verify("TextureManager::load");
        let pixels = source.pixel_view()?;
        let label = format!("texture_{}x{}", pixels.width(), pixels.height());
        let native = upload(&mut self.backend, &pixels, params.sample_parameters, &label)?;
        let entry = LoadedTexture {
            native,
            width: pixels.width(),
            height: pixels.height(),
        };
        let handle = self.registry.allocate(entry);
        logwise::info_sync!(
            "loaded texture {handle} {w}x{h}",
            handle = handle.get(),
            w = entry.width,
            h = entry.height
        );
        Ok(Texture::new(handle, entry.width, entry.height))
    }

    /// Decodes `stream` with `decoder`, then loads the result.
    pub fn load_from_stream<R: Read>(
        &mut self,
        decoder: &impl ImageDecoder,
        mut stream: R,
        params: &TextureLoadParameters,
    ) -> Result<Texture, Error> {
        self.thread.verify("TextureManager::load_from_stream");
        let bitmap = decoder.decode(&mut stream)?;
        self.load(&bitmap, params)
    }

    pub fn load_png_stream<R: Read>(
        &mut self,
        stream: R,
        params: &TextureLoadParameters,
    ) -> Result<Texture, Error> {
        self.load_from_stream(&PngDecoder, stream, params)
    }

    /**
    Removes the texture from the registry and destroys its native object.

    Afterwards the handle resolves to [`Error::NotFound`].  If the backend fails to destroy the
    object the handle is still gone; the error is reported as [`Error::GpuResourceError`] and the
    native object is left to the backend, unreachable through this manager.
    */
    pub fn release(&mut self, texture: &Texture) -> Result<(), Error> {
        self.thread.verify("TextureManager::release");
        let entry = self.registry.remove(texture.handle())?;
        self.backend
            .destroy_texture(entry.native)
            .map_err(|source| Error::GpuResourceError {
                width: entry.width,
                height: entry.height,
                source,
            })?;
        logwise::info_sync!("released texture {handle}", handle = texture.handle().get());
        Ok(())
    }

    /// The backend object to bind when drawing with `texture`.
    pub fn resource(&self, texture: &Texture) -> Result<&B::Resource, Error> {
        self.thread.verify("TextureManager::resource");
        let entry = self.registry.resolve(texture.handle())?;
        self.backend
            .resource(entry.native)
            .ok_or(Error::NotFound(texture.handle()))
    }

    pub fn texture_count(&self) -> usize {
        self.thread.verify("TextureManager::texture_count");
        self.registry.len()
    }

    /// Read-only access to the backend.  Does not check the thread.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.thread.verify("TextureManager::backend_mut");
        &mut self.backend
    }

    pub fn gpu_thread(&self) -> &GpuThread {
        &self.thread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imp::{NopBackend, Operation};
    use crate::pixel_formats::{RGBA8UNorm, RGBA32Float, Unorm4};
    use crate::pixel_source::{DecodedBitmap, PixelBuffer};

    #[test]
    fn load_registers_and_resolves() {
        let mut manager = TextureManager::new(NopBackend::new());
        let buffer = PixelBuffer::<RGBA8UNorm>::from_fn(4, 3, |_, _| Unorm4::TRANSPARENT);
        let texture = manager.load(&buffer, &TextureLoadParameters::NEAREST).unwrap();
        assert_eq!(texture.size(), (4, 3));
        assert_eq!(manager.texture_count(), 1);
        let resource = manager.resource(&texture).unwrap();
        assert_eq!((resource.width, resource.height), (4, 3));
    }

    #[test]
    fn rejected_format_makes_no_backend_calls() {
        let mut manager = TextureManager::new(NopBackend::new());
        let buffer = PixelBuffer::<RGBA32Float>::new(1, 1, vec![Default::default()]).unwrap();
        let err = manager.load(&buffer, &TextureLoadParameters::DEFAULT).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPixelFormat { .. }));
        assert_eq!(manager.backend().call_count(), 0);
        assert_eq!(manager.texture_count(), 0);
    }

    #[test]
    fn gpu_failure_leaves_no_entry() {
        let mut manager = TextureManager::new(NopBackend::new());
        manager
            .backend_mut()
            .fail_on(Some(Operation::ConfigureSampling));
        let bitmap = DecodedBitmap::rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        assert!(manager.load(&bitmap, &TextureLoadParameters::DEFAULT).is_err());
        assert_eq!(manager.texture_count(), 0);
        assert_eq!(manager.backend().live_textures(), 0);
    }

    #[test]
    fn release_then_not_found() {
        let mut manager = TextureManager::new(NopBackend::new());
        let bitmap = DecodedBitmap::rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
        manager.release(&texture).unwrap();
        assert!(matches!(manager.resource(&texture), Err(Error::NotFound(_))));
        assert!(matches!(manager.release(&texture), Err(Error::NotFound(_))));
        assert_eq!(manager.backend().live_textures(), 0);
    }

    #[test]
    fn failed_destroy_still_forgets_handle() {
        let mut manager = TextureManager::new(NopBackend::new());
        let bitmap = DecodedBitmap::rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
        manager.backend_mut().fail_on(Some(Operation::DestroyTexture));
        assert!(matches!(
            manager.release(&texture),
            Err(Error::GpuResourceError {
                width: 1,
                height: 1,
                ..
            })
        ));
        assert_eq!(manager.texture_count(), 0);
        //the native object is unreachable but still alive in the backend
        assert_eq!(manager.backend().live_textures(), 1);
        assert!(matches!(manager.resource(&texture), Err(Error::NotFound(_))));
        assert!(matches!(manager.release(&texture), Err(Error::NotFound(_))));
    }
}
