// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
A headless backend.

[`NopBackend`] keeps a CPU copy of everything it is asked to upload and logs each call, which
makes it useful for tools that run without a GPU and for checking exactly what the upload
engine did.  It can be told to refuse one kind of call to exercise failure paths.
*/
use crate::imp::{Backend, Error, NativeTextureId, TextureAllocation};
use crate::load_parameters::SampleParameters;
use crate::pixel_formats::ChannelOrder;
use crate::pixel_source::PixelView;
use std::collections::BTreeMap;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    CreateTexture {
        width: u32,
        height: u32,
        source_order: ChannelOrder,
    },
    ConfigureSampling(NativeTextureId, SampleParameters),
    WriteTexture(NativeTextureId, usize),
    DestroyTexture(NativeTextureId),
}

/// Which kind of call [`NopBackend::fail_on`] should refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateTexture,
    ConfigureSampling,
    WriteTexture,
    DestroyTexture,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Operation::CreateTexture => "create_texture",
            Operation::ConfigureSampling => "configure_sampling",
            Operation::WriteTexture => "write_texture",
            Operation::DestroyTexture => "destroy_texture",
        }
    }
}

/// A texture held by [`NopBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NopTexture {
    pub width: u32,
    pub height: u32,
    pub source_order: ChannelOrder,
    pub label: String,
    pub sampling: Option<SampleParameters>,
    /// Empty until written.
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct NopBackend {
    textures: BTreeMap<NativeTextureId, NopTexture>,
    calls: Vec<BackendCall>,
    fail_on: Option<Operation>,
}

impl NopBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every call of this kind until cleared with `None`.
    pub fn fail_on(&mut self, operation: Option<Operation>) {
        self.fail_on = operation;
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Textures that have been created and not destroyed.
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    fn check(&self, operation: Operation) -> Result<(), Error> {
        if self.fail_on == Some(operation) {
            return Err(Error::Refused(operation.name()));
        }
        Ok(())
    }

    fn texture_mut(&mut self, id: NativeTextureId) -> Result<&mut NopTexture, Error> {
        self.textures.get_mut(&id).ok_or(Error::UnknownTexture(id))
    }
}

impl Backend for NopBackend {
    type Resource = NopTexture;

    fn create_texture(&mut self, allocation: &TextureAllocation<'_>) -> Result<NativeTextureId, Error> {
        self.calls.push(BackendCall::CreateTexture {
            width: allocation.width,
            height: allocation.height,
            source_order: allocation.source_order,
        });
        self.check(Operation::CreateTexture)?;
        //like GL names, the lowest free id is handed out again
        let id = (1..)
            .map(NativeTextureId)
            .find(|id| !self.textures.contains_key(id))
            .ok_or(Error::OutOfMemory)?;
        self.textures.insert(
            id,
            NopTexture {
                width: allocation.width,
                height: allocation.height,
                source_order: allocation.source_order,
                label: allocation.label.to_string(),
                sampling: None,
                data: Vec::new(),
            },
        );
        Ok(id)
    }

    fn configure_sampling(&mut self, id: NativeTextureId, sampling: SampleParameters) -> Result<(), Error> {
        self.calls.push(BackendCall::ConfigureSampling(id, sampling));
        self.check(Operation::ConfigureSampling)?;
        self.texture_mut(id)?.sampling = Some(sampling);
        Ok(())
    }

    fn write_texture(&mut self, id: NativeTextureId, pixels: &PixelView<'_>) -> Result<(), Error> {
        self.calls.push(BackendCall::WriteTexture(id, pixels.bytes().len()));
        self.check(Operation::WriteTexture)?;
        let texture = self.texture_mut(id)?;
        if (texture.width, texture.height) != (pixels.width(), pixels.height()) {
            return Err(Error::Validation(format!(
                "copy of {}x{} into {}x{} storage",
                pixels.width(),
                pixels.height(),
                texture.width,
                texture.height
            )));
        }
        if texture.source_order != pixels.order() {
            return Err(Error::Validation(format!(
                "{:?} pixels written to storage allocated for {:?}",
                pixels.order(),
                texture.source_order
            )));
        }
        if !texture.data.is_empty() {
            return Err(Error::Validation("texture storage is write-once".to_string()));
        }
        texture.data = pixels.bytes().to_vec();
        Ok(())
    }

    fn destroy_texture(&mut self, id: NativeTextureId) -> Result<(), Error> {
        self.calls.push(BackendCall::DestroyTexture(id));
        self.check(Operation::DestroyTexture)?;
        self.textures
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::UnknownTexture(id))
    }

    fn resource(&self, id: NativeTextureId) -> Option<&NopTexture> {
        self.textures.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_source::{DecodedBitmap, PixelSource};

    fn allocation(width: u32, height: u32) -> TextureAllocation<'static> {
        TextureAllocation {
            width,
            height,
            source_order: ChannelOrder::Rgba,
            label: "nop_test",
        }
    }

    #[test]
    fn native_ids_are_reused() {
        let mut backend = NopBackend::new();
        let a = backend.create_texture(&allocation(1, 1)).unwrap();
        let b = backend.create_texture(&allocation(1, 1)).unwrap();
        assert_ne!(a, b);
        backend.destroy_texture(a).unwrap();
        let c = backend.create_texture(&allocation(1, 1)).unwrap();
        assert_eq!(a, c);
        assert_eq!(backend.live_textures(), 2);
    }

    #[test]
    fn write_checks_size() {
        let mut backend = NopBackend::new();
        let id = backend.create_texture(&allocation(2, 2)).unwrap();
        let bitmap = DecodedBitmap::rgba(1, 1, vec![0; 4]).unwrap();
        let result = backend.write_texture(id, &bitmap.pixel_view().unwrap());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn refuses_requested_operation() {
        let mut backend = NopBackend::new();
        backend.fail_on(Some(Operation::CreateTexture));
        assert_eq!(
            backend.create_texture(&allocation(1, 1)),
            Err(Error::Refused("create_texture"))
        );
        assert_eq!(backend.live_textures(), 0);
        assert_eq!(backend.call_count(), 1);
        backend.fail_on(None);
        assert!(backend.create_texture(&allocation(1, 1)).is_ok());
    }
}
