// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::gpu_thread::GpuThread;
use crate::imp::NativeTextureId;
use crate::texture::TextureHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Last handle issued by any registry in the process.
static LAST_HANDLE: AtomicU64 = AtomicU64::new(0);

/// Registry entry for an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadedTexture {
    pub(crate) native: NativeTextureId,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/**
Maps [`TextureHandle`]s to backend objects.

This is the only place that translates between handles and [`NativeTextureId`]s.  All access
happens on the thread that created the registry.

Handles come from one process-wide counter, so no two registries ever issue the same handle and
a texture from one manager is `NotFound` in every other.
*/
#[derive(Debug)]
pub(crate) struct TextureRegistry {
    thread: GpuThread,
    textures: HashMap<TextureHandle, LoadedTexture>,
}

impl TextureRegistry {
    pub(crate) fn new() -> Self {
        Self {
            thread: GpuThread::current(),
            textures: HashMap::new(),
        }
    }

    /// Records a fully uploaded texture under a fresh handle.
    pub(crate) fn allocate(&mut self, entry: LoadedTexture) -> TextureHandle {
        self.thread.verify("TextureRegistry::allocate");
        debug_assert!(entry.width > 0 && entry.height > 0);
        let handle = TextureHandle(LAST_HANDLE.fetch_add(1, Ordering::Relaxed) + 1);
        let prior = self.textures.insert(handle, entry);
        assert!(prior.is_none(), "handle {handle} allocated twice");
        handle
    }

    pub(crate) fn resolve(&self, handle: TextureHandle) -> Result<LoadedTexture, Error> {
        self.thread.verify("TextureRegistry::resolve");
        self.textures
            .get(&handle)
            .copied()
            .ok_or(Error::NotFound(handle))
    }

    /// Forgets a handle.  The caller is responsible for the native object.
    pub(crate) fn remove(&mut self, handle: TextureHandle) -> Result<LoadedTexture, Error> {
        self.thread.verify("TextureRegistry::remove");
        self.textures.remove(&handle).ok_or(Error::NotFound(handle))
    }

    pub(crate) fn len(&self) -> usize {
        self.textures.len()
    }
}
