// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use std::fmt::Display;

/// Opaque identifier for a loaded texture.
///
/// Handles are unique across the process: they start at 1, only ever go up, and are never
/// reused, whichever manager issued them.  They are unrelated to whatever id the GPU
/// backend uses for the same texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureHandle(pub(crate) u64);

impl TextureHandle {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for TextureHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/**
A loaded texture, as seen by callers.

The size is the size of the source image at load time; it is never re-queried from the GPU.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    handle: TextureHandle,
    width: u32,
    height: u32,
}

impl Texture {
    pub(crate) fn new(handle: TextureHandle, width: u32, height: u32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }

    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
