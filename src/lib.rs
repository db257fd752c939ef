// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! texture_manager is the GPU texture-resource layer of a rendering client.

It takes decoded pixel images, uploads them into immutable GPU textures, and hands
back a small [`Texture`] value that names the upload by an opaque [`TextureHandle`].

```text
 encoded stream ──ImageDecoder──▶ DecodedBitmap ─┐
                                                 ├─▶ PixelSource ─▶ upload ─▶ TextureRegistry ─▶ Texture
 typed pixels ──────────────────▶ PixelBuffer ───┘                   ▲
                                                                      │
                          YAML / ConfigNode ──▶ TextureLoadParameters ┘
```

# Pieces

| Piece                     | Type                                     | Thread             |
|---------------------------|------------------------------------------|--------------------|
| Pixel source adapter      | [`pixel_source::PixelSource`]            | any                |
| Texture registry          | [`TextureManager`] (internally)          | GPU thread only    |
| Upload engine             | [`imp::Backend`]                         | GPU thread only    |
| Load parameter resolver   | [`TextureLoadParameters::from_config`]   | any                |

GPU state is not shared across threads. A [`TextureManager`] remembers the thread that
created it and asserts on every operation that touches the backend or the registry.
Moving the manager to another thread and using it there panics.

# Backends

[`imp::WgpuBackend`] (feature `backend_wgpu`, on by default) drives a caller-supplied
`wgpu::Device`/`wgpu::Queue`. [`imp::NopBackend`] is a headless backend that records what it
was asked to do; it is what the tests run against.

# Texture lifetime

Texture contents are write-once. [`TextureManager::release`] removes the registry entry and
destroys the native object. Handles are never reused, even when the backend reuses its
native ids.
*/

mod error;
mod gpu_thread;
pub mod imp;
pub mod load_parameters;
mod manager;
pub mod pixel_formats;
pub mod pixel_source;
mod registry;
mod texture;
mod upload;

pub use error::Error;
pub use gpu_thread::GpuThread;
pub use load_parameters::{ConfigNode, SampleParameters, TextureLoadParameters, TextureWrapMode};
pub use manager::TextureManager;
pub use pixel_formats::ChannelOrder;
pub use texture::{Texture, TextureHandle};
