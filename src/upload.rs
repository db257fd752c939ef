// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The upload engine: turns a [`PixelView`] into a native texture.
use crate::Error;
use crate::imp::{Backend, NativeTextureId, TextureAllocation};
use crate::load_parameters::SampleParameters;
use crate::pixel_source::PixelView;

/**
Allocates immutable single-level storage sized to `pixels`, applies `sampling`, and copies
the whole image in one call.

On failure the partially created native object is destroyed before the error is returned, so
the caller never has anything to clean up.
*/
pub(crate) fn upload<B: Backend>(
    backend: &mut B,
    pixels: &PixelView<'_>,
    sampling: SampleParameters,
    label: &str,
) -> Result<NativeTextureId, Error> {
    let (width, height) = (pixels.width(), pixels.height());
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    let gpu_error = |source| Error::GpuResourceError {
        width,
        height,
        source,
    };

    let allocation = TextureAllocation {
        width,
        height,
        source_order: pixels.order(),
        label,
    };
    let id = backend.create_texture(&allocation).map_err(gpu_error)?;

    let filled = backend
        .configure_sampling(id, sampling)
        .and_then(|()| backend.write_texture(id, pixels));
    if let Err(source) = filled {
        logwise::error_sync!(
            "texture upload failed: {err}",
            err = logwise::privacy::LogIt(&source)
        );
        if let Err(cleanup) = backend.destroy_texture(id) {
            logwise::error_sync!(
                "could not destroy partial texture: {err}",
                err = logwise::privacy::LogIt(&cleanup)
            );
        }
        return Err(gpu_error(source));
    }
    Ok(id)
}
