// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::pixel_formats::ChannelOrder;
use crate::pixel_source::{DecodedBitmap, ImageDecoder};
use png::{ColorType, Transformations};
use std::io::{Cursor, Read};

/// Largest width or height [`PngDecoder`] accepts; the default wgpu 2D texture limit.
pub const MAX_PNG_DIMENSION: u32 = 8192;

const MAX_DECODED_BYTES: usize =
    MAX_PNG_DIMENSION as usize * MAX_PNG_DIMENSION as usize * ChannelOrder::BYTES_PER_PIXEL;

/// Decodes PNG streams into 8-bit RGBA bitmaps.
///
/// Palette, greyscale and 16-bit images are expanded, so the result is always
/// [`ChannelOrder::Rgba`].  Images wider or taller than [`MAX_PNG_DIMENSION`] are refused with
/// [`png::DecodingError::LimitsExceeded`] before any pixel memory is allocated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, stream: &mut dyn Read) -> Result<DecodedBitmap, Error> {
        let mut data = Vec::new();
        stream
            .read_to_end(&mut data)
            .map_err(png::DecodingError::from)?;

        let mut limits = png::Limits::default();
        limits.bytes = MAX_DECODED_BYTES;
        let mut decoder = png::Decoder::new_with_limits(Cursor::new(data), limits);
        decoder.set_transformations(Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let (color_type, _) = reader.output_color_type();
        let width = reader.info().width;
        let height = reader.info().height;
        let samples = color_type.samples();
        if width > MAX_PNG_DIMENSION || height > MAX_PNG_DIMENSION {
            logwise::warn_sync!(
                "refusing {w}x{h} PNG",
                w = width,
                h = height
            );
            return Err(png::DecodingError::LimitsExceeded.into());
        }
        //the header is untrusted; size the buffer only once it is known to fit
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(samples))
            .filter(|&len| len <= MAX_DECODED_BYTES)
            .ok_or(png::DecodingError::LimitsExceeded)?;

        let mut buf = vec![0; len];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.line_size * info.height as usize);

        let rgba = match info.color_type {
            ColorType::Rgba => buf,
            other => {
                logwise::warn_sync!(
                    "expanding decoded {color_type} PNG to RGBA",
                    color_type = logwise::privacy::LogIt(&other)
                );
                expand_to_rgba(&buf, other)
            }
        };
        DecodedBitmap::new(info.width, info.height, rgba, ChannelOrder::Rgba)
    }
}

fn expand_to_rgba(buf: &[u8], color_type: ColorType) -> Vec<u8> {
    let samples = color_type.samples();
    let mut out = Vec::with_capacity(buf.len() / samples * ChannelOrder::BYTES_PER_PIXEL);
    for px in buf.chunks_exact(samples) {
        let [r, g, b, a] = match (color_type, px) {
            (ColorType::Rgb, &[r, g, b]) => [r, g, b, 255],
            (ColorType::GrayscaleAlpha, &[l, a]) => [l, l, l, a],
            (ColorType::Grayscale, &[l]) => [l, l, l, 255],
            (_, px) => [px[0], px[0], px[0], 255],
        };
        out.extend_from_slice(&[r, g, b, a]);
    }
    out
}
