// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Pixel sources: the two shapes of image data the manager accepts.

* [`DecodedBitmap`] is what an image decoder hands back: raw 4-channel bytes plus the channel
  order the decoder used.  Platform decoders commonly produce [`ChannelOrder::Bgra`]; the order is
  passed through to the upload so the GPU reads it correctly and nothing is swizzled on the CPU.
* [`PixelBuffer`] is a typed, in-memory image.  Only [`crate::pixel_formats::RGBA8UNorm`] buffers
  can be uploaded.

Both normalize to a [`PixelView`], which borrows the pixel memory for the duration of one upload.
*/
use crate::Error;
use crate::pixel_formats::{ChannelOrder, PixelFormat, pixel_as_bytes};
use std::fmt::Debug;
use std::io::Read;

pub use crate::pixel_formats::png_support::{MAX_PNG_DIMENSION, PngDecoder};

/// A borrowed, normalized description of pixel data ready for upload.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    width: u32,
    height: u32,
    bytes: &'a [u8],
    order: ChannelOrder,
}

impl<'a> PixelView<'a> {
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    /// Tightly packed rows, top to bottom.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
    pub fn order(&self) -> ChannelOrder {
        self.order
    }
    pub fn bytes_per_row(&self) -> u32 {
        self.width * ChannelOrder::BYTES_PER_PIXEL as u32
    }
}

/// Something that can be uploaded as a texture.
pub trait PixelSource {
    /// Produce the upload view.
    ///
    /// Fails with [`Error::UnsupportedPixelFormat`] or [`Error::EmptyImage`]; either way no GPU
    /// work has happened yet.
    fn pixel_view(&self) -> Result<PixelView<'_>, Error>;
}

/// Turns an encoded stream into a [`DecodedBitmap`].
pub trait ImageDecoder {
    fn decode(&self, stream: &mut dyn Read) -> Result<DecodedBitmap, Error>;
}

fn check_area(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    Ok(())
}

/// A decoded image: 8 bits per channel, 4 channels, in a known [`ChannelOrder`].
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
    order: ChannelOrder,
}

impl DecodedBitmap {
    pub fn new(width: u32, height: u32, data: Vec<u8>, order: ChannelOrder) -> Result<Self, Error> {
        let expected = width as usize * height as usize * ChannelOrder::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                width,
                height,
                len: data.len() / ChannelOrder::BYTES_PER_PIXEL,
            });
        }
        Ok(Self {
            width,
            height,
            data,
            order,
        })
    }

    /// A bitmap in `b, g, r, a` byte order.
    pub fn bgra(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, data, ChannelOrder::Bgra)
    }

    pub fn rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, data, ChannelOrder::Rgba)
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn order(&self) -> ChannelOrder {
        self.order
    }
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for DecodedBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("order", &self.order)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl PixelSource for DecodedBitmap {
    fn pixel_view(&self) -> Result<PixelView<'_>, Error> {
        check_area(self.width, self.height)?;
        Ok(PixelView {
            width: self.width,
            height: self.height,
            bytes: &self.data,
            order: self.order,
        })
    }
}

/// A typed in-memory image, row-major, top row first.
pub struct PixelBuffer<Format: PixelFormat> {
    width: u32,
    height: u32,
    pixels: Vec<Format::CPixel>,
}

impl<Format: PixelFormat> PixelBuffer<Format> {
    pub fn new(width: u32, height: u32, pixels: Vec<Format::CPixel>) -> Result<Self, Error> {
        if pixels.len() != width as usize * height as usize {
            return Err(Error::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F: Fn(u32, u32) -> Format::CPixel>(width: u32, height: u32, f: F) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn pixels(&self) -> &[Format::CPixel] {
        &self.pixels
    }
}

impl<Format: PixelFormat> Debug for PixelBuffer<Format> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("format", &Format::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<Format: PixelFormat> PixelSource for PixelBuffer<Format> {
    fn pixel_view(&self) -> Result<PixelView<'_>, Error> {
        let Some(order) = Format::UPLOAD_ORDER else {
            return Err(Error::UnsupportedPixelFormat {
                format: Format::NAME,
            });
        };
        check_area(self.width, self.height)?;
        Ok(PixelView {
            width: self.width,
            height: self.height,
            bytes: pixel_as_bytes(&self.pixels),
            order,
        })
    }
}
