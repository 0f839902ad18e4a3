//! Decoded image data and file I/O.

use crate::error::{Result, StegoError};
use image::{DynamicImage, RgbImage, RgbaImage};
use std::path::Path;

/// Decoded pixel data as a flat buffer of 8-bit channel samples.
///
/// The layout is row-major with the channel as the fastest-varying index,
/// so walking the buffer linearly visits samples in exactly the order the
/// embedding protocol requires: row ascending, then column, then channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleArray {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl SampleArray {
    /// Builds an array from raw parts, checking that the buffer length
    /// matches the declared shape.
    pub fn from_raw(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(StegoError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Copies a decoded image into a sample array. Images with an alpha
    /// channel keep it (4 channels), everything else is flattened to RGB.
    pub fn from_image(image: &DynamicImage) -> Self {
        let height = image.height() as usize;
        let width = image.width() as usize;
        if image.color().has_alpha() {
            Self {
                height,
                width,
                channels: 4,
                data: image.to_rgba8().into_raw(),
            }
        } else {
            Self {
                height,
                width,
                channels: 3,
                data: image.to_rgb8().into_raw(),
            }
        }
    }

    /// Rebuilds a [`DynamicImage`] from the sample buffer.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let width = self.width as u32;
        let height = self.height as u32;
        let image = match self.channels {
            3 => RgbImage::from_raw(width, height, self.data.clone()).map(DynamicImage::ImageRgb8),
            4 => {
                RgbaImage::from_raw(width, height, self.data.clone()).map(DynamicImage::ImageRgba8)
            }
            other => return Err(StegoError::UnsupportedChannels(other)),
        };
        image.ok_or(StegoError::ShapeMismatch {
            expected: self.height * self.width * self.channels,
            actual: self.data.len(),
        })
    }

    /// Number of samples, which is also the number of chunks the image can
    /// carry.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Sample at an explicit (row, column, channel) coordinate.
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return None;
        }
        Some(self.data[(row * self.width + col) * self.channels + channel])
    }
}

/// Decodes an image file into a sample array.
///
/// # Errors
///
/// Returns [`StegoError::MissingCarrier`] if the file does not exist, and
/// [`StegoError::Image`] if it cannot be decoded.
pub fn load(path: &Path) -> Result<SampleArray> {
    if !path.exists() {
        return Err(StegoError::MissingCarrier(path.to_owned()));
    }
    let image = image::open(path)?;
    Ok(SampleArray::from_image(&image))
}

/// Encodes a sample array to an image file; the format follows the file
/// extension. Only lossless formats preserve the embedded payload.
pub fn save(array: &SampleArray, path: &Path) -> Result<()> {
    array.to_image()?.save(path)?;
    Ok(())
}
