//! Fixed-size RGB pixel grid.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::TgaError;
use crate::limits::{Limits, byte_size};
use crate::pixel::{Color, gray};

/// A width x height grid of RGB pixels, stored row-major from the top-left.
///
/// The size is fixed at construction. The buffer is move-only: there is no
/// `Clone` impl, so handing it to another owner transfers it.
#[derive(Debug, PartialEq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer.
    ///
    /// Contents start out black but should be treated as unspecified until
    /// the buffer is filled or set. Zero-sized dimensions are rejected with
    /// [`TgaError::ZeroDimensions`].
    pub fn new(width: u16, height: u16) -> Result<Self, TgaError> {
        Self::with_limits(width, height, &Limits::default())
    }

    /// Like [`PixelBuffer::new`], also checking `limits` before allocating.
    pub fn with_limits(width: u16, height: u16, limits: &Limits) -> Result<Self, TgaError> {
        let len = checked_len(width, height)?;
        let bytes = byte_size(width, height, core::mem::size_of::<Color>(), 0)?;
        limits.check(width, height, bytes)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::default(); len],
        })
    }

    /// Wrap existing row-major pixel data.
    ///
    /// `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u16, height: u16, pixels: Vec<Color>) -> Result<Self, TgaError> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(TgaError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access to all pixels. The slice cannot change length.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Iterate over rows, top row first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + ExactSizeIterator {
        self.pixels.chunks_exact(usize::from(self.width))
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Pixel at (x, y), or `None` outside the image.
    pub fn get(&self, x: u16, y: u16) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Set every channel of every pixel to `value`.
    pub fn fill_gray(&mut self, value: u8) {
        self.fill(gray(value));
    }

    pub fn fill_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.fill(Color::new(red, green, blue));
    }

    /// Set the pixel at (x, y).
    ///
    /// Returns [`TgaError::OutOfBounds`] and leaves the buffer untouched when
    /// `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u16, y: u16, color: Color) -> Result<(), TgaError> {
        let i = self.index(x, y).ok_or(TgaError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Set the pixel at (x, y) to gray `value`. Same bounds contract as [`PixelBuffer::set`].
    pub fn set_gray(&mut self, x: u16, y: u16, value: u8) -> Result<(), TgaError> {
        self.set(x, y, gray(value))
    }

    pub fn set_rgb(&mut self, x: u16, y: u16, red: u8, green: u8, blue: u8) -> Result<(), TgaError> {
        self.set(x, y, Color::new(red, green, blue))
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(x) + usize::from(y) * usize::from(self.width))
    }
}

fn checked_len(width: u16, height: u16) -> Result<usize, TgaError> {
    if width == 0 || height == 0 {
        return Err(TgaError::ZeroDimensions { width, height });
    }
    byte_size(width, height, 1, 0)
}

#[cfg(feature = "imgref")]
impl PixelBuffer {
    /// Zero-copy view as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Color> {
        imgref::ImgRef::new(
            &self.pixels,
            usize::from(self.width),
            usize::from(self.height),
        )
    }
}

#[cfg(feature = "imgref")]
impl TryFrom<imgref::ImgVec<Color>> for PixelBuffer {
    type Error = TgaError;

    /// Copies out the visible pixels, dropping any stride padding.
    fn try_from(img: imgref::ImgVec<Color>) -> Result<Self, TgaError> {
        let (w, h) = (img.width(), img.height());
        let too_large = || TgaError::DimensionsTooLarge {
            width: w as u64,
            height: h as u64,
        };
        let width = u16::try_from(w).map_err(|_| too_large())?;
        let height = u16::try_from(h).map_err(|_| too_large())?;
        let pixels: Vec<Color> = img.as_ref().pixels().collect();
        Self::from_pixels(width, height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.set_gray(1, 1, 9).unwrap();
        assert_eq!(buf.pixels()[4], gray(9));
        assert_eq!(buf.index(2, 1), Some(5));
        assert_eq!(buf.index(3, 0), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn max_dimensions_fit() {
        assert_eq!(
            checked_len(u16::MAX, u16::MAX).unwrap(),
            65535 * 65535
        );
    }
}
