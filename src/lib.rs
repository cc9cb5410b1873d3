//! # zentga
//!
//! A fixed-size RGB pixel buffer and an uncompressed 24-bit TGA encoder.
//!
//! Build a [`PixelBuffer`], paint it with `fill*` and `set*`, then write it
//! out. The file is an 18-byte header followed by `width * height` pixels,
//! each stored as blue, green, red, rows top to bottom.
//!
//! ## Non-Goals
//!
//! - Decoding TGA (or anything else)
//! - RLE compression, color-mapped and grayscale image types
//! - Alpha channels, the TGA 2.0 footer and extension area
//! - Color management, resizing, compositing
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{Color, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(64, 32)?;
//! image.fill_gray(40);
//! image.set(3, 4, Color::new(255, 128, 0))?;
//! image.save_in("out/", "image.tga")?;
//!
//! // Or keep it in memory
//! let bytes = zentga::encode(&image)?;
//! assert_eq!(bytes.len(), 18 + 64 * 32 * 3);
//! # Ok::<(), zentga::TgaError>(())
//! ```
//!
//! With options:
//!
//! ```no_run
//! use zentga::{EncodeRequest, Limits, Origin, PixelBuffer, Unstoppable};
//!
//! let image = PixelBuffer::new(8, 8)?;
//! let limits = Limits { max_bytes: Some(1 << 20), ..Default::default() };
//! EncodeRequest::new()
//!     .with_origin(Origin::BottomLeft)
//!     .with_limits(&limits)
//!     .save(&image, "bottom-up.tga", Unstoppable)?;
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod encode;
mod error;
mod limits;
mod pixel;
mod tga;

// Re-exports
pub use buffer::PixelBuffer;
pub use encode::{EncodeRequest, encode, encoded_len};
#[cfg(feature = "std")]
pub use encode::{save, save_in, write_to};
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use limits::Limits;
pub use pixel::{BYTES_PER_PIXEL, Color, gray};
pub use tga::header::{HEADER_LEN, IMAGE_TYPE_TRUE_COLOR, Origin, PIXEL_DEPTH, TgaHeader};
