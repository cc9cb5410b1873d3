//! TGA encoder: uncompressed 24-bit true-color.

use super::header::{HEADER_LEN, Origin, TgaHeader};
use crate::buffer::PixelBuffer;
use crate::error::TgaError;
use crate::limits::byte_size;
use crate::pixel::{BYTES_PER_PIXEL, Color, to_bgr};
use alloc::vec::Vec;
use enough::Stop;

/// Total encoded size: header plus three bytes per pixel.
pub(crate) fn encoded_len(buffer: &PixelBuffer) -> Result<usize, TgaError> {
    byte_size(buffer.width(), buffer.height(), BYTES_PER_PIXEL, HEADER_LEN)
}

/// Encode `buffer` to TGA bytes.
pub(crate) fn encode(
    buffer: &PixelBuffer,
    origin: Origin,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let mut out = Vec::with_capacity(encoded_len(buffer)?);
    let header = TgaHeader::for_dimensions(buffer.width(), buffer.height()).with_origin(origin);
    out.extend_from_slice(&header.to_bytes());

    stop.check()?;

    match origin {
        Origin::TopLeft => write_rows(&mut out, buffer.rows(), stop)?,
        Origin::BottomLeft => write_rows(&mut out, buffer.rows().rev(), stop)?,
    }

    Ok(out)
}

fn write_rows<'a>(
    out: &mut Vec<u8>,
    rows: impl Iterator<Item = &'a [Color]>,
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    for (row_idx, row) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for &px in row {
            out.extend_from_slice(&to_bgr(px));
        }
    }
    Ok(())
}
