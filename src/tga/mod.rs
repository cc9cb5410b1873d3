//! TGA (Truevision Targa) encoder (internal).
//!
//! Only image type 2 is produced: an 18-byte header followed by
//! uncompressed B, G, R pixel triples. No image ID, color map, footer or
//! extension area is written.

mod encode;
pub(crate) mod header;

pub(crate) use encode::{encode, encoded_len};
