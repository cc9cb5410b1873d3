//! The 18-byte TGA file header.
//!
//! Fields are serialized one by one in file order with explicit
//! little-endian encoding; the struct's memory layout is never written.

/// Length of the encoded header in bytes.
pub const HEADER_LEN: usize = 18;

/// Image type 2: uncompressed true-color.
pub const IMAGE_TYPE_TRUE_COLOR: u8 = 2;

/// Bits per pixel: 8-bit blue, green and red, no alpha.
pub const PIXEL_DEPTH: u8 = 24;

/// Descriptor bit 5: rows run top to bottom.
const DESCRIPTOR_TOP_ORIGIN: u8 = 0x20;

/// Which corner the first stored row belongs to.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Descriptor `0x20`. Rows are written in buffer order, top row first.
    #[default]
    TopLeft,
    /// Descriptor `0x00`. Rows are written bottom row first.
    BottomLeft,
}

impl Origin {
    /// Image descriptor byte for this origin.
    pub fn descriptor(self) -> u8 {
        match self {
            Self::TopLeft => DESCRIPTOR_TOP_ORIGIN,
            Self::BottomLeft => 0,
        }
    }
}

/// TGA header for an uncompressed 24-bit image with no ID field and no color map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
    pub origin: Origin,
}

impl TgaHeader {
    /// Header for a `width` x `height` image with a top-left origin.
    pub fn for_dimensions(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            origin: Origin::TopLeft,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Serialize to the exact on-disk byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let mut w = FieldWriter::new(&mut out);
        w.u8(0); // ID length
        w.u8(0); // color map type
        w.u8(IMAGE_TYPE_TRUE_COLOR);
        w.u16(0); // color map first entry
        w.u16(0); // color map length
        w.u8(0); // color map entry size
        w.u16(0); // x origin
        w.u16(0); // y origin
        w.u16(self.width);
        w.u16(self.height);
        w.u8(PIXEL_DEPTH);
        w.u8(self.origin.descriptor());
        debug_assert_eq!(w.pos, HEADER_LEN);
        out
    }
}

struct FieldWriter<'a> {
    buf: &'a mut [u8; HEADER_LEN],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    fn new(buf: &'a mut [u8; HEADER_LEN]) -> Self {
        Self { buf, pos: 0 }
    }

    fn u8(&mut self, v: u8) {
        self.buf[self.pos] = v;
        self.pos += 1;
    }

    fn u16(&mut self, v: u16) {
        self.buf[self.pos..self.pos + 2].copy_from_slice(&v.to_le_bytes());
        self.pos += 2;
    }
}
