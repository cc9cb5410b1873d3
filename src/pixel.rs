/// An RGB color with three 8-bit channels.
///
/// This is [`rgb::RGB8`]; construct it with `Color::new(r, g, b)` and read
/// the channels through the `r`, `g` and `b` fields.
pub type Color = rgb::RGB8;

/// Bytes each pixel occupies in the encoded payload (B, G, R).
pub const BYTES_PER_PIXEL: usize = 3;

/// A color with all three channels set to `value`.
#[inline]
pub const fn gray(value: u8) -> Color {
    Color {
        r: value,
        g: value,
        b: value,
    }
}

/// On-disk channel order: blue, green, red.
#[inline]
pub(crate) fn to_bgr(c: Color) -> [u8; BYTES_PER_PIXEL] {
    [c.b, c.g, c.r]
}
