#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    // First 4 bytes pick the size, the rest is a stream of 7-byte set commands
    let Some((dims, ops)) = data.split_first_chunk::<4>() else {
        return;
    };
    let width = u16::from_le_bytes([dims[0], dims[1]]) % 64;
    let height = u16::from_le_bytes([dims[2], dims[3]]) % 64;
    let Ok(mut buf) = PixelBuffer::new(width, height) else {
        assert!(width == 0 || height == 0);
        return;
    };

    for op in ops.chunks_exact(7) {
        let x = u16::from_le_bytes([op[0], op[1]]) % 80;
        let y = u16::from_le_bytes([op[2], op[3]]) % 80;
        let c = Color::new(op[4], op[5], op[6]);
        let inside = x < width && y < height;
        assert_eq!(buf.set(x, y, c).is_ok(), inside);
        if inside {
            assert_eq!(buf.get(x, y), Some(c));
        }
    }

    let encoded = encode(&buf).unwrap();
    assert_eq!(encoded.len(), 18 + 3 * usize::from(width) * usize::from(height));
    assert_eq!(&encoded[12..14], &width.to_le_bytes());
    assert_eq!(&encoded[14..16], &height.to_le_bytes());
    for (px, bgr) in buf.pixels().iter().zip(encoded[HEADER_LEN..].chunks_exact(3)) {
        assert_eq!(bgr, &[px.b, px.g, px.r]);
    }
});
