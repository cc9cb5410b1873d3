use crate::error::TgaError;

/// Resource caps for buffer allocation and encoding.
///
/// Every cap is optional; [`Limits::default`] allows anything a `u16` x `u16`
/// image can be.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u16>,
    pub max_height: Option<u16>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of a pixel allocation or of an encoded file, in bytes.
    pub max_bytes: Option<u64>,
}

impl Limits {
    /// Check an image of `width` x `height` that needs `bytes` bytes.
    ///
    /// `bytes` comes from [`byte_size`], so it has already been overflow checked.
    pub(crate) fn check(&self, width: u16, height: u16, bytes: usize) -> Result<(), TgaError> {
        let caps = [
            ("width", u64::from(width), self.max_width.map(u64::from)),
            ("height", u64::from(height), self.max_height.map(u64::from)),
            (
                "pixel count",
                u64::from(width) * u64::from(height),
                self.max_pixels,
            ),
            ("size in bytes", bytes as u64, self.max_bytes),
        ];
        for (what, value, cap) in caps {
            if let Some(cap) = cap
                && value > cap
            {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "{what} {value} exceeds limit {cap}"
                )));
            }
        }
        Ok(())
    }
}

/// `width * height * bytes_per_pixel + extra` without overflowing `usize`.
pub(crate) fn byte_size(
    width: u16,
    height: u16,
    bytes_per_pixel: usize,
    extra: usize,
) -> Result<usize, TgaError> {
    usize::from(width)
        .checked_mul(usize::from(height))
        .and_then(|px| px.checked_mul(bytes_per_pixel))
        .and_then(|n| n.checked_add(extra))
        .ok_or(TgaError::DimensionsTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        let limits = Limits::default();
        assert!(limits.check(u16::MAX, u16::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn pixel_cap_counts_area() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        assert!(limits.check(10, 10, 300).is_ok());
        assert!(matches!(
            limits.check(10, 11, 330),
            Err(TgaError::LimitExceeded(_))
        ));
    }

    #[test]
    fn byte_cap_is_inclusive() {
        let limits = Limits {
            max_bytes: Some(66),
            ..Default::default()
        };
        assert!(limits.check(4, 4, 66).is_ok());
        assert!(limits.check(4, 4, 67).is_err());
    }

    #[test]
    fn byte_size_adds_extra() {
        assert_eq!(byte_size(2, 1, 3, 18).unwrap(), 24);
    }

    #[test]
    fn byte_size_overflow_is_an_error() {
        match byte_size(u16::MAX, u16::MAX, usize::MAX / 2, 0) {
            Err(TgaError::DimensionsTooLarge { width, height }) => {
                assert_eq!((width, height), (65535, 65535));
            }
            other => panic!("expected DimensionsTooLarge, got {other:?}"),
        }
        assert!(byte_size(1, 1, usize::MAX, 1).is_err());
    }
}
