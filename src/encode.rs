use alloc::vec::Vec;
use enough::{Stop, Unstoppable};

use crate::buffer::PixelBuffer;
use crate::error::TgaError;
use crate::limits::Limits;
use crate::tga;
use crate::tga::header::Origin;

#[cfg(feature = "std")]
use std::{fs, io::Write, path::Path};

/// Builder for encoding a [`PixelBuffer`] as TGA.
///
/// The defaults (top-left origin, no limits) produce the plain layout: the
/// 18-byte header followed by every pixel as B, G, R in buffer order.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    origin: Origin,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the origin recorded in the image descriptor.
    ///
    /// [`Origin::BottomLeft`] also writes rows bottom first, so viewers show
    /// the same picture either way.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode to an in-memory TGA file.
    pub fn encode(&self, buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, TgaError> {
        if let Some(limits) = self.limits {
            limits.check(buffer.width(), buffer.height(), tga::encoded_len(buffer)?)?;
        }
        tga::encode(buffer, self.origin, &stop)
    }

    /// Encode and write the whole file to `writer`.
    #[cfg(feature = "std")]
    pub fn write_to<W: Write>(
        &self,
        buffer: &PixelBuffer,
        mut writer: W,
        stop: impl Stop,
    ) -> Result<(), TgaError> {
        let bytes = self.encode(buffer, stop)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode and save to `path`, replacing any existing file.
    ///
    /// The image is fully encoded before the file is opened. If writing fails
    /// and this call created the file, the partial file is removed. A file
    /// that already existed (including a device node or symlink) is never
    /// removed.
    #[cfg(feature = "std")]
    pub fn save(
        &self,
        buffer: &PixelBuffer,
        path: impl AsRef<Path>,
        stop: impl Stop,
    ) -> Result<(), TgaError> {
        let path = path.as_ref();
        let bytes = self.encode(buffer, stop)?;
        log::debug!(
            "save: writing {}x{} image ({} bytes) to {}",
            buffer.width(),
            buffer.height(),
            bytes.len(),
            path.display()
        );
        write_file(path, &bytes)?;
        log::debug!("save: wrote {}", path.display());
        Ok(())
    }
}

#[cfg(feature = "std")]
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), TgaError> {
    write_file_with(path, bytes, |file, bytes| {
        file.write_all(bytes)?;
        file.flush()
    })
}

/// Open `path` (creating or truncating it) and hand it to `write`.
///
/// On failure the file is removed only if it did not exist before the call.
#[cfg(feature = "std")]
fn write_file_with(
    path: &Path,
    bytes: &[u8],
    write: impl FnOnce(&mut fs::File, &[u8]) -> std::io::Result<()>,
) -> Result<(), TgaError> {
    let write_err = |source: std::io::Error| TgaError::Write {
        path: path.display().to_string(),
        source,
    };
    let (mut file, created) = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => (file, true),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            let file = fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(path)
                .map_err(write_err)?;
            (file, false)
        }
        Err(e) => return Err(write_err(e)),
    };
    if let Err(source) = write(&mut file, bytes) {
        drop(file);
        if created {
            if let Err(e) = fs::remove_file(path) {
                log::warn!(
                    "save: could not remove partial file {}: {}",
                    path.display(),
                    e
                );
            }
        } else {
            log::warn!("save: {} was left partially written", path.display());
        }
        return Err(write_err(source));
    }
    Ok(())
}

/// Encode `buffer` as a top-left origin TGA file in memory.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>, TgaError> {
    EncodeRequest::new().encode(buffer, Unstoppable)
}

/// Total size in bytes of the encoded file: `18 + 3 * width * height`.
pub fn encoded_len(buffer: &PixelBuffer) -> Result<usize, TgaError> {
    tga::encoded_len(buffer)
}

/// Write the encoded file to `writer`.
#[cfg(feature = "std")]
pub fn write_to<W: Write>(buffer: &PixelBuffer, writer: W) -> Result<(), TgaError> {
    EncodeRequest::new().write_to(buffer, writer, Unstoppable)
}

/// Save `buffer` to `file_name`, relative to the current directory.
#[cfg(feature = "std")]
pub fn save(buffer: &PixelBuffer, file_name: &str) -> Result<(), TgaError> {
    save_in(buffer, "", file_name)
}

/// Save `buffer` to `dir` followed by `file_name`.
///
/// The two strings are joined as-is: `save_in(&buf, "out", "a.tga")` writes
/// `outa.tga`. Include the trailing separator in `dir`.
#[cfg(feature = "std")]
pub fn save_in(buffer: &PixelBuffer, dir: &str, file_name: &str) -> Result<(), TgaError> {
    let path = alloc::format!("{dir}{file_name}");
    EncodeRequest::new().save(buffer, path, Unstoppable)
}

#[cfg(feature = "std")]
impl PixelBuffer {
    /// Save to `file_name`. See [`save`].
    pub fn save(&self, file_name: &str) -> Result<(), TgaError> {
        save(self, file_name)
    }

    /// Save to `dir` + `file_name`. See [`save_in`].
    pub fn save_in(&self, dir: &str, file_name: &str) -> Result<(), TgaError> {
        save_in(self, dir, file_name)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "zentga-unit-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn fail_halfway(file: &mut fs::File, bytes: &[u8]) -> io::Result<()> {
        file.write_all(&bytes[..bytes.len() / 2])?;
        Err(io::Error::other("disk full"))
    }

    #[test]
    fn failed_write_removes_new_file() {
        let dir = scratch_dir("new-file");
        let path = dir.join("img.tga");
        match write_file_with(&path, &[7u8; 64], fail_halfway) {
            Err(TgaError::Write { source, .. }) => assert_eq!(source.to_string(), "disk full"),
            other => panic!("expected Write error, got {other:?}"),
        }
        assert!(!path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_write_keeps_existing_file() {
        let dir = scratch_dir("existing-file");
        let path = dir.join("img.tga");
        fs::write(&path, b"old contents").unwrap();
        assert!(write_file_with(&path, &[7u8; 64], fail_halfway).is_err());
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), vec![7u8; 32]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_keeps_symlink() {
        let dir = scratch_dir("symlink");
        let target = dir.join("target.tga");
        let link = dir.join("link.tga");
        fs::write(&target, b"x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(write_file_with(&link, &[1u8; 8], fail_halfway).is_err());
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        fs::remove_dir_all(&dir).unwrap();
    }
}
