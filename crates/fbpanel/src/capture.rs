//! Frame snapshot capture

use std::io::Read;

use crate::error::{Error, Result};
use crate::geometry::BufferGeometry;

/// Owned, immutable pixel data
///
/// A snapshot never aliases the device it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap already-owned bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take the underlying bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Read one full frame of `geometry` from `device`
///
/// Issues a single read. A framebuffer delivers a whole frame at once, so
/// fewer bytes than `geometry.byte_size()` is an error and is not retried.
///
/// # Errors
///
/// - [`Error::Allocation`] if the buffer cannot be reserved
/// - [`Error::ShortRead`] if the device returns fewer bytes
/// - [`Error::Read`] if the read call itself fails
pub fn capture<R: Read + ?Sized>(
    device: &mut R,
    geometry: &BufferGeometry,
) -> Result<PixelBuffer> {
    let size = geometry.byte_size();

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|_| Error::Allocation { size })?;
    bytes.resize(size, 0);

    let read = device.read(&mut bytes).map_err(Error::Read)?;
    if read != size {
        return Err(Error::ShortRead {
            expected: size,
            actual: read,
        });
    }

    log::debug!("captured {size} byte snapshot");
    Ok(PixelBuffer { bytes })
}
