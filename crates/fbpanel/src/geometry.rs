//! Buffer geometry probing
//!
//! Geometry is always queried from the device at runtime; nothing in the
//! pipeline assumes a resolution or depth.

use std::fmt;
use std::io;

use crate::error::{Error, Result};

/// Raw geometry as reported by a device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenInfo {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    /// Virtual (stride) width in pixels
    pub virtual_width: u32,
    /// Virtual height in pixels
    pub virtual_height: u32,
    /// Bits per pixel
    pub bits_per_pixel: u32,
}

/// A device that can report its buffer geometry
pub trait GeometrySource {
    /// Issue the geometry control request
    fn screen_info(&self) -> io::Result<ScreenInfo>;
}

impl<T: GeometrySource + ?Sized> GeometrySource for &T {
    fn screen_info(&self) -> io::Result<ScreenInfo> {
        T::screen_info(self)
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for &mut T {
    fn screen_info(&self) -> io::Result<ScreenInfo> {
        T::screen_info(self)
    }
}

/// Validated buffer geometry
///
/// `bits_per_pixel` is a non-zero multiple of 8 and every dimension is
/// non-zero. Only a successful [`probe`] constructs one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferGeometry {
    width: u32,
    height: u32,
    virtual_width: u32,
    virtual_height: u32,
    bits_per_pixel: u32,
    byte_size: usize,
}

impl BufferGeometry {
    /// Validate raw device geometry
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] for zero dimensions, a depth that is not
    /// a whole number of bytes, or a size that does not fit in memory.
    pub fn from_screen_info(info: ScreenInfo) -> Result<Self> {
        let invalid = || Error::InvalidGeometry {
            width: info.width,
            height: info.height,
            virtual_width: info.virtual_width,
            virtual_height: info.virtual_height,
            bits_per_pixel: info.bits_per_pixel,
        };

        let dimensions = [
            info.width,
            info.height,
            info.virtual_width,
            info.virtual_height,
        ];
        if dimensions.contains(&0) {
            return Err(invalid());
        }
        if info.bits_per_pixel == 0 || info.bits_per_pixel % 8 != 0 {
            return Err(invalid());
        }

        let byte_size = (info.virtual_height as usize)
            .checked_mul(info.virtual_width as usize)
            .and_then(|pixels| pixels.checked_mul((info.bits_per_pixel / 8) as usize))
            .ok_or_else(invalid)?;

        Ok(Self {
            width: info.width,
            height: info.height,
            virtual_width: info.virtual_width,
            virtual_height: info.virtual_height,
            bits_per_pixel: info.bits_per_pixel,
            byte_size,
        })
    }

    /// Visible width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Visible height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Virtual width in pixels
    pub fn virtual_width(&self) -> u32 {
        self.virtual_width
    }

    /// Virtual height in pixels
    pub fn virtual_height(&self) -> u32 {
        self.virtual_height
    }

    /// Bits per pixel
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Bytes per pixel
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel / 8
    }

    /// Size of a full snapshot: `virtual_height * virtual_width * bytes_per_pixel`
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }
}

impl fmt::Display for BufferGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} (virtual {}x{}) at {} bpp",
            self.width, self.height, self.virtual_width, self.virtual_height, self.bits_per_pixel
        )
    }
}

/// Query and validate the geometry of `device`
///
/// # Errors
///
/// - [`Error::DeviceQuery`] if the control request fails
/// - [`Error::InvalidGeometry`] if the reported geometry is unusable
pub fn probe<D: GeometrySource + ?Sized>(device: &D) -> Result<BufferGeometry> {
    let info = device.screen_info().map_err(Error::DeviceQuery)?;
    let geometry = BufferGeometry::from_screen_info(info)?;
    log::debug!("probed {geometry}, {} bytes", geometry.byte_size());
    Ok(geometry)
}
