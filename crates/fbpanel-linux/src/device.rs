//! fbdev character devices

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use fbpanel::{GeometrySource, ScreenInfo};
use framebuffer::Framebuffer;

/// An open `/dev/fbN` node
///
/// Reads and writes go straight to the device file; geometry comes from
/// `FBIOGET_VSCREENINFO`.
pub struct FbDevice {
    file: File,
    path: PathBuf,
}

impl FbDevice {
    /// Open for reading (snapshot source)
    pub fn open_read(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: File::open(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Open for writing (mirror sink)
    pub fn open_write(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: OpenOptions::new().write(true).open(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Device node path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeometrySource for FbDevice {
    fn screen_info(&self) -> io::Result<ScreenInfo> {
        let info = Framebuffer::get_var_screeninfo(&self.file)
            .map_err(|e| io::Error::other(format!("{}: {e:?}", self.path.display())))?;
        Ok(ScreenInfo {
            width: info.xres,
            height: info.yres,
            virtual_width: info.xres_virtual,
            virtual_height: info.yres_virtual,
            bits_per_pixel: info.bits_per_pixel,
        })
    }
}

impl Read for FbDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for FbDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
