//! Verbatim buffer mirroring

use std::io::{Read, Write};

use crate::capture::capture;
use crate::error::{Error, Result};
use crate::geometry::{probe, GeometrySource};
use crate::reconcile::reconcile;

/// Copy one snapshot of `source` onto `dest`
///
/// Both geometries are probed and reconciled before anything is read, so a
/// mismatch never touches either buffer. The snapshot is written with a
/// single write call. Returns the number of bytes copied.
///
/// # Errors
///
/// Any probe, reconcile or capture error, plus [`Error::ShortWrite`] if the
/// sink accepts fewer bytes than were captured and [`Error::Write`] if the
/// write call fails.
pub fn mirror<S, D>(source: &mut S, dest: &mut D) -> Result<usize>
where
    S: GeometrySource + Read + ?Sized,
    D: GeometrySource + Write + ?Sized,
{
    let source_geometry = probe(source)?;
    let dest_geometry = probe(dest)?;
    reconcile(&source_geometry, &dest_geometry)?;

    let snapshot = capture(source, &source_geometry)?;

    let expected = snapshot.len();
    let written = dest.write(snapshot.as_bytes()).map_err(Error::Write)?;
    if written != expected {
        return Err(Error::ShortWrite {
            expected,
            actual: written,
        });
    }

    log::info!("mirrored {expected} bytes ({source_geometry})");
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScreenInfo;
    use std::io;

    struct Sink {
        info: ScreenInfo,
        accept: usize,
        written: Vec<u8>,
        writes: usize,
    }

    impl GeometrySource for Sink {
        fn screen_info(&self) -> io::Result<ScreenInfo> {
            Ok(self.info)
        }
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            let n = buf.len().min(self.accept);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Source {
        info: ScreenInfo,
        data: io::Cursor<Vec<u8>>,
    }

    impl GeometrySource for Source {
        fn screen_info(&self) -> io::Result<ScreenInfo> {
            Ok(self.info)
        }
    }

    impl Read for Source {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.data.read(buf)
        }
    }

    fn info(width: u32, height: u32) -> ScreenInfo {
        ScreenInfo {
            width,
            height,
            virtual_width: width,
            virtual_height: height,
            bits_per_pixel: 8,
        }
    }

    #[test]
    fn test_short_write_is_fatal() {
        let mut source = Source {
            info: info(4, 4),
            data: io::Cursor::new(vec![7; 16]),
        };
        let mut sink = Sink {
            info: info(4, 4),
            accept: 10,
            written: Vec::new(),
            writes: 0,
        };

        let result = mirror(&mut source, &mut sink);

        assert!(matches!(
            result,
            Err(Error::ShortWrite {
                expected: 16,
                actual: 10
            })
        ));
        // No retry
        assert_eq!(sink.writes, 1);
    }

    #[test]
    fn test_returns_bytes_copied() {
        let mut source = Source {
            info: info(2, 2),
            data: io::Cursor::new(vec![1, 2, 3, 4]),
        };
        let mut sink = Sink {
            info: info(2, 2),
            accept: usize::MAX,
            written: Vec::new(),
            writes: 0,
        };

        assert_eq!(mirror(&mut source, &mut sink).unwrap(), 4);
        assert_eq!(sink.written, vec![1, 2, 3, 4]);
    }
}
