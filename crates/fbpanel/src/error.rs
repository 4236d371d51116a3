//! Pipeline errors
//!
//! Every variant is fatal for the current run.

use std::io;

use thiserror::Error;

use crate::geometry::BufferGeometry;

/// Errors raised while probing, capturing, mirroring or refreshing
#[derive(Debug, Error)]
pub enum Error {
    /// The device rejected the geometry query
    #[error("failed to query buffer geometry")]
    DeviceQuery(#[source] io::Error),

    /// The device reported a geometry the pipeline cannot size a buffer from
    #[error("unusable geometry {width}x{height} (virtual {virtual_width}x{virtual_height}) at {bits_per_pixel} bpp")]
    InvalidGeometry {
        width: u32,
        height: u32,
        virtual_width: u32,
        virtual_height: u32,
        bits_per_pixel: u32,
    },

    /// Source and destination geometries differ
    #[error("buffers differ: source {source_geometry}, destination {dest_geometry}")]
    GeometryMismatch {
        source_geometry: BufferGeometry,
        dest_geometry: BufferGeometry,
    },

    /// The snapshot buffer could not be allocated
    #[error("unable to allocate {size} bytes for the frame snapshot")]
    Allocation { size: usize },

    /// The device delivered less than a full frame
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// Reading the device failed outright
    #[error("failed to read frame data")]
    Read(#[source] io::Error),

    /// The sink accepted less than the full frame
    #[error("short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    /// Writing the sink failed outright
    #[error("failed to write frame data")]
    Write(#[source] io::Error),

    /// The panel controller refused an operation
    #[error("panel sequencing failed: {0}")]
    Panel(#[from] st7789vw::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
