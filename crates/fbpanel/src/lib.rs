//! Framebuffer display pipeline
//!
//! Snapshots a pixel buffer whose geometry is only known at runtime, then
//! either copies it verbatim onto a second buffer ([`mirror`]) or converts
//! it to RGB565 and streams it to an ST7789VW panel ([`refresh_panel`]).
//!
//! ```text
//! probe -> capture -> { mirror write-out | convert -> PanelController -> PanelLink }
//! ```
//!
//! Devices are reached through [`GeometrySource`] plus `std::io::Read` /
//! `std::io::Write`, so every stage runs against in-memory doubles in tests.

pub mod capture;
pub mod color;
pub mod error;
pub mod geometry;
pub mod mirror;
pub mod reconcile;
pub mod refresh;

pub use capture::{capture, PixelBuffer};
pub use color::{convert_truecolor_to_panel16, rgb888_to_rgb565, whole_pixels};
pub use error::{Error, Result};
pub use geometry::{probe, BufferGeometry, GeometrySource, ScreenInfo};
pub use mirror::mirror;
pub use reconcile::{comparable_fields, reconcile};
pub use refresh::{refresh_panel, RefreshReport};
