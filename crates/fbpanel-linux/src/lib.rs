//! Linux bindings for the framebuffer pipeline
//!
//! - [`FbDevice`] - `/dev/fbN` as a geometry source, snapshot source or sink
//! - [`SpidevBus`] - `/dev/spidevB.C` as a [`st7789vw::SerialBus`]
//! - [`ResetLine`] - panel reset GPIO via gpio-cdev

pub mod device;
pub mod reset;
pub mod spi;

pub use device::FbDevice;
pub use reset::ResetLine;
pub use spi::{open_link, SpidevBus};

/// Install the process logger
///
/// Defaults to `info`; `RUST_LOG` overrides.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
