//! spidev bus binding

use std::io;
use std::path::Path;

use anyhow::Context;
use embedded_hal::spi::{Mode, Phase, Polarity};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};
use st7789vw::{LinkConfig, PanelLink, SerialBus};

/// A `/dev/spidevB.C` node
///
/// Each [`SerialBus`] setter issues exactly one `SPI_IOC_WR_*` request.
pub struct SpidevBus(Spidev);

impl SpidevBus {
    /// Open the device node without configuring it
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Spidev::open(path).map(Self)
    }
}

impl SerialBus for SpidevBus {
    type Error = io::Error;

    fn set_mode(&mut self, mode: Mode) -> io::Result<()> {
        let options = SpidevOptions::new().mode(mode_flags(mode)).build();
        self.0.configure(&options)
    }

    fn set_word_bits(&mut self, bits: u8) -> io::Result<()> {
        let options = SpidevOptions::new().bits_per_word(bits).build();
        self.0.configure(&options)
    }

    fn set_clock_hz(&mut self, hz: u32) -> io::Result<()> {
        let options = SpidevOptions::new().max_speed_hz(hz).build();
        self.0.configure(&options)
    }

    fn transfer(&mut self, tx: &[u8], clock_hz: u32, word_bits: u8) -> io::Result<()> {
        let mut transfer = SpidevTransfer::write(tx);
        transfer.speed_hz = clock_hz;
        transfer.bits_per_word = word_bits;
        self.0.transfer(&mut transfer)
    }
}

/// spidev flags for an embedded-hal mode
pub fn mode_flags(mode: Mode) -> SpiModeFlags {
    match (mode.polarity, mode.phase) {
        (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => SpiModeFlags::SPI_MODE_0,
        (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => SpiModeFlags::SPI_MODE_1,
        (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => SpiModeFlags::SPI_MODE_2,
        (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => SpiModeFlags::SPI_MODE_3,
    }
}

/// Open `path` and configure a panel session on it
pub fn open_link(path: &str, config: LinkConfig) -> anyhow::Result<PanelLink<SpidevBus>> {
    let bus = SpidevBus::open(path).with_context(|| format!("opening SPI device {path}"))?;
    let link = PanelLink::open(bus, config).with_context(|| format!("configuring {path}"))?;
    log::info!(
        "opened {path} at {} Hz, {} bits/word",
        config.clock_hz,
        config.word_bits
    );
    Ok(link)
}
