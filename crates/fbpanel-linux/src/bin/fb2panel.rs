//! Push one snapshot of /dev/fb1 to an ST7789VW panel on /dev/spidev0.0.

use std::process::ExitCode;

use anyhow::Context;
use embedded_hal::spi::MODE_0;
use fbpanel::refresh_panel;
use fbpanel_linux::{init_logging, open_link, FbDevice, ResetLine};
use linux_embedded_hal::Delay;
use st7789vw::{Builder, Interface, PanelController, Rotation};

const FB_PATH: &str = "/dev/fb1";
const SPI_PATH: &str = "/dev/spidev0.0";

const GPIO_CHIP: &str = "/dev/gpiochip0";
const RESET_LINE: u32 = 25;

const SPI_SPEED_HZ: u32 = 32_000_000;
const SPI_BITS_PER_WORD: u8 = 8;

fn run() -> anyhow::Result<()> {
    let config = Builder::new()
        .clock_hz(SPI_SPEED_HZ)
        .word_bits(SPI_BITS_PER_WORD)
        .mode(MODE_0)
        .rotation(Rotation::Rotate180)
        .build()
        .context("building panel configuration")?;

    let link = open_link(SPI_PATH, config.link)?;
    let mut source = FbDevice::open_read(FB_PATH).with_context(|| format!("opening {FB_PATH}"))?;

    let reset = ResetLine::request(GPIO_CHIP, RESET_LINE, "fb2panel-reset").unwrap_or_else(|e| {
        log::warn!("{e:#}; continuing without hardware reset");
        ResetLine::unwired()
    });

    let mut panel = PanelController::new(Interface::new(link, reset), config);
    let mut delay = Delay;

    let report = refresh_panel(&mut source, &mut panel, &mut delay)
        .with_context(|| format!("refreshing panel from {FB_PATH}"))?;

    log::info!(
        "Panel refreshed from {FB_PATH}: {} bytes, {} failed transfers",
        report.frame_len,
        report.warnings
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
