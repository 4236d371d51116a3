//! Panel sequencing: reset, configuration and full-frame refresh

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::config::{Config, FrameTransfer};
use crate::error::{Error, TransferStage, TransferWarning};
use crate::interface::PanelInterface;

/// Bytes per panel-native (RGB565) pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Controller lifecycle
///
/// A [`PanelController`] is built over an interface whose bus session is
/// already open, so the first observable state is `BusReady`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// No bus session
    ///
    /// Never held by a live controller: [`PanelController::new`] takes an
    /// already-open interface and starts in `BusReady`.
    Uninitialized,
    /// Bus session configured
    BusReady,
    /// Reset line toggled
    PanelReset,
    /// Init commands and orientation sent
    PanelConfigured,
    /// A full frame has been streamed
    FrameDisplayed,
}

/// Sequencer for the ST7789VW controller
///
/// Transfer failures never abort a sequence. Each one is logged and kept
/// as a [`TransferWarning`] until collected with
/// [`take_warnings`](PanelController::take_warnings).
pub struct PanelController<I>
where
    I: PanelInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// Current lifecycle state
    state: PanelState,
    /// Non-escalated transfer failures
    warnings: Vec<TransferWarning<I::Error>>,
}

impl<I> PanelController<I>
where
    I: PanelInterface,
{
    /// Create a controller over an open interface
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PanelState::BusReady,
            warnings: Vec::new(),
        }
    }

    /// Toggle the hardware reset line and wait for the panel to settle
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.expect_state(PanelState::BusReady)?;
        self.interface.reset(delay);
        delay.delay_ms(self.config.reset_settle_ms);
        self.state = PanelState::PanelReset;
        Ok(())
    }

    /// Send the init commands, then the orientation command
    pub fn configure<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.expect_state(PanelState::PanelReset)?;
        let sequence = self.config.init_sequence();

        for &command in sequence.commands {
            log::debug!("panel command 0x{command:02X}");
            self.send(&[command], TransferStage::Command(command));
            delay.delay_ms(self.config.command_delay_ms);
        }

        log::debug!("panel orientation 0x{:02X}", sequence.orientation[1]);
        self.send(&sequence.orientation, TransferStage::Orientation);

        self.state = PanelState::PanelConfigured;
        Ok(())
    }

    /// Hardware reset followed by configuration
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.reset(delay)?;
        self.configure(delay)
    }

    /// Stream one full panel-native frame
    ///
    /// `frame` holds RGB565 pixels, two bytes each, in the order they are
    /// to be sent.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] unless the panel is configured
    /// - [`Error::MisalignedFrame`] if `frame` has an odd length
    pub fn display_frame(&mut self, frame: &[u8]) -> Result<(), Error> {
        self.expect_state(PanelState::PanelConfigured)?;
        if frame.len() % BYTES_PER_PIXEL != 0 {
            return Err(Error::MisalignedFrame { len: frame.len() });
        }

        let chunk_size = match self.config.frame_transfer {
            FrameTransfer::PerPixel => BYTES_PER_PIXEL,
            FrameTransfer::Chunked(size) => (size - size % BYTES_PER_PIXEL).max(BYTES_PER_PIXEL),
        };

        log::debug!(
            "streaming {} byte frame in {} byte transfers",
            frame.len(),
            chunk_size
        );

        for (index, chunk) in frame.chunks(chunk_size).enumerate() {
            let offset = index * chunk_size;
            self.send(chunk, TransferStage::Frame { offset });
        }

        self.state = PanelState::FrameDisplayed;
        Ok(())
    }

    fn send(&mut self, bytes: &[u8], stage: TransferStage) {
        if let Err(error) = self.interface.write(bytes) {
            log::warn!("panel transfer failed at {stage:?}: {error:?}");
            self.warnings.push(TransferWarning { stage, error });
        }
    }

    fn expect_state(&self, expected: PanelState) -> Result<(), Error> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Transfer failures recorded so far
    pub fn warnings(&self) -> &[TransferWarning<I::Error>] {
        &self.warnings
    }

    /// Drain the recorded transfer failures
    pub fn take_warnings(&mut self) -> Vec<TransferWarning<I::Error>> {
        core::mem::take(&mut self.warnings)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}
