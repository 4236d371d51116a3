//! Hardware interface abstraction
//!
//! This module provides the [`PanelInterface`] trait and the [`Interface`] struct
//! for talking to the ST7789VW controller.
//!
//! ## Hardware Requirements
//!
//! - SPI bus session ([`PanelLink`])
//! - **RST**: Reset (output, active low). Boards without a wired reset
//!   line use [`NoReset`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use st7789vw::{Interface, LinkConfig, PanelLink};
//!
//! let link = PanelLink::open(bus, LinkConfig::default())?;
//! let mut interface = Interface::new(link, rst_pin);
//!
//! interface.reset(&mut delay);
//! interface.write(&[0x11])?; // Sleep out
//! ```

use core::convert::Infallible;
use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::error::LinkError;
use crate::link::{PanelLink, SerialBus};

/// Reset pulse width (ms)
const RESET_PULSE_MS: u32 = 10;

/// Trait for the hardware interface to the ST7789VW controller
///
/// The [`PanelController`](crate::display::PanelController) only needs a
/// byte pipe and a reset line; implement this trait on your own type for
/// anything other than a [`PanelLink`] plus a GPIO.
pub trait PanelInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send bytes to the controller in one blocking transfer
    ///
    /// # Errors
    ///
    /// Returns an error if the bus reports a failed transfer.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Toggle the hardware reset line
    ///
    /// Fire-and-forget: pin errors are ignored and nothing is read back.
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Hardware interface implementation for the ST7789VW
///
/// ## Type Parameters
///
/// * `B` - Serial bus implementing [`SerialBus`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<B: SerialBus, RST> {
    /// Configured bus session
    link: PanelLink<B>,
    /// Reset pin (active low)
    rst: RST,
}

impl<B, RST> Interface<B, RST>
where
    B: SerialBus,
    RST: OutputPin,
{
    /// Create a new Interface from an open session and a reset pin
    pub fn new(link: PanelLink<B>, rst: RST) -> Self {
        Self { link, rst }
    }

    /// Close the bus session and return the reset pin
    pub fn release(mut self) -> RST {
        self.link.close();
        self.rst
    }

    /// Underlying bus session
    pub fn link(&self) -> &PanelLink<B> {
        &self.link
    }
}

impl<B, RST> PanelInterface for Interface<B, RST>
where
    B: SerialBus,
    RST: OutputPin,
{
    type Error = LinkError<B::Error>;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.link.transfer(bytes)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: HIGH -> LOW -> wait -> HIGH
        let _ = self.rst.set_high();
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        let _ = self.rst.set_high();
    }
}

/// Placeholder reset pin for boards without a wired reset line
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReset;

impl ErrorType for NoReset {
    type Error = Infallible;
}

impl OutputPin for NoReset {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
