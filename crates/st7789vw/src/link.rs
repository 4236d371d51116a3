//! Serial bus session
//!
//! [`SerialBus`] is the raw control-request surface of a bus device (on
//! Linux, the spidev ioctls). [`PanelLink`] owns one configured session on
//! top of it and exposes a single blocking transfer primitive.
//!
//! ## Example
//!
//! ```rust,ignore
//! use st7789vw::{LinkConfig, PanelLink};
//!
//! let mut link = PanelLink::open(bus, LinkConfig::default())?;
//! link.transfer(&[0x01])?; // Software reset
//! link.close();
//! ```

use core::fmt::Debug;

use embedded_hal::spi::Mode;

use crate::config::LinkConfig;
use crate::error::{BusRequest, LinkError};

/// Control requests exposed by a serial bus device
///
/// Each setter corresponds to one independent control request; the bus
/// may reject any of them.
pub trait SerialBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Set clock polarity and phase
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;

    /// Set bits per word
    fn set_word_bits(&mut self, bits: u8) -> Result<(), Self::Error>;

    /// Set maximum clock rate
    fn set_clock_hz(&mut self, hz: u32) -> Result<(), Self::Error>;

    /// Send `tx` in one blocking transfer at the given clock and word size
    fn transfer(&mut self, tx: &[u8], clock_hz: u32, word_bits: u8) -> Result<(), Self::Error>;
}

impl<T: SerialBus + ?Sized> SerialBus for &mut T {
    type Error = T::Error;

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        T::set_mode(self, mode)
    }

    fn set_word_bits(&mut self, bits: u8) -> Result<(), Self::Error> {
        T::set_word_bits(self, bits)
    }

    fn set_clock_hz(&mut self, hz: u32) -> Result<(), Self::Error> {
        T::set_clock_hz(self, hz)
    }

    fn transfer(&mut self, tx: &[u8], clock_hz: u32, word_bits: u8) -> Result<(), Self::Error> {
        T::transfer(self, tx, clock_hz, word_bits)
    }
}

/// An open, configured bus session
///
/// The bus is released by [`close`](PanelLink::close) or when the link is
/// dropped, whichever comes first.
pub struct PanelLink<B: SerialBus> {
    bus: Option<B>,
    config: LinkConfig,
}

impl<B: SerialBus> PanelLink<B> {
    /// Configure `bus` and take ownership of it
    ///
    /// Requests are issued in the order mode, word size, clock rate.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::BusConfig`] naming the first rejected request.
    /// The bus is dropped in that case.
    pub fn open(mut bus: B, config: LinkConfig) -> Result<Self, LinkError<B::Error>> {
        bus.set_mode(config.mode)
            .map_err(|source| LinkError::BusConfig {
                request: BusRequest::Mode,
                source,
            })?;
        bus.set_word_bits(config.word_bits)
            .map_err(|source| LinkError::BusConfig {
                request: BusRequest::WordBits,
                source,
            })?;
        bus.set_clock_hz(config.clock_hz)
            .map_err(|source| LinkError::BusConfig {
                request: BusRequest::ClockRate,
                source,
            })?;

        log::debug!(
            "bus session open: {} Hz, {} bits/word, {:?}",
            config.clock_hz,
            config.word_bits,
            config.mode
        );

        Ok(Self {
            bus: Some(bus),
            config,
        })
    }

    /// Send `bytes` in one blocking transfer
    ///
    /// An empty slice is not sent.
    pub fn transfer(&mut self, bytes: &[u8]) -> Result<(), LinkError<B::Error>> {
        let bus = self.bus.as_mut().ok_or(LinkError::Closed)?;
        if bytes.is_empty() {
            return Ok(());
        }
        bus.transfer(bytes, self.config.clock_hz, self.config.word_bits)
            .map_err(LinkError::Transfer)
    }

    /// Release the bus; further calls are no-ops
    pub fn close(&mut self) {
        if self.bus.take().is_some() {
            log::debug!("bus session closed");
        }
    }

    /// Whether the session still owns its bus
    pub fn is_open(&self) -> bool {
        self.bus.is_some()
    }

    /// Session parameters
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}

impl<B: SerialBus> Drop for PanelLink<B> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::spi::MODE_3;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Mode(Mode),
        WordBits(u8),
        Clock(u32),
        Transfer { len: usize, clock_hz: u32, word_bits: u8 },
    }

    #[derive(Debug, PartialEq)]
    struct Rejected;

    #[derive(Default)]
    struct MockBus {
        calls: Vec<Call>,
        reject: Option<BusRequest>,
        fail_transfers: bool,
    }

    impl SerialBus for MockBus {
        type Error = Rejected;

        fn set_mode(&mut self, mode: Mode) -> Result<(), Rejected> {
            self.calls.push(Call::Mode(mode));
            if self.reject == Some(BusRequest::Mode) {
                return Err(Rejected);
            }
            Ok(())
        }

        fn set_word_bits(&mut self, bits: u8) -> Result<(), Rejected> {
            self.calls.push(Call::WordBits(bits));
            if self.reject == Some(BusRequest::WordBits) {
                return Err(Rejected);
            }
            Ok(())
        }

        fn set_clock_hz(&mut self, hz: u32) -> Result<(), Rejected> {
            self.calls.push(Call::Clock(hz));
            if self.reject == Some(BusRequest::ClockRate) {
                return Err(Rejected);
            }
            Ok(())
        }

        fn transfer(&mut self, tx: &[u8], clock_hz: u32, word_bits: u8) -> Result<(), Rejected> {
            self.calls.push(Call::Transfer {
                len: tx.len(),
                clock_hz,
                word_bits,
            });
            if self.fail_transfers {
                return Err(Rejected);
            }
            Ok(())
        }
    }

    fn config() -> LinkConfig {
        LinkConfig {
            clock_hz: 1_000_000,
            word_bits: 8,
            mode: MODE_3,
        }
    }

    #[test]
    fn test_open_issues_requests_in_order() {
        let mut bus = MockBus::default();
        let link = PanelLink::open(&mut bus, config()).unwrap();
        drop(link);
        assert_eq!(
            bus.calls,
            [Call::Mode(MODE_3), Call::WordBits(8), Call::Clock(1_000_000)]
        );
    }

    #[test]
    fn test_open_reports_rejected_request() {
        for request in [BusRequest::Mode, BusRequest::WordBits, BusRequest::ClockRate] {
            let bus = MockBus {
                reject: Some(request),
                ..MockBus::default()
            };
            let result = PanelLink::open(bus, config());
            assert!(
                matches!(result, Err(LinkError::BusConfig { request: r, .. }) if r == request)
            );
        }
    }

    #[test]
    fn test_open_stops_at_first_rejection() {
        let mut bus = MockBus {
            reject: Some(BusRequest::Mode),
            ..MockBus::default()
        };
        assert!(PanelLink::open(&mut bus, config()).is_err());
        assert_eq!(bus.calls, [Call::Mode(MODE_3)]);
    }

    #[test]
    fn test_transfer_uses_session_parameters() {
        let mut bus = MockBus::default();
        let mut link = PanelLink::open(&mut bus, config()).unwrap();
        link.transfer(&[0x36, 0xC0]).unwrap();
        drop(link);
        assert_eq!(
            bus.calls.last(),
            Some(&Call::Transfer {
                len: 2,
                clock_hz: 1_000_000,
                word_bits: 8
            })
        );
    }

    #[test]
    fn test_transfer_failure_is_reported() {
        let bus = MockBus {
            fail_transfers: true,
            ..MockBus::default()
        };
        let mut link = PanelLink::open(bus, config()).unwrap();
        assert!(matches!(link.transfer(&[0x01]), Err(LinkError::Transfer(Rejected))));
        // The session stays usable after a failed transfer
        assert!(link.is_open());
        assert!(matches!(link.transfer(&[0x11]), Err(LinkError::Transfer(_))));
    }

    #[test]
    fn test_empty_transfer_is_skipped() {
        let mut bus = MockBus::default();
        let mut link = PanelLink::open(&mut bus, config()).unwrap();
        link.transfer(&[]).unwrap();
        drop(link);
        assert_eq!(bus.calls.len(), 3);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut link = PanelLink::open(MockBus::default(), config()).unwrap();
        link.close();
        link.close();
        assert!(!link.is_open());
        assert!(matches!(link.transfer(&[0x01]), Err(LinkError::Closed)));
    }
}
