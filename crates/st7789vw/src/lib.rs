//! Driver for the ST7789VW TFT controller
//!
//! Sequences the panel over a raw serial bus session: hardware reset,
//! single-byte init commands, orientation, then one full RGB565 frame.
//!
//! ## Layers
//!
//! - [`SerialBus`] - control requests and blocking transfers of a bus device
//! - [`PanelLink`] - one configured bus session
//! - [`PanelInterface`] / [`Interface`] - byte pipe plus reset line
//! - [`PanelController`] - reset/configure/refresh state machine
//!
//! ## Example
//!
//! ```rust,ignore
//! use st7789vw::{Builder, Interface, NoReset, PanelController, PanelLink};
//!
//! let config = Builder::new().build()?;
//! let link = PanelLink::open(bus, config.link)?;
//! let mut panel = PanelController::new(Interface::new(link, NoReset), config);
//!
//! panel.init(&mut delay)?;
//! panel.display_frame(&rgb565_frame)?;
//! for warning in panel.take_warnings() {
//!     log::warn!("{:?}", warning.stage);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod interface;
pub mod link;

pub use config::{Builder, Config, FrameTransfer, InitSequence, LinkConfig, Rotation};
pub use display::{PanelController, PanelState};
pub use error::{BuilderError, BusRequest, Error, LinkError, TransferStage, TransferWarning};
pub use interface::{Interface, NoReset, PanelInterface};
pub use link::{PanelLink, SerialBus};

/// Native panel width in pixels
pub const DISPLAY_WIDTH: u32 = 320;

/// Native panel height in pixels
pub const DISPLAY_HEIGHT: u32 = 240;
