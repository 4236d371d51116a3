//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! bus sessions ([`LinkError`]) and panel sequencing ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`LinkError`] - Bus configuration and transfer failures
//! - [`Error`] - Controller misuse (wrong state, malformed frame)
//! - [`TransferWarning`] - A transfer failure that was recorded but not escalated
//!
//! ## Example
//!
//! ```
//! use st7789vw::{Builder, BuilderError};
//!
//! let result = Builder::new().clock_hz(0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidClock)));
//! ```

use core::fmt::Debug;

use crate::display::PanelState;

/// Control request issued while opening a bus session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusRequest {
    /// Clock polarity/phase
    Mode,
    /// Bits per word
    WordBits,
    /// Maximum clock rate
    ClockRate,
}

impl core::fmt::Display for BusRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusRequest::Mode => write!(f, "mode"),
            BusRequest::WordBits => write!(f, "bits per word"),
            BusRequest::ClockRate => write!(f, "clock rate"),
        }
    }
}

/// Errors raised by a [`PanelLink`](crate::link::PanelLink)
///
/// Generic over the bus error type so callers can inspect the OS error.
#[derive(Debug)]
pub enum LinkError<E> {
    /// The bus rejected one of the session control requests
    BusConfig {
        /// Which request was rejected
        request: BusRequest,
        /// Underlying bus error
        source: E,
    },
    /// A blocking transfer reported failure
    Transfer(E),
    /// The session has already been closed
    Closed,
}

impl<E: Debug> core::fmt::Display for LinkError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinkError::BusConfig { request, source } => {
                write!(f, "Bus rejected {request} request: {source:?}")
            }
            LinkError::Transfer(e) => write!(f, "Transfer failed: {e:?}"),
            LinkError::Closed => write!(f, "Bus session closed"),
        }
    }
}

impl<E: Debug> core::error::Error for LinkError<E> {}

/// Errors that can occur when sequencing the panel
///
/// Bus failures are not part of this type: they are collected as
/// [`TransferWarning`]s and the sequence carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation requested from the wrong controller state
    InvalidState {
        /// State the operation requires
        expected: PanelState,
        /// State the controller was in
        actual: PanelState,
    },
    /// Frame length is not a whole number of 16-bit pixels
    MisalignedFrame {
        /// Provided frame length in bytes
        len: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidState { expected, actual } => {
                write!(f, "Panel is {actual:?}, operation requires {expected:?}")
            }
            Error::MisalignedFrame { len } => {
                write!(f, "Frame of {len} bytes is not a whole number of 16-bit pixels")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Where in the sequence a failed transfer happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStage {
    /// Single-byte init command
    Command(u8),
    /// MADCTL orientation command
    Orientation,
    /// Frame data starting at this byte offset
    Frame {
        /// Offset of the failed transfer within the frame
        offset: usize,
    },
}

/// A transfer failure that was reported but did not abort the sequence
#[derive(Debug)]
pub struct TransferWarning<E> {
    /// Where the failure happened
    pub stage: TransferStage,
    /// Interface error
    pub error: E,
}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Clock rate must be non-zero
    InvalidClock,
    /// Word size outside 1..=32 bits
    InvalidWordBits {
        /// Requested bits per word
        bits: u8,
    },
    /// Chunk size too small to carry a 16-bit pixel
    InvalidChunkSize {
        /// Requested chunk size in bytes
        size: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::InvalidClock => write!(f, "Clock rate must be non-zero"),
            BuilderError::InvalidWordBits { bits } => {
                write!(f, "Invalid word size {bits} (must be 1..=32 bits)")
            }
            BuilderError::InvalidChunkSize { size } => {
                write!(f, "Invalid chunk size {size} (must hold at least one pixel)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
