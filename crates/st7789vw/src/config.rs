//! Panel and bus configuration types and builder

use embedded_hal::spi::{MODE_0, Mode};

use crate::command::*;
pub use crate::error::BuilderError;

/// Default SPI clock (32 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 32_000_000;

/// Default SPI word size (one byte per word)
pub const DEFAULT_WORD_BITS: u8 = 8;

/// Default pause after each init command, in milliseconds
pub const DEFAULT_COMMAND_DELAY_MS: u32 = 10;

/// Default settle time after toggling the reset line, in milliseconds
pub const DEFAULT_RESET_SETTLE_MS: u32 = 120;

/// Default frame batch size; matches the spidev driver's default `bufsiz`
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Commands sent one byte at a time during panel configuration
///
/// Order is significant: the controller must be out of sleep with the
/// display enabled before MADCTL is written.
pub const INIT_COMMANDS: [u8; 3] = [SOFT_RESET, SLEEP_OUT, DISPLAY_ON];

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    #[default]
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// MADCTL parameter byte for this rotation
    pub const fn madctl(self) -> u8 {
        match self {
            Rotation::Rotate0 => 0x00,
            Rotation::Rotate90 => MADCTL_MX | MADCTL_MV,
            Rotation::Rotate180 => MADCTL_MX | MADCTL_MY,
            Rotation::Rotate270 => MADCTL_MY | MADCTL_MV,
        }
    }
}

/// How a converted frame is pushed onto the bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTransfer {
    /// One 2-byte transfer per pixel
    PerPixel,
    /// Consecutive batches of at most this many bytes (rounded down to whole pixels)
    Chunked(usize),
}

impl Default for FrameTransfer {
    fn default() -> Self {
        FrameTransfer::Chunked(DEFAULT_CHUNK_SIZE)
    }
}

/// Serial bus session parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// Clock rate in Hz
    pub clock_hz: u32,
    /// Bits per word
    pub word_bits: u8,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            word_bits: DEFAULT_WORD_BITS,
            mode: MODE_0,
        }
    }
}

/// Static command data sent while configuring the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitSequence {
    /// Single-byte commands, in transmission order
    pub commands: &'static [u8],
    /// MADCTL command followed by its parameter, sent as one transfer
    pub orientation: [u8; 2],
}

impl InitSequence {
    /// Standard sequence with the orientation for `rotation`
    pub const fn for_rotation(rotation: Rotation) -> Self {
        Self {
            commands: &INIT_COMMANDS,
            orientation: [MEMORY_ACCESS_CONTROL, rotation.madctl()],
        }
    }
}

/// Panel configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Bus session parameters
    pub link: LinkConfig,
    /// Display rotation
    pub rotation: Rotation,
    /// Pause after each init command (ms)
    pub command_delay_ms: u32,
    /// Pause after the hardware reset (ms)
    pub reset_settle_ms: u32,
    /// Frame streaming strategy
    pub frame_transfer: FrameTransfer,
}

impl Config {
    /// Init sequence derived from the configured rotation
    pub fn init_sequence(&self) -> InitSequence {
        InitSequence::for_rotation(self.rotation)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link: LinkConfig::default(),
            rotation: Rotation::default(),
            command_delay_ms: DEFAULT_COMMAND_DELAY_MS,
            reset_settle_ms: DEFAULT_RESET_SETTLE_MS,
            frame_transfer: FrameTransfer::default(),
        }
    }
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```
/// use st7789vw::{Builder, Rotation};
///
/// let config = Builder::new()
///     .clock_hz(16_000_000)
///     .rotation(Rotation::Rotate0)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.init_sequence().orientation, [0x36, 0x00]);
/// ```
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bus clock rate
    pub fn clock_hz(mut self, hz: u32) -> Self {
        self.config.link.clock_hz = hz;
        self
    }

    /// Set bits per word
    pub fn word_bits(mut self, bits: u8) -> Self {
        self.config.link.word_bits = bits;
        self
    }

    /// Set clock polarity and phase
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.link.mode = mode;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Set the pause after each init command
    pub fn command_delay_ms(mut self, ms: u32) -> Self {
        self.config.command_delay_ms = ms;
        self
    }

    /// Set the pause after hardware reset
    pub fn reset_settle_ms(mut self, ms: u32) -> Self {
        self.config.reset_settle_ms = ms;
        self
    }

    /// Set frame streaming strategy
    pub fn frame_transfer(mut self, transfer: FrameTransfer) -> Self {
        self.config.frame_transfer = transfer;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidClock` if the clock is zero
    /// - `BuilderError::InvalidWordBits` unless 1 <= bits <= 32
    /// - `BuilderError::InvalidChunkSize` if a chunk cannot hold one pixel
    pub fn build(self) -> Result<Config, BuilderError> {
        let link = self.config.link;
        if link.clock_hz == 0 {
            return Err(BuilderError::InvalidClock);
        }
        if !(1..=32).contains(&link.word_bits) {
            return Err(BuilderError::InvalidWordBits {
                bits: link.word_bits,
            });
        }
        if let FrameTransfer::Chunked(size) = self.config.frame_transfer {
            if size < 2 {
                return Err(BuilderError::InvalidChunkSize { size });
            }
        }
        Ok(self.config)
    }
}
