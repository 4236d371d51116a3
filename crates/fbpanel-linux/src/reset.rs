//! Panel reset line over gpio-cdev

use anyhow::Context;
use embedded_hal::digital::{ErrorType, OutputPin};
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::CdevPin;

/// Reset GPIO, or nothing when the line could not be claimed
pub struct ResetLine(Option<CdevPin>);

impl ResetLine {
    /// Claim `line` on `chip` as an output, initially high (inactive)
    pub fn request(chip: &str, line: u32, consumer: &str) -> anyhow::Result<Self> {
        let mut chip = Chip::new(chip).with_context(|| format!("opening GPIO chip {chip}"))?;
        let handle = chip
            .get_line(line)
            .with_context(|| format!("getting reset line {line}"))?
            .request(LineRequestFlags::OUTPUT, 1, consumer)
            .with_context(|| format!("requesting reset line {line}"))?;
        let pin = CdevPin::new(handle).context("creating reset pin")?;
        Ok(Self(Some(pin)))
    }

    /// A reset line that does nothing
    pub fn unwired() -> Self {
        Self(None)
    }

    /// Whether a GPIO line is actually held
    pub fn is_wired(&self) -> bool {
        self.0.is_some()
    }
}

impl ErrorType for ResetLine {
    type Error = <CdevPin as ErrorType>::Error;
}

impl OutputPin for ResetLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        match &mut self.0 {
            Some(pin) => pin.set_low(),
            None => Ok(()),
        }
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match &mut self.0 {
            Some(pin) => pin.set_high(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwired_line_accepts_levels() {
        let mut line = ResetLine::unwired();
        assert!(!line.is_wired());
        assert!(line.set_low().is_ok());
        assert!(line.set_high().is_ok());
    }

    #[test]
    fn test_missing_chip_fails() {
        let result = ResetLine::request("/dev/gpiochip-does-not-exist", 25, "test");
        assert!(result.is_err());
    }
}
