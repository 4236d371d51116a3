//! One-shot panel refresh from a framebuffer snapshot

use std::io::Read;

use embedded_hal::delay::DelayNs;
use st7789vw::{PanelController, PanelInterface, DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crate::capture::capture;
use crate::color::convert_truecolor_to_panel16;
use crate::error::Result;
use crate::geometry::{probe, BufferGeometry, GeometrySource};

/// Depth the converter expects from the source buffer
pub const TRUECOLOR_BPP: u32 = 24;

/// Outcome of a successful refresh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshReport {
    /// Geometry of the captured source
    pub geometry: BufferGeometry,
    /// Bytes streamed to the panel
    pub frame_len: usize,
    /// Transfers that failed without aborting the refresh
    pub warnings: usize,
}

/// Snapshot `source`, convert it to RGB565 and push it to the panel
///
/// The panel is reset and configured first, then the whole frame is
/// streamed. Transfer failures stay in `panel`'s warning list.
///
/// # Errors
///
/// Probe and capture errors, and [`Error::Panel`](crate::Error::Panel) if
/// the controller is not freshly opened.
pub fn refresh_panel<S, I, D>(
    source: &mut S,
    panel: &mut PanelController<I>,
    delay: &mut D,
) -> Result<RefreshReport>
where
    S: GeometrySource + Read + ?Sized,
    I: PanelInterface,
    D: DelayNs,
{
    let geometry = probe(source)?;
    if geometry.bits_per_pixel() != TRUECOLOR_BPP {
        log::warn!(
            "source is {} bpp, converting as {TRUECOLOR_BPP} bpp truecolor",
            geometry.bits_per_pixel()
        );
    }
    if (geometry.width(), geometry.height()) != (DISPLAY_WIDTH, DISPLAY_HEIGHT) {
        log::warn!(
            "source is {}x{}, panel is {DISPLAY_WIDTH}x{DISPLAY_HEIGHT}",
            geometry.width(),
            geometry.height()
        );
    }

    let snapshot = capture(source, &geometry)?;
    let frame = convert_truecolor_to_panel16(snapshot);

    panel.init(delay)?;
    panel.display_frame(frame.as_bytes())?;

    let warnings = panel.warnings().len();
    if warnings > 0 {
        log::warn!("{warnings} panel transfers failed");
    }
    log::info!("displayed {} byte frame ({geometry})", frame.len());

    Ok(RefreshReport {
        geometry,
        frame_len: frame.len(),
        warnings,
    })
}
