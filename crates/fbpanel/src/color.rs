//! RGB888 to RGB565 conversion

use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565};

use crate::capture::PixelBuffer;

/// Bytes per truecolor input pixel
pub const TRUECOLOR_BYTES: usize = 3;

/// Bytes per panel output pixel
pub const PANEL16_BYTES: usize = 2;

/// Pack one pixel, dropping the low-order bits of each channel
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    Rgb565::new(r >> 3, g >> 2, b >> 3).into_storage()
}

/// The part of `bytes` that forms whole truecolor pixels
///
/// A trailing partial pixel (one or two bytes) is dropped without error.
pub fn whole_pixels(bytes: &[u8]) -> &[u8] {
    let whole = bytes.len() - bytes.len() % TRUECOLOR_BYTES;
    &bytes[..whole]
}

/// Convert an RGB888 buffer to RGB565
///
/// Each output pixel is emitted low byte first. Output length is
/// `2 * floor(input_len / 3)`.
pub fn convert_truecolor_to_panel16(buffer: PixelBuffer) -> PixelBuffer {
    let input = whole_pixels(buffer.as_bytes());
    let dropped = buffer.len() - input.len();
    if dropped != 0 {
        log::debug!("ignoring {dropped} trailing bytes of partial pixel");
    }

    let mut output = Vec::with_capacity(input.len() / TRUECOLOR_BYTES * PANEL16_BYTES);
    for pixel in input.chunks_exact(TRUECOLOR_BYTES) {
        let packed = rgb888_to_rgb565(pixel[0], pixel[1], pixel[2]);
        output.extend_from_slice(&packed.to_le_bytes());
    }

    PixelBuffer::from_bytes(output)
}
