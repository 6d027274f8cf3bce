//! 1-bit-per-pixel packing.
//!
//! Rows are packed top to bottom, eight pixels per byte, most significant bit
//! first. Every row starts a fresh byte; when the width is not a multiple of
//! eight the last byte of each row is left-aligned and zero-filled.
//!
//! Only the red channel is sampled. The canvas is always drawn white on black,
//! so every channel carries the same value.

pub use glyphbake_spec::packed_len;
use glyphbake_spec::packed_row_bytes;

use crate::canvas::{Canvas, Rgb};
use crate::error::RasterError;

/// An on/off pixel matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixel states.
    pub bits: Vec<bool>,
}

impl Bitmap {
    /// An all-off bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Pixel state at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel state at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        let idx = y as usize * self.width as usize + x as usize;
        self.bits[idx] = on;
    }

    /// Number of on pixels.
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Whether a pixel counts as ink: red strictly above the threshold.
#[inline]
pub fn is_on(pixel: Rgb, threshold: u8) -> bool {
    pixel[0] > threshold
}

/// Sample a canvas into an on/off matrix.
pub fn threshold_bitmap(canvas: &Canvas, threshold: u8) -> Bitmap {
    Bitmap {
        width: canvas.width,
        height: canvas.height,
        bits: canvas.data.iter().map(|&px| is_on(px, threshold)).collect(),
    }
}

/// Pack an on/off matrix, MSB first, row by row.
pub fn pack_bitmap(bitmap: &Bitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(packed_len(bitmap.width, bitmap.height));

    for y in 0..bitmap.height {
        let mut acc = 0u8;
        let mut bits = 0u32;
        for x in 0..bitmap.width {
            acc = (acc << 1) | bitmap.get(x, y) as u8;
            bits += 1;
            if bits == 8 {
                out.push(acc);
                acc = 0;
                bits = 0;
            }
        }
        if bits != 0 {
            out.push(acc << (8 - bits));
        }
    }

    out
}

/// Threshold and pack a canvas.
pub fn pack_canvas(canvas: &Canvas, threshold: u8) -> Vec<u8> {
    pack_bitmap(&threshold_bitmap(canvas, threshold))
}

/// Reverse [`pack_bitmap`]. Padding bits are ignored.
pub fn unpack(bytes: &[u8], width: u32, height: u32) -> Result<Bitmap, RasterError> {
    let expected = packed_len(width, height);
    if bytes.len() != expected {
        return Err(RasterError::PackedLength {
            expected,
            actual: bytes.len(),
            width,
            height,
        });
    }

    let stride = packed_row_bytes(width);
    let mut bitmap = Bitmap::new(width, height);
    for y in 0..height {
        let row = &bytes[y as usize * stride..(y as usize + 1) * stride];
        for x in 0..width {
            let byte = row[x as usize / 8];
            let on = (byte >> (7 - x % 8)) & 1 == 1;
            bitmap.set(x, y, on);
        }
    }
    Ok(bitmap)
}
