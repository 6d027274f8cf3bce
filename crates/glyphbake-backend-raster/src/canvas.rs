//! 8-bit RGB canvas the glyph grid is drawn on.

/// One RGB pixel.
pub type Rgb = [u8; 3];

/// Canvas background.
pub const BACKGROUND: Rgb = [0, 0, 0];
/// Glyph ink.
pub const FOREGROUND: Rgb = [255, 255, 255];
/// Cell border colour on the preview image.
pub const MARKER: Rgb = [255, 0, 0];

/// A 3-channel raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas filled with one colour.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    /// Set a pixel.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Whether signed coordinates fall on the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Blend `color` over the pixel at `(x, y)` with 8-bit coverage.
    ///
    /// Off-canvas coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, coverage: u8) {
        if coverage == 0 || !self.contains(x, y) {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let old = self.get(x, y);
        let a = coverage as u32;
        let mut out = old;
        for c in 0..3 {
            let (o, n) = (old[c] as u32, color[c] as u32);
            out[c] = ((o * (255 - a) + n * a + 127) / 255) as u8;
        }
        self.set(x, y, out);
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend_from_slice(px);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills() {
        let canvas = Canvas::new(3, 2, [1, 2, 3]);
        assert_eq!(canvas.data.len(), 6);
        assert!(canvas.data.iter().all(|&p| p == [1, 2, 3]));
    }

    #[test]
    fn test_blend_full_and_partial_coverage() {
        let mut canvas = Canvas::new(2, 1, BACKGROUND);
        canvas.blend(0, 0, FOREGROUND, 255);
        canvas.blend(1, 0, FOREGROUND, 128);
        assert_eq!(canvas.get(0, 0), FOREGROUND);
        assert_eq!(canvas.get(1, 0), [128, 128, 128]);
    }

    #[test]
    fn test_blend_ignores_off_canvas() {
        let mut canvas = Canvas::new(2, 2, BACKGROUND);
        canvas.blend(-1, 0, FOREGROUND, 255);
        canvas.blend(0, 2, FOREGROUND, 255);
        canvas.blend(2, 0, FOREGROUND, 255);
        assert!(canvas.data.iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut canvas = Canvas::new(2, 1, BACKGROUND);
        canvas.set(1, 0, MARKER);
        assert_eq!(canvas.to_rgb8(), vec![0, 0, 0, 255, 0, 0]);
    }
}
