//! Bordered preview image for eyeballing cell fit.

use crate::canvas::{Canvas, MARKER};

/// Copy of `canvas` with a one-pixel marker line on every cell boundary.
///
/// Lines are drawn at each column index that is a multiple of `cell_width`
/// and each row index that is a multiple of `cell_height`.
pub fn annotate_grid(canvas: &Canvas, cell_width: u32, cell_height: u32) -> Canvas {
    let mut out = canvas.clone();
    if cell_width == 0 || cell_height == 0 {
        return out;
    }
    for y in 0..out.height {
        for x in 0..out.width {
            if x % cell_width == 0 || y % cell_height == 0 {
                out.set(x, y, MARKER);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BACKGROUND, FOREGROUND};

    #[test]
    fn test_marks_cell_boundaries_only() {
        let canvas = Canvas::new(8, 6, FOREGROUND);
        let out = annotate_grid(&canvas, 4, 3);
        for y in 0..6 {
            for x in 0..8 {
                let boundary = x % 4 == 0 || y % 3 == 0;
                let expected = if boundary { MARKER } else { FOREGROUND };
                assert_eq!(out.get(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_source_canvas_untouched() {
        let canvas = Canvas::new(4, 4, BACKGROUND);
        let _ = annotate_grid(&canvas, 2, 2);
        assert!(canvas.data.iter().all(|&p| p == BACKGROUND));
    }
}
