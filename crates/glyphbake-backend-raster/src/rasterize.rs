//! Draws the 96-glyph grid onto a canvas.
//!
//! Each glyph is placed with its line box's top-left corner at the cell origin
//! plus padding, so the glyph top lands `ascent - ymax` pixels below the
//! origin. There is no kerning and no clipping to the cell: ink that spills
//! into a neighbouring cell stays there.

use glyphbake_spec::{FontVariantConfig, GlyphGrid};

use crate::canvas::{Canvas, BACKGROUND, FOREGROUND};
use crate::face::{GlyphFace, RasterGlyph};

/// Baseline row inside a cell: vertical padding plus the rounded ascent.
pub fn baseline(cfg: &FontVariantConfig, face: &dyn GlyphFace) -> i32 {
    cfg.padding_y as i32 + face.ascent(cfg.pixel_size).round() as i32
}

/// Render every grid character of a variant.
pub fn render_grid(cfg: &FontVariantConfig, grid: &GlyphGrid, face: &dyn GlyphFace) -> Canvas {
    let mut canvas = Canvas::new(cfg.canvas_width(), cfg.canvas_height(), BACKGROUND);
    let baseline = baseline(cfg, face);

    for (cell, ch) in grid.cells() {
        let origin_x = (cell.col as u32 * cfg.cell_width + cfg.padding_x) as i32;
        let cell_top = (cell.row as u32 * cfg.cell_height) as i32;

        let glyph = face.rasterize(ch, cfg.pixel_size);
        let left = origin_x + glyph.xmin;
        let top = cell_top + baseline - glyph.ymax();
        draw_glyph(&mut canvas, &glyph, left, top);
    }

    canvas
}

/// Blend a glyph's coverage onto the canvas with its top-left at `(left, top)`.
fn draw_glyph(canvas: &mut Canvas, glyph: &RasterGlyph, left: i32, top: i32) {
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            let coverage = glyph.coverage_at(gx, gy);
            canvas.blend(left + gx as i32, top + gy as i32, FOREGROUND, coverage);
        }
    }
}
