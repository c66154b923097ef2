//! Shrinking outlines

use super::Edit;
use crate::{
    error::RewriteError,
    ttx::{Bbox, GlyphRecord, GlyphTable},
};

/// The factor applied to every scaled outline.
///
/// The source outlines are drawn on a much larger grid than the marks in the
/// final font; 0.09 brings them down to size for a font with
/// [`EXPECTED_UNITS_PER_EM`] units per em.
pub const SCALE_FACTOR: f64 = 0.09;

/// The `unitsPerEm` that [`SCALE_FACTOR`] and the positioning offsets
/// assume.
pub const EXPECTED_UNITS_PER_EM: f64 = 1000.0;

/// Scales outlines around their own centers.
///
/// Each glyph's bounding box midpoint becomes its origin, and every
/// coordinate is then multiplied by the factor. The box glyph, number glyphs
/// and reserved glyphs are left alone, as are glyphs without outlines.
#[derive(Clone, Copy, Debug)]
pub struct Rescale {
    factor: f64,
}

impl Rescale {
    pub fn new(factor: f64) -> Self {
        Rescale { factor }
    }
}

impl Default for Rescale {
    fn default() -> Self {
        Self::new(SCALE_FACTOR)
    }
}

// the font's unitsPerEm, if it is present and not the expected value
fn unexpected_units_per_em(table: &GlyphTable) -> Option<f64> {
    table
        .units_per_em()
        .filter(|upem| *upem != EXPECTED_UNITS_PER_EM)
}

fn rescale_glyph(glyph: &mut GlyphRecord, factor: f64) -> bool {
    let Some(bbox) = glyph.bbox else {
        return false;
    };
    let (cx, cy) = bbox.center();
    glyph.bbox = Some(Bbox {
        x_min: (bbox.x_min - cx) * factor,
        y_min: (bbox.y_min - cy) * factor,
        x_max: (bbox.x_max - cx) * factor,
        y_max: (bbox.y_max - cy) * factor,
    });
    for point in glyph.points_mut() {
        point.x = (point.x - cx) * factor;
        point.y = (point.y - cy) * factor;
    }
    true
}

impl Edit for Rescale {
    fn name(&self) -> &'static str {
        "rescale"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        if let Some(upem) = unexpected_units_per_em(&table) {
            log::warn!(
                "font has {upem} units per em, but outlines are scaled for {EXPECTED_UNITS_PER_EM}"
            );
        }
        let mut scaled = 0;
        for glyph in table
            .glyphs_mut()
            .iter_mut()
            .filter(|glyph| glyph.class().is_scaled())
        {
            if rescale_glyph(glyph, self.factor) {
                scaled += 1;
            }
        }
        log::debug!("scaled {scaled} glyphs by {}", self.factor);
        Ok(table)
    }
}
