//! Advance widths

use super::Edit;
use crate::{class::GlyphClass, error::RewriteError, ttx::GlyphTable};

/// Sets every advance width to zero, except the box glyph's.
///
/// Whatever width a glyph had in the source is discarded.
#[derive(Clone, Copy, Debug)]
pub struct ResetWidths {
    box_width: f64,
}

impl ResetWidths {
    pub fn new(box_width: f64) -> Self {
        ResetWidths { box_width }
    }
}

impl Edit for ResetWidths {
    fn name(&self) -> &'static str {
        "reset widths"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        for metric in table.metrics_mut() {
            metric.width = match metric.class() {
                GlyphClass::Box => self.box_width,
                _ => 0.0,
            };
        }
        Ok(table)
    }
}
