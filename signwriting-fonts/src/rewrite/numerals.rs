//! Hollowing out number glyphs

use super::Edit;
use crate::{class::GlyphClass, error::RewriteError, ttx::GlyphTable};

/// Removes every contour from the number glyphs.
///
/// The glyphs stay in the font, but render as nothing; they only exist to
/// provide context for the positioning lookups.
#[derive(Clone, Copy, Debug, Default)]
pub struct HollowNumerals;

impl Edit for HollowNumerals {
    fn name(&self) -> &'static str {
        "hollow numerals"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        let mut hollowed = 0;
        for glyph in table
            .glyphs_mut()
            .iter_mut()
            .filter(|glyph| glyph.class() == GlyphClass::Numeral && !glyph.contours.is_empty())
        {
            glyph.contours.clear();
            hollowed += 1;
        }
        log::debug!("removed outlines from {hollowed} number glyphs");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::rewrite::CorrectNames;

    #[test]
    fn hollow_numerals() {
        let table = GlyphTable::parse(sw_test_data::ttx::SMALL).unwrap();
        let table = HollowNumerals.apply(table).unwrap();
        let glyph = table.glyph("SW503").unwrap();
        assert!(glyph.contours.is_empty());
        // the glyph and its box are kept
        assert!(glyph.bbox.is_some());
        assert_eq!(table.glyph("SWA").unwrap().contours.len(), 1);
        // not a numeral until its name is fixed
        assert_eq!(table.glyph("SW 250").unwrap().contours.len(), 2);
    }

    #[test]
    fn after_name_correction() {
        let table = GlyphTable::parse(sw_test_data::ttx::SMALL).unwrap();
        let table = HollowNumerals
            .apply(CorrectNames.apply(table).unwrap())
            .unwrap();
        assert!(table.glyph("SW250").unwrap().contours.is_empty());
        let again = HollowNumerals.apply(table.clone()).unwrap();
        assert_eq!(again, table);
    }
}
