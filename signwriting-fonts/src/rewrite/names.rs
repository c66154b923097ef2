//! Removing stray spaces from glyph names

use super::Edit;
use crate::{
    class::EXTENSION_MARKER,
    error::RewriteError,
    ttx::{GlyphTable, Node},
};

/// Removes the space after the marker in names like `SW 250`.
///
/// Names with spaces are rejected by VOLT and other tools. Every attribute
/// in the document is fixed, so references to a glyph (glyph order, `post`
/// names, components) stay consistent with the glyph itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct CorrectNames;

fn corrected(name: &str) -> Option<String> {
    let rest = name.strip_prefix(EXTENSION_MARKER)?.strip_prefix(' ')?;
    Some(format!("{EXTENSION_MARKER}{rest}"))
}

fn correct_in_place(value: &mut String) {
    if let Some(fixed) = corrected(value) {
        *value = fixed;
    }
}

impl Edit for CorrectNames {
    fn name(&self) -> &'static str {
        "correct names"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        let mut renamed = 0;
        for glyph in table.glyphs_mut() {
            if let Some(fixed) = corrected(glyph.name()) {
                glyph.rename(fixed);
                renamed += 1;
            }
            for node in glyph.other.iter_mut() {
                if let Node::Element(el) = node {
                    el.visit_attributes_mut(&mut correct_in_place);
                }
            }
        }
        for entry in table.cmap_mut() {
            if let Some(fixed) = corrected(entry.name()) {
                entry.rename(fixed);
            }
        }
        for metric in table.metrics_mut() {
            if let Some(fixed) = corrected(metric.name()) {
                metric.rename(fixed);
            }
        }
        table.document_mut().visit_attributes_mut(&mut correct_in_place);
        log::debug!("corrected {renamed} glyph names");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::class::GlyphClass;

    #[test]
    fn correct_names() {
        assert_eq!(corrected("SW 250").as_deref(), Some("SW250"));
        assert_eq!(corrected("SW250"), None);
        assert_eq!(corrected("S 10000"), None);
        assert_eq!(corrected("A SW 1"), None);
    }

    #[test]
    fn renames_everywhere() {
        let table = GlyphTable::parse(sw_test_data::ttx::SMALL).unwrap();
        let table = CorrectNames.apply(table).unwrap();
        let glyph = table.glyph("SW250").unwrap();
        assert_eq!(glyph.class(), GlyphClass::Numeral);
        assert_eq!(table.metric("SW250").unwrap().class(), GlyphClass::Numeral);
        assert!(table.cmap().iter().any(|entry| entry.name() == "SW250"));

        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("SW 250"));
        // glyph order and post names
        assert!(text.contains("<GlyphID id=\"6\" name=\"SW250\""));
        assert!(text.contains("<psName name=\"SW250\""));
    }

    #[test]
    fn idempotent() {
        let table = GlyphTable::parse(sw_test_data::ttx::SMALL).unwrap();
        let once = CorrectNames.apply(table).unwrap();
        let twice = CorrectNames.apply(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
