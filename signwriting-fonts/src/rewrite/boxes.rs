//! The box glyph

use std::path::Path;

use super::Edit;
use crate::{
    class::{GlyphClass, BOX_GLYPH},
    error::{RewriteError, TtxError},
    ttx::{Element, GlyphRecord, GlyphTable},
};

/// Gives the box glyph an advance width if it has none.
#[derive(Clone, Copy, Debug)]
pub struct BoxWidth {
    width: f64,
}

/// Replaces the box glyph's outline with a template glyph.
#[derive(Clone, Debug)]
pub struct BoxOutline {
    template: GlyphRecord,
}

impl BoxWidth {
    pub fn new(width: f64) -> Self {
        BoxWidth { width }
    }
}

impl Edit for BoxWidth {
    fn name(&self) -> &'static str {
        "box width"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        for metric in table
            .metrics_mut()
            .iter_mut()
            .filter(|metric| metric.class() == GlyphClass::Box && metric.width == 0.0)
        {
            metric.width = self.width;
        }
        Ok(table)
    }
}

impl BoxOutline {
    /// Parse a single `TTGlyph` element to use as the box.
    pub fn parse(text: &str) -> Result<Self, RewriteError> {
        let element = Element::parse(text).map_err(RewriteError::InvalidTemplate)?;
        if element.name != "TTGlyph" {
            return Err(RewriteError::InvalidTemplate(TtxError::MissingElement(
                "TTGlyph",
            )));
        }
        let mut template =
            GlyphRecord::from_element(&element).map_err(RewriteError::InvalidTemplate)?;
        if template.name() != BOX_GLYPH {
            log::warn!(
                "box template is named '{}', renaming to '{BOX_GLYPH}'",
                template.name()
            );
            template.rename(BOX_GLYPH);
        }
        Ok(BoxOutline { template })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RewriteError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RewriteError::Template {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn template(&self) -> &GlyphRecord {
        &self.template
    }
}

impl Edit for BoxOutline {
    fn name(&self) -> &'static str {
        "box outline"
    }

    fn apply(&self, mut table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        let glyph = table
            .glyph_mut(BOX_GLYPH)
            .ok_or_else(|| RewriteError::BoxGlyphMissing(BOX_GLYPH.into()))?;
        *glyph = self.template.clone();
        Ok(table)
    }
}
