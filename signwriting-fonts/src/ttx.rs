//! Reading and writing TTX documents.
//!
//! Only the parts of the font we work with are modeled: the format 12
//! character map, the glyph outlines and the horizontal metrics. Everything
//! else in the document is carried along untouched.

mod cmap;
pub mod dom;
mod glyf;
mod hmtx;

use std::{io::Write, path::Path};

pub use cmap::CmapEntry;
pub use dom::{Element, Node};
pub use glyf::{Bbox, Contour, GlyphRecord, Point};
pub use hmtx::Metric;

use crate::error::TtxError;

const CMAP: &str = "cmap";
const CMAP_FORMAT_12: &str = "cmap_format_12";
const GLYF: &str = "glyf";
const HMTX: &str = "hmtx";

/// The glyph data of a font, parsed from a TTX document.
///
/// The typed views ([`cmap`](Self::cmap), [`glyphs`](Self::glyphs),
/// [`metrics`](Self::metrics)) are authoritative; they are written back into
/// the document by [`to_document`](Self::to_document).
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphTable {
    document: Element,
    cmap: Vec<CmapEntry>,
    glyphs: Vec<GlyphRecord>,
    metrics: Vec<Metric>,
}

impl GlyphTable {
    /// Extract the glyph data from a parsed TTX document.
    ///
    /// The character map is read from the first format 12 subtable.
    pub fn from_document(document: Element) -> Result<Self, TtxError> {
        let cmap = document
            .child(CMAP)
            .ok_or(TtxError::MissingElement(CMAP))?
            .child(CMAP_FORMAT_12)
            .ok_or(TtxError::MissingElement(CMAP_FORMAT_12))?
            .elements_named("map")
            .map(CmapEntry::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        let glyphs = document
            .child(GLYF)
            .ok_or(TtxError::MissingElement(GLYF))?
            .elements_named("TTGlyph")
            .map(GlyphRecord::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        let metrics = document
            .child(HMTX)
            .ok_or(TtxError::MissingElement(HMTX))?
            .elements_named("mtx")
            .map(Metric::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "read {} cmap entries, {} glyphs and {} metrics",
            cmap.len(),
            glyphs.len(),
            metrics.len()
        );
        Ok(GlyphTable {
            document,
            cmap,
            glyphs,
            metrics,
        })
    }

    pub fn parse(text: &str) -> Result<Self, TtxError> {
        Element::parse(text).and_then(Self::from_document)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TtxError> {
        let file = std::fs::File::open(path.as_ref())?;
        Element::read(std::io::BufReader::new(file)).and_then(Self::from_document)
    }

    /// Return the document with the typed views written back into it.
    pub fn to_document(&self) -> Element {
        let mut document = self.document.clone();
        if let Some(glyf) = document.child_mut(GLYF) {
            glyf.replace_children("TTGlyph", self.glyphs.iter().map(GlyphRecord::to_element));
        }
        if let Some(hmtx) = document.child_mut(HMTX) {
            hmtx.replace_children("mtx", self.metrics.iter().map(Metric::to_element));
        }
        // only names change in the character map
        if let Some(subtable) = document
            .child_mut(CMAP)
            .and_then(|cmap| cmap.child_mut(CMAP_FORMAT_12))
        {
            let maps = subtable.elements_named("map").cloned().collect::<Vec<_>>();
            subtable.replace_children(
                "map",
                maps.into_iter().zip(&self.cmap).map(|(mut map, entry)| {
                    map.set_attr("name", entry.name());
                    map
                }),
            );
        }
        document
    }

    pub fn write(&self, writer: impl Write) -> Result<(), TtxError> {
        self.to_document().write_document(writer)
    }

    /// Serialize the table and write it to `path`.
    ///
    /// Nothing is written if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TtxError> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        std::fs::write(path, buf)?;
        Ok(())
    }

    /// The format 12 character map entries, in document order.
    pub fn cmap(&self) -> &[CmapEntry] {
        &self.cmap
    }

    pub fn cmap_mut(&mut self) -> &mut [CmapEntry] {
        &mut self.cmap
    }

    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut [GlyphRecord] {
        &mut self.glyphs
    }

    pub fn glyph(&self, name: &str) -> Option<&GlyphRecord> {
        self.glyphs.iter().find(|glyph| glyph.name() == name)
    }

    pub fn glyph_mut(&mut self, name: &str) -> Option<&mut GlyphRecord> {
        self.glyphs.iter_mut().find(|glyph| glyph.name() == name)
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut [Metric] {
        &mut self.metrics
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name() == name)
    }

    /// The `unitsPerEm` value from the `head` table, if present.
    pub fn units_per_em(&self) -> Option<f64> {
        self.document
            .child("head")?
            .child("unitsPerEm")?
            .number_attr("value")
            .ok()
    }

    /// The underlying document.
    ///
    /// Tables that are not modeled can only be edited through this; changes to
    /// the `glyf`, `hmtx` and format 12 `cmap` elements are overwritten by the
    /// typed views.
    pub fn document_mut(&mut self) -> &mut Element {
        &mut self.document
    }
}
