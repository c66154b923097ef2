//! The character map, as dumped from a format 12 `cmap` subtable

use super::dom::Element;
use crate::{class::GlyphClass, error::TtxError};

/// One `map` entry of a format 12 subtable.
///
/// The code point is kept as the hexadecimal text from the document; it is
/// only decoded when a layout project is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CmapEntry {
    name: String,
    class: GlyphClass,
    code: String,
}

impl CmapEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        let name = name.into();
        CmapEntry {
            class: GlyphClass::of(&name),
            name,
            code: code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> GlyphClass {
        self.class
    }

    /// The code point as written in the document, e.g. `0x1d800`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Decode the hexadecimal code point.
    ///
    /// Returns `None` if the text is not a hexadecimal number. A leading
    /// `0x` is accepted, since that is how TTX writes codes.
    pub fn code_point(&self) -> Option<u32> {
        let digits = self.code.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        u32::from_str_radix(digits, 16).ok()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.class = GlyphClass::of(&self.name);
    }

    pub(crate) fn from_element(el: &Element) -> Result<Self, TtxError> {
        Ok(CmapEntry::new(
            el.required_attr("name")?,
            el.required_attr("code")?,
        ))
    }
}
