//! Classifying glyphs by their names.
//!
//! The SignWriting font encodes what a glyph is in its name: symbols are
//! plain names like `S10000`, while the auxiliary notation (markers, numbers
//! and the box) uses names beginning with [`EXTENSION_MARKER`].

use std::ops::RangeInclusive;

/// The marker carried by every extension glyph name.
pub const EXTENSION_MARKER: &str = "SW";

/// The one spacing glyph in the font.
pub const BOX_GLYPH: &str = "SWM";

/// Glyphs required by the font format, which are never rescaled.
pub const RESERVED_GLYPHS: [&str; 3] = [".notdef", ".null", "nonmarkingreturn"];

// a marker followed by one of these is a number glyph (SW250..SW749)
const NUMERAL_DIGITS: RangeInclusive<char> = '2'..='7';

/// What kind of glyph a name denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// A regular symbol glyph
    Base,
    /// An auxiliary notation glyph, such as a marker
    Extension,
    /// A coded number; these have their outlines removed
    Numeral,
    /// The box glyph
    Box,
    /// A glyph required by the font format
    Reserved,
}

impl GlyphClass {
    /// Classify a glyph name.
    pub fn of(name: &str) -> Self {
        if RESERVED_GLYPHS.contains(&name) {
            GlyphClass::Reserved
        } else if name == BOX_GLYPH {
            GlyphClass::Box
        } else if is_numeral(name) {
            GlyphClass::Numeral
        } else if name.contains(EXTENSION_MARKER) {
            GlyphClass::Extension
        } else {
            GlyphClass::Base
        }
    }

    /// `true` if the name carries the extension marker.
    ///
    /// Extension glyphs are numbered after all other glyphs in a
    /// generated project.
    pub fn is_extension(self) -> bool {
        matches!(
            self,
            GlyphClass::Extension | GlyphClass::Numeral | GlyphClass::Box
        )
    }

    /// `true` if the glyph's outline is scaled by the rewriter.
    pub fn is_scaled(self) -> bool {
        matches!(self, GlyphClass::Base | GlyphClass::Extension)
    }
}

fn is_numeral(name: &str) -> bool {
    name.match_indices(EXTENSION_MARKER).any(|(idx, marker)| {
        name[idx + marker.len()..]
            .chars()
            .next()
            .is_some_and(|c| NUMERAL_DIGITS.contains(&c))
    })
}
