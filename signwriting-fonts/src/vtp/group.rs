//! Glyph groups

use std::fmt;

/// A named range of glyphs.
///
/// Membership is decided by the layout compiler, which takes every glyph
/// between the two boundaries in glyph order. Nothing here checks that the
/// boundaries exist or are ordered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlyphGroup {
    name: String,
    range: [String; 2],
}

impl GlyphGroup {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        GlyphGroup {
            name: name.into(),
            range: [start.into(), end.into()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> &str {
        &self.range[0]
    }

    pub fn end(&self) -> &str {
        &self.range[1]
    }
}

impl fmt::Display for GlyphGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DEF_GROUP \"{}\"", self.name)?;
        writeln!(
            f,
            " ENUM RANGE \"{}\" TO \"{}\" END_ENUM",
            self.start(),
            self.end()
        )?;
        writeln!(f, "END_GROUP")
    }
}
