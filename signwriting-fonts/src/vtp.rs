//! Generating VOLT projects.
//!
//! A project (`.vtp`) is a line oriented text file consumed by Microsoft
//! VOLT. We emit glyph definitions for every mapped glyph, a single
//! script/language/feature holding the mark positioning lookups, the glyph
//! groups, the lookups themselves and the cmap formats to compile.

mod generator;
mod group;
mod lookup;

pub use generator::{
    assign_glyph_ids, GlyphDef, ScriptOptions, VtpGenerator, CMAP_FORMATS, FIRST_GLYPH_ID,
    SENTINEL_GLYPHS,
};
pub use group::GlyphGroup;
pub use lookup::{Direction, PositioningRule, Target, CONTEXT_HALF_EXTENT};
