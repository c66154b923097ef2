//! Tools for building the Sutton SignWriting fonts.
//!
//! The font is assembled from a [TTX] dump of an existing font. Two
//! independent pipelines operate on that dump:
//!
//! - [`rewrite`] edits the glyph table in place (name fixes, the box glyph,
//!   hollow numerals, rescaling and zero advance widths) and writes a new TTX
//!   document, suitable for compiling back into a font.
//! - [`vtp`] generates a [VOLT] project describing glyphs, groups and the
//!   mark positioning lookups for the layout compiler.
//!
//! Both pipelines share the [`GlyphTable`] data model in [`ttx`].
//!
//! [TTX]: https://fonttools.readthedocs.io/en/latest/ttx.html
//! [VOLT]: https://learn.microsoft.com/en-us/typography/tools/volt/

pub mod class;
mod enumerate;
mod error;
pub mod project;
pub mod rewrite;
pub mod ttx;
pub mod vtp;

pub use class::GlyphClass;
pub use enumerate::{enumerate, Partition};
pub use error::{Error, GenerateError, ProjectError, RewriteError, RuleError, TtxError};
pub use project::Project;
pub use rewrite::{RewriteOptions, Rewriter};
pub use ttx::GlyphTable;
pub use vtp::{GlyphGroup, PositioningRule, VtpGenerator};
