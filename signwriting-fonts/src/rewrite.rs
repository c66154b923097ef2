//! Rewriting a glyph table for the final font.
//!
//! The SignWriting glyphs are combined by the layout engine rather than set
//! side by side, so the rewritten font has zero width marks everywhere except
//! the box glyph. The rewrite is a fixed sequence of [`Edit`]s:
//!
//! 1. [`CorrectNames`] removes the space some exporters put after the marker
//! 2. [`BoxWidth`] gives the box glyph its width
//! 3. [`BoxOutline`] replaces the box glyph's outline with a template
//! 4. [`HollowNumerals`] removes the outlines of number glyphs
//! 5. [`Rescale`] shrinks every other outline around its own center
//! 6. [`ResetWidths`] zeroes every advance width except the box's
//!
//! Later steps key off the corrected names, so the order matters. The
//! rescale is not idempotent; run the pipeline once per input table.

mod boxes;
mod names;
mod numerals;
mod scale;
mod widths;

use std::path::PathBuf;

pub use boxes::{BoxOutline, BoxWidth};
pub use names::CorrectNames;
pub use numerals::HollowNumerals;
pub use scale::{Rescale, EXPECTED_UNITS_PER_EM, SCALE_FACTOR};
pub use widths::ResetWidths;

use crate::{error::RewriteError, ttx::GlyphTable};

/// The advance width of the box glyph.
pub const BOX_WIDTH: f64 = 500.0;

/// The default box outline, a 500x500 frame.
pub static BOX_TEMPLATE: &str = include_str!("../../resources/boxes/M.xml");

/// A single step of the rewrite.
///
/// Steps take the whole table and return the edited table, so a failing step
/// never leaves a partially edited table behind.
pub trait Edit {
    /// A short description, for logging.
    fn name(&self) -> &'static str;

    fn apply(&self, table: GlyphTable) -> Result<GlyphTable, RewriteError>;
}

/// Settings for the standard rewrite.
#[derive(Clone, Debug, PartialEq)]
pub struct RewriteOptions {
    /// A file containing the `TTGlyph` to use for the box; if `None`, the
    /// built-in [`BOX_TEMPLATE`] is used.
    pub box_template: Option<PathBuf>,
    pub scale: f64,
    pub box_width: f64,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        RewriteOptions {
            box_template: None,
            scale: SCALE_FACTOR,
            box_width: BOX_WIDTH,
        }
    }
}

/// Applies a sequence of edits to a table.
pub struct Rewriter {
    steps: Vec<Box<dyn Edit>>,
}

impl Rewriter {
    /// The standard pipeline.
    ///
    /// The box template is read here, so a missing template is reported
    /// before any table is touched.
    pub fn new(options: &RewriteOptions) -> Result<Self, RewriteError> {
        let outline = match &options.box_template {
            Some(path) => BoxOutline::load(path)?,
            None => BoxOutline::parse(BOX_TEMPLATE)?,
        };
        Ok(Self::from_steps(vec![
            Box::new(CorrectNames),
            Box::new(BoxWidth::new(options.box_width)),
            Box::new(outline),
            Box::new(HollowNumerals),
            Box::new(Rescale::new(options.scale)),
            Box::new(ResetWidths::new(options.box_width)),
        ]))
    }

    pub fn from_steps(steps: Vec<Box<dyn Edit>>) -> Self {
        Rewriter { steps }
    }

    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|step| step.name())
    }

    pub fn run(&self, table: GlyphTable) -> Result<GlyphTable, RewriteError> {
        self.steps.iter().try_fold(table, |table, step| {
            log::debug!("applying '{}'", step.name());
            step.apply(table)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::class::{GlyphClass, BOX_GLYPH};

    fn rewritten() -> GlyphTable {
        let _ = env_logger::builder().is_test(true).try_init();
        let table = GlyphTable::parse(sw_test_data::ttx::SMALL).unwrap();
        Rewriter::new(&RewriteOptions::default())
            .unwrap()
            .run(table)
            .unwrap()
    }

    #[test]
    fn step_order() {
        let rewriter = Rewriter::new(&RewriteOptions::default()).unwrap();
        assert_eq!(
            rewriter.step_names().collect::<Vec<_>>(),
            [
                "correct names",
                "box width",
                "box outline",
                "hollow numerals",
                "rescale",
                "reset widths"
            ]
        );
    }

    #[test]
    fn only_box_has_width() {
        let table = rewritten();
        for metric in table.metrics() {
            let expected = if metric.name() == BOX_GLYPH { 500.0 } else { 0.0 };
            assert_eq!(metric.width, expected, "{}", metric.name());
        }
    }

    #[test]
    fn numerals_are_hollow() {
        let table = rewritten();
        let numerals: Vec<_> = table
            .glyphs()
            .iter()
            .filter(|glyph| glyph.class() == GlyphClass::Numeral)
            .collect();
        // includes the glyph whose name was corrected
        assert_eq!(numerals.len(), 2);
        assert!(numerals.iter().all(|glyph| glyph.contours.is_empty()));
    }

    #[test]
    fn box_uses_template() {
        let table = rewritten();
        let template = BoxOutline::parse(BOX_TEMPLATE).unwrap();
        assert_eq!(table.glyph(BOX_GLYPH), Some(template.template()));
    }

    #[test]
    fn missing_template_file() {
        let options = RewriteOptions {
            box_template: Some("does/not/exist.xml".into()),
            ..Default::default()
        };
        assert!(matches!(
            Rewriter::new(&options),
            Err(RewriteError::Template { .. })
        ));
    }

    #[test]
    fn failing_step_stops_the_pipeline() {
        let table = GlyphTable::parse(&sw_test_data::ttx::SMALL.replace("\"SWM\"", "\"SWN\"")).unwrap();
        let err = Rewriter::new(&RewriteOptions::default())
            .unwrap()
            .run(table)
            .unwrap_err();
        assert!(matches!(err, RewriteError::BoxGlyphMissing(_)));
    }
}
