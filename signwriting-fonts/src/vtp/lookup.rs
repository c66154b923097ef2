//! Contextual positioning lookups

use std::fmt;

use serde::Deserialize;

use crate::{class::EXTENSION_MARKER, error::RuleError};

/// The context value which produces no offset.
///
/// Context glyphs are number glyphs encoding a coordinate on the
/// SignWriting grid, and 750 is half the grid's extent in font units. The
/// offset applied to a target is the distance of the context value from
/// this midpoint, so a font with a different `unitsPerEm` (see
/// [`EXPECTED_UNITS_PER_EM`](crate::rewrite::EXPECTED_UNITS_PER_EM)) needs a
/// different value.
pub const CONTEXT_HALF_EXTENT: i32 = 750;

/// The glyph or glyphs a lookup repositions
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Glyph(String),
    /// A group defined elsewhere in the project
    Group(String),
}

/// The writing direction a lookup applies in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// A single adjustment applied when the context matches.
///
/// The context is a pair of number glyphs to the right of the target; their
/// values give the horizontal and vertical offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositioningRule {
    name: String,
    targets: Vec<Target>,
    direction: Direction,
    context: [String; 2],
    dx: i32,
    dy: i32,
}

impl PositioningRule {
    /// Create a new rule, deriving its offset from the context.
    ///
    /// Returns an error if there are no targets, or if a context glyph name
    /// is not the marker followed by an integer whose offset fits in an
    /// `i32`.
    pub fn new(
        name: impl Into<String>,
        targets: impl IntoIterator<Item = Target>,
        context: [String; 2],
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let targets: Vec<_> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(RuleError::NoTargets(name));
        }
        let dx = context_offset(&name, &context[0], |value| {
            value.checked_sub(CONTEXT_HALF_EXTENT)
        })?;
        let dy = context_offset(&name, &context[1], |value| {
            CONTEXT_HALF_EXTENT.checked_sub(value)
        })?;
        Ok(PositioningRule {
            name,
            targets,
            direction: Direction::default(),
            context,
            dx,
            dy,
        })
    }

    /// Convenience for a rule moving a single glyph.
    pub fn for_glyph(
        name: impl Into<String>,
        glyph: impl Into<String>,
        context: [&str; 2],
    ) -> Result<Self, RuleError> {
        Self::new(
            name,
            [Target::Glyph(glyph.into())],
            context.map(String::from),
        )
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn context(&self) -> &[String; 2] {
        &self.context
    }

    /// The (dx, dy) adjustment, in font units.
    pub fn offset(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

// the offset derived from the numeric part of a context glyph name
fn context_offset(
    lookup: &str,
    glyph: &str,
    offset: impl FnOnce(i32) -> Option<i32>,
) -> Result<i32, RuleError> {
    glyph
        .get(EXTENSION_MARKER.len()..)
        .and_then(|digits| digits.parse().ok())
        .and_then(offset)
        .ok_or_else(|| RuleError::InvalidContext {
            lookup: lookup.to_owned(),
            value: glyph.to_owned(),
        })
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Glyph(name) => write!(f, "GLYPH \"{name}\""),
            Target::Group(name) => write!(f, "GROUP \"{name}\""),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => f.write_str("LTR"),
            Direction::Rtl => f.write_str("RTL"),
        }
    }
}

impl fmt::Display for PositioningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DEF_LOOKUP \"{}\" PROCESS_BASE PROCESS_MARKS ALL DIRECTION {}",
            self.name, self.direction
        )?;
        writeln!(f, "IN_CONTEXT")?;
        for glyph in &self.context {
            writeln!(f, " RIGHT GLYPH \"{glyph}\"")?;
        }
        writeln!(f, "END_CONTEXT")?;
        writeln!(f, "AS_POSITION")?;
        for (i, target) in self.targets.iter().enumerate() {
            let lead = if i == 0 { "ADJUST_SINGLE " } else { " " };
            writeln!(
                f,
                "{lead}{target} BY POS DX {} DY {} END_POS",
                self.dx, self.dy
            )?;
        }
        writeln!(f, "END_ADJUST")?;
        writeln!(f, "END_POSITION")
    }
}
