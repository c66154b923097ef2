//! Writing a complete project

use std::{fmt, io::Write};

use serde::Deserialize;

use super::{GlyphGroup, PositioningRule};
use crate::{
    enumerate::{enumerate, Partition},
    error::GenerateError,
    project::Project,
    ttx::GlyphTable,
};

/// Glyphs defined at the start of every project, with ids 0, 1 and 2.
pub const SENTINEL_GLYPHS: [&str; 3] = ["glyph0", "null", "CR"];

/// The id of the first glyph from the font.
pub const FIRST_GLYPH_ID: u32 = SENTINEL_GLYPHS.len() as u32;

/// The cmap subtables VOLT should compile, closing the project.
pub const CMAP_FORMATS: [&str; 5] = [
    "CMAP_FORMAT 0 3 4",
    "CMAP_FORMAT 0 4 12",
    "CMAP_FORMAT 1 0 0",
    "CMAP_FORMAT 3 1 4",
    "CMAP_FORMAT 3 10 12 END",
];

/// Names and tags of the script, language system and feature that hold
/// the positioning lookups.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptOptions {
    pub script_name: String,
    pub script_tag: String,
    pub language_name: String,
    pub language_tag: String,
    pub feature_name: String,
    pub feature_tag: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            script_name: "New Script".into(),
            script_tag: "dflt".into(),
            language_name: "Default".into(),
            language_tag: "dflt".into(),
            feature_name: "Mark Positioning".into(),
            feature_tag: "mark".into(),
        }
    }
}

/// A glyph definition in the generated project
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphDef<'a> {
    pub name: &'a str,
    pub id: u32,
    pub unicode: u32,
}

impl fmt::Display for GlyphDef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DEF_GLYPH \"{}\" ID {} UNICODE {} TYPE BASE END_GLYPH",
            self.name, self.id, self.unicode
        )
    }
}

/// Number the mapped glyphs.
///
/// Ids start at [`FIRST_GLYPH_ID`]. All base glyphs come first, then all
/// extension glyphs, each in character map order; the numbering only
/// depends on the table, so regenerating a project keeps every id.
pub fn assign_glyph_ids(table: &GlyphTable) -> Result<Vec<GlyphDef<'_>>, GenerateError> {
    enumerate(table, Partition::Base)
        .chain(enumerate(table, Partition::Extension))
        .zip(FIRST_GLYPH_ID..)
        .map(|(entry, id)| {
            let unicode = entry
                .code_point()
                .ok_or_else(|| GenerateError::InvalidCodePoint {
                    name: entry.name().to_owned(),
                    code: entry.code().to_owned(),
                })?;
            Ok(GlyphDef {
                name: entry.name(),
                id,
                unicode,
            })
        })
        .collect()
}

/// Generates a VOLT project for a glyph table.
pub struct VtpGenerator<'a> {
    table: &'a GlyphTable,
    groups: &'a [GlyphGroup],
    rules: &'a [PositioningRule],
    options: ScriptOptions,
}

impl<'a> VtpGenerator<'a> {
    pub fn new(
        table: &'a GlyphTable,
        groups: &'a [GlyphGroup],
        rules: &'a [PositioningRule],
    ) -> Self {
        VtpGenerator {
            table,
            groups,
            rules,
            options: ScriptOptions::default(),
        }
    }

    /// Use the groups, lookups and script options of a project file.
    pub fn from_project(table: &'a GlyphTable, project: &'a Project) -> Self {
        Self::new(table, &project.groups, &project.rules).with_options(project.script.clone())
    }

    pub fn with_options(mut self, options: ScriptOptions) -> Self {
        self.options = options;
        self
    }

    /// Write the project.
    ///
    /// Every code point is decoded before anything is written, so on error
    /// `out` is untouched.
    pub fn generate(&self, mut out: impl Write) -> Result<(), GenerateError> {
        let glyphs = assign_glyph_ids(self.table)?;
        log::info!(
            "generating project with {} glyphs, {} groups and {} lookups",
            glyphs.len(),
            self.groups.len(),
            self.rules.len()
        );

        writeln!(out)?;
        for (id, name) in SENTINEL_GLYPHS.iter().enumerate() {
            writeln!(out, "DEF_GLYPH \"{name}\" ID {id} TYPE BASE END_GLYPH")?;
        }
        for glyph in &glyphs {
            writeln!(out, "{glyph}")?;
        }
        self.write_script(&mut out)?;
        for group in self.groups {
            write!(out, "{group}")?;
        }
        for rule in self.rules {
            write!(out, "{rule}")?;
        }
        for line in CMAP_FORMATS {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn generate_to_string(&self) -> Result<String, GenerateError> {
        let mut buf = Vec::new();
        self.generate(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_script(&self, out: &mut impl Write) -> std::io::Result<()> {
        let ScriptOptions {
            script_name,
            script_tag,
            language_name,
            language_tag,
            feature_name,
            feature_tag,
        } = &self.options;
        writeln!(out, "DEF_SCRIPT NAME \"{script_name}\" TAG \"{script_tag}\"\n")?;
        writeln!(
            out,
            "DEF_LANGSYS NAME \"{language_name}\" TAG \"{language_tag}\"\n"
        )?;
        writeln!(
            out,
            "DEF_FEATURE NAME \"{feature_name}\" TAG \"{feature_tag}\""
        )?;
        let lookups: String = self
            .rules
            .iter()
            .map(|rule| format!(" LOOKUP \"{}\"", rule.name()))
            .collect();
        writeln!(out, "{lookups}")?;
        writeln!(out, "END_FEATURE")?;
        writeln!(out, "END_LANGSYS")?;
        writeln!(out, "END_SCRIPT")
    }
}
