//! Errors produced while reading, rewriting and generating.

use std::path::PathBuf;

use thiserror::Error;

/// An error reading or writing a TTX document
#[derive(Debug, Error)]
pub enum TtxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed XML: {0}")]
    Xml(#[from] xml::reader::Error),
    #[error("failed to write XML: {0}")]
    XmlWrite(#[from] xml::writer::Error),
    #[error("document has no root element")]
    EmptyDocument,
    #[error("missing <{0}> element")]
    MissingElement(&'static str),
    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("invalid number '{value}' for '{attribute}' on <{element}>")]
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },
}

/// An error constructing a positioning rule
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("lookup '{lookup}' has invalid context value '{value}'")]
    InvalidContext { lookup: String, value: String },
    #[error("lookup '{0}' has no target glyphs")]
    NoTargets(String),
}

/// An error generating a VOLT project
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("glyph '{name}' has invalid code point '{code}'")]
    InvalidCodePoint { name: String, code: String },
    #[error("failed to write project: {0}")]
    Io(#[from] std::io::Error),
}

/// An error loading a project file
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid project file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// An error rewriting a glyph table
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read box template '{path}': {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid box template: {0}")]
    InvalidTemplate(TtxError),
    #[error("no outline for box glyph '{0}'")]
    BoxGlyphMissing(String),
    #[error(transparent)]
    Ttx(#[from] TtxError),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Ttx(#[from] TtxError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
