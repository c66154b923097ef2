//! Project files describing groups and lookups.
//!
//! The glyph groups and positioning lookups are not derived from the font;
//! they are listed in a TOML file:
//!
//! ```toml
//! [script]
//! feature_tag = "mark"
//!
//! [[group]]
//! name = "Numbers"
//! start = "SW250"
//! end = "SW749"
//!
//! [[lookup]]
//! name = "p1"
//! glyphs = ["S26b02"]
//! context = ["SW503", "SW520"]
//! ```

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    error::ProjectError,
    vtp::{Direction, GlyphGroup, PositioningRule, ScriptOptions, Target},
};

/// The project used for the Sutton SignWriting fonts.
pub static DEFAULT_PROJECT: &str = include_str!("../../resources/signwriting.toml");

/// The groups and lookups to write into a VOLT project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub script: ScriptOptions,
    pub groups: Vec<GlyphGroup>,
    pub rules: Vec<PositioningRule>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    #[serde(default)]
    script: ScriptOptions,
    #[serde(default, rename = "group")]
    groups: Vec<GroupEntry>,
    #[serde(default, rename = "lookup")]
    lookups: Vec<LookupEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupEntry {
    name: String,
    start: String,
    end: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LookupEntry {
    name: String,
    #[serde(default)]
    glyphs: Vec<String>,
    #[serde(default)]
    groups: Vec<String>,
    context: [String; 2],
    #[serde(default)]
    direction: Direction,
}

impl Project {
    /// The built-in SignWriting project.
    pub fn signwriting() -> Result<Self, ProjectError> {
        DEFAULT_PROJECT.parse()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.to_owned(),
            source,
        })?;
        text.parse()
    }
}

impl FromStr for Project {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: ProjectFile = toml::from_str(s)?;
        let groups = file
            .groups
            .into_iter()
            .map(|group| GlyphGroup::new(group.name, group.start, group.end))
            .collect();
        let rules = file
            .lookups
            .into_iter()
            .map(|lookup| {
                let targets = lookup
                    .glyphs
                    .into_iter()
                    .map(Target::Glyph)
                    .chain(lookup.groups.into_iter().map(Target::Group));
                PositioningRule::new(lookup.name, targets, lookup.context)
                    .map(|rule| rule.with_direction(lookup.direction))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Project {
            script: file.script,
            groups,
            rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::RuleError;

    #[test]
    fn builtin_project() {
        let project = Project::signwriting().unwrap();
        let groups: Vec<_> = project.groups.iter().map(GlyphGroup::name).collect();
        assert_eq!(groups, ["Markers", "Numbers", "g1", "g2", "g3", "g4"]);
        let offsets: Vec<_> = project
            .rules
            .iter()
            .map(|rule| (rule.name(), rule.offset()))
            .collect();
        assert_eq!(
            offsets,
            [("p1", (-247, 230)), ("p2", (-244, 250)), ("p3", (-268, 267))]
        );
        assert_eq!(project.script, ScriptOptions::default());
    }

    #[test]
    fn groups_and_glyphs_as_targets() {
        let project: Project = r#"
            [[lookup]]
            name = "all"
            glyphs = ["S33100"]
            groups = ["g1"]
            context = ["SW750", "SW750"]
            direction = "RTL"
        "#
        .parse()
        .unwrap();
        let rule = &project.rules[0];
        assert_eq!(
            rule.targets(),
            [Target::Glyph("S33100".into()), Target::Group("g1".into())]
        );
        assert!(rule.to_string().contains("DIRECTION RTL"));
    }

    #[test]
    fn bad_context_fails_at_load() {
        let err = r#"
            [[lookup]]
            name = "p1"
            glyphs = ["S26b02"]
            context = ["SW5o3", "SW520"]
        "#
        .parse::<Project>()
        .unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Rule(RuleError::InvalidContext { .. })
        ));
    }

    #[test]
    fn context_needs_two_values() {
        let err = r#"
            [[lookup]]
            name = "p1"
            glyphs = ["S26b02"]
            context = ["SW503"]
        "#
        .parse::<Project>()
        .unwrap_err();
        assert!(matches!(err, ProjectError::Toml(_)));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!("[[groups]]\nname = \"x\"".parse::<Project>().is_err());
    }

    #[test]
    fn empty_project() {
        assert_eq!("".parse::<Project>().unwrap(), Project::default());
    }
}
