//! Addressing of documents under the data root.

use std::fmt;
use std::path::PathBuf;

use super::error::RepoError;

/// Top-level directories of the data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSection {
    Stats,
    Classes,
    Systems,
    Items,
    Monsters,
    World,
}

impl DataSection {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Classes => "classes",
            Self::Systems => "systems",
            Self::Items => "items",
            Self::Monsters => "monsters",
            Self::World => "world",
        }
    }
}

impl fmt::Display for DataSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A JSON document relative to the data root.
///
/// Every caller-supplied segment is checked by [`validate_segment`], so a
/// `DocumentPath` can never point outside the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    segments: Vec<String>,
}

impl DocumentPath {
    fn fixed(section: DataSection, file_name: &str) -> Self {
        Self {
            segments: vec![section.dir_name().to_string(), file_name.to_string()],
        }
    }

    /// `stats/class_base_stats.json`
    pub fn class_base_stats() -> Self {
        Self::fixed(DataSection::Stats, "class_base_stats.json")
    }

    /// `systems/skill_scaling.json`
    pub fn skill_scaling() -> Self {
        Self::fixed(DataSection::Systems, "skill_scaling.json")
    }

    /// `systems/loot_multipliers.json`
    pub fn loot_multipliers() -> Self {
        Self::fixed(DataSection::Systems, "loot_multipliers.json")
    }

    /// `classes/<class>/skills.json`
    pub fn class_skills(class: &str) -> Result<Self, RepoError> {
        let class = validate_segment(class)?;
        Ok(Self {
            segments: vec![
                DataSection::Classes.dir_name().to_string(),
                class.to_string(),
                "skills.json".to_string(),
            ],
        })
    }

    /// `<section>/<name>.json`
    pub fn section_document(section: DataSection, name: &str) -> Result<Self, RepoError> {
        let name = validate_segment(name)?;
        Ok(Self {
            segments: vec![section.dir_name().to_string(), format!("{name}.json")],
        })
    }

    /// The path relative to the data root.
    pub fn relative(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Accept only `[A-Za-z0-9_-]+` as a class or document name.
pub fn validate_segment(segment: &str) -> Result<&str, RepoError> {
    let valid = !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(segment)
    } else {
        Err(RepoError::invalid_path(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_skills_path() {
        let path = DocumentPath::class_skills("dark_knight").expect("valid class");
        assert_eq!(path.to_string(), "classes/dark_knight/skills.json");
        assert_eq!(
            path.relative(),
            PathBuf::from("classes").join("dark_knight").join("skills.json")
        );
    }

    #[test]
    fn section_document_appends_extension() {
        let path = DocumentPath::section_document(DataSection::Monsters, "forest-01")
            .expect("valid name");
        assert_eq!(path.to_string(), "monsters/forest-01.json");
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for bad in ["", "..", "../secrets", "a/b", "a\\b", "name.json", "spaced name"] {
            assert!(
                matches!(validate_segment(bad), Err(RepoError::InvalidPath(_))),
                "{bad:?} accepted"
            );
            assert!(DocumentPath::class_skills(bad).is_err());
        }
    }

    #[test]
    fn fixed_documents() {
        assert_eq!(
            DocumentPath::class_base_stats().to_string(),
            "stats/class_base_stats.json"
        );
        assert_eq!(
            DocumentPath::skill_scaling().to_string(),
            "systems/skill_scaling.json"
        );
        assert_eq!(
            DocumentPath::loot_multipliers().to_string(),
            "systems/loot_multipliers.json"
        );
    }
}
