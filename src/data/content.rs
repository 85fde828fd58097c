//! Portfolio content model.
//!
//! All content is static display data: a profile, categorized skills,
//! a project list, education entries, achievements, and contact details.
//! Records are never mutated at runtime; projects are identified only by
//! their position in the list.
//!
//! The built-in content (see [`builtin`](super::builtin)) can be replaced
//! wholesale by a JSON file via [`Content::load`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The complete content set rendered by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectRecord>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<String>,
    pub contact: ContactInfo,
}

impl Content {
    /// Load content from a JSON file.
    ///
    /// Callers fall back to the built-in content on error; a bad content
    /// file must never take the UI down.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        let content: Content = serde_json::from_str(&raw)
            .with_context(|| format!("parsing content file {}", path.display()))?;
        Ok(content)
    }
}

/// The site owner's profile, shown on the Home and About views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Short role line ("Web Developer • UI/UX • ...").
    pub tagline: String,
    /// Lead paragraph for the hero section.
    pub lead: String,
    /// Secondary note under the hero (current studies etc.).
    pub note: String,
    /// Profile photo reference (emitted as-is, never fetched).
    pub photo: String,
    /// CV document reference.
    pub cv: String,
    /// About-view biography.
    pub bio: String,
    /// About-view goals paragraph.
    pub goals: String,
}

/// A named skill category with its member skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

impl SkillCategory {
    /// Display proficiency for the item at `index`, as a percentage.
    ///
    /// 70% plus 3 points per position, capped at 100.
    pub fn level(&self, index: usize) -> u8 {
        (70 + index as u64 * 3).min(100) as u8
    }
}

/// A single project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Thumbnail reference.
    pub thumbnail: String,
    /// One-line description shown on the card.
    pub description: String,
    /// Tech-stack label ("Next.js • Node.js").
    pub stack: String,
    /// Preview-media reference; rendered as video or image depending on
    /// its file extension.
    pub preview: String,
    /// Long-form detail shown in the detail overlay.
    pub details: String,
}

/// An education list entry (degree, certification group, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub subtitle: String,
    /// Certificate image reference, when one can be viewed.
    #[serde(default)]
    pub certificate: Option<String>,
}

/// Contact details and social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub age: u8,
    pub phone: String,
    pub email: String,
    pub links: Vec<SocialLink>,
}

/// A labeled external profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_skill_level_progression() {
        let cat = SkillCategory {
            category: "Web Development".into(),
            items: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
        };
        assert_eq!(cat.level(0), 70);
        assert_eq!(cat.level(1), 73);
        assert_eq!(cat.level(2), 76);
        // Capped at 100 for long lists
        assert_eq!(cat.level(50), 100);
    }

    #[test]
    fn test_content_round_trips_through_json() {
        let content = crate::data::builtin::builtin();
        let json = serde_json::to_string_pretty(&content).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();

        let loaded = Content::load(file.path()).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_content_load_missing_file() {
        let err = Content::load("/nonexistent/content.json").unwrap_err();
        assert!(err.to_string().contains("reading content file"));
    }

    #[test]
    fn test_content_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let err = Content::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing content file"));
    }
}
