//! Static profile data rendered by every command handler.
//!
//! The profile is loaded once at startup and treated as immutable for the
//! lifetime of the process. A built-in record ships with the crate; a TOML
//! file can replace it wholesale (`folio --profile path/to/profile.toml`).

mod builtin;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contact and identity details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub available_for_work: bool,
}

/// One labelled group of skills, rendered in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
}

/// The full read-only profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub summary: String,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl Profile {
    /// The profile record embedded in the crate.
    pub fn builtin() -> Self {
        builtin::profile()
    }

    /// Load a profile from a TOML file, or fall back to the built-in record
    /// when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read profile file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse profile file {}", path.display()))
            }
            None => Ok(Self::builtin()),
        }
    }

    /// The experience entry flagged as current, if any.
    pub fn current_experience(&self) -> Option<&Experience> {
        self.experience.iter().find(|exp| exp.current)
    }

    /// Projects flagged as featured, in declaration order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_profile_is_complete() {
        let profile = Profile::builtin();
        assert!(!profile.personal.name.is_empty());
        assert!(!profile.summary.is_empty());
        assert!(profile.skill_categories.len() >= 4);
        assert!(profile.current_experience().is_some());
        assert!(profile.featured_projects().count() > 0);
    }

    #[test]
    fn load_without_path_returns_builtin() {
        let profile = Profile::load(None).unwrap();
        assert_eq!(profile.personal.name, Profile::builtin().personal.name);
    }

    #[test]
    fn load_parses_toml_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
summary = "A short bio."

[personal]
name = "Ada Lovelace"
location = "London"
email = "ada@example.com"
phone = "000"
linkedin = "https://linkedin.com/in/ada"
github = "https://github.com/ada"

[[skill_categories]]
category = "Languages"
items = ["Analytical Engine"]
"#
        )
        .unwrap();

        let profile = Profile::load(Some(file.path())).unwrap();
        assert_eq!(profile.personal.name, "Ada Lovelace");
        assert_eq!(profile.skill_categories.len(), 1);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = Profile::load(Some(Path::new("/nonexistent/profile.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read profile file"));
    }
}
