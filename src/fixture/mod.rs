//! Portfolio data fixture
//!
//! Immutable project and biography records, parsed once at startup from a
//! TOML content document and shared read-only with the API handlers.

mod types;

pub use types::{AboutInfo, Contact, Experience, Project, ProjectStatus, SkillCategory};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Content compiled into the binary
const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.toml");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read portfolio content '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
}

/// Raw document layout of the content file
#[derive(Debug, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    projects: Vec<Project>,
    about: AboutInfo,
}

/// Read-only portfolio data
#[derive(Debug, Clone)]
pub struct Fixture {
    projects: Vec<Project>,
    about: AboutInfo,
}

impl Fixture {
    /// Build a fixture, rejecting duplicate project ids
    pub fn new(projects: Vec<Project>, about: AboutInfo) -> Result<Self, FixtureError> {
        let mut seen = HashSet::with_capacity(projects.len());
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(FixtureError::DuplicateId(dup.id.clone()));
        }
        Ok(Self { projects, about })
    }

    /// Fixture embedded at compile time
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FixtureError> {
        let doc: FixtureDocument = toml::from_str(content)?;
        Self::new(doc.projects, doc.about)
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// All projects in content order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Linear scan by id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Exact-match category filter; unknown categories yield an empty list
    pub fn projects_in_category(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub const fn about(&self) -> &AboutInfo {
        &self.about
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_ABOUT: &str = r#"
[about]
name = "Tester"
title = "Engineer"
description = "desc"
skills = []
skill_categories = []
experiences = []

[about.contact]
email = "t@example.com"
github = "https://github.com/tester"
"#;

    #[test]
    fn test_builtin_fixture_loads() {
        let fixture = Fixture::builtin().unwrap();
        assert_eq!(fixture.projects().len(), 4);
        assert_eq!(fixture.about().name, "Kyle");
        assert_eq!(fixture.about().skill_categories.len(), 3);
        assert_eq!(fixture.about().experiences.len(), 3);
        assert!(fixture.about().contact.linkedin.is_none());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let fixture = Fixture::builtin().unwrap();
        let ids: HashSet<&str> = fixture.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), fixture.projects().len());
    }

    #[test]
    fn test_project_by_id() {
        let fixture = Fixture::builtin().unwrap();
        let project = fixture.project("app-order-receiving").unwrap();
        assert_eq!(project.category, "企業級系統");
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(project.demo_url.is_none());
        assert!(fixture.project("does-not-exist").is_none());
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let fixture = Fixture::builtin().unwrap();
        let ids: Vec<&str> = fixture
            .projects_in_category("工具與擴充功能")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tixcraft-extension", "sport-reserve"]);
    }

    #[test]
    fn test_category_filter_is_subset_of_all() {
        let fixture = Fixture::builtin().unwrap();
        for project in fixture.projects() {
            let expected: Vec<&Project> = fixture
                .projects()
                .iter()
                .filter(|p| p.category == project.category)
                .collect();
            assert_eq!(fixture.projects_in_category(&project.category), expected);
        }
        assert!(fixture.projects_in_category("nonexistent-category").is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let content = format!(
            r#"
[[projects]]
id = "same"
name = "A"
description = "a"
tech_stack = []
features = []
category = "x"

[[projects]]
id = "same"
name = "B"
description = "b"
tech_stack = []
features = []
category = "y"
{MINIMAL_ABOUT}"#
        );
        match Fixture::from_toml_str(&content) {
            Err(FixtureError::DuplicateId(id)) => assert_eq!(id, "same"),
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_status_defaults_to_completed() {
        let content = format!(
            r#"
[[projects]]
id = "only"
name = "Only"
description = "d"
tech_stack = ["Rust"]
features = []
category = "tools"
{MINIMAL_ABOUT}"#
        );
        let fixture = Fixture::from_toml_str(&content).unwrap();
        assert_eq!(fixture.projects()[0].status, ProjectStatus::Completed);
        assert!(fixture.projects()[0].github_url.is_none());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Fixture::from_file(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }
}
