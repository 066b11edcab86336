// Fixture data types
// Shapes of the project and biography records served by the API

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single portfolio project
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique slug used in `/api/projects/{id}`
    pub id: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Free-form category chosen by the content owner
    pub category: String,
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Project lifecycle status
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

/// Work or education history entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Named group of skills, e.g. backend or frontend
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Contact links
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub github: String,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Biography singleton served by `/api/about`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Serialized as a JSON object keyed by category name, in content order
    #[serde(serialize_with = "serialize_skill_categories")]
    pub skill_categories: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub contact: Contact,
}

fn serialize_skill_categories<S>(categories: &[SkillCategory], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(categories.len()))?;
    for category in categories {
        map.serialize_entry(&category.name, &category.skills)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            "in-progress"
        );
        assert_eq!(serde_json::to_value(ProjectStatus::Planned).unwrap(), "planned");
        assert_eq!(ProjectStatus::default(), ProjectStatus::Completed);
    }

    #[test]
    fn test_skill_categories_serialize_as_object() {
        let about = AboutInfo {
            name: "n".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            skills: vec!["Rust".to_string()],
            skill_categories: vec![
                SkillCategory {
                    name: "backend".to_string(),
                    skills: vec!["Rust".to_string(), "SQL".to_string()],
                },
                SkillCategory {
                    name: "frontend".to_string(),
                    skills: vec!["CSS".to_string()],
                },
            ],
            experiences: vec![],
            contact: Contact {
                email: "a@b.c".to_string(),
                github: "https://github.com/x".to_string(),
                linkedin: None,
            },
        };

        let json = serde_json::to_string(&about).unwrap();
        assert!(json.contains(r#""skill_categories":{"backend":["Rust","SQL"],"frontend":["CSS"]}"#));
        assert!(json.contains(r#""linkedin":null"#));
    }
}
