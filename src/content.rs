use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| load_or_default("profile.json"));
pub static EXPERIENCE: LazyLock<Vec<ExperienceEntry>> =
    LazyLock::new(|| load_or_default("experience.json"));
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_default("projects.json"));
pub static SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| load_or_default("skills.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: Vec<String>,
    pub email: String,
    pub location: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub key: String,
    pub company: String,
    pub role: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl ExperienceEntry {
    pub fn period(&self) -> String {
        let start = self.start.format("%b %Y");
        match self.end {
            Some(end) => format!("{start} – {}", end.format("%b %Y")),
            None => format!("{start} – Present"),
        }
    }
}

/// Gradient used for a project card's header band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accent {
    pub from: String,
    pub to: String,
}

impl Accent {
    pub fn to_css(&self) -> String {
        format!("background: linear-gradient(135deg, {}, {});", self.from, self.to)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

pub fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Content::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    parse(file, &data.data)
}

fn parse<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

fn load_or_default<T: DeserializeOwned + Default>(file: &str) -> T {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        load::<Profile>("profile.json").unwrap();
        let experience = load::<Vec<ExperienceEntry>>("experience.json").unwrap();
        let projects = load::<Vec<Project>>("projects.json").unwrap();
        let skills = load::<Vec<SkillGroup>>("skills.json").unwrap();
        assert!(!experience.is_empty());
        assert!(!projects.is_empty());
        assert!(!skills.is_empty());
    }

    #[test]
    fn test_slide_keys_unique() {
        let mut keys = PROJECTS.iter().map(|p| p.key.as_str()).collect::<Vec<_>>();
        keys.extend(EXPERIENCE.iter().map(|e| e.key.as_str()));
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_missing_file() {
        let err = load::<Profile>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::NotFound(f) if f == "nope.json"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse::<Profile>("broken.json", b"{ not json").unwrap_err();
        assert!(err.to_string().starts_with("couldn't parse broken.json"));
    }

    #[test]
    fn test_period() {
        let mut entry = ExperienceEntry {
            key: "x".to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            start: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end: None,
            highlights: vec![],
            tech: vec![],
        };
        assert_eq!(entry.period(), "Mar 2021 – Present");
        entry.end = NaiveDate::from_ymd_opt(2023, 11, 1);
        assert_eq!(entry.period(), "Mar 2021 – Nov 2023");
    }
}
