use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile shipped inside the binary.
const EMBEDDED_PROFILE: &str = include_str!("../../assets/profile.toml");

/// The single data record the site is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub about: About,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Category headings in authoring order.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub thesis: String,
    pub cv_url: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub description: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub skill_groups: usize,
    pub skills: usize,
    pub languages: usize,
}

/// One output file produced by the render stage.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub path: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedSite {
    pub pages: Vec<RenderedPage>,
}

impl RenderedSite {
    pub fn page(&self, path: &str) -> Option<&RenderedPage> {
        self.pages.iter().find(|page| page.path == path)
    }
}

impl Profile {
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_PROFILE, "embedded profile")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::parse(&content, &path.as_ref().display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "profile")
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::TomlError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            education: self.education.len(),
            experience: self.experience.len(),
            projects: self.projects.len(),
            skill_groups: self.skills.len(),
            skills: self.skills.iter().map(|group| group.skills.len()).sum(),
            languages: self.languages.len(),
        }
    }
}

impl Personal {
    /// Avatar fallback: the first letter of every word in the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Education {
    /// Thesis title, or the project when there is no thesis.
    pub fn detail(&self) -> Option<&str> {
        self.thesis.as_deref().or(self.project.as_deref())
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        self.check_fields().map_err(|e| SiteError::ProfileError {
            message: e.to_string(),
        })
    }
}

impl Profile {
    fn check_fields(&self) -> Result<()> {
        let personal = &self.personal;
        validation::validate_non_empty_string("personal.name", &personal.name)?;
        validation::validate_non_empty_string("personal.tagline", &personal.tagline)?;
        validation::validate_email("personal.email", &personal.email)?;
        validation::validate_url("personal.linkedin", &personal.linkedin)?;
        validation::validate_url("personal.thesis", &personal.thesis)?;
        validation::validate_url("personal.cv_url", &personal.cv_url)?;
        validation::validate_url("personal.image", &personal.image)?;

        for (index, project) in self.projects.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("projects[{}].title", index),
                &project.title,
            )?;
            if let Some(link) = &project.link {
                validation::validate_url(&format!("projects[{}].link", index), link)?;
            }
        }

        for (index, group) in self.skills.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("skills[{}].category", index),
                &group.category,
            )?;
        }

        Ok(())
    }
}
