use crate::core::ConfigProvider;
use crate::domain::model::Profile;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./public";
pub const DEFAULT_SCROLL_OFFSET: f64 = 100.0;
pub const DEFAULT_ARCHIVE_FILENAME: &str = "site.zip";
pub const DEFAULT_FOOTER_YEAR: i32 = 2024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub profile: ProfileSection,
    #[serde(default)]
    pub contact: ContactSection,
    #[serde(default)]
    pub scroll_spy: ScrollSpySection,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// `<title>` of the page; defaults to "<name> | Portfolio".
    pub title: Option<String>,
    pub output_path: String,
    /// Copyright year printed in the footer.
    pub footer_year: i32,
    pub footer_note: String,
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: None,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            footer_year: DEFAULT_FOOTER_YEAR,
            footer_note: "Designed for excellence in AI & Automation.".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub heading: String,
    pub message: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            heading: "Get In Touch".to_string(),
            message: "Interested in collaboration, research opportunities, or discussing AI & automation projects? I'd love to hear from you.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpySection {
    /// Vertical measurement line, in pixels from the top of the viewport.
    pub offset_px: f64,
}

impl Default for ScrollSpySection {
    fn default() -> Self {
        Self {
            offset_px: DEFAULT_SCROLL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub archive: bool,
    pub archive_filename: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            archive: false,
            archive_filename: DEFAULT_ARCHIVE_FILENAME.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::TomlError {
            source_name: "site configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("site.output_path", &self.site.output_path)?;
        validation::validate_non_empty_string("site.language", &self.site.language)?;

        if let Some(path) = &self.profile.path {
            validation::validate_path("profile.path", path)?;
        }

        validation::validate_range("site.footer_year", self.site.footer_year, 1900, 9999)?;

        validation::validate_range("scroll_spy.offset_px", self.scroll_spy.offset_px, 0.0, 10_000.0)?;

        if self.build.archive {
            if self.build.archive_filename.trim().is_empty() {
                return Err(SiteError::MissingConfigError {
                    field: "build.archive_filename".to_string(),
                });
            }
            validation::validate_file_extension(
                "build.archive_filename",
                &self.build.archive_filename,
                "zip",
            )?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn output_path(&self) -> &str {
        &self.site.output_path
    }

    fn profile_path(&self) -> Option<&str> {
        self.profile.path.as_deref()
    }

    fn page_title(&self, profile: &Profile) -> String {
        self.site
            .title
            .clone()
            .unwrap_or_else(|| format!("{} | Portfolio", profile.personal.name))
    }

    fn footer_year(&self) -> i32 {
        self.site.footer_year
    }

    fn footer_note(&self) -> &str {
        &self.site.footer_note
    }

    fn contact_heading(&self) -> &str {
        &self.contact.heading
    }

    fn contact_message(&self) -> &str {
        &self.contact.message
    }

    fn language(&self) -> &str {
        &self.site.language
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_spy.offset_px
    }

    fn archive_filename(&self) -> Option<&str> {
        self.build
            .archive
            .then_some(self.build.archive_filename.as_str())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
