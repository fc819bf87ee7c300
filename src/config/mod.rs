pub mod cli;
pub mod site_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Command-line flags; any flag given overrides the matching value in site.toml.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render the portfolio page to static HTML")]
pub struct CliConfig {
    /// Path to the site configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Profile TOML to render instead of the embedded one
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also bundle the rendered site into a zip archive
    #[arg(long)]
    pub archive: bool,

    /// Show what would be rendered without writing any files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn apply_overrides(&self, config: &mut site_config::SiteConfig) {
        if let Some(profile) = &self.profile {
            config.profile.path = Some(profile.clone());
        }
        if let Some(output) = &self.output {
            config.site.output_path = output.clone();
        }
        if self.archive {
            config.build.archive = true;
        }
    }
}
