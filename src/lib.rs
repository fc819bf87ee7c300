pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use config::site_config::SiteConfig;
pub use core::{engine::SiteEngine, pipeline::SitePipeline};
pub use domain::model::Profile;
pub use utils::error::{Result, SiteError};
