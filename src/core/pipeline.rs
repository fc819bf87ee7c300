use crate::core::render::{PageRenderer, PageSettings};
use crate::core::{ConfigProvider, Pipeline, Profile, RenderedPage, RenderedSite, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const INDEX_PAGE: &str = "index.html";

/// Renders the profile to `index.html` and writes it, optionally zipped, through a [`Storage`].
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn build_archive(&self, site: &RenderedSite) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for page in &site.pages {
            zip.start_file(page.path.as_str(), SimpleFileOptions::default())?;
            zip.write_all(page.contents.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn gather(&self) -> Result<Profile> {
        let profile = match self.config.profile_path() {
            Some(path) => {
                tracing::debug!("Loading profile from {}", path);
                Profile::from_file(path)?
            }
            None => {
                tracing::debug!("Using embedded profile");
                Profile::embedded()?
            }
        };

        profile.validate()?;
        Ok(profile)
    }

    async fn render(&self, profile: Profile) -> Result<RenderedSite> {
        let settings = PageSettings::from_config(&self.config, &profile);
        tracing::debug!(
            "Rendering '{}' (footer year {}, scroll offset {}px)",
            settings.title,
            settings.footer_year,
            settings.scroll_offset
        );

        let renderer = PageRenderer::new(settings);
        let contents = renderer.render_page(&profile)?;

        Ok(RenderedSite {
            pages: vec![RenderedPage {
                path: INDEX_PAGE.to_string(),
                contents,
            }],
        })
    }

    async fn publish(&self, site: RenderedSite) -> Result<String> {
        for page in &site.pages {
            tracing::debug!("Writing {} ({} bytes)", page.path, page.contents.len());
            self.storage
                .write_file(&page.path, page.contents.as_bytes())
                .await?;
        }

        if let Some(archive_filename) = self.config.archive_filename() {
            let archive = self.build_archive(&site)?;
            tracing::debug!(
                "Writing {} ({} bytes, {} files)",
                archive_filename,
                archive.len(),
                site.pages.len()
            );
            self.storage.write_file(archive_filename, &archive).await?;
        }

        Ok(format!("{}/{}", self.config.output_path(), INDEX_PAGE))
    }
}
