use crate::core::{Pipeline, RenderedSite};
use crate::utils::error::Result;
use std::time::Instant;

/// Drives a [`Pipeline`] through gather, render and publish.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        let site = self.prepare().await?;

        tracing::info!("Publishing {} page(s)...", site.pages.len());
        let output_path = self.pipeline.publish(site).await?;

        tracing::info!(
            "Site written to {} in {:?}",
            output_path,
            started.elapsed()
        );
        Ok(output_path)
    }

    /// Gathers and renders without publishing anything.
    pub async fn prepare(&self) -> Result<RenderedSite> {
        tracing::info!("Gathering profile...");
        let profile = self.pipeline.gather().await?;
        let summary = profile.summary();
        tracing::info!(
            "Profile '{}': {} education, {} experience, {} projects, {} skill groups, {} languages",
            profile.personal.name,
            summary.education,
            summary.experience,
            summary.projects,
            summary.skill_groups,
            summary.languages
        );

        tracing::info!("Rendering page...");
        let site = self.pipeline.render(profile).await?;
        let bytes: usize = site.pages.iter().map(|page| page.contents.len()).sum();
        tracing::info!("Rendered {} page(s), {} bytes", site.pages.len(), bytes);

        Ok(site)
    }
}
