use anyhow::Result;
use portfolio_site::core::pipeline::INDEX_PAGE;
use portfolio_site::utils::validation::Validate;
use portfolio_site::{LocalStorage, Profile, SiteConfig, SiteEngine, SitePipeline};
use std::io::Read;
use tempfile::TempDir;

fn config_for(output_path: &str, extra: &str) -> Result<SiteConfig> {
    let normalized_path = output_path.replace('\\', "/");
    let config = SiteConfig::from_toml_str(&format!(
        r#"
[site]
output_path = "{}"
footer_year = 2024
{}
"#,
        normalized_path, extra
    ))?;
    config.validate()?;
    Ok(config)
}

#[tokio::test]
async fn test_end_to_end_build_writes_index() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(&output_path, "")?;

    let storage = LocalStorage::new(output_path.clone());
    let engine = SiteEngine::new(SitePipeline::new(storage, config));
    let result = engine.run().await?;

    assert!(result.ends_with(INDEX_PAGE));
    let html = std::fs::read_to_string(temp_dir.path().join(INDEX_PAGE))?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Fathima Hisa Faiyaz</h1>"));
    assert!(html.contains("&copy; 2024 Fathima Hisa Faiyaz."));
    assert!(!temp_dir.path().join("site.zip").exists());
    Ok(())
}

#[tokio::test]
async fn test_archive_contains_rendered_index() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &output_path,
        r#"
[build]
archive = true
archive_filename = "portfolio.zip"
"#,
    )?;

    let storage = LocalStorage::new(output_path.clone());
    let engine = SiteEngine::new(SitePipeline::new(storage, config));
    engine.run().await?;

    let index = std::fs::read_to_string(temp_dir.path().join(INDEX_PAGE))?;
    let zip_data = std::fs::read(temp_dir.path().join("portfolio.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;

    let mut bundled = String::new();
    archive.by_name(INDEX_PAGE)?.read_to_string(&mut bundled)?;
    assert_eq!(bundled, index);
    Ok(())
}

#[tokio::test]
async fn test_external_profile_replaces_embedded_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("public");
    let output_path = output_path.to_str().unwrap();

    let profile_toml = r#"
[personal]
name = "Ada Example"
tagline = "Systems & Tools"
location = "Lund, SE"
phone = "+46 700 000 000"
email = "ada@example.org"
linkedin = "https://www.linkedin.com/in/ada-example/"
thesis = "https://example.org/thesis"
cv_url = "https://example.org/cv.pdf"
image = "https://example.org/ada.jpg"

[about]
description = "Builds compilers."

[[education]]
degree = "MSc Computer Science"
institution = "Lund University"
period = "2018 – 2020"

[[skills]]
category = "Languages"
skills = ["Rust", "OCaml"]
"#;
    let profile_path = temp_dir.path().join("ada.toml");
    std::fs::write(&profile_path, profile_toml)?;
    let profile_path = profile_path.to_str().unwrap().replace('\\', "/");

    let config = config_for(
        output_path,
        &format!("\n[profile]\npath = \"{}\"\n", profile_path),
    )?;

    let engine = SiteEngine::new(SitePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));
    engine.run().await?;

    let html = std::fs::read_to_string(temp_dir.path().join("public").join(INDEX_PAGE))?;
    assert!(html.contains("<h1>Ada Example</h1>"));
    assert!(html.contains("Systems &amp; Tools"));
    assert!(html.contains("href=\"mailto:ada@example.org\""));
    assert!(html.contains("<li class=\"badge\">OCaml</li>"));
    assert!(!html.contains("education-detail"));
    assert!(!html.contains("Research Interests"));
    assert!(!html.contains("Fathima"));
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("never");
    let output_path = output_path.to_str().unwrap();
    let config = config_for(output_path, "")?;

    let engine = SiteEngine::new(SitePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));
    let site = engine.prepare().await?;

    assert_eq!(site.pages.len(), 1);
    assert!(site.page(INDEX_PAGE).is_some());
    assert!(!temp_dir.path().join("never").exists());
    Ok(())
}

#[test]
fn test_embedded_profile_is_valid() {
    let profile = Profile::embedded().unwrap();
    assert!(profile.validate().is_ok());
}
