use clap::Parser;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{CliConfig, LocalStorage, SiteConfig, SiteEngine, SitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-site");
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match SiteConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => SiteConfig::default(),
    };

    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &cli);

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);
    let engine = SiteEngine::new(pipeline);

    let outcome = if cli.dry_run {
        engine.prepare().await.map(|site| {
            println!("🔍 Dry run: nothing written.");
            for page in &site.pages {
                println!("  would write {} ({} bytes)", page.path, page.contents.len());
            }
            if let Some(archive) = engine.pipeline().config().archive_filename() {
                println!("  would bundle {}", archive);
            }
        })
    } else {
        engine.run().await.map(|output_path| {
            println!("✅ Site built successfully!");
            println!("📁 Output saved to: {}", output_path);
        })
    };

    if let Err(e) = outcome {
        tracing::error!(
            "Build failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, cli: &CliConfig) {
    println!("📋 Build Summary:");
    println!(
        "  Profile: {}",
        config.profile_path().unwrap_or("(embedded)")
    );
    println!("  Output: {}", config.output_path());
    println!("  Scroll offset: {}px", config.scroll_offset());
    if let Some(archive) = config.archive_filename() {
        println!("  Archive: {}", archive);
    }
    if cli.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
