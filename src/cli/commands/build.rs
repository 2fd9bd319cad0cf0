use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn, error, LevelFilter};

use crate::assets::CdnResolver;
use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config;
use crate::content::StoreClient;
use crate::site;

/// Handle the build command
pub async fn handle_build_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Build { destination, drafts, quiet, verbose } = command {
        // Set log level based on command line options
        if *verbose {
            set_log_level(LevelFilter::Debug);
        } else if *quiet {
            set_log_level(LevelFilter::Error);
        }

        let mut config = match config::load_config(config_file.map(PathBuf::as_path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        // Command line destination takes precedence
        if let Some(dest) = destination {
            config.destination = dest.clone();
        }

        let client = StoreClient::new(&config.store);
        let resolver = CdnResolver::new(&config.store.project_id, &config.store.dataset);

        info!("Fetching post list...");
        let summaries = match client.fetch_post_summaries().await {
            Ok(summaries) => summaries,
            Err(e) => {
                error!("Failed to fetch post list: {}", e);
                return;
            }
        };
        info!("Found {} posts", summaries.len());

        let mut built = 0usize;
        for summary in &summaries {
            let slug = &summary.slug.current;
            match client.fetch_post(slug, *drafts).await {
                Ok(Some(post)) => {
                    let html = site::render_post_page(&config, &post, &resolver);
                    if let Err(e) = write_page(&config.destination, slug, &html) {
                        error!("Failed to write page for '{}': {}", slug, e);
                        continue;
                    }
                    built += 1;
                }
                Ok(None) => warn!("Post '{}' vanished between listing and fetch", slug),
                Err(e) => error!("Failed to fetch post '{}': {}", slug, e),
            }
        }

        let sitemap = site::render_sitemap(&config, &summaries);
        if let Err(e) = fs::create_dir_all(&config.destination)
            .and_then(|_| fs::write(config.destination.join("sitemap.xml"), sitemap))
        {
            error!("Failed to write sitemap: {}", e);
        }

        info!(
            "Built {} of {} posts into {}",
            built,
            summaries.len(),
            config.destination.display()
        );
    }
}

fn write_page(destination: &Path, slug: &str, html: &str) -> std::io::Result<()> {
    let dir = destination.join(slug);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("index.html"), html)
}
