use std::fs;
use std::path::PathBuf;
use log::{info, warn, error};

use crate::assets::CdnResolver;
use crate::cli::types::Commands;
use crate::config;
use crate::content::StoreClient;
use crate::site;

/// Handle the render command
pub async fn handle_render_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Render { slug, drafts, output } = command {
        let config = match config::load_config(config_file.map(PathBuf::as_path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        let client = StoreClient::new(&config.store);
        let resolver = CdnResolver::new(&config.store.project_id, &config.store.dataset);

        let html = match client.fetch_post(slug, *drafts).await {
            Ok(Some(post)) => {
                info!("Rendering '{}'", post.title);
                site::render_post_page(&config, &post, &resolver)
            }
            Ok(None) => {
                // Absence is a page of its own, not a hard failure
                warn!("No post found for slug '{}'", slug);
                site::render_not_found_page(&config)
            }
            Err(e) => {
                error!("Failed to fetch post '{}': {}", slug, e);
                return;
            }
        };

        match output {
            Some(path) => {
                if let Err(e) = fs::write(path, html) {
                    error!("Failed to write {}: {}", path.display(), e);
                } else {
                    info!("Wrote {}", path.display());
                }
            }
            None => print!("{}", html),
        }
    }
}
