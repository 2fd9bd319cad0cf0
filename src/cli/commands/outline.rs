use std::path::PathBuf;
use log::{info, error};

use crate::cli::types::Commands;
use crate::config;
use crate::content::StoreClient;
use crate::toc::build_outline;

/// Handle the outline command
pub async fn handle_outline_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Outline { slug, drafts } = command {
        let config = match config::load_config(config_file.map(PathBuf::as_path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        let client = StoreClient::new(&config.store);
        let post = match client.fetch_post(slug, *drafts).await {
            Ok(Some(post)) => post,
            Ok(None) => {
                error!("No post found for slug '{}'", slug);
                return;
            }
            Err(e) => {
                error!("Failed to fetch post '{}': {}", slug, e);
                return;
            }
        };

        let doc = post.document();
        let outline = build_outline(&doc, &config.toc);

        if outline.visible_entries().is_empty() {
            info!("'{}' has no headings in the configured range", post.title);
            return;
        }
        if !outline.should_display() {
            info!("Outline is below the display threshold and would be suppressed on the page");
        }

        print!("{}", outline.to_markdown());
    }
}
