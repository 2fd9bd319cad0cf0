use std::path::PathBuf;
use log::error;

use crate::cli::types::Commands;
use crate::config;
use crate::content::StoreClient;
use crate::tags::suggest_tags;

/// Handle the tags command
pub async fn handle_tags_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Tags { slug, drafts } = command {
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

        for tag in suggest_tags(&post.document()) {
            println!("{}", tag);
        }
    }
}
