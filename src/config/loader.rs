use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, PetalpressError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["petalpress.toml", "petalpress.yml", "petalpress.yaml"];

/// Load site configuration.
///
/// When no file is given, the working directory is searched for the default
/// file names; with nothing found the built-in defaults are used.
pub fn load_config(config_file: Option<&Path>) -> BoxResult<Config> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file()?,
    };

    let config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in the working directory
fn find_default_config_file() -> BoxResult<Option<PathBuf>> {
    for &config_file in &CONFIG_FILES {
        let config_path = PathBuf::from(config_file);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }
    Ok(None)
}

/// Parse a configuration file based on its extension
fn parse_config_file(config_path: &Path) -> BoxResult<Config> {
    if !config_path.exists() {
        return Err(PetalpressError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| PetalpressError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let config = match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| PetalpressError::Config(format!(
            "Failed to parse {}: {}", config_path.display(), e
        )))?,
        "yml" | "yaml" | "" => serde_yaml::from_str(&content).map_err(|e| PetalpressError::Config(format!(
            "Failed to parse {}: {}", config_path.display(), e
        )))?,
        other => {
            return Err(PetalpressError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/petalpress.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_config_parses() {
        let dir = std::env::temp_dir().join("petalpress-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("petalpress.toml");
        fs::write(
            &path,
            r#"
title = "My Blog"
base_url = "https://blog.example.com"

[store]
project_id = "abc123"
dataset = "production"

[toc]
min_level = 2
max_level = 4
min_h2_entries = 2
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.store.project_id, "abc123");
        assert_eq!(config.toc.max_level, 4);
        assert_eq!(config.post_url("hello"), "https://blog.example.com/hello");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_toc_section_parses_with_defaults() {
        let dir = std::env::temp_dir().join("petalpress-config-partial-toc");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("petalpress.toml");
        fs::write(
            &path,
            r#"
[store]
project_id = "abc123"

[toc]
max_level = 4
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.toc.min_level, 2);
        assert_eq!(config.toc.max_level, 4);
        assert_eq!(config.toc.min_h2_entries, 2);

        fs::remove_file(&path).ok();
    }
}
