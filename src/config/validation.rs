use crate::config::types::Config;
use crate::utils::error::{BoxResult, PetalpressError};

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    if config.store.dataset.is_empty() {
        return Err(PetalpressError::Config(
            "store.dataset must not be empty".to_string()
        ).into());
    }

    let toc = &config.toc;
    if toc.min_level < 1 || toc.max_level > 4 {
        return Err(PetalpressError::Config(format!(
            "toc levels must stay within 1..=4, got {}..={}", toc.min_level, toc.max_level
        )).into());
    }
    if toc.min_level > toc.max_level {
        return Err(PetalpressError::Config(format!(
            "toc.min_level ({}) must not exceed toc.max_level ({})",
            toc.min_level, toc.max_level
        )).into());
    }

    if config.base_url.is_empty() {
        return Err(PetalpressError::Config(
            "base_url must not be empty".to_string()
        ).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_inverted_toc_range_is_rejected() {
        let mut config = Config::default();
        config.toc.min_level = 3;
        config.toc.max_level = 2;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_out_of_range_toc_level_is_rejected() {
        let mut config = Config::default();
        config.toc.max_level = 6;
        assert!(validate_config(&config).is_err());
    }
}
