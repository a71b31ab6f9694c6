use anyhow::Result;
use cloud_price_calculator::config::{self, Config};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Cache TTL: {}s", cfg.cache.ttl_seconds);
    println!("  CORS Origins: {}", cfg.cors.allowed_origins.join(", "));
    println!(
        "  Catalog API Key: {}",
        if cfg.catalog.has_api_key() { "configured" } else { "not configured" }
    );

    info!("Configuration validation successful");
    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    if sanitized.catalog.has_api_key() {
        sanitized.catalog.api_key = mask_api_key(&sanitized.catalog.api_key);
    }
    sanitized
}

/// Mask an API key for safe display
///
/// Shows first 7 and last 4 characters
/// Example: "AIzaSyA1234567890abcdef" -> "AIzaSyA...cdef"
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 11 {
        // Too short to mask meaningfully
        return "***".to_string();
    }

    let prefix: String = chars[..7].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("AIzaSyA1234567890abcdef"), "AIzaSyA...cdef");
        assert_eq!(mask_api_key("short"), "***");
    }

    #[test]
    fn test_sanitize_secrets_masks_catalog_key() {
        let mut cfg = Config::default();
        cfg.catalog.api_key = "AIzaSyA1234567890abcdef".to_string();

        let sanitized = sanitize_secrets(&cfg);
        assert_eq!(sanitized.catalog.api_key, "AIzaSyA...cdef");
        assert_eq!(cfg.catalog.api_key, "AIzaSyA1234567890abcdef");
    }

    #[test]
    fn test_sanitize_secrets_leaves_empty_key() {
        let sanitized = sanitize_secrets(&Config::default());
        assert_eq!(sanitized.catalog.api_key, "");
    }
}
