mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./imgvault.toml",
        "~/.config/imgvault/config.toml",
        "/etc/imgvault/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.storage.blob_dir == config.storage.metadata_dir {
        anyhow::bail!("Blob and metadata directories must be distinct");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9000

[storage]
blob_dir = "/var/lib/imgvault/blobs"
metadata_dir = "/var/lib/imgvault/metadata"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.storage.blob_dir,
            std::path::PathBuf::from("/var/lib/imgvault/blobs")
        );
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 3000\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.storage.blob_dir,
            std::path::PathBuf::from("uploaded_images")
        );
        assert_eq!(
            config.storage.metadata_dir,
            std::path::PathBuf::from("image_metadata")
        );
    }

    #[test]
    fn test_rejects_port_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_rejects_shared_storage_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\nblob_dir = \"data\"\nmetadata_dir = \"data\"\n",
        )
        .unwrap();
        assert!(load_config(&path).is_err());
    }
}
