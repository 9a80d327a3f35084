use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the raw image blobs.
    #[serde(default = "default_blob_dir")]
    pub blob_dir: PathBuf,

    /// Directory holding the per-image metadata documents.
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: PathBuf,
}

fn default_blob_dir() -> PathBuf {
    PathBuf::from("uploaded_images")
}
fn default_metadata_dir() -> PathBuf {
    PathBuf::from("image_metadata")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            blob_dir: default_blob_dir(),
            metadata_dir: default_metadata_dir(),
        }
    }
}
