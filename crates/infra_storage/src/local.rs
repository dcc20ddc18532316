//! Local filesystem blob storage

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use domain_claims::BlobStore;

/// Where attachment bytes land and how their paths are reported
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored files
    pub root_dir: PathBuf,
    /// Base of the locator returned for stored files
    pub public_base: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("uploads"),
            public_base: "/uploads".to_string(),
        }
    }
}

impl StorageConfig {
    /// Loads overrides from `CLAIMS_STORAGE_*` environment variables
    ///
    /// Recognizes `CLAIMS_STORAGE_ROOT_DIR` and `CLAIMS_STORAGE_PUBLIC_BASE`;
    /// unset variables keep the defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let source = config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS_STORAGE"))
            .build()?;

        let mut settings = Self::default();
        if let Ok(root_dir) = source.get::<String>("root_dir") {
            settings.root_dir = PathBuf::from(root_dir);
        }
        if let Ok(public_base) = source.get::<String>("public_base") {
            settings.public_base = public_base;
        }
        Ok(settings)
    }
}

/// Local filesystem implementation of the blob store port
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root_dir: PathBuf,
    public_base: String,
}

impl LocalBlobStore {
    /// Creates the store, ensuring the root directory exists
    pub async fn new(config: StorageConfig) -> Result<Self, PortError> {
        fs::create_dir_all(&config.root_dir).await.map_err(|e| {
            PortError::internal(format!(
                "failed to create storage directory {}: {}",
                config.root_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            root_dir: config.root_dir,
            public_base: config.public_base.trim_end_matches('/').to_string(),
        })
    }

    /// Rejects names that could escape the root directory
    fn validate_name(name: &str) -> Result<(), PortError> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name.contains("..")
        {
            return Err(PortError::validation(format!(
                "invalid storage name: '{name}'"
            )));
        }
        Ok(())
    }
}

impl DomainPort for LocalBlobStore {}

#[async_trait]
impl BlobStore for LocalBlobStore {
    #[instrument(skip_all, fields(name = %name, bytes = content.len()))]
    async fn write_bytes(&self, name: &str, content: &[u8]) -> Result<String, PortError> {
        Self::validate_name(name)?;

        let path = self.root_dir.join(name);
        fs::write(&path, content).await.map_err(|e| {
            PortError::internal(format!("failed to write {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "blob written");
        Ok(format!("{}/{}", self.public_base, name))
    }
}
