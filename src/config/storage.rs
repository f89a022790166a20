//! Client storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which `ClientStorage` adapter backs the per-client records
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the file backend
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File
            && self
                .data_dir
                .as_ref()
                .map_or(true, |dir| dir.as_os_str().is_empty())
        {
            return Err(ValidationError::MissingDataDir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_is_default() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_backend_needs_data_dir() {
        let mut config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingDataDir)
        ));

        config.data_dir = Some(PathBuf::from("/var/lib/studio-desk"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_deserializes_lowercase() {
        let config: StorageConfig =
            serde_json::from_str(r#"{"backend":"file","data_dir":"/tmp/x"}"#).unwrap();
        assert_eq!(config.backend, StorageBackend::File);
    }
}
