use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::lmdb_storage::LmdbStorage;

/// Key the storefront has always used for its content blob.
pub const DEFAULT_STORAGE_KEY: &str = "cms_content";

/// Settings for opening a [`crate::content_store::ContentStore`].
///
/// Every field is optional in JSON form; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Fixed key the whole document is stored under.
    pub storage_key: String,
    /// LMDB base path; the environment is `<db_path>.lmdb`.
    pub db_path: String,
    /// LMDB map size in bytes.
    pub map_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: "hvac_cms".to_string(),
            map_size: LmdbStorage::DEFAULT_MAP_SIZE,
        }
    }
}

impl StoreConfig {
    /// Config with default settings and the given LMDB path.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Parses `input` as a JSON config object, or treats it as a bare
    /// database path when it is not JSON.
    pub fn parse(input: &str) -> Result<Self, AppResponse> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppResponse::BadRequest("Empty store configuration".to_string()));
        }
        if trimmed.starts_with('{') {
            let config: StoreConfig = serde_json::from_str(trimmed)?;
            config.validate()?;
            return Ok(config);
        }
        Ok(Self::with_db_path(trimmed))
    }

    pub fn validate(&self) -> Result<(), AppResponse> {
        if self.storage_key.is_empty() {
            return Err(AppResponse::ValidationError("storageKey cannot be empty".to_string()));
        }
        if self.db_path.trim().is_empty() {
            return Err(AppResponse::ValidationError("dbPath cannot be empty".to_string()));
        }
        if self.map_size == 0 {
            return Err(AppResponse::ValidationError("mapSize must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_becomes_db_path() {
        let config = StoreConfig::parse("storefront").unwrap();
        assert_eq!(config.db_path, "storefront");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = StoreConfig::parse(r#"{"dbPath":"admin","storageKey":"cms_v2"}"#).unwrap();
        assert_eq!(config.db_path, "admin");
        assert_eq!(config.storage_key, "cms_v2");
        assert_eq!(config.map_size, LmdbStorage::DEFAULT_MAP_SIZE);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(matches!(StoreConfig::parse(""), Err(AppResponse::BadRequest(_))));
        assert!(matches!(
            StoreConfig::parse(r#"{"storageKey":""}"#),
            Err(AppResponse::ValidationError(_))
        ));
        assert!(matches!(
            StoreConfig::parse(r#"{"mapSize":"big"}"#),
            Err(AppResponse::SerializationError(_))
        ));
    }
}
