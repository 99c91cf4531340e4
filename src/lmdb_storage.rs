use std::fs;
use std::path::{Path, PathBuf};

use lmdb::{Database, DatabaseFlags, Environment, Error as LmdbError, Transaction, WriteFlags};
use log::{debug, info, warn};

use crate::app_response::AppResponse;
use crate::storage::ContentStorage;

const CONTENT_DB: &str = "content";

/// LMDB-backed [`ContentStorage`].
///
/// The environment lives in the directory `<name>.lmdb`. Every write runs in
/// its own read-write transaction and is committed before returning.
pub struct LmdbStorage {
    env: Option<Environment>,
    db: Database,
    path: PathBuf,
}

impl LmdbStorage {
    pub const DEFAULT_MAP_SIZE: usize = 10 * 1024 * 1024;

    pub fn init(name: &str) -> Result<Self, AppResponse> {
        Self::init_with_map_size(name, Self::DEFAULT_MAP_SIZE)
    }

    pub fn init_with_map_size(name: &str, map_size: usize) -> Result<Self, AppResponse> {
        if name.trim().is_empty() {
            return Err(AppResponse::BadRequest("Storage name cannot be empty".to_string()));
        }

        let path = PathBuf::from(format!("{name}.lmdb"));
        fs::create_dir_all(&path)?;

        let env = Environment::new()
            .set_max_dbs(1)
            .set_map_size(map_size)
            .open(&path)?;
        let db = env.create_db(Some(CONTENT_DB), DatabaseFlags::empty())?;

        info!("LMDB storage opened at {}", path.display());
        Ok(Self {
            env: Some(env),
            db,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn env(&self) -> Result<&Environment, AppResponse> {
        self.env
            .as_ref()
            .ok_or_else(|| AppResponse::DatabaseError("Storage is closed".to_string()))
    }

    /// Flushes to disk and releases the environment. Later calls fail with
    /// `DatabaseError`.
    pub fn close(&mut self) -> Result<(), AppResponse> {
        if let Some(env) = self.env.take() {
            env.sync(true)?;
            info!("LMDB storage at {} closed", self.path.display());
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.env.is_none()
    }
}

impl ContentStorage for LmdbStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppResponse> {
        let env = self.env()?;
        let txn = env.begin_ro_txn()?;
        let value = match txn.get(self.db, &key) {
            Ok(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| {
                    AppResponse::SerializationError(format!("Stored value is not UTF-8: {e}"))
                })?;
                Some(text.to_owned())
            }
            Err(LmdbError::NotFound) => None,
            Err(e) => return Err(e.into()),
        };
        txn.commit()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppResponse> {
        let env = self.env()?;
        let mut txn = env.begin_rw_txn()?;
        txn.put(self.db, &key, &value, WriteFlags::empty())?;
        txn.commit()?;
        debug!("Wrote {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, AppResponse> {
        let env = self.env()?;
        let mut txn = env.begin_rw_txn()?;
        let existed = match txn.del(self.db, &key, None) {
            Ok(()) => true,
            Err(LmdbError::NotFound) => false,
            Err(e) => return Err(e.into()),
        };
        txn.commit()?;
        Ok(existed)
    }
}

impl Drop for LmdbStorage {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close LMDB storage: {e}");
        }
    }
}
