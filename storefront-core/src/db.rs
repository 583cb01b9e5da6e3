#![deny(missing_docs)]

//! In-process key/value store backing the controllers.

use crate::error::StorefrontError;
use log::{
    error,
    info,
};
use std::{
    collections::HashMap,
    sync::RwLock,
};

/// The database environment for handling primary database operations.
///
/// Records live for the lifetime of the process. Rocket manages a single
///
/// instance and hands it to every controller.
#[derive(Debug, Default)]
pub struct DatabaseEnvironment {
    env: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl DatabaseEnvironment {
    /// Opens an empty environment.
    pub fn open() -> Self {
        info!("excecuting store open");
        Default::default()
    }
    /// Write a key/value pair to the database. It is not possible to
    ///
    /// write with empty keys.
    pub fn write(&self, k: &[u8], v: &[u8]) -> Result<(), StorefrontError> {
        info!("excecuting store write");
        if k.is_empty() {
            error!("can't write empty key");
            return Err(StorefrontError::Storage(String::from("empty key")));
        }
        let mut env = self.env.write().map_err(|_| poisoned())?;
        env.insert(k.to_vec(), v.to_vec());
        Ok(())
    }
    /// Read key from the database. If it doesn't exist then
    ///
    /// an empty vector will be returned. Treat all empty vectors
    ///
    /// from database operations as failures.
    pub fn read(&self, k: &[u8]) -> Result<Vec<u8>, StorefrontError> {
        info!("excecuting store read");
        // don't try and read empty keys
        if k.is_empty() {
            error!("can't read empty key");
            return Err(StorefrontError::Storage(String::from("empty key")));
        }
        let env = self.env.read().map_err(|_| poisoned())?;
        let result = env.get(k).cloned().unwrap_or_default();
        if result.is_empty() {
            error!("failed to read key {:?} from db", k);
        }
        Ok(result)
    }
    /// Deletes a key/value pair from the database
    pub fn delete(&self, k: &[u8]) -> Result<(), StorefrontError> {
        info!("excecuting store delete");
        if k.is_empty() {
            error!("can't delete empty key");
            return Err(StorefrontError::Storage(String::from("empty key")));
        }
        let mut env = self.env.write().map_err(|_| poisoned())?;
        env.remove(k);
        Ok(())
    }
    /// Append an id to the comma separated list under `list_key`.
    ///
    /// The read and the write happen under one lock so concurrent
    ///
    /// creates can't drop each other's ids.
    pub fn append_index(&self, list_key: &str, id: &str) -> Result<(), StorefrontError> {
        if list_key.is_empty() || id.is_empty() {
            error!("can't index empty key");
            return Err(StorefrontError::Storage(String::from("empty key")));
        }
        let mut env = self.env.write().map_err(|_| poisoned())?;
        let list = env.entry(list_key.as_bytes().to_vec()).or_default();
        if !list.is_empty() {
            list.extend_from_slice(crate::INDEX_SEPARATOR.as_bytes());
        }
        list.extend_from_slice(id.as_bytes());
        Ok(())
    }
    /// Ids stored under `list_key` in insertion order.
    pub fn read_index(&self, list_key: &str) -> Result<Vec<String>, StorefrontError> {
        let r = self.read(list_key.as_bytes())?;
        if r.is_empty() {
            info!("index {} is empty", list_key);
            return Ok(Vec::new());
        }
        let ids = String::from_utf8_lossy(&r)
            .split(crate::INDEX_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Ok(ids)
    }
}

fn poisoned() -> StorefrontError {
    error!("store lock poisoned");
    StorefrontError::Storage(String::from("lock poisoned"))
}
