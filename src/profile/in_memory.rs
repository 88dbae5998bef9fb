use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::error::ProfileError;
use super::profile::UserProfile;
use super::store::ProfileStore;

/// In-memory profile store backed by `Arc<RwLock<BTreeMap>>`.
///
/// Profiles are kept as encoded bytes so callers never share state with the
/// store. Clone-friendly (cloning shares the same underlying storage).
#[derive(Clone)]
pub struct InMemoryProfileStore {
    storage: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    fn encode(profile: &UserProfile) -> Result<Vec<u8>, ProfileError> {
        bitcode::serialize(profile)
            .map_err(|e| ProfileError::Storage(format!("profile serialize: {e}")))
    }

    fn decode(bytes: &[u8]) -> Result<UserProfile, ProfileError> {
        bitcode::deserialize(bytes)
            .map_err(|e| ProfileError::Storage(format!("profile deserialize: {e}")))
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get_profile(&self, id: &str) -> Result<Option<UserProfile>, ProfileError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| ProfileError::LockPoisoned("profile read"))?;
        storage.get(id).map(|bytes| Self::decode(bytes)).transpose()
    }

    fn insert_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let bytes = Self::encode(profile)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| ProfileError::LockPoisoned("profile write"))?;
        if storage.contains_key(profile.id()) {
            return Err(ProfileError::AlreadyExists(profile.id().to_string()));
        }
        storage.insert(profile.id().to_string(), bytes);
        Ok(())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let bytes = Self::encode(profile)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| ProfileError::LockPoisoned("profile write"))?;
        storage.insert(profile.id().to_string(), bytes);
        Ok(())
    }

    fn delete_profile(&self, id: &str) -> Result<bool, ProfileError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| ProfileError::LockPoisoned("profile write"))?;
        Ok(storage.remove(id).is_some())
    }

    fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| ProfileError::LockPoisoned("profile read"))?;
        storage.values().map(|bytes| Self::decode(bytes)).collect()
    }
}
