use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::history::{HistoryConfig, HistoryManager, HistoryStats};

use super::error::ProfileError;
use super::profile::{ProfileSnapshot, ProfileState, UserProfile};
use super::store::ProfileStore;
use super::update::ProfileUpdate;

type SharedHistory = Arc<Mutex<HistoryManager<ProfileState>>>;

/// Profile editing with per-profile undo/redo.
///
/// Every edit records the profile's state in that profile's history (plus a
/// baseline the first time), and every successful undo, redo or jump writes
/// the restored profile back to the store. Each profile has its own history
/// lock, held for the whole load/modify/save sequence, so concurrent callers
/// never interleave on the same profile.
///
/// Histories live as long as the service. A profile's history is dropped only
/// by [`delete_profile`](Self::delete_profile); [`clear_history`](Self::clear_history)
/// empties it but keeps the entry. Each history is bounded by
/// `HistoryConfig::max_retention`, so memory grows with the number of
/// distinct profiles edited, not with the number of edits.
pub struct ProfileService<S> {
    store: S,
    config: HistoryConfig,
    histories: Mutex<HashMap<String, SharedHistory>>,
}

impl<S: ProfileStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, HistoryConfig::default())
    }

    pub fn with_config(store: S, config: HistoryConfig) -> Self {
        ProfileService {
            store,
            config,
            histories: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn create_profile(&self, profile: UserProfile) -> Result<(), ProfileError> {
        self.store.insert_profile(&profile)?;
        info!(profile_id = profile.id(), "profile created");
        Ok(())
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<UserProfile>, ProfileError> {
        self.store.get_profile(id)
    }

    /// Remove a profile along with its history.
    ///
    /// Runs under the profile's history lock, so an edit already in progress
    /// finishes first and later ones see the profile as missing.
    pub fn delete_profile(&self, id: &str) -> Result<bool, ProfileError> {
        let handle = self.history_for(id)?;
        let _history = lock(&handle)?;
        let removed = self.store.delete_profile(id)?;
        self.registry()?.remove(id);
        if removed {
            info!(profile_id = id, "profile deleted");
        }
        Ok(removed)
    }

    pub fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ProfileError> {
        self.edit(id, "update", |profile| profile.apply(update))
    }

    pub fn activate(&self, id: &str) -> Result<UserProfile, ProfileError> {
        self.edit(id, "activate", |profile| {
            profile.activate();
            Ok(())
        })
    }

    pub fn deactivate(&self, id: &str) -> Result<UserProfile, ProfileError> {
        self.edit(id, "deactivate", |profile| {
            profile.deactivate();
            Ok(())
        })
    }

    /// Revert the profile to its previous state. `Ok(false)` if there is none.
    pub fn undo(&self, id: &str) -> Result<bool, ProfileError> {
        self.navigate(id, "undo", |history, profile| history.undo(profile))
    }

    /// Re-apply an undone edit. `Ok(false)` if there is none.
    pub fn redo(&self, id: &str) -> Result<bool, ProfileError> {
        self.navigate(id, "redo", |history, profile| history.redo(profile))
    }

    /// Restore the profile to the state at `index` in its history.
    pub fn jump_to(&self, id: &str, index: usize) -> Result<bool, ProfileError> {
        self.navigate(id, "jump", |history, profile| {
            history.jump_to(index, profile)
        })
    }

    pub fn history(&self, id: &str) -> Result<Vec<ProfileSnapshot>, ProfileError> {
        self.inspect(id, HistoryManager::history, Vec::new)
    }

    pub fn clear_history(&self, id: &str) -> Result<(), ProfileError> {
        if let Some(handle) = self.existing_history(id)? {
            lock(&handle)?.clear();
            info!(profile_id = id, "profile history cleared");
        }
        Ok(())
    }

    pub fn can_undo(&self, id: &str) -> Result<bool, ProfileError> {
        self.inspect(id, HistoryManager::can_undo, || false)
    }

    pub fn can_redo(&self, id: &str) -> Result<bool, ProfileError> {
        self.inspect(id, HistoryManager::can_redo, || false)
    }

    pub fn stats(&self, id: &str) -> Result<HistoryStats, ProfileError> {
        self.inspect(id, HistoryManager::stats, || {
            HistoryManager::<ProfileState>::from_config(&self.config).stats()
        })
    }

    fn edit<F>(
        &self,
        id: &str,
        action: &'static str,
        change: F,
    ) -> Result<UserProfile, ProfileError>
    where
        F: FnOnce(&mut UserProfile) -> Result<(), ProfileError>,
    {
        // Only register a history for profiles that exist.
        self.load(id)?;
        let handle = self.history_for(id)?;
        let mut history = lock(&handle)?;
        let mut profile = self.load(id)?;

        if history.is_empty() {
            history.save_state(&profile);
            debug!(profile_id = id, "baseline profile state recorded");
        }

        change(&mut profile)?;
        self.store.save_profile(&profile)?;
        history.save_state(&profile);

        info!(
            profile_id = id,
            action,
            history_len = history.len(),
            "profile edited"
        );
        Ok(profile)
    }

    fn navigate<F>(&self, id: &str, action: &'static str, step: F) -> Result<bool, ProfileError>
    where
        F: FnOnce(
            &mut HistoryManager<ProfileState>,
            &mut UserProfile,
        ) -> Result<bool, ProfileError>,
    {
        let Some(handle) = self.existing_history(id)? else {
            self.load(id)?;
            return Ok(false);
        };
        let mut history = lock(&handle)?;
        let mut profile = self.load(id)?;
        let previous = history.current_index();

        if !step(&mut *history, &mut profile)? {
            debug!(profile_id = id, action, "nothing to restore");
            return Ok(false);
        }

        // The store still holds the state at `previous`; point the cursor back at it.
        if let Err(err) = self.store.save_profile(&profile) {
            if let Some(previous) = previous {
                history.jump_to(previous, &mut profile)?;
            }
            warn!(profile_id = id, action, error = %err, "restored profile not saved");
            return Err(err);
        }
        info!(
            profile_id = id,
            action,
            current_index = ?history.current_index(),
            "profile restored"
        );
        Ok(true)
    }

    fn inspect<R>(
        &self,
        id: &str,
        read: impl FnOnce(&HistoryManager<ProfileState>) -> R,
        empty: impl FnOnce() -> R,
    ) -> Result<R, ProfileError> {
        let Some(handle) = self.existing_history(id)? else {
            return Ok(empty());
        };
        let history = lock(&handle)?;
        Ok(read(&*history))
    }

    fn load(&self, id: &str) -> Result<UserProfile, ProfileError> {
        self.store
            .get_profile(id)?
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))
    }

    fn registry(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, SharedHistory>>, ProfileError> {
        self.histories
            .lock()
            .map_err(|_| ProfileError::LockPoisoned("history registry"))
    }

    fn history_for(&self, id: &str) -> Result<SharedHistory, ProfileError> {
        let mut registry = self.registry()?;
        let handle = registry
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(HistoryManager::from_config(&self.config))));
        Ok(Arc::clone(handle))
    }

    fn existing_history(&self, id: &str) -> Result<Option<SharedHistory>, ProfileError> {
        Ok(self.registry()?.get(id).cloned())
    }
}

fn lock(
    handle: &SharedHistory,
) -> Result<std::sync::MutexGuard<'_, HistoryManager<ProfileState>>, ProfileError> {
    handle
        .lock()
        .map_err(|_| ProfileError::LockPoisoned("profile history"))
}
