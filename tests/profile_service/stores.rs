use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use profile_history::{InMemoryProfileStore, ProfileError, ProfileStore, UserProfile};

/// Store whose writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryProfileStore,
    fail_saves: AtomicBool,
}

impl FlakyStore {
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl ProfileStore for FlakyStore {
    fn get_profile(&self, id: &str) -> Result<Option<UserProfile>, ProfileError> {
        self.inner.get_profile(id)
    }

    fn insert_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        self.inner.insert_profile(profile)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ProfileError::Storage("down".into()));
        }
        self.inner.save_profile(profile)
    }

    fn delete_profile(&self, id: &str) -> Result<bool, ProfileError> {
        self.inner.delete_profile(id)
    }

    fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileError> {
        self.inner.list_profiles()
    }
}

/// Store that pauses the first `save_profile` until released.
pub struct GatedStore {
    inner: InMemoryProfileStore,
    entered: Mutex<Option<Sender<()>>>,
    release: Mutex<Option<Receiver<()>>>,
}

impl GatedStore {
    /// Returns the store, a receiver signalled when the save is paused, and
    /// a sender that lets it continue.
    pub fn new() -> (Self, Receiver<()>, Sender<()>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let store = GatedStore {
            inner: InMemoryProfileStore::new(),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
        };
        (store, entered_rx, release_tx)
    }
}

impl ProfileStore for GatedStore {
    fn get_profile(&self, id: &str) -> Result<Option<UserProfile>, ProfileError> {
        self.inner.get_profile(id)
    }

    fn insert_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        self.inner.insert_profile(profile)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let entered = self.entered.lock().unwrap().take();
        if let Some(entered) = entered {
            entered.send(()).unwrap();
            let release = self.release.lock().unwrap().take();
            if let Some(release) = release {
                release.recv().unwrap();
            }
        }
        self.inner.save_profile(profile)
    }

    fn delete_profile(&self, id: &str) -> Result<bool, ProfileError> {
        self.inner.delete_profile(id)
    }

    fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileError> {
        self.inner.list_profiles()
    }
}
