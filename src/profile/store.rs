use super::error::ProfileError;
use super::profile::UserProfile;

/// Storage for user profiles. One record per profile ID.
pub trait ProfileStore: Send + Sync {
    /// Load a profile by ID. Returns None if not found.
    fn get_profile(&self, id: &str) -> Result<Option<UserProfile>, ProfileError>;

    /// Insert a new profile. Fails with `AlreadyExists` if the ID is taken.
    fn insert_profile(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Save (or overwrite) a profile.
    fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Delete a profile by ID. Returns true if one existed.
    fn delete_profile(&self, id: &str) -> Result<bool, ProfileError>;

    /// All stored profiles, ordered by ID.
    fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileError>;
}
