use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::{Snapshot, Snapshottable};

use super::error::ProfileError;
use super::update::ProfileUpdate;

/// The editable, history-tracked fields of a user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: bool,
}

impl ProfileState {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::validation("name", "must not be blank"));
        }
        if self.email.trim().is_empty() {
            return Err(ProfileError::validation("email", "must not be blank"));
        }
        if !self.email.contains('@') {
            return Err(ProfileError::validation("email", "must contain '@'"));
        }
        Ok(())
    }
}

pub type ProfileSnapshot = Snapshot<ProfileState>;

impl Snapshot<ProfileState> {
    pub fn name(&self) -> &str {
        &self.state().name
    }

    pub fn email(&self) -> &str {
        &self.state().email
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.state().birth_date
    }

    pub fn phone(&self) -> Option<&str> {
        self.state().phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.state().address.as_deref()
    }

    pub fn active(&self) -> bool {
        self.state().active
    }
}

impl fmt::Display for Snapshot<ProfileState> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProfileSnapshot({}, {}, {})",
            self.name(),
            self.email(),
            self.timestamp().format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// A user profile whose edits can be undone and redone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: String,
    state: ProfileState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an active profile. Name and email are validated.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let state = ProfileState {
            name: name.into(),
            email: email.into(),
            birth_date: None,
            phone: None,
            address: None,
            active: true,
        };
        state.validate()?;
        let now = Utc::now();
        Ok(UserProfile {
            id: id.into(),
            state,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn email(&self) -> &str {
        &self.state.email
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.state.birth_date
    }

    pub fn phone(&self) -> Option<&str> {
        self.state.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.state.address.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a partial update. Nothing changes if the result would be invalid.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), ProfileError> {
        let mut next = self.state.clone();
        update.apply_to(&mut next);
        next.validate()?;
        self.state = next;
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.state.active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.state.active = false;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Snapshottable for UserProfile {
    type State = ProfileState;
    type RestoreError = ProfileError;

    fn create_snapshot(&self) -> ProfileSnapshot {
        Snapshot::new(self.state.clone())
    }

    fn restore_from_snapshot(&mut self, snapshot: &ProfileSnapshot) -> Result<(), ProfileError> {
        snapshot.state().validate()?;
        self.state = snapshot.state().clone();
        self.touch();
        Ok(())
    }
}
