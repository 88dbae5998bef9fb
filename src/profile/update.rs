use chrono::NaiveDate;

use super::profile::ProfileState;

/// A partial, per-field profile edit.
///
/// Unset fields are left alone. Optional fields can be set or explicitly
/// cleared with the `clear_*` methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    name: Option<String>,
    email: Option<String>,
    birth_date: Option<Option<NaiveDate>>,
    phone: Option<Option<String>>,
    address: Option<Option<String>>,
    active: Option<bool>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(Some(birth_date));
        self
    }

    pub fn clear_birth_date(mut self) -> Self {
        self.birth_date = Some(None);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(Some(phone.into()));
        self
    }

    pub fn clear_phone(mut self) -> Self {
        self.phone = Some(None);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(Some(address.into()));
        self
    }

    pub fn clear_address(mut self) -> Self {
        self.address = Some(None);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, state: &mut ProfileState) {
        if let Some(name) = self.name {
            state.name = name;
        }
        if let Some(email) = self.email {
            state.email = email;
        }
        if let Some(birth_date) = self.birth_date {
            state.birth_date = birth_date;
        }
        if let Some(phone) = self.phone {
            state.phone = phone;
        }
        if let Some(address) = self.address {
            state.address = address;
        }
        if let Some(active) = self.active {
            state.active = active;
        }
    }
}
