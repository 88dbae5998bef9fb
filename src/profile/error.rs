use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    NotFound(String),
    AlreadyExists(String),
    Validation {
        field: &'static str,
        message: String,
    },
    LockPoisoned(&'static str),
    Storage(String),
}

impl ProfileError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ProfileError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound(id) => write!(f, "profile {} not found", id),
            ProfileError::AlreadyExists(id) => write!(f, "profile {} already exists", id),
            ProfileError::Validation { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            ProfileError::LockPoisoned(operation) => {
                write!(f, "profile lock poisoned during {}", operation)
            }
            ProfileError::Storage(message) => write!(f, "storage error: {}", message),
        }
    }
}

impl std::error::Error for ProfileError {}
