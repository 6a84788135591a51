use thiserror::Error;

/// Rejections raised by the activity registry.
///
/// Every variant is detected before the registry is mutated, so a rejected
/// call always leaves the registry in its last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("activity '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("activity '{activity}' references unknown predecessor '{predecessor}'; only previously declared activities may be used")]
    UnknownPredecessor {
        activity: String,
        predecessor: String,
    },

    #[error("activity '{name}' lists itself as a predecessor")]
    SelfReference { name: String },

    /// Negative, or large enough that the activity's finish time overflows.
    #[error("activity '{name}' has invalid duration {duration}")]
    InvalidDuration { name: String, duration: i64 },

    #[error("activity '{activity}' lists predecessor '{predecessor}' more than once")]
    DuplicatePredecessor {
        activity: String,
        predecessor: String,
    },

    #[error("activity name must not be empty")]
    EmptyName,

    #[error("unknown activity '{name}'")]
    UnknownActivity { name: String },
}

impl RegistryError {
    /// Short machine-readable tag, used by the HTTP layer and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::DuplicateName { .. } => "duplicate_name",
            RegistryError::UnknownPredecessor { .. } => "unknown_predecessor",
            RegistryError::SelfReference { .. } => "self_reference",
            RegistryError::InvalidDuration { .. } => "invalid_duration",
            RegistryError::DuplicatePredecessor { .. } => "duplicate_predecessor",
            RegistryError::EmptyName => "empty_name",
            RegistryError::UnknownActivity { .. } => "unknown_activity",
        }
    }
}
