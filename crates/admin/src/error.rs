use thiserror::Error;

/// Errors surfaced by the admin panel.
///
/// Validation variants are caught before any gateway call and reported
/// inline on the form; store errors are surfaced once per operation and
/// never retried automatically.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("missing required field: {field}")]
    Validation { field: String },

    #[error("unknown resource category: {0}")]
    UnknownCategory(String),

    #[error("field not accepted for this record kind: {0}")]
    UnknownField(String),

    #[error("no form is open")]
    NoOpenForm,

    #[error("a submission is already in flight")]
    SubmitInFlight,

    #[error("not signed in")]
    NotAuthenticated,

    #[error("record store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type AdminResult<T> = std::result::Result<T, AdminError>;

impl AdminError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// True for errors reported inline on the form rather than surfaced as
    /// a submission failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::UnknownCategory(_) | Self::UnknownField(_)
        )
    }
}
