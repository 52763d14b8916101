use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Supabase error: {0}")]
    Supabase(#[from] supabase::SupabaseError),

    #[error("Record store error: {0}")]
    Service(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
