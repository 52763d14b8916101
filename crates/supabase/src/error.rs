use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Supabase API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),
}
