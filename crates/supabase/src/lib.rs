mod auth;
mod client;
mod error;
mod models;
mod rows;

pub use client::SupabaseClient;
pub use error::SupabaseError;
pub use models::{Session, User};

pub type Result<T> = std::result::Result<T, SupabaseError>;
