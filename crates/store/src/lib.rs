mod error;
mod impls;
mod traits;

pub use error::{Result, StoreError};
pub use impls::{MemoryStore, SupabaseStore};
pub use traits::{RecordGateway, SessionGate};
