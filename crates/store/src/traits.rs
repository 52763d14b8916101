use async_trait::async_trait;
use model::{RecordKind, SortHint};
use serde_json::Value;
use supabase::Session;
use tokio::sync::watch;

use crate::error::Result;

/// List/insert/update/delete against the remote structured store.
///
/// Rows travel as JSON objects; the store assigns identifiers and creation
/// timestamps on insert. All four operations fail with a [`StoreError`]
/// carrying a human-readable message; callers treat it as opaque.
///
/// [`StoreError`]: crate::StoreError
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Fetch all records of one kind, optionally pre-sorted by the store.
    async fn list(&self, kind: RecordKind, order: Option<SortHint>) -> Result<Vec<Value>>;

    /// Insert a record; returns the stored row including `id` and
    /// `created_at`.
    async fn insert(&self, kind: RecordKind, fields: Value) -> Result<Value>;

    /// Partial field replacement by identifier.
    async fn update(&self, kind: RecordKind, id: i64, fields: Value) -> Result<()>;

    /// Remove a record by identifier.
    async fn delete(&self, kind: RecordKind, id: i64) -> Result<()>;
}

/// Access decision consumed by the admin panel and the route guard.
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// One-shot lookup of the current session.
    async fn current_session(&self) -> Result<Option<Session>>;

    /// Subscription that fires on login and logout.
    fn on_session_change(&self) -> watch::Receiver<Option<Session>>;
}
