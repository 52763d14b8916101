use async_trait::async_trait;
use chrono::Utc;
use model::{RecordKind, SortHint};
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use supabase::Session;
use tokio::sync::watch;

use crate::error::{Result, StoreError};
use crate::traits::{RecordGateway, SessionGate};

/// In-memory gateway used by tests and offline development.
///
/// Mirrors the remote store's contract: sequential identifiers and creation
/// timestamps are assigned on insert, never by the caller. The fail switch
/// turns every call into a service error for exercising failure paths.
pub struct MemoryStore {
    tables: RwLock<HashMap<RecordKind, Vec<Value>>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    auth_tx: watch::Sender<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (auth_tx, _) = watch::channel(None);
        Self {
            tables: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
            failing: AtomicBool::new(false),
            auth_tx,
        }
    }

    /// Make every following call fail with a service error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Install or clear the session reported by the gate.
    pub fn set_session(&self, session: Option<Session>) {
        let _ = self.auth_tx.send(session);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Service("record store unavailable".to_string()));
        }
        Ok(())
    }

    fn row_id(row: &Value) -> Option<i64> {
        row.get("id").and_then(Value::as_i64)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordGateway for MemoryStore {
    async fn list(&self, kind: RecordKind, order: Option<SortHint>) -> Result<Vec<Value>> {
        self.check_available()?;
        let mut rows = self
            .tables
            .read()
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        if let Some(hint) = order {
            rows.sort_by(|a, b| {
                let a = a.get(hint.column).and_then(Value::as_str).unwrap_or_default();
                let b = b.get(hint.column).and_then(Value::as_str).unwrap_or_default();
                let ordering = a.cmp(b);
                if hint.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, kind: RecordKind, fields: Value) -> Result<Value> {
        self.check_available()?;
        let mut row = fields;
        let Value::Object(map) = &mut row else {
            return Err(StoreError::Service("insert expects a JSON object".to_string()));
        };

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        map.insert("id".to_string(), json!(id));
        map.insert("created_at".to_string(), json!(Utc::now().to_rfc3339()));

        self.tables
            .write()
            .entry(kind)
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(&self, kind: RecordKind, id: i64, fields: Value) -> Result<()> {
        self.check_available()?;
        let mut tables = self.tables.write();
        let row = tables
            .get_mut(&kind)
            .and_then(|rows| rows.iter_mut().find(|row| Self::row_id(row) == Some(id)))
            .ok_or_else(|| StoreError::NotFound(format!("{} #{}", kind, id)))?;

        if let (Value::Object(target), Value::Object(patch)) = (row, fields) {
            for (field, value) in patch {
                target.insert(field, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, kind: RecordKind, id: i64) -> Result<()> {
        self.check_available()?;
        let mut tables = self.tables.write();
        let rows = tables
            .get_mut(&kind)
            .ok_or_else(|| StoreError::NotFound(format!("{} #{}", kind, id)))?;

        let before = rows.len();
        rows.retain(|row| Self::row_id(row) != Some(id));
        if rows.len() == before {
            return Err(StoreError::NotFound(format!("{} #{}", kind, id)));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionGate for MemoryStore {
    async fn current_session(&self) -> Result<Option<Session>> {
        self.check_available()?;
        Ok(self.auth_tx.borrow().clone())
    }

    fn on_session_change(&self) -> watch::Receiver<Option<Session>> {
        self.auth_tx.subscribe()
    }
}
