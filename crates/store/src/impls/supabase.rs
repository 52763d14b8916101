use async_trait::async_trait;
use model::{RecordKind, SortHint};
use serde_json::Value;
use std::sync::Arc;
use supabase::{Session, SupabaseClient};
use tokio::sync::watch;

use crate::error::Result;
use crate::traits::{RecordGateway, SessionGate};

/// Record gateway and session gate backed by a Supabase project.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<SupabaseClient> {
        &self.client
    }
}

#[async_trait]
impl RecordGateway for SupabaseStore {
    async fn list(&self, kind: RecordKind, order: Option<SortHint>) -> Result<Vec<Value>> {
        let order = order.map(|hint| (hint.column, hint.ascending));
        Ok(self.client.select(kind.table(), order).await?)
    }

    async fn insert(&self, kind: RecordKind, fields: Value) -> Result<Value> {
        Ok(self.client.insert(kind.table(), &fields).await?)
    }

    async fn update(&self, kind: RecordKind, id: i64, fields: Value) -> Result<()> {
        Ok(self.client.update(kind.table(), id, &fields).await?)
    }

    async fn delete(&self, kind: RecordKind, id: i64) -> Result<()> {
        Ok(self.client.delete(kind.table(), id).await?)
    }
}

#[async_trait]
impl SessionGate for SupabaseStore {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.client.session())
    }

    fn on_session_change(&self) -> watch::Receiver<Option<Session>> {
        self.client.on_auth_state_change()
    }
}
