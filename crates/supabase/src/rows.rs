use serde_json::Value;

use crate::client::SupabaseClient;
use crate::error::SupabaseError;

impl SupabaseClient {
    /// Fetch all rows of a table, optionally pre-sorted by the store.
    /// GET /rest/v1/{table}?select=*&order={column}.{asc|desc}
    pub async fn select(
        &self,
        table: &str,
        order: Option<(&str, bool)>,
    ) -> crate::Result<Vec<Value>> {
        let url = self.rest_url(&format!("/{}", table));
        let mut request = self
            .authed(self.client().get(&url))
            .query(&[("select", "*")]);

        if let Some((column, ascending)) = order {
            let direction = if ascending { "asc" } else { "desc" };
            request = request.query(&[("order", format!("{}.{}", column, direction).as_str())]);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Insert one row; the server assigns `id` and `created_at` and returns
    /// the stored representation.
    /// POST /rest/v1/{table}
    pub async fn insert(&self, table: &str, row: &Value) -> crate::Result<Value> {
        let url = self.rest_url(&format!("/{}", table));
        let response = self
            .authed(self.client().post(&url))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let mut rows: Vec<Value> = self.handle_response(response).await?;
        if rows.is_empty() {
            return Err(SupabaseError::Api {
                status_code: 500,
                message: "insert returned no representation".to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    /// Partial field replacement of one row by id.
    /// PATCH /rest/v1/{table}?id=eq.{id}
    pub async fn update(&self, table: &str, id: i64, row: &Value) -> crate::Result<()> {
        let url = self.rest_url(&format!("/{}", table));
        let response = self
            .authed(self.client().patch(&url))
            .query(&[("id", format!("eq.{}", id).as_str())])
            .json(row)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Delete one row by id.
    /// DELETE /rest/v1/{table}?id=eq.{id}
    pub async fn delete(&self, table: &str, id: i64) -> crate::Result<()> {
        let url = self.rest_url(&format!("/{}", table));
        let response = self
            .authed(self.client().delete(&url))
            .query(&[("id", format!("eq.{}", id).as_str())])
            .send()
            .await?;
        self.check_response(response).await
    }
}
