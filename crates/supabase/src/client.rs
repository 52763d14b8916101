use parking_lot::RwLock;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::SupabaseError;
use crate::models::Session;

/// Client for one Supabase project: PostgREST rows plus the auth endpoint.
pub struct SupabaseClient {
    client: Client,
    base_url: Arc<str>,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    auth_tx: watch::Sender<Option<Session>>,
}

impl SupabaseClient {
    /// Create a new client against a project URL.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(client, base_url, anon_key)
    }

    /// Create a client with a shared reqwest client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let (auth_tx, _) = watch::channel(None);
        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            anon_key: anon_key.into(),
            session: Arc::new(RwLock::new(None)),
            auth_tx,
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.base_url, path)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    pub(crate) fn session_slot(&self) -> &RwLock<Option<Session>> {
        &self.session
    }

    pub(crate) fn auth_tx(&self) -> &watch::Sender<Option<Session>> {
        &self.auth_tx
    }

    /// Bearer token for the next request: the signed-in user's access token
    /// while the session is live, the anonymous key otherwise.
    pub(crate) fn bearer(&self) -> String {
        self.session
            .read()
            .as_ref()
            .filter(|session| !session.is_expired())
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| self.anon_key.clone())
    }

    pub(crate) fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer())
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    pub(crate) async fn check_response(&self, response: reqwest::Response) -> crate::Result<()> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
