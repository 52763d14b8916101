use reqwest::StatusCode;
use tokio::sync::watch;

use crate::client::SupabaseClient;
use crate::error::SupabaseError;
use crate::models::Session;

impl SupabaseClient {
    /// Sign in with email and password.
    /// POST /auth/v1/token?grant_type=password
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> crate::Result<Session> {
        let url = self.auth_url("/token");
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .client()
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", self.anon_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(SupabaseError::Auth(
                "Invalid login credentials".to_string(),
            ));
        }

        let session: Session = self.handle_response(response).await?;
        *self.session_slot().write() = Some(session.clone());
        let _ = self.auth_tx().send(Some(session.clone()));
        tracing::debug!("signed in as {}", session.user.email);
        Ok(session)
    }

    /// Sign out and drop the local session.
    /// POST /auth/v1/logout
    pub async fn sign_out(&self) -> crate::Result<()> {
        let url = self.auth_url("/logout");
        let token = self.bearer();

        // Drop the local session first; the panel is signed out even if the
        // revocation request fails.
        *self.session_slot().write() = None;
        let _ = self.auth_tx().send(None);

        let response = self
            .client()
            .post(&url)
            .header("apikey", self.anon_key())
            .bearer_auth(token)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Current session, if signed in and unexpired.
    pub fn session(&self) -> Option<Session> {
        self.session_slot()
            .read()
            .clone()
            .filter(|session| !session.is_expired())
    }

    /// Subscribe to sign-in/sign-out transitions.
    pub fn on_auth_state_change(&self) -> watch::Receiver<Option<Session>> {
        self.auth_tx().subscribe()
    }

    /// Adopt an already-issued session (e.g. restored from the environment).
    pub fn set_session(&self, session: Option<Session>) {
        *self.session_slot().write() = session.clone();
        let _ = self.auth_tx().send(session);
    }
}
