use store::SessionGate;
use supabase::Session;
use tokio::sync::watch;

use crate::error::{AdminError, AdminResult};

/// Route-guard decision: the admin surface is reachable only with a live
/// session.
pub async fn require_session(gate: &dyn SessionGate) -> AdminResult<Session> {
    match gate.current_session().await? {
        Some(session) => Ok(session),
        None => Err(AdminError::NotAuthenticated),
    }
}

/// Subscription that fires on login and logout, for views that need to
/// redirect when the session goes away.
pub fn watch_session(gate: &dyn SessionGate) -> watch::Receiver<Option<Session>> {
    gate.on_session_change()
}
