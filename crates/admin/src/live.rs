use model::Record;
use std::sync::Arc;
use store::RecordGateway;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::bus::RefreshBus;

/// A mounted listing view: fetches once at mount, re-fetches its kind on
/// every refresh signal, and publishes decoded records to watchers.
///
/// Dropping the handle unmounts the view. The background task is aborted,
/// so an in-flight fetch result is discarded rather than applied to a view
/// that no longer exists.
pub struct LiveList<T> {
    rx: watch::Receiver<Vec<T>>,
    task: JoinHandle<()>,
}

impl<T> LiveList<T>
where
    T: Record + Clone + Send + Sync + 'static,
{
    pub fn mount(gateway: Arc<dyn RecordGateway>, bus: &RefreshBus) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        let mut signals = bus.subscribe();

        let task = tokio::spawn(async move {
            // A view mounted after a broadcast has missed it; the mount
            // fetch covers that gap.
            fetch_into::<T>(gateway.as_ref(), &tx).await;

            loop {
                match signals.recv().await {
                    Ok(kind) if kind == T::KIND => {
                        fetch_into::<T>(gateway.as_ref(), &tx).await;
                    }
                    Ok(_) => {}
                    // Missed signals collapse into a single re-fetch.
                    Err(broadcast::error::RecvError::Lagged(_)) => {
                        fetch_into::<T>(gateway.as_ref(), &tx).await;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Self { rx, task }
    }

    /// Records from the last successful fetch.
    pub fn records(&self) -> Vec<T> {
        self.rx.borrow().clone()
    }

    /// Watch the list for changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.rx.clone()
    }

    /// Wait until the list next changes. Returns `false` once the view's
    /// task has stopped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl<T> Drop for LiveList<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn fetch_into<T: Record>(gateway: &dyn RecordGateway, tx: &watch::Sender<Vec<T>>) {
    match gateway.list(T::KIND, Some(T::KIND.default_order())).await {
        Ok(rows) => {
            let records = rows
                .into_iter()
                .filter_map(|row| match serde_json::from_value(row) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("skipping malformed {} row: {}", T::KIND, e);
                        None
                    }
                })
                .collect();
            let _ = tx.send(records);
        }
        Err(e) => {
            // Keep the previous list; the mutating side already surfaced
            // the failure to the user.
            tracing::warn!("failed to refresh {}: {}", T::KIND, e);
        }
    }
}
