use model::RecordKind;
use tokio::sync::broadcast;

/// Broadcast capacity. Signals carry no data and receivers re-fetch, so a
/// lagging receiver only collapses missed signals into one extra fetch.
const REFRESH_CAPACITY: usize = 64;

/// Process-wide "data changed" signal bus.
///
/// A signal names the kind whose records may have changed; it never carries
/// the data itself. Delivery is fire-and-forget with no persistent queue,
/// so a view that is not mounted at broadcast time misses the signal and
/// compensates by fetching once at mount.
#[derive(Clone)]
pub struct RefreshBus {
    sender: broadcast::Sender<RecordKind>,
}

impl RefreshBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(REFRESH_CAPACITY);
        Self { sender }
    }

    /// Announce that one kind's records changed. The send error when no
    /// view is currently mounted is ignored.
    pub fn publish(&self, kind: RecordKind) {
        let _ = self.sender.send(kind);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecordKind> {
        self.sender.subscribe()
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_subscribers_receive_a_signal() {
        let bus = RefreshBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(RecordKind::Sermons);

        assert_eq!(first.recv().await.unwrap(), RecordKind::Sermons);
        assert_eq!(second.recv().await.unwrap(), RecordKind::Sermons);
    }

    #[test]
    fn test_publish_without_subscribers_is_a_no_op() {
        let bus = RefreshBus::new();
        bus.publish(RecordKind::Events);
    }
}
