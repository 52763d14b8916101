use model::{Record, RecordKind};
use std::sync::Arc;
use store::{RecordGateway, SupabaseStore};
use supabase::SupabaseClient;

use crate::bus::RefreshBus;
use crate::config::Config;
use crate::controller::AdminController;
use crate::live::LiveList;

/// Composition root: one client, one gateway, one refresh bus, shared by
/// every controller and mounted view in the process.
#[derive(Clone)]
pub struct AdminApp {
    pub config: Arc<Config>,
    pub client: Arc<SupabaseClient>,
    pub store: Arc<SupabaseStore>,
    pub bus: RefreshBus,
}

impl AdminApp {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(SupabaseClient::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
        ));
        let store = Arc::new(SupabaseStore::new(Arc::clone(&client)));

        Self {
            config: Arc::new(config),
            client,
            store,
            bus: RefreshBus::new(),
        }
    }

    /// Admin table controller for one record kind.
    pub fn controller(&self, kind: RecordKind) -> AdminController {
        let gateway: Arc<dyn RecordGateway> = self.store.clone();
        AdminController::new(gateway, self.bus.clone(), kind)
    }

    /// Mounted listing view for one record kind, as used by the public
    /// pages.
    pub fn live_list<T>(&self) -> LiveList<T>
    where
        T: Record + Clone + Send + Sync + 'static,
    {
        let gateway: Arc<dyn RecordGateway> = self.store.clone();
        LiveList::mount(gateway, &self.bus)
    }
}
