pub mod bus;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod guard;
pub mod live;
pub mod state;

pub use bus::RefreshBus;
pub use config::{Config, Environment};
pub use controller::{AdminController, DeleteRequest, ModalState, SubmitMode};
pub use error::{AdminError, AdminResult};
pub use form::{validate, FieldSpec, FormValues};
pub use guard::{require_session, watch_session};
pub use live::LiveList;
pub use state::AdminApp;
