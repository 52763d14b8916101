mod event;
mod kind;
mod resource;
mod sermon;

pub use event::Event;
pub use kind::{RecordKind, SortHint, UnknownKind};
pub use resource::{Resource, ResourceCategory, UnknownCategory};
pub use sermon::Sermon;

/// A typed record fetched from the remote store.
///
/// Identifiers and creation timestamps are assigned by the store; nothing
/// in this workspace ever generates them.
pub trait Record: serde::de::DeserializeOwned {
    const KIND: RecordKind;

    fn id(&self) -> i64;
}
