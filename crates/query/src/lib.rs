mod engine;
mod state;

pub use engine::{run, Page, Query, Queryable, SortOrder, DEFAULT_PER_PAGE};
pub use state::QueryState;
