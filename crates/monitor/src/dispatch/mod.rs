mod dedup;
mod dispatcher;

pub use dedup::{DedupStore, InMemoryDedup};
pub use dispatcher::Dispatcher;
