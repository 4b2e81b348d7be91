pub mod handler;
pub mod operations;
pub mod types;

pub use handler::{ResultStream, search};
pub use types::{ActivationToken, CancelToken, SearchKind, SearchRequest, SearchResultItem};
