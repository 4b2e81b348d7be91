pub mod handler;
pub mod types;

pub use handler::{activate, handle_result};
pub use types::HandleResult;
