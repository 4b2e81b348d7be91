pub mod handler;
pub mod operations;
pub mod types;

pub use handler::get_open_windows;
pub use types::WindowRecord;
