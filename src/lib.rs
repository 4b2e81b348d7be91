pub mod activation;
pub mod cli;
pub mod core;
pub mod enumeration;
pub mod platform;
pub mod search;

pub use cli::app::build_cli;
pub use cli::commands::run_command;
pub use core::logging::init_logging;
