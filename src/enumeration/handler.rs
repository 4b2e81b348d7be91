use crate::core::config::WalkerConfig;
use crate::enumeration::{operations, types::WindowRecord};
use crate::platform::{SysinfoProcessResolver, WindowApi};

/// Snapshot the open windows against a fresh process table.
pub fn get_open_windows(api: &dyn WindowApi, config: &WalkerConfig) -> Vec<WindowRecord> {
    let resolver = SysinfoProcessResolver::refresh();
    operations::snapshot(api, &resolver, &config.host_process_name())
}
