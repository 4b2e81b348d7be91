use sysinfo::{Pid as SysinfoPid, ProcessesToUpdate, System};

use crate::platform::ProcessResolver;

/// Process-table snapshot taken once at construction.
///
/// A window whose process exits between the snapshot and the lookup simply
/// resolves to `None`, which the enumerator treats as "skip this window".
pub struct SysinfoProcessResolver {
    system: System,
}

impl SysinfoProcessResolver {
    pub fn refresh() -> Self {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);
        Self { system }
    }
}

impl ProcessResolver for SysinfoProcessResolver {
    fn process_name(&self, pid: u32) -> Option<String> {
        self.system
            .process(SysinfoPid::from_u32(pid))
            .map(|process| process.name().to_string_lossy().to_string())
    }
}
