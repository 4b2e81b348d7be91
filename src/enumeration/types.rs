use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::types::WindowHandle;

/// One visible, titled, process-backed top-level window at enumeration time.
///
/// Records are created fresh on every snapshot and never mutated; there is no
/// cross-call identity. A window closed after the snapshot simply fails
/// activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub title: String,
    pub process_name: String,
    pub pid: u32,
    pub handle: WindowHandle,
}

impl WindowRecord {
    pub fn new(title: String, process_name: String, pid: u32, handle: WindowHandle) -> Self {
        Self {
            title,
            process_name,
            pid,
            handle,
        }
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({}, pid {})", self.title, self.process_name, self.pid)
    }
}
