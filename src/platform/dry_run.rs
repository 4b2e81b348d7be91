//! In-memory window backend for dry-run mode and tests.
//!
//! Models the OS quirks the real backend has to live with: windows can be
//! hidden, lose their owning process, or close entirely between enumeration
//! and activation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::platform::errors::PlatformError;
use crate::platform::types::WindowHandle;
use crate::platform::{ProcessResolver, WindowApi};

#[derive(Debug, Clone)]
pub struct DryRunWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub pid: u32,
    pub process_name: String,
    pub visible: bool,
}

impl DryRunWindow {
    pub fn new(raw_handle: isize, title: &str, pid: u32, process_name: &str) -> Self {
        Self {
            handle: WindowHandle::from_raw(raw_handle),
            title: title.to_string(),
            pid,
            process_name: process_name.to_string(),
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Default)]
pub struct DryRunWindowApi {
    windows: Mutex<Vec<DryRunWindow>>,
    processes: Mutex<HashMap<u32, String>>,
    activated: Mutex<Vec<WindowHandle>>,
}

impl DryRunWindowApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned window set used by the CLI's `--dry-run` flag.
    pub fn seeded() -> Self {
        let api = Self::new();
        api.add_window(DryRunWindow::new(0x10, "Untitled - Notepad", 100, "notepad"));
        api.add_window(DryRunWindow::new(0x20, "Inbox - Mail", 200, "mail"));
        api.add_window(DryRunWindow::new(0x30, "main.rs - Code", 300, "code"));
        api.add_window(DryRunWindow::new(0x40, "Downloads - Browser", 400, "browser"));
        api
    }

    pub fn add_window(&self, window: DryRunWindow) {
        self.processes
            .lock()
            .unwrap()
            .insert(window.pid, window.process_name.clone());
        self.windows.lock().unwrap().push(window);
    }

    /// Remove a window while keeping its handle known to callers, like a
    /// window closed between enumeration and activation.
    pub fn close_window(&self, handle: WindowHandle) {
        self.windows.lock().unwrap().retain(|w| w.handle != handle);
    }

    /// Drop the owning process, like a process that exited mid-enumeration.
    pub fn end_process(&self, pid: u32) {
        self.processes.lock().unwrap().remove(&pid);
    }

    pub fn activated(&self) -> Vec<WindowHandle> {
        self.activated.lock().unwrap().clone()
    }

    fn find(&self, handle: WindowHandle) -> Option<DryRunWindow> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.handle == handle)
            .cloned()
    }
}

impl WindowApi for DryRunWindowApi {
    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), PlatformError> {
        // Snapshot the handles first; the visitor calls back into this API.
        let handles: Vec<WindowHandle> =
            self.windows.lock().unwrap().iter().map(|w| w.handle).collect();
        for handle in handles {
            if !visit(handle) {
                break;
            }
        }
        Ok(())
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        self.find(handle).map(|w| w.visible).unwrap_or(false)
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, PlatformError> {
        self.find(handle)
            .map(|w| w.title)
            .ok_or(PlatformError::TitleReadFailed { handle })
    }

    fn owning_process_id(&self, handle: WindowHandle) -> Result<u32, PlatformError> {
        self.find(handle)
            .map(|w| w.pid)
            .ok_or(PlatformError::ProcessIdUnavailable { handle })
    }

    fn activate_window(&self, handle: WindowHandle) -> bool {
        match self.find(handle) {
            Some(window) if window.visible => {
                self.activated.lock().unwrap().push(handle);
                true
            }
            _ => false,
        }
    }
}

impl ProcessResolver for DryRunWindowApi {
    fn process_name(&self, pid: u32) -> Option<String> {
        self.processes.lock().unwrap().get(&pid).cloned()
    }
}
