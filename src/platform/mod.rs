//! Window access seam: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for the thin
//! pass-throughs to the OS windowing subsystem (enumerate, visibility, title,
//! owning process id, activation) and for resolving a pid to a live process
//! name. Filtering, matching, and scoring policy live in `enumeration` and
//! `search`; nothing here decides which windows are worth showing.

pub mod dry_run;
pub mod errors;
pub mod process;
pub mod types;
#[cfg(target_os = "windows")]
mod win32;

pub use dry_run::{DryRunWindow, DryRunWindowApi};
pub use errors::PlatformError;
pub use process::SysinfoProcessResolver;
pub use types::WindowHandle;
#[cfg(target_os = "windows")]
pub use win32::Win32WindowApi;

/// Thin abstraction over the OS windowing subsystem.
///
/// Each method is a single platform call; failures that only affect one
/// window surface as per-handle errors so the enumerator can skip and
/// continue.
pub trait WindowApi: Send + Sync {
    /// Visit each top-level window in OS-defined order. Visiting stops early
    /// when `visit` returns false; that is not an error.
    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), PlatformError>;

    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Read the window's full title. Implementations must size the read
    /// buffer from the actual title length rather than assuming a fixed
    /// buffer, so long titles round-trip without truncation.
    fn window_title(&self, handle: WindowHandle) -> Result<String, PlatformError>;

    fn owning_process_id(&self, handle: WindowHandle) -> Result<u32, PlatformError>;

    /// Request foreground activation. Best-effort: the OS may refuse to cede
    /// focus for policy reasons unrelated to the handle's validity, and a
    /// stale handle simply reports false.
    fn activate_window(&self, handle: WindowHandle) -> bool;
}

/// Resolves a process id to the name of a process alive at lookup time.
pub trait ProcessResolver: Send + Sync {
    fn process_name(&self, pid: u32) -> Option<String>;
}

/// Window API backed by the current platform's windowing subsystem.
pub fn native_api() -> Box<dyn WindowApi> {
    #[cfg(target_os = "windows")]
    {
        Box::new(win32::Win32WindowApi::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(UnsupportedWindowApi)
    }
}

/// Fallback for platforms without a supported windowing subsystem:
/// enumerates nothing, never activates.
pub struct UnsupportedWindowApi;

impl WindowApi for UnsupportedWindowApi {
    fn enumerate_windows(
        &self,
        _visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), PlatformError> {
        Ok(())
    }

    fn is_visible(&self, _handle: WindowHandle) -> bool {
        false
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, PlatformError> {
        Err(PlatformError::TitleReadFailed { handle })
    }

    fn owning_process_id(&self, handle: WindowHandle) -> Result<u32, PlatformError> {
        Err(PlatformError::ProcessIdUnavailable { handle })
    }

    fn activate_window(&self, _handle: WindowHandle) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_api_enumerates_nothing() {
        let api = UnsupportedWindowApi;
        let mut visited = 0;
        let result = api.enumerate_windows(&mut |_| {
            visited += 1;
            true
        });
        assert!(result.is_ok());
        assert_eq!(visited, 0);
        assert!(!api.activate_window(WindowHandle::from_raw(1)));
    }
}
