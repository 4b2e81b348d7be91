//! Win32 window access using the `windows` crate.

use std::ffi::c_void;

use windows::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
    SetForegroundWindow,
};

use crate::platform::errors::PlatformError;
use crate::platform::types::WindowHandle;
use crate::platform::WindowApi;

#[derive(Default)]
pub struct Win32WindowApi;

impl Win32WindowApi {
    pub fn new() -> Self {
        Self
    }
}

struct EnumState<'a> {
    visit: &'a mut dyn FnMut(WindowHandle) -> bool,
    stopped: bool,
}

unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = unsafe { &mut *(lparam.0 as *mut EnumState) };
    let keep_going = (state.visit)(WindowHandle::from_raw(hwnd.0 as isize));
    if !keep_going {
        state.stopped = true;
    }
    BOOL::from(keep_going)
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.as_raw() as *mut c_void)
}

impl WindowApi for Win32WindowApi {
    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), PlatformError> {
        let mut state = EnumState {
            visit,
            stopped: false,
        };
        let result =
            unsafe { EnumWindows(Some(enum_proc), LPARAM(&mut state as *mut EnumState as isize)) };
        match result {
            Ok(()) => Ok(()),
            // EnumWindows reports failure when the callback stops iteration
            // early; the visitor asking to stop is not an error.
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(PlatformError::EnumerationFailed {
                message: e.to_string(),
            }),
        }
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(handle)).as_bool() }
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, PlatformError> {
        unsafe {
            // Query the actual length first; a fixed buffer would truncate
            // long titles.
            let length = GetWindowTextLengthW(hwnd(handle));
            if length == 0 {
                return Ok(String::new());
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let read = GetWindowTextW(hwnd(handle), &mut buffer);
            if read == 0 {
                // Title vanished between the length query and the read.
                return Err(PlatformError::TitleReadFailed { handle });
            }
            Ok(String::from_utf16_lossy(&buffer[..read as usize]))
        }
    }

    fn owning_process_id(&self, handle: WindowHandle) -> Result<u32, PlatformError> {
        let mut pid: u32 = 0;
        let thread_id = unsafe { GetWindowThreadProcessId(hwnd(handle), Some(&mut pid)) };
        if thread_id == 0 || pid == 0 {
            return Err(PlatformError::ProcessIdUnavailable { handle });
        }
        Ok(pid)
    }

    fn activate_window(&self, handle: WindowHandle) -> bool {
        // SetForegroundWindow reports false for stale handles and when the
        // OS declines to grant foreground focus.
        unsafe { SetForegroundWindow(hwnd(handle)).as_bool() }
    }
}
