use tracing::{debug, trace, warn};

use crate::enumeration::types::WindowRecord;
use crate::platform::{ProcessResolver, WindowApi};

/// Case-insensitive process-name comparison, ignoring a trailing `.exe` so a
/// configured stem ("winwalk") matches the reported image name
/// ("winwalk.exe").
pub fn same_process_name(a: &str, b: &str) -> bool {
    normalize_process_name(a) == normalize_process_name(b)
}

fn normalize_process_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered
        .strip_suffix(".exe")
        .map(|stem| stem.to_string())
        .unwrap_or(lowered)
}

/// Produce a point-in-time snapshot of candidate windows: visible, with a
/// non-empty title and a live owning process, excluding the host itself.
///
/// This call is total. Every per-window failure is logged and skipped; a
/// failure of the enumerate call itself yields whatever was collected.
pub fn snapshot(
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    host_process_name: &str,
) -> Vec<WindowRecord> {
    let mut windows: Vec<WindowRecord> = Vec::new();

    let enumerated = api.enumerate_windows(&mut |handle| {
        if !api.is_visible(handle) {
            return true;
        }

        let pid = match api.owning_process_id(handle) {
            Ok(pid) => pid,
            Err(e) => {
                warn!(event = "window.process_id_failed", handle = %handle, error = %e);
                return true;
            }
        };

        let process_name = match processes.process_name(pid) {
            Some(name) => name,
            None => {
                // Process exited between enumeration and lookup.
                trace!(event = "window.process_gone", handle = %handle, pid = pid);
                return true;
            }
        };

        let title = match api.window_title(handle) {
            Ok(title) => title,
            Err(e) => {
                debug!(event = "window.title_read_failed", handle = %handle, pid = pid, error = %e);
                return true;
            }
        };
        let title = title.trim();
        if title.is_empty() {
            return true;
        }

        if same_process_name(&process_name, host_process_name) {
            trace!(event = "window.host_excluded", pid = pid);
            return true;
        }

        windows.push(WindowRecord::new(
            title.to_string(),
            process_name,
            pid,
            handle,
        ));
        true
    });

    if let Err(e) = enumerated {
        warn!(event = "window.enumeration_failed", error = %e);
    }

    debug!(event = "window.enumeration_completed", count = windows.len());
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::dry_run::{DryRunWindow, DryRunWindowApi};

    fn titles(records: &[WindowRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_snapshot_emits_visible_titled_windows() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "Untitled - Notepad", 100, "notepad"));
        api.add_window(DryRunWindow::new(2, "Inbox - Mail", 200, "mail"));

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(titles(&records), vec!["Untitled - Notepad", "Inbox - Mail"]);
        assert_eq!(records[0].pid, 100);
        assert_eq!(records[1].process_name, "mail");
    }

    #[test]
    fn test_snapshot_skips_invisible_windows() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "Hidden", 100, "bg").hidden());
        api.add_window(DryRunWindow::new(2, "Shown", 200, "fg"));

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(titles(&records), vec!["Shown"]);
    }

    #[test]
    fn test_snapshot_skips_blank_titles() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "", 100, "empty"));
        api.add_window(DryRunWindow::new(2, "   ", 200, "blank"));
        api.add_window(DryRunWindow::new(3, "Real Title", 300, "real"));

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(titles(&records), vec!["Real Title"]);
        // Invariant: every emitted title is non-empty after trimming
        assert!(records.iter().all(|r| !r.title.trim().is_empty()));
    }

    #[test]
    fn test_snapshot_skips_windows_whose_process_exited() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "Zombie", 100, "zombie"));
        api.add_window(DryRunWindow::new(2, "Alive", 200, "alive"));
        api.end_process(100);

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(titles(&records), vec!["Alive"]);
    }

    #[test]
    fn test_snapshot_excludes_host_process() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "Search Box", 100, "WinWalk.exe"));
        api.add_window(DryRunWindow::new(2, "Inbox - Mail", 200, "mail"));

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(titles(&records), vec!["Inbox - Mail"]);
        assert!(
            records
                .iter()
                .all(|r| !same_process_name(&r.process_name, "winwalk"))
        );
    }

    #[test]
    fn test_snapshot_round_trips_long_titles() {
        let long_title = "x".repeat(300);
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, &long_title, 100, "editor"));

        let records = snapshot(&api, &api, "winwalk");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, long_title);
        assert_eq!(records[0].title.len(), 300);
    }

    #[test]
    fn test_snapshot_is_idempotent_for_unchanged_windows() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(1, "One", 100, "one"));
        api.add_window(DryRunWindow::new(2, "Two", 200, "two"));

        let first = snapshot(&api, &api, "winwalk");
        let second = snapshot(&api, &api, "winwalk");
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_process_name() {
        assert!(same_process_name("notepad", "Notepad"));
        assert!(same_process_name("notepad.exe", "notepad"));
        assert!(same_process_name("Notepad.EXE", "notepad"));
        assert!(!same_process_name("notepad", "mail"));
    }
}
