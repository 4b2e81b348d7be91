use serde::Serialize;

/// Outcome reported to the host after handling a selected result.
///
/// Activation never fails with an error: a stale handle or an OS that
/// declines to cede foreground focus both report `success: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandleResult {
    pub success: bool,
    pub requires_follow_up: bool,
}

impl HandleResult {
    pub fn success() -> Self {
        Self {
            success: true,
            requires_follow_up: false,
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            requires_follow_up: false,
        }
    }
}
