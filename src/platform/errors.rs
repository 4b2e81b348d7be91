use crate::core::errors::WalkerError;
use crate::platform::types::WindowHandle;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to read title for window {handle}")]
    TitleReadFailed { handle: WindowHandle },

    #[error("Failed to resolve owning process for window {handle}")]
    ProcessIdUnavailable { handle: WindowHandle },
}

impl WalkerError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            PlatformError::TitleReadFailed { .. } => "WINDOW_TITLE_READ_FAILED",
            PlatformError::ProcessIdUnavailable { .. } => "WINDOW_PROCESS_ID_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_display() {
        let error = PlatformError::TitleReadFailed {
            handle: WindowHandle::from_raw(16),
        };
        assert_eq!(error.to_string(), "Failed to read title for window 0x10");
        assert_eq!(error.error_code(), "WINDOW_TITLE_READ_FAILED");
        assert!(!error.is_user_error());
    }
}
