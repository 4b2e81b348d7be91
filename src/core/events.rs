use std::error::Error;

use tracing::{error, info};

pub fn log_app_startup() {
    info!(
        event = "app.startup",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(err: &dyn Error) {
    error!(event = "app.error", error = %err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_helpers_do_not_panic() {
        log_app_startup();
        let err = std::io::Error::other("boom");
        log_app_error(&err);
    }
}
