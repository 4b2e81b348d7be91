use std::any::Any;

use tracing::{info, warn};

use crate::activation::types::HandleResult;
use crate::platform::WindowApi;
use crate::search::types::{ActivationToken, SearchResultItem};

/// Bring the window behind `token` to the foreground.
///
/// The sole mutating side effect in the pipeline. The OS may decline for
/// focus-policy reasons unrelated to the handle's validity; that and a stale
/// handle both report failure rather than erroring.
pub fn activate(api: &dyn WindowApi, token: &ActivationToken) -> HandleResult {
    info!(
        event = "activation.requested",
        title = token.title(),
        pid = token.pid(),
        handle = %token.handle()
    );

    if api.activate_window(token.handle()) {
        info!(event = "activation.completed", title = token.title());
        HandleResult::success()
    } else {
        warn!(
            event = "activation.refused",
            title = token.title(),
            pid = token.pid()
        );
        HandleResult::failure()
    }
}

/// Host boundary: handle a selected result handed back by the host.
///
/// A value not produced by this crate's search is a failed activation, not a
/// panic or an error.
pub fn handle_result(api: &dyn WindowApi, result: &dyn Any) -> HandleResult {
    match result.downcast_ref::<SearchResultItem>() {
        Some(item) => activate(api, item.token()),
        None => {
            warn!(event = "activation.result_type_mismatch");
            HandleResult::failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WalkerConfig;
    use crate::platform::dry_run::{DryRunWindow, DryRunWindowApi};
    use crate::platform::types::WindowHandle;
    use crate::search::types::{CancelToken, SearchRequest};

    fn search_one(api: &DryRunWindowApi, query: &str) -> SearchResultItem {
        let config = WalkerConfig::default();
        crate::search::handler::search(
            api,
            api,
            &config,
            &SearchRequest::text(query),
            CancelToken::new(),
        )
        .next()
        .expect("expected a search result")
    }

    #[test]
    fn test_activate_brings_window_to_foreground() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(0x20, "Inbox - Mail", 200, "mail"));

        let item = search_one(&api, "mail");
        let result = activate(&api, item.token());

        assert!(result.success);
        assert!(!result.requires_follow_up);
        assert_eq!(api.activated(), vec![WindowHandle::from_raw(0x20)]);
    }

    #[test]
    fn test_activate_reports_false_for_window_closed_after_search() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(0x20, "Inbox - Mail", 200, "mail"));

        let item = search_one(&api, "mail");
        api.close_window(WindowHandle::from_raw(0x20));

        let result = activate(&api, item.token());
        assert!(!result.success);
        assert!(api.activated().is_empty());
    }

    #[test]
    fn test_handle_result_activates_our_own_results() {
        let api = DryRunWindowApi::new();
        api.add_window(DryRunWindow::new(0x20, "Inbox - Mail", 200, "mail"));

        let item = search_one(&api, "mail");
        let result = handle_result(&api, &item);
        assert!(result.success);
    }

    #[test]
    fn test_handle_result_rejects_foreign_values() {
        let api = DryRunWindowApi::new();
        let foreign = "not a search result".to_string();
        let result = handle_result(&api, &foreign);
        assert!(!result.success);
        assert!(!result.requires_follow_up);
    }
}
