use tracing::{debug, info};

use crate::core::config::WalkerConfig;
use crate::enumeration::{operations as enumeration_ops, types::WindowRecord};
use crate::platform::{ProcessResolver, WindowApi};
use crate::search::operations;
use crate::search::types::{CancelToken, SearchKind, SearchRequest, SearchResultItem};

/// Run one search invocation: gate the request, snapshot the open windows,
/// and return a lazy stream of scored results.
///
/// Each invocation enumerates independently; no state is shared between
/// concurrent searches. Results come back in enumeration order with their
/// score attached; ordering by score is the host's responsibility.
pub fn search(
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
    request: &SearchRequest,
    cancel: CancelToken,
) -> ResultStream {
    if request.kind != SearchKind::Text {
        debug!(event = "search.kind_skipped", kind = ?request.kind);
        return ResultStream::empty(cancel);
    }

    if !operations::tag_allows(request.tag.as_deref(), &config.search.tag) {
        debug!(
            event = "search.tag_skipped",
            tag = request.tag.as_deref().unwrap_or_default()
        );
        return ResultStream::empty(cancel);
    }

    let query = operations::normalize_query(request.text.as_deref());
    info!(event = "search.started", query = %query);

    let records = enumeration_ops::snapshot(api, processes, &config.host_process_name());
    ResultStream::new(records, query, cancel)
}

/// Lazy sequence of scored results.
///
/// The cancel token is observed before each element is produced; once
/// cancelled the stream never yields again.
pub struct ResultStream {
    records: std::vec::IntoIter<WindowRecord>,
    query: String,
    cancel: CancelToken,
    done: bool,
}

impl ResultStream {
    fn new(records: Vec<WindowRecord>, query: String, cancel: CancelToken) -> Self {
        Self {
            records: records.into_iter(),
            query,
            cancel,
            done: false,
        }
    }

    fn empty(cancel: CancelToken) -> Self {
        Self::new(Vec::new(), String::new(), cancel)
    }
}

impl Iterator for ResultStream {
    type Item = SearchResultItem;

    fn next(&mut self) -> Option<SearchResultItem> {
        if self.done || self.cancel.is_cancelled() {
            self.done = true;
            return None;
        }

        for record in self.records.by_ref() {
            if operations::is_match(&record, &self.query) {
                let score = operations::score(&record, &self.query);
                return Some(SearchResultItem::new(record, score));
            }
        }
        self.done = true;
        None
    }
}
