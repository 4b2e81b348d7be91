use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::enumeration::types::WindowRecord;
use crate::platform::types::WindowHandle;

/// Kind of search issued by the host. Window results are produced only for
/// free-text searches; other kinds yield nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Text,
    Process,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub text: Option<String>,
    pub tag: Option<String>,
    pub kind: SearchKind,
}

impl SearchRequest {
    pub fn new(text: Option<String>, tag: Option<String>, kind: SearchKind) -> Self {
        Self { text, tag, kind }
    }

    pub fn text(query: &str) -> Self {
        Self::new(Some(query.to_string()), None, SearchKind::Text)
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

/// Opaque activation token handed to the host inside each result.
///
/// Wraps the window record so the handle never surfaces outside the
/// activation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationToken {
    record: WindowRecord,
}

impl ActivationToken {
    pub(crate) fn new(record: WindowRecord) -> Self {
        Self { record }
    }

    pub fn handle(&self) -> WindowHandle {
        self.record.handle
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn pid(&self) -> u32 {
        self.record.pid
    }
}

/// One scored search result. Higher score means a stronger match; ordering
/// by score is the host's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultItem {
    pub title: String,
    pub process_name: String,
    pub pid: u32,
    pub score: f64,
    #[serde(skip)]
    token: ActivationToken,
}

impl SearchResultItem {
    pub(crate) fn new(record: WindowRecord, score: f64) -> Self {
        Self {
            title: record.title.clone(),
            process_name: record.process_name.clone(),
            pid: record.pid,
            score,
            token: ActivationToken::new(record),
        }
    }

    pub fn token(&self) -> &ActivationToken {
        &self.token
    }
}

/// Cooperative cancellation flag shared between the caller and a running
/// search. Cancelling stops the result stream before its next element.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
