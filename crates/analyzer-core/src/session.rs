//! Session state: the single extracted-text value and the upload that owns it.
//!
//! The session is owned by one UI loop. Uploads run elsewhere and report back
//! with the [`RequestId`] they were issued; only the most recently issued
//! request may change what is displayed, so out-of-order replies are dropped.

use std::fmt::Display;

use crate::display::DisplayContent;
use crate::transfer::ExtractionResponse;

/// Monotonically increasing identifier for an upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What [`Session::complete`] did with a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the reply was discarded.
    Stale,
}

/// Where the latest upload stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    InFlight { filename: String },
    Succeeded,
    Failed,
}

/// Counts reported by the service alongside the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub full_text_length: Option<usize>,
    pub word_count: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Session {
    text: Option<String>,
    failure: Option<String>,
    stats: TextStats,
    issued: u64,
    latest: Option<RequestId>,
    pending: Option<String>,
    last_ok: Option<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id for an upload of `filename`.
    /// Any request still in flight becomes stale.
    pub fn begin_upload(&mut self, filename: &str) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        if let Some(prev) = self.latest
            && self.pending.is_some()
        {
            tracing::debug!(superseded = %prev, by = %id, "upload superseded");
        }
        self.latest = Some(id);
        self.pending = Some(filename.to_string());
        id
    }

    /// Apply the outcome of request `id` if it is still the latest one.
    ///
    /// A success replaces the text wholesale, even with `None` when the
    /// service omitted `extracted_text`. A failure keeps the previous text
    /// and records the reason.
    pub fn complete<E: Display>(
        &mut self,
        id: RequestId,
        outcome: Result<ExtractionResponse, E>,
    ) -> Completion {
        if self.latest != Some(id) || self.pending.is_none() {
            tracing::warn!(request = %id, latest = ?self.latest.map(RequestId::get), "discarding stale upload reply");
            return Completion::Stale;
        }
        self.pending = None;

        match outcome {
            Ok(resp) => {
                tracing::info!(
                    request = %id,
                    chars = resp.extracted_text.as_deref().map(str::len).unwrap_or(0),
                    "extracted text received"
                );
                self.text = resp.extracted_text;
                self.stats = TextStats {
                    full_text_length: resp.full_text_length,
                    word_count: resp.word_count,
                };
                self.failure = None;
                self.last_ok = Some(true);
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(request = %id, error = %reason, "upload failed");
                self.failure = Some(reason);
                self.last_ok = Some(false);
            }
        }
        Completion::Applied
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn stats(&self) -> TextStats {
        self.stats
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> UploadStatus {
        if let Some(filename) = &self.pending {
            return UploadStatus::InFlight {
                filename: filename.clone(),
            };
        }
        match self.last_ok {
            None => UploadStatus::Idle,
            Some(true) => UploadStatus::Succeeded,
            Some(false) => UploadStatus::Failed,
        }
    }

    /// What the result pane should show right now.
    pub fn display(&self) -> DisplayContent {
        DisplayContent::from_state(self.text(), self.failure())
    }
}
