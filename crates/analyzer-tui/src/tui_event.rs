use std::path::PathBuf;

use analyzer_core::{ExtractionResponse, RequestId};

/// Commands sent from the TUI to the backend.
pub enum BackendCommand {
    /// Upload one file. The reply is tagged with `request`.
    Upload { request: RequestId, path: PathBuf },
}

/// Events flowing from the backend upload tasks to the TUI.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    UploadFinished {
        request: RequestId,
        filename: String,
        outcome: Result<ExtractionResponse, String>,
    },
}
