use analyzer_core::Completion;

use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::UploadFinished {
                request,
                filename,
                outcome,
            } => match self.session.complete(request, outcome) {
                Completion::Applied => {
                    self.text_scroll = 0;
                    self.status_line = None;
                }
                Completion::Stale => {
                    self.status_line = Some(format!("Ignored late reply for {}", filename));
                }
            },
        }
    }
}
