mod backend;
mod clipboard;
mod update;
mod update_file_picker;

use std::path::PathBuf;

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Paragraph, Wrap};
use tokio::sync::mpsc;

use analyzer_core::{DisplayContent, Session, UploadSurface, display_name, surface};

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Ticks (100ms each) the startup banner stays up unless dismissed.
const BANNER_TICKS: usize = 15;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Banner,
    Main,
    FilePicker,
}

/// State for the file picker screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Matches the image/PDF filter and can be picked.
    pub accepted: bool,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::in_dir(current_dir)
    }

    pub fn in_dir(dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir: dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                accepted: false,
            });
        }

        match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    // Skip hidden files/dirs
                    if name.starts_with('.') {
                        continue;
                    }

                    if path.is_dir() {
                        dirs.push(FileEntry {
                            name,
                            path,
                            is_dir: true,
                            accepted: false,
                        });
                    } else {
                        let accepted = surface::accepts(&path);
                        files.push(FileEntry {
                            name,
                            path,
                            is_dir: false,
                            accepted,
                        });
                    }
                }

                dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

                entries.extend(dirs);
                entries.extend(files);
            }
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "cannot list directory");
            }
        }

        self.entries = entries;
        self.cursor = 0;
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }

    /// Path under the cursor if it passes the picker filter.
    pub fn pick(&self) -> Option<PathBuf> {
        self.entries
            .get(self.cursor)
            .filter(|e| !e.is_dir && e.accepted)
            .map(|e| e.path.clone())
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub theme: Theme,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Drop zone flags (dragging / uploaded).
    pub surface: UploadSurface,
    /// Extracted text and latest-request bookkeeping.
    pub session: Session,
    pub file_picker: FilePickerState,
    /// First visible line of the result pane.
    pub text_scroll: u16,
    /// Height of the result pane (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// Inner width of the result pane; long lines wrap at this column.
    pub text_width: u16,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Drop zone area from the last frame (for mouse hit-testing).
    pub last_drop_zone: Option<Rect>,
    /// One-line feedback shown in the footer (copied, stale reply, ...).
    pub status_line: Option<String>,
    /// Configured endpoint, shown in the footer.
    pub backend_url: Option<String>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Banner,
            theme,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            surface: UploadSurface::new(),
            session: Session::new(),
            file_picker: FilePickerState::new(),
            text_scroll: 0,
            visible_rows: 20,
            text_width: 78,
            backend_cmd_tx: None,
            last_drop_zone: None,
            status_line: None,
            backend_url: None,
        }
    }

    /// Hand `path` to the backend as a new upload. The previous request,
    /// if still running, becomes stale.
    pub fn start_upload(&mut self, path: PathBuf) {
        let filename = display_name(&path);
        let request = self.session.begin_upload(&filename);
        tracing::info!(%request, path = %path.display(), "upload started");
        self.status_line = None;

        if let Some(tx) = &self.backend_cmd_tx
            && tx.send(BackendCommand::Upload { request, path }).is_err()
        {
            tracing::warn!(%request, "backend listener is gone");
        }
    }

    /// Rows the result pane needs once the text is wrapped to `text_width`.
    pub fn text_row_count(&self) -> usize {
        match self.session.display() {
            DisplayContent::Text(t) => Paragraph::new(t)
                .wrap(Wrap { trim: false })
                .line_count(self.text_width.max(1))
                .max(1),
            _ => 1,
        }
    }

    fn max_scroll(&self) -> u16 {
        let max = self.text_row_count().saturating_sub(self.visible_rows.max(1));
        max.min(u16::MAX as usize) as u16
    }

    fn in_drop_zone(&self, col: u16, row: u16) -> bool {
        self.last_drop_zone
            .is_some_and(|r| r.contains(Position { x: col, y: row }))
    }

    fn dismiss_banner(&mut self) {
        if self.screen == Screen::Banner {
            self.screen = Screen::Main;
        }
    }

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        match self.screen {
            Screen::Banner => {
                crate::view::banner::render(f, &self.theme, self.tick);
                return;
            }
            Screen::FilePicker => {
                crate::view::file_picker::render_in(f, self, area);
            }
            Screen::Main => {
                let chunks = Layout::vertical([
                    Constraint::Length(4), // header
                    Constraint::Length(5), // drop zone
                    Constraint::Min(3),    // extracted text
                    Constraint::Length(1), // footer
                ])
                .split(area);

                crate::view::banner::render_header(f, &self.theme, chunks[0]);
                self.last_drop_zone = Some(chunks[1]);
                crate::view::upload::render_in(f, self, chunks[1]);
                self.visible_rows = chunks[2].height.saturating_sub(2) as usize;
                self.text_width = chunks[2].width.saturating_sub(2);
                self.text_scroll = self.text_scroll.min(self.max_scroll());
                crate::view::text::render_in(f, self, chunks[2]);
                crate::view::render_footer(f, self, chunks[3]);
            }
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, self);
        }
    }
}
