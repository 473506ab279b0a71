use analyzer_core::DisplayContent;
use analyzer_core::surface::SurfaceAction;

use super::{App, BANNER_TICKS, FilePickerState, Screen};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::ForceQuit {
            self.should_quit = true;
            return true;
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay swallows everything except its own toggles
        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => self.confirm_quit = true,
                Action::Tick => self.tick = self.tick.wrapping_add(1),
                _ => {}
            }
            return false;
        }

        if self.screen == Screen::Banner {
            match action {
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                    if self.tick >= BANNER_TICKS {
                        self.dismiss_banner();
                    }
                    return false;
                }
                Action::None | Action::Resize(..) | Action::HoverAt(..) | Action::HoverLost => {
                    return false;
                }
                // A drop during the splash still counts; anything else just dismisses it.
                Action::Drop(_) => self.dismiss_banner(),
                _ => {
                    self.dismiss_banner();
                    return false;
                }
            }
        }

        if self.screen == Screen::FilePicker {
            self.handle_file_picker_action(action);
            return self.should_quit;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::OpenPicker | Action::DrillIn => {
                self.open_picker();
            }
            Action::ClickAt(col, row) => {
                if self.in_drop_zone(col, row) {
                    match self.surface.click() {
                        SurfaceAction::OpenPicker => self.open_picker(),
                    }
                }
            }
            Action::HoverAt(col, row) => {
                if self.in_drop_zone(col, row) {
                    if self.surface.dragging {
                        self.surface.drag_over();
                    } else {
                        self.surface.drag_enter();
                    }
                } else if self.surface.dragging {
                    self.surface.drag_leave();
                }
            }
            Action::HoverLost => {
                self.surface.drag_leave();
            }
            Action::Drop(text) => {
                if let Some(path) = self.surface.drop_text(&text) {
                    self.start_upload(path);
                }
            }
            Action::MoveDown => {
                self.text_scroll = self.text_scroll.saturating_add(1).min(self.max_scroll());
            }
            Action::MoveUp => {
                self.text_scroll = self.text_scroll.saturating_sub(1);
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1).min(u16::MAX as usize) as u16;
                self.text_scroll = self.text_scroll.saturating_add(page).min(self.max_scroll());
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1).min(u16::MAX as usize) as u16;
                self.text_scroll = self.text_scroll.saturating_sub(page);
            }
            Action::GoTop => {
                self.text_scroll = 0;
            }
            Action::GoBottom => {
                self.text_scroll = self.max_scroll();
            }
            Action::CopyToClipboard => {
                if let DisplayContent::Text(text) = self.session.display() {
                    self.status_line = Some(match super::clipboard::copy_to_clipboard(&text) {
                        Ok(()) => "Copied extracted text to clipboard".to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, "clipboard copy failed");
                            format!("Copy failed: {e}")
                        }
                    });
                }
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::NavigateBack => {
                self.status_line = None;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, _h) => {
                // visible_rows is recomputed from the layout on the next draw
            }
            Action::None | Action::ForceQuit => {}
        }

        false
    }

    /// Open the picker, rescanning the directory it was last left in.
    pub(super) fn open_picker(&mut self) {
        let dir = self.file_picker.current_dir.clone();
        self.file_picker = FilePickerState::in_dir(dir);
        self.screen = Screen::FilePicker;
    }
}
