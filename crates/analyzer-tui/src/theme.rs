use ratatui::style::{Color, Modifier, Style};

use analyzer_core::session::UploadStatus;

/// Color theme for the TUI.
pub struct Theme {
    pub success: Color,
    pub failure: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub drop_bg: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            success: Color::Rgb(0, 210, 0),
            failure: Color::Red,

            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            drop_bg: Color::Rgb(20, 40, 40),
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, indigo accents, dark blue header.
    pub fn modern() -> Self {
        Self {
            success: Color::Rgb(0, 200, 80),
            failure: Color::Rgb(255, 80, 80),

            header_fg: Color::White,
            header_bg: Color::Rgb(79, 70, 229),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(99, 102, 241),
            drop_bg: Color::Rgb(31, 41, 55),
            spinner: Color::Rgb(99, 102, 241),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "modern" => Self::modern(),
            _ => Self::hacker(),
        }
    }

    pub fn status_color(&self, status: &UploadStatus) -> Color {
        match status {
            UploadStatus::Idle => self.text,
            UploadStatus::InFlight { .. } => self.spinner,
            UploadStatus::Succeeded => self.active,
            UploadStatus::Failed => self.failure,
        }
    }

    /// Border of the drop zone; highlighted while something hovers over it.
    pub fn drop_zone_style(&self, dragging: bool) -> Style {
        if dragging {
            Style::default()
                .fg(self.active)
                .bg(self.drop_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
