pub mod banner;
pub mod file_picker;
pub mod help;
pub mod quit_confirm;
pub mod text;
pub mod upload;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// Key hints on the left, status line or endpoint on the right.
pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let keys = " o:open  paste/drop:upload  j/k:scroll  y:copy  ?:help  q:quit";

    let right = match (&app.status_line, &app.backend_url) {
        (Some(status), _) => status.clone(),
        (None, Some(url)) => url.clone(),
        (None, None) => "no backend configured".to_string(),
    };
    let room = (area.width as usize).saturating_sub(keys.chars().count() + 2);
    let right = truncate(&right, room);
    let pad = (area.width as usize).saturating_sub(keys.chars().count() + right.chars().count() + 1);

    let line = Line::from(vec![
        Span::styled(keys, theme.footer_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
