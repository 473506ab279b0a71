use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use analyzer_core::session::UploadStatus;

use crate::app::App;
use crate::view::{centered_rect, truncate};

/// Quit confirmation popup. Warns when an upload would be abandoned.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit content-analyzer?",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
    ];
    if let UploadStatus::InFlight { filename } = app.session.status() {
        lines.push(Line::from(Span::styled(
            format!("  {} is still uploading", truncate(&filename, 24)),
            Style::default().fg(theme.spinner),
        )));
    }
    lines.push(Line::from(vec![
        key("  q", theme.failure),
        Span::styled(": quit   ", Style::default().fg(theme.dim)),
        key("Esc", theme.active),
        Span::styled(": cancel", Style::default().fg(theme.dim)),
    ]));

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(46, height, f.area());

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.failure))
            .title(" Confirm Quit "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
