use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use analyzer_core::session::UploadStatus;

use crate::app::App;
use crate::view::{spinner_char, truncate};

/// Render the drop zone: a bordered box whose caption follows the session.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let status = app.session.status();
    let color = theme.status_color(&status);

    let caption = match &status {
        UploadStatus::Idle => "Click to upload or drag & drop your file here".to_string(),
        UploadStatus::InFlight { filename } => {
            let room = (area.width as usize).saturating_sub(20);
            format!(
                "{} Uploading {}...",
                spinner_char(app.tick),
                truncate(filename, room)
            )
        }
        UploadStatus::Succeeded => "File uploaded \u{2714}".to_string(),
        UploadStatus::Failed => "Upload failed \u{2718}".to_string(),
    };

    let mut caption_style = Style::default().fg(color);
    if app.surface.dragging {
        caption_style = caption_style.add_modifier(Modifier::BOLD);
    }

    let lines = vec![
        Line::from(Span::styled(caption, caption_style)),
        Line::from(Span::styled(
            "Supports PDF and Images",
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            "o / Enter / click to browse \u{00B7} paste a path to drop",
            Style::default().fg(theme.dim),
        )),
    ];

    let zone_style = theme.drop_zone_style(app.surface.dragging);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(zone_style)
        .style(if app.surface.dragging {
            Style::default().bg(theme.drop_bg)
        } else {
            Style::default()
        });

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
