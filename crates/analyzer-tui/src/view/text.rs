use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use analyzer_core::DisplayContent;
use analyzer_core::display::{PLACEHOLDER, TEXT_TITLE, failure_message};

use crate::app::App;

/// Render the result pane.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match app.session.display() {
        DisplayContent::Placeholder => {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style()),
            );
            f.render_widget(paragraph, area);
        }
        DisplayContent::Text(text) => {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(Span::styled(
                    format!(" {TEXT_TITLE} "),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ));

            let stats = app.session.stats();
            if let Some(words) = stats.word_count {
                let summary = match stats.full_text_length {
                    Some(chars) => format!(" {words} words \u{00B7} {chars} chars "),
                    None => format!(" {words} words "),
                };
                block = block.title_bottom(
                    Line::from(Span::styled(summary, Style::default().fg(theme.dim)))
                        .right_aligned(),
                );
            }

            // Text is shown verbatim; only soft wrapping is applied
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .scroll((app.text_scroll, 0))
                .block(block);
            f.render_widget(paragraph, area);
        }
        DisplayContent::Failed(reason) => {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    failure_message(&reason),
                    Style::default()
                        .fg(theme.failure)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.failure)),
            );
            f.render_widget(paragraph, area);
        }
    }
}
