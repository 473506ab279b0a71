use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

const BANNER_ART: &[&str] = &[
    r"                  _             _                          _                    ",
    r"  ___ ___  _ __ | |_ ___ _ __ | |_      __ _ _ __   __ _| |_   _ _______ _ __ ",
    r" / __/ _ \| '_ \| __/ _ \ '_ \| __|___ / _` | '_ \ / _` | | | | |_  / _ \ '__|",
    r"| (_| (_) | | | | ||  __/ | | | ||_____| (_| | | | | (_| | | |_| |/ /  __/ |   ",
    r" \___\___/|_| |_|\__\___|_| |_|\__|     \__,_|_| |_|\__,_|_|\__, /___\___|_|   ",
    r"                                                            |___/              ",
];

/// Render the startup banner as a centered overlay.
pub fn render(f: &mut Frame, theme: &Theme, tick: usize) {
    let area = f.area();

    // Too narrow for the art: fall back to the one-line header
    if area.width < 84 || area.height < 12 {
        render_header(f, theme, area);
        return;
    }

    let popup = centered_rect(84, 11, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for art_line in BANNER_ART {
        lines.push(Line::from(Span::styled(
            *art_line,
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));

    // Subtitle with animated dots
    let dots = ".".repeat((tick % 4) + 1);
    lines.push(Line::from(Span::styled(
        format!("    Parse any pdf or image{:<4}", dots),
        Style::default().fg(theme.dim),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.active)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Persistent title block at the top of the main screen.
pub fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " TOOL ",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "content-",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" analyzer ", theme.header_style()),
        ]),
        Line::from(Span::styled(
            "Parse any pdf or image",
            Style::default().fg(theme.dim),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
