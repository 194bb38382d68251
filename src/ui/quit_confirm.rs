use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Asks whether the visitor really wants to walk out on the assistant
pub fn draw_quit_confirm(f: &mut Frame<'_>, area: Rect, app: &App) {
    let key = Style::default()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Gray);

    let forgotten = match app.chatbox.log().len() {
        0 => "It hasn't even said hello yet.".to_string(),
        1 => "It will forget the one message.".to_string(),
        n => format!("It will forget all {} messages.", n),
    };

    let lines = vec![
        Line::styled(
            "Leave the cat all alone?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            forgotten,
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(vec![
            Span::styled(" y ", key),
            Span::styled(" leave   ", hint),
            Span::styled(" n ", key),
            Span::styled(" stay", hint),
        ]),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightMagenta))
            .title(" =^.^= ")
            .title_alignment(Alignment::Center),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
