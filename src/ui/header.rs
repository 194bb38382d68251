use crate::app::App;
use crate::visibility::visible_blocks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(Line::from(" catchat ").alignment(Alignment::Center))
        .style(Style::default().fg(Color::LightCyan));

    let lines: Vec<Line> = visible_blocks(&app.about, &app.body)
        .map(|content| {
            let style = if content.marked {
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(content.text.clone(), style)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
