use crate::app::{App, AppState};
use crate::constants::NSFW_SWITCH_LABEL;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draws the NSFW switch and the key help
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let mut lines = Vec::new();

    if let Some(switch) = &app.nsfw_switch {
        let mark = if switch.is_checked() { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", mark), Style::default().fg(Color::LightMagenta)),
            Span::styled(NSFW_SWITCH_LABEL, Style::default().fg(Color::Gray)),
        ]));
    }

    let instructions = match app.state {
        AppState::Chat => {
            "Enter to send · Ctrl-N toggle NSFW · Ctrl-S play a sound · PgUp/PgDn scroll · Esc to quit"
        }
        AppState::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        AppState::Quit => "",
    };
    lines.push(Line::styled(instructions, Style::default().fg(Color::LightCyan)));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
