use crate::app::{App, AppState};
use crate::ui::{footer::draw_footer, header::draw_header, quit_confirm::draw_quit_confirm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(app)),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(size);

    draw_header(f, chunks[0], app);
    draw_chat(f, app, chunks[1]);
    draw_footer(f, chunks[2], app);

    if app.state == AppState::QuitConfirm {
        draw_quit_confirm(f, centered(size, 50, 5), app);
    }
}

fn header_height(app: &App) -> u16 {
    let visible = crate::visibility::visible_blocks(&app.about, &app.body).count() as u16;
    visible + 2
}

fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Virtual Assistant ")
        .style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    draw_messages(f, app, chunks[0]);

    app.chatbox.indicator_mut().update_spinner();
    app.chatbox.indicator().render(f, chunks[1]);

    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let lines = app.chatbox.log().lines(area.width);

    let max_scroll = max_scroll(lines.len(), area.height);
    let log = app.chatbox.log_mut();
    if log.scroll > max_scroll {
        log.scroll = max_scroll;
    }

    f.render_widget(Paragraph::new(lines).scroll((log.scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let text = &app.chatbox.input;
    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(text.as_str(), Style::default().fg(Color::White)),
    ]);

    let (scroll_offset, cursor_x) = input_cursor(area, text.width());

    f.render_widget(Paragraph::new(input).scroll((0, scroll_offset)), area);

    if app.state == AppState::Chat {
        f.set_cursor_position((cursor_x, area.y));
    }
}

/// How far the log can scroll before its last line reaches the top.
fn max_scroll(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

/// Horizontal scroll of the input line and the cursor column, keeping the end
/// of the text in view. The prompt takes two columns and the cursor one.
fn input_cursor(area: Rect, text_width: usize) -> (u16, u16) {
    let visible_width = usize::from(area.width.saturating_sub(3));
    let scroll_offset =
        u16::try_from(text_width.saturating_sub(visible_width)).unwrap_or(u16::MAX);
    let shown = u16::try_from(text_width.min(visible_width)).unwrap_or(u16::MAX);
    (scroll_offset, area.x.saturating_add(2).saturating_add(shown))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::cookies::MemoryCookieStore;
    use crate::sound::SilentBackend;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(
            &Config::default(),
            tx,
            Box::new(MemoryCookieStore::new()),
            Box::new(SilentBackend),
        )
        .unwrap()
    }

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 50, 5);
        assert_eq!(popup, Rect::new(15, 9, 50, 5));

        let tiny = Rect::new(0, 0, 10, 3);
        assert_eq!(centered(tiny, 50, 5), tiny);
    }

    #[test]
    fn test_cursor_follows_short_input() {
        let area = Rect::new(1, 20, 78, 1);
        assert_eq!(input_cursor(area, 0), (0, 3));
        assert_eq!(input_cursor(area, 10), (0, 13));
    }

    #[test]
    fn test_cursor_stays_in_view_for_long_input() {
        let area = Rect::new(1, 20, 78, 1);
        assert_eq!(input_cursor(area, 100), (25, 78));
        assert_eq!(input_cursor(area, 65_534), (65_459, 78));
        assert_eq!(input_cursor(area, 1_000_000), (u16::MAX, 78));
    }

    #[test]
    fn test_max_scroll_saturates_for_huge_logs() {
        assert_eq!(max_scroll(5, 10), 0);
        assert_eq!(max_scroll(30, 10), 20);
        assert_eq!(max_scroll(70_000, 10), u16::MAX - 10);
    }

    #[test]
    fn test_draws_very_long_input() {
        let mut app = app();
        app.chatbox.input = "a".repeat(65_534);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 80);
    }

    #[test]
    fn test_draws_quit_prompt() {
        let mut app = app();
        app.state = AppState::QuitConfirm;
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Leave the cat all alone?"));
        assert!(screen.contains("It hasn't even said hello yet."));
    }
}
