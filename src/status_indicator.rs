use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The "X is typing..." line under the chat log. Hidden until someone types.
#[derive(Debug)]
pub struct TypingIndicator {
    hidden: bool,
    who: String,
    spinner_idx: usize,
}

impl TypingIndicator {
    pub fn new(who: impl Into<String>) -> Self {
        Self {
            hidden: true,
            who: who.into(),
            spinner_idx: 0,
        }
    }

    pub fn set_shown(&mut self, shown: bool) {
        self.hidden = !shown;
    }

    pub fn is_shown(&self) -> bool {
        !self.hidden
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn line(&self) -> Line<'static> {
        if self.hidden {
            return Line::from("");
        }

        let dots = ["   ", ".  ", ".. ", "..."];
        Line::from(vec![
            Span::styled(
                format!("{} is typing", self.who),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(
                dots[self.spinner_idx % dots.len()],
                Style::default().fg(Color::Gray),
            ),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
