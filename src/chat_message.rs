use crate::chat::ChatMessage;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Everything needed to draw one entry of the chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub name: String,
    pub color: String,
    pub text: String,
    pub avatar: Option<String>,
}

/// Turns a message into its render description.
pub fn render_message(message: &ChatMessage) -> MessageView {
    MessageView {
        name: message.speaker.name.to_string(),
        color: message.speaker.color.to_string(),
        text: message.text.clone(),
        avatar: message.speaker.avatar.map(str::to_string),
    }
}

impl MessageView {
    pub fn to_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = Style::default().fg(self.name_color());

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, width, base_style);
        lines.push(Line::from(Span::styled("╰─".to_string(), base_style)));

        lines
    }

    fn name_color(&self) -> Color {
        self.color.parse().unwrap_or(Color::Reset)
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let mut spans = vec![Span::styled("┌─".to_string(), style)];
        if self.avatar.is_some() {
            spans.push(Span::styled(
                format!("[{}] ", self.initial()),
                style.add_modifier(Modifier::REVERSED),
            ));
        }
        spans.push(Span::styled(
            self.name.clone(),
            style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(spans));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        let wrap_width = (width as usize).saturating_sub(4).max(1);
        for wrapped_line in wrap(&self.text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), Style::default().fg(Color::White)),
            ]));
        }
    }

    fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// The visible log of the chatbox. Entries only ever get appended.
#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<MessageView>,
    /// Line offset of the top of the view. The drawing code clamps it.
    pub scroll: u16,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: &ChatMessage) {
        self.entries.push(render_message(message));
    }

    pub fn entries(&self) -> &[MessageView] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Brings the newest entry into view.
    pub fn scroll_to_bottom(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in &self.entries {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.extend(entry.to_lines(width));
        }
        lines
    }
}
