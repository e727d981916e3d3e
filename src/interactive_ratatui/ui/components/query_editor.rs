use super::Component;
use super::text_input::TextInput;
use crate::formatters::render_field_hint;
use crate::interactive_ratatui::constants::{QUERY_EXAMPLES, QUERY_SYNTAX_HELP};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Default)]
pub struct QueryEditor {
    input: TextInput,
    fields: Vec<String>,
}

impl QueryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: TextInput) {
        self.input = input;
    }

    pub fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }
}

impl Component for QueryEditor {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let input = Paragraph::new(Line::from(self.input.render_cursor_spans()))
            .block(Block::default().title("Query").borders(Borders::ALL));
        f.render_widget(input, chunks[0]);

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::styled(QUERY_SYNTAX_HELP, dim),
            Line::styled(QUERY_EXAMPLES, dim),
        ];
        let hint = render_field_hint(&self.fields);
        if !hint.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(hint, Style::default().fg(Color::Cyan)));
        }
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SubmitQuery),
            KeyCode::Esc => Some(Message::CancelQuery),
            _ => Some(Message::EditQuery(key)),
        }
    }
}
