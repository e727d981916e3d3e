use super::Component;
use super::text_input::TextInput;
use crate::interactive_ratatui::constants::{BODY_PROMPT, ID_PROMPT, NEW_DOCUMENT_TEMPLATE};
use crate::interactive_ratatui::domain::models::CreateStep;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Two-step form: document id, then JSON body
pub struct DocumentCreator {
    step: CreateStep,
    id_input: TextInput,
    body_input: TextInput,
}

impl Default for DocumentCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCreator {
    pub fn new() -> Self {
        Self {
            step: CreateStep::Id,
            id_input: TextInput::new(),
            body_input: TextInput::new(),
        }
    }

    pub fn set_form(&mut self, step: CreateStep, id_input: TextInput, body_input: TextInput) {
        self.step = step;
        self.id_input = id_input;
        self.body_input = body_input;
    }

    fn field<'a>(
        title: &'a str,
        input: &'a TextInput,
        active: bool,
        placeholder: Option<&'a str>,
    ) -> Paragraph<'a> {
        let border = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = if active {
            input.render_cursor_spans()
        } else {
            vec![Span::raw(input.text())]
        };
        if let Some(hint) = placeholder.filter(|_| input.text().is_empty()) {
            spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        }
        let line = Line::from(spans);
        Paragraph::new(line).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        )
    }
}

impl Component for DocumentCreator {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let on_body = self.step == CreateStep::Body;
        f.render_widget(
            Self::field(ID_PROMPT, &self.id_input, !on_body, None),
            chunks[0],
        );
        if on_body {
            f.render_widget(
                Self::field(
                    BODY_PROMPT,
                    &self.body_input,
                    true,
                    Some(NEW_DOCUMENT_TEMPLATE),
                ),
                chunks[1],
            );
            f.render_widget(
                Paragraph::new("Press Enter to submit").style(Style::default().fg(Color::DarkGray)),
                chunks[2],
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SubmitCreator),
            KeyCode::Esc => Some(Message::CancelCreate),
            _ => Some(Message::EditCreator(key)),
        }
    }
}
