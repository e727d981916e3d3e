use super::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct DeleteDialog {
    document_id: String,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document_id(&mut self, id: String) {
        self.document_id = id;
    }
}

impl Component for DeleteDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let prompt = Line::from(vec![
            Span::raw("Delete document "),
            Span::styled(
                self.document_id.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("? (y/N)"),
        ]);
        let dialog = Paragraph::new(prompt).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(dialog, area);
    }

    /// Only `y`/`Y` affirms; any other key declines
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Message::ConfirmDelete),
            _ => Some(Message::DeclineDelete),
        }
    }
}
