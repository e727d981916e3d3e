pub mod collection_list;
pub mod delete_dialog;
pub mod document_creator;
pub mod document_detail;
pub mod document_list;
pub mod list_item;
pub mod list_viewer;
pub mod query_editor;
pub mod text_input;
pub mod view_layout;


use crate::interactive_ratatui::domain::models::Movement;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// List/scroll movement for a key. `vim_keys` enables `j`/`k`/`g`/`G`,
/// which must stay off wherever text is being typed.
pub fn movement_for_key(key: KeyEvent, vim_keys: bool) -> Option<Movement> {
    match key.code {
        KeyCode::Up => Some(Movement::Up),
        KeyCode::Down => Some(Movement::Down),
        KeyCode::PageUp => Some(Movement::PageUp),
        KeyCode::PageDown => Some(Movement::PageDown),
        KeyCode::Home => Some(Movement::Home),
        KeyCode::End => Some(Movement::End),
        KeyCode::Char('k') if vim_keys => Some(Movement::Up),
        KeyCode::Char('j') if vim_keys => Some(Movement::Down),
        KeyCode::Char('g') if vim_keys => Some(Movement::Home),
        KeyCode::Char('G') if vim_keys => Some(Movement::End),
        _ => None,
    }
}

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
