use super::list_item::ListItem;
use crate::interactive_ratatui::constants::{BORDER_ROWS, LIST_ITEM_HEIGHT};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// Number of whole entries that fit in `available_height` rows
pub fn visible_capacity(available_height: u16) -> usize {
    (available_height as usize / LIST_ITEM_HEIGHT).max(1)
}

/// Bordered list of two-line entries that keeps the selection in view.
///
/// The selection itself is owned by the app state; the viewer only
/// tracks its own scroll offset.
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title,
            empty_message,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = self.selected_index.min(self.items.len().saturating_sub(1));
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.items.len().saturating_sub(1));
    }

    #[cfg(test)]
    pub(crate) fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn adjust_scroll_offset(&mut self, available_height: u16) {
        let capacity = visible_capacity(available_height);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + capacity {
            self.scroll_offset = self.selected_index + 1 - capacity;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let available_height = area.height.saturating_sub(BORDER_ROWS);
        self.adjust_scroll_offset(available_height);
        let start = self.scroll_offset;
        let end = (start + visible_capacity(available_height)).min(self.items.len());
        let text_width = area.width.saturating_sub(BORDER_ROWS) as usize;

        let rows: Vec<TuiListItem> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let style = if start + offset == self.selected_index {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                TuiListItem::new(item.to_lines(text_width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );
        let list = List::new(rows).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }
}
