use crate::formatters::{display_document_title, empty_query_placeholder};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, collection_list::CollectionList, delete_dialog::DeleteDialog,
    document_creator::DocumentCreator, document_detail::DocumentDetail,
    document_list::DocumentList, query_editor::QueryEditor, view_layout::ViewLayout,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Syncs component state from [`AppState`] and draws the active mode
pub struct Renderer {
    collection_list: CollectionList,
    document_list: DocumentList,
    query_editor: QueryEditor,
    document_creator: DocumentCreator,
    delete_dialog: DeleteDialog,
    document_detail: DocumentDetail,
    // list revisions last copied into the list components
    collections_synced: Option<u64>,
    documents_synced: Option<u64>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            collection_list: CollectionList::new(),
            document_list: DocumentList::new(),
            query_editor: QueryEditor::new(),
            document_creator: DocumentCreator::new(),
            delete_dialog: DeleteDialog::new(),
            document_detail: DocumentDetail::new(),
            collections_synced: None,
            documents_synced: None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let layout =
            ViewLayout::new().with_status(&state.ui.status, &state.ui.error, state.help_text());
        let layout = match &state.mode {
            Mode::CollectionBrowser => layout,
            Mode::DocumentBrowser => layout.with_title(format!(
                "Index: {} | query={}",
                state.active_collection,
                empty_query_placeholder(&state.active_query)
            )),
            Mode::QueryEditor => layout.with_title("Enter search query:"),
            Mode::DocumentCreator { .. } => layout.with_title("Create Document"),
            Mode::DeleteConfirmation { .. } => layout.with_title("Confirm delete"),
            Mode::DocumentDetail { document, .. } => {
                layout.with_title(format!("Document {}", display_document_title(document.id())))
            }
        };

        let area = f.area();
        let component = self.sync(state);
        layout.render(f, area, |f, content| component.render(f, content));
    }

    /// Route a key to the active mode's component
    pub fn handle_key(&mut self, mode: &Mode, key: KeyEvent) -> Option<Message> {
        let component: &mut dyn Component = match mode {
            Mode::CollectionBrowser => &mut self.collection_list,
            Mode::DocumentBrowser => &mut self.document_list,
            Mode::QueryEditor => &mut self.query_editor,
            Mode::DocumentCreator { .. } => &mut self.document_creator,
            Mode::DeleteConfirmation { .. } => &mut self.delete_dialog,
            Mode::DocumentDetail { .. } => &mut self.document_detail,
        };
        component.handle_key(key)
    }

    fn sync(&mut self, state: &AppState) -> &mut dyn Component {
        match &state.mode {
            Mode::CollectionBrowser => {
                let revision = state.collections.revision();
                if self.collections_synced != Some(revision) {
                    self.collection_list
                        .set_collections(state.collections.items.clone());
                    self.collections_synced = Some(revision);
                }
                self.collection_list
                    .set_selected_index(state.collections.selected_index);
                &mut self.collection_list
            }
            Mode::DocumentBrowser => {
                let revision = state.documents.revision();
                if self.documents_synced != Some(revision) {
                    self.document_list
                        .set_documents(state.documents.items.clone());
                    self.documents_synced = Some(revision);
                }
                self.document_list
                    .set_selected_index(state.documents.selected_index);
                &mut self.document_list
            }
            Mode::QueryEditor => {
                self.query_editor.set_input(state.query_input.clone());
                self.query_editor.set_fields(state.fields.to_vec());
                &mut self.query_editor
            }
            Mode::DocumentCreator { step } => {
                self.document_creator.set_form(
                    *step,
                    state.creator.id.clone(),
                    state.creator.body.clone(),
                );
                &mut self.document_creator
            }
            Mode::DeleteConfirmation { pending } => {
                self.delete_dialog.set_document_id(pending.id().to_string());
                &mut self.delete_dialog
            }
            Mode::DocumentDetail { document, scroll } => {
                self.document_detail.set_document(document, *scroll);
                &mut self.document_detail
            }
        }
    }
}
