use crate::formatters::{empty_query_placeholder, styled_json_lines};
use crate::gateway::CollectionSummary;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::field_set::FieldSet;
use crate::interactive_ratatui::domain::models::{
    CreateStep, DocumentItem, DocumentPage, DocumentsLoaded, Movement,
};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::components::list_viewer::visible_capacity;
use crate::interactive_ratatui::ui::components::text_input::TextInput;
use crate::interactive_ratatui::ui::events::Message;
use tracing::{debug, info};

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

/// Items of one list view plus its cursor
#[derive(Clone, Debug)]
pub struct SelectionList<T> {
    pub items: Vec<T>,
    pub selected_index: usize,
    revision: u64,
}

impl<T> Default for SelectionList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            revision: 0,
        }
    }
}

impl<T> SelectionList<T> {
    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    /// Swap in fresh items, keeping the cursor inside the new bounds
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = self.selected_index.min(self.items.len().saturating_sub(1));
        self.revision += 1;
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.selected_index = 0;
        self.revision += 1;
    }

    /// Bumped whenever the items are swapped out
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn navigate(&mut self, movement: Movement, page: usize) {
        self.selected_index = movement.apply(self.selected_index, self.items.len(), page);
    }
}

/// Inputs of the create form; the current step lives in [`Mode::DocumentCreator`]
#[derive(Clone, Debug, Default)]
pub struct CreatorState {
    pub id: TextInput,
    pub body: TextInput,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub status: String,
    pub error: String,
    pub viewport: (u16, u16),
}

pub struct AppState {
    pub mode: Mode,
    pub collections: SelectionList<CollectionSummary>,
    pub documents: SelectionList<DocumentItem>,
    pub active_collection: String,
    pub active_query: String,
    pub query_input: TextInput,
    pub creator: CreatorState,
    pub fields: FieldSet,
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::CollectionBrowser,
            collections: SelectionList::default(),
            documents: SelectionList::default(),
            active_collection: String::new(),
            active_query: String::new(),
            query_input: TextInput::new(),
            creator: CreatorState::default(),
            fields: FieldSet::new(),
            ui: UiState {
                status: String::new(),
                error: String::new(),
                viewport: DEFAULT_VIEWPORT,
            },
        }
    }

    /// Command issued once the UI is up
    pub fn init(&mut self) -> Command {
        self.ui.status = "Loading indices...".to_string();
        Command::LoadCollections
    }

    pub fn help_text(&self) -> &'static str {
        self.mode.help_text()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Resize(width, height) => {
                self.ui.viewport = (width, height);
                Command::None
            }
            Message::CollectionsLoaded(outcome) => self.on_collections_loaded(outcome),
            Message::DocumentsLoaded(loaded) => self.on_documents_loaded(loaded),
            Message::FieldsLoaded(outcome) => {
                match outcome {
                    Ok(fields) => self.fields.merge(&fields),
                    Err(err) => self.ui.error = err,
                }
                Command::None
            }
            Message::DocumentCreated(outcome) => {
                let status = outcome.map(|id| format!("Document {id} indexed"));
                self.on_mutation_finished(status)
            }
            Message::DocumentDeleted { id, outcome } => {
                let status = outcome.map(|()| format!("Document {id} deleted"));
                self.on_mutation_finished(status)
            }
            Message::Quit => match self.mode {
                Mode::CollectionBrowser | Mode::DocumentBrowser => Command::Quit,
                _ => Command::None,
            },
            Message::Navigate(movement) => {
                self.navigate(movement);
                Command::None
            }
            other => match self.mode {
                Mode::CollectionBrowser => self.update_collection_browser(other),
                Mode::DocumentBrowser => self.update_document_browser(other),
                Mode::QueryEditor => self.update_query_editor(other),
                Mode::DocumentCreator { .. } => self.update_document_creator(other),
                Mode::DeleteConfirmation { .. } => self.update_delete_confirmation(other),
                Mode::DocumentDetail { .. } => self.update_document_detail(other),
            },
        }
    }

    fn update_collection_browser(&mut self, msg: Message) -> Command {
        match msg {
            Message::RefreshCollections => {
                self.begin_request("Refreshing indices...".to_string());
                Command::LoadCollections
            }
            Message::OpenCollection => {
                let Some(name) = self.collections.selected().map(|c| c.name.clone()) else {
                    return Command::None;
                };
                info!(collection = %name, "opening index");
                self.active_collection = name;
                self.active_query.clear();
                self.query_input.clear();
                self.fields.clear();
                self.documents.reset();
                self.mode = Mode::DocumentBrowser;
                self.begin_request(format!("Loading docs for {}...", self.active_collection));
                Command::reload(&self.active_collection, &self.active_query)
            }
            _ => Command::None,
        }
    }

    fn update_document_browser(&mut self, msg: Message) -> Command {
        match msg {
            Message::BackToCollections => {
                self.mode = Mode::CollectionBrowser;
                self.ui.status = "Back to indices".to_string();
                Command::None
            }
            Message::RefreshDocuments => {
                self.begin_request(format!("Refreshing {}", self.active_collection));
                Command::reload(&self.active_collection, &self.active_query)
            }
            Message::OpenQueryEditor => {
                self.query_input.set_text(self.active_query.clone());
                self.mode = Mode::QueryEditor;
                Command::None
            }
            Message::NewDocument => {
                self.creator.id.clear();
                self.creator.body.clear();
                self.mode = Mode::DocumentCreator {
                    step: CreateStep::Id,
                };
                Command::None
            }
            Message::RequestDelete => {
                if let Some(pending) = self.documents.selected().cloned() {
                    self.ui.status = format!("Delete {}? (y/N)", pending.id());
                    self.mode = Mode::DeleteConfirmation { pending };
                }
                Command::None
            }
            Message::ViewDocument => {
                if let Some(document) = self.documents.selected().cloned() {
                    self.ui.status = format!("Viewing {}", document.title());
                    self.mode = Mode::DocumentDetail {
                        document,
                        scroll: 0,
                    };
                }
                Command::None
            }
            _ => Command::None,
        }
    }

    fn update_query_editor(&mut self, msg: Message) -> Command {
        match msg {
            Message::EditQuery(key) => {
                self.query_input.handle_key(key);
                Command::None
            }
            Message::SubmitQuery => {
                self.active_query = self.query_input.text().trim().to_string();
                self.mode = Mode::DocumentBrowser;
                self.begin_request(format!("Searching {}...", self.active_collection));
                Command::LoadDocuments {
                    collection: self.active_collection.clone(),
                    query: self.active_query.clone(),
                }
            }
            Message::CancelQuery => {
                self.mode = Mode::DocumentBrowser;
                Command::None
            }
            _ => Command::None,
        }
    }

    fn update_document_creator(&mut self, msg: Message) -> Command {
        let Mode::DocumentCreator { step } = self.mode else {
            return Command::None;
        };
        match msg {
            Message::EditCreator(key) => {
                match step {
                    CreateStep::Id => self.creator.id.handle_key(key),
                    CreateStep::Body => self.creator.body.handle_key(key),
                };
                Command::None
            }
            Message::SubmitCreator => match step {
                CreateStep::Id => {
                    self.mode = Mode::DocumentCreator {
                        step: CreateStep::Body,
                    };
                    Command::None
                }
                CreateStep::Body => {
                    self.begin_request("Creating document...".to_string());
                    Command::CreateDocument {
                        collection: self.active_collection.clone(),
                        id: self.creator.id.text().trim().to_string(),
                        body: self.creator.body.text().trim().to_string(),
                    }
                }
            },
            Message::CancelCreate => {
                self.mode = Mode::DocumentBrowser;
                Command::None
            }
            _ => Command::None,
        }
    }

    fn update_delete_confirmation(&mut self, msg: Message) -> Command {
        let Mode::DeleteConfirmation { pending } = &self.mode else {
            return Command::None;
        };
        match msg {
            Message::ConfirmDelete => {
                let id = pending.id().to_string();
                self.mode = Mode::DocumentBrowser;
                self.begin_request(format!("Deleting {id}..."));
                Command::DeleteDocument {
                    collection: self.active_collection.clone(),
                    id,
                }
            }
            Message::DeclineDelete => {
                self.mode = Mode::DocumentBrowser;
                self.ui.status = "Delete canceled".to_string();
                Command::None
            }
            _ => Command::None,
        }
    }

    fn update_document_detail(&mut self, msg: Message) -> Command {
        match msg {
            Message::CloseDetail => {
                self.mode = Mode::DocumentBrowser;
                self.ui.status = format!("Back to {}", self.active_collection);
                Command::None
            }
            _ => Command::None,
        }
    }

    fn navigate(&mut self, movement: Movement) {
        let list_page = self.list_page();
        let detail_page = self.detail_page();
        match &mut self.mode {
            Mode::CollectionBrowser => self.collections.navigate(movement, list_page),
            Mode::DocumentBrowser => self.documents.navigate(movement, list_page),
            Mode::DocumentDetail { document, scroll } => {
                let lines = styled_json_lines(&document.record.source).len();
                let max_scroll = lines.saturating_sub(detail_page);
                *scroll = movement.apply(*scroll, max_scroll + 1, detail_page);
            }
            _ => {}
        }
    }

    /// Entries per page in the list views
    pub fn list_page(&self) -> usize {
        // the index list is drawn without a title row
        let title = match self.mode {
            Mode::CollectionBrowser => 0,
            _ => TITLE_BAR_HEIGHT,
        };
        let chrome = title + STATUS_BAR_HEIGHT + BORDER_ROWS;
        visible_capacity(self.ui.viewport.1.saturating_sub(chrome))
    }

    /// Payload lines visible at once in the detail view
    pub fn detail_page(&self) -> usize {
        let chrome = TITLE_BAR_HEIGHT + STATUS_BAR_HEIGHT + BORDER_ROWS;
        (self.ui.viewport.1.saturating_sub(chrome) as usize).max(1)
    }

    fn begin_request(&mut self, status: String) {
        self.ui.status = status;
        self.ui.error.clear();
    }

    fn on_collections_loaded(&mut self, outcome: Result<Vec<CollectionSummary>, String>) -> Command {
        match outcome {
            Ok(collections) => {
                self.ui.status = if collections.is_empty() {
                    "No indices found".to_string()
                } else {
                    format!("Loaded {} indices", collections.len())
                };
                self.collections.replace(collections);
            }
            Err(err) => self.ui.error = err,
        }
        Command::None
    }

    fn on_documents_loaded(&mut self, loaded: DocumentsLoaded) -> Command {
        if loaded.collection != self.active_collection || loaded.query != self.active_query {
            debug!(
                collection = %loaded.collection,
                query = %loaded.query,
                "discarding stale page"
            );
            return Command::None;
        }

        match loaded.outcome {
            Ok(DocumentPage {
                items,
                took,
                fields,
            }) => {
                let query = empty_query_placeholder(&loaded.query);
                self.ui.status = if items.is_empty() {
                    format!("{}: no docs (query: {query})", loaded.collection)
                } else {
                    format!(
                        "{}: {} docs • {took:?} • query={query}",
                        loaded.collection,
                        items.len()
                    )
                };
                self.documents.replace(items);
                self.fields.merge(&fields);
            }
            Err(err) => self.ui.error = err,
        }
        Command::None
    }

    /// Create and delete results land back in the document list and reload it
    fn on_mutation_finished(&mut self, status: Result<String, String>) -> Command {
        match status {
            Ok(status) => self.ui.status = status,
            Err(err) => self.ui.error = err,
        }
        self.mode = Mode::DocumentBrowser;
        Command::reload(&self.active_collection, &self.active_query)
    }
}
