#[cfg(test)]
mod tests {
    use crate::gateway::{CollectionSummary, DocumentRecord, Health, IndexStatus};
    use crate::interactive_ratatui::domain::models::{
        CreateStep, DocumentItem, DocumentPage, DocumentsLoaded, Movement,
    };
    use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
    use crate::interactive_ratatui::ui::commands::Command;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::{Map, Value, json};
    use std::time::Duration;

    fn summary(name: &str) -> CollectionSummary {
        CollectionSummary {
            name: name.to_string(),
            health: Health::Green,
            status: IndexStatus::Open,
            docs_count: 1,
            store_size: "1kb".to_string(),
            store_bytes: 1024,
        }
    }

    fn doc(id: &str, source: Value) -> DocumentItem {
        let source = match source {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        DocumentItem::new(DocumentRecord {
            id: id.to_string(),
            source,
        })
    }

    fn page(items: Vec<DocumentItem>, fields: &[&str]) -> DocumentPage {
        DocumentPage {
            items,
            took: Duration::from_millis(12),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn loaded(collection: &str, query: &str, outcome: Result<DocumentPage, String>) -> Message {
        Message::DocumentsLoaded(DocumentsLoaded {
            collection: collection.to_string(),
            query: query.to_string(),
            outcome,
        })
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    fn type_into(state: &mut AppState, text: &str, wrap: fn(KeyEvent) -> Message) {
        for c in text.chars() {
            state.update(wrap(key(c)));
        }
    }

    fn with_collections(names: &[&str]) -> AppState {
        let mut state = AppState::new();
        let collections = names.iter().map(|n| summary(n)).collect();
        state.update(Message::CollectionsLoaded(Ok(collections)));
        state
    }

    /// Browsing `logs` with two documents loaded
    fn browsing_logs() -> AppState {
        let mut state = with_collections(&["logs", "metrics"]);
        state.update(Message::OpenCollection);
        state.update(loaded(
            "logs",
            "",
            Ok(page(
                vec![
                    doc("doc-1", json!({ "level": "info" })),
                    doc("doc-2", json!({ "level": "warn" })),
                ],
                &["level"],
            )),
        ));
        state
    }

    fn reload(collection: &str, query: &str) -> Command {
        Command::reload(collection, query)
    }

    #[test]
    fn test_initial_state() {
        let mut state = AppState::new();
        assert_eq!(state.mode, Mode::CollectionBrowser);
        assert!(state.collections.items.is_empty());
        assert_eq!(state.init(), Command::LoadCollections);
        assert_eq!(state.ui.status, "Loading indices...");
        assert_eq!(state.help_text(), "enter:open index r:refresh q:quit");
    }

    #[test]
    fn test_collections_loaded() {
        let mut state = with_collections(&["a", "b", "c"]);
        assert_eq!(state.ui.status, "Loaded 3 indices");
        assert_eq!(state.collections.items.len(), 3);

        state.update(Message::CollectionsLoaded(Ok(Vec::new())));
        assert_eq!(state.ui.status, "No indices found");
        assert!(state.collections.items.is_empty());
    }

    #[test]
    fn test_collections_error_keeps_list() {
        let mut state = with_collections(&["a"]);
        state.update(Message::CollectionsLoaded(Err("connection refused".to_string())));
        assert_eq!(state.ui.error, "connection refused");
        assert_eq!(state.collections.items.len(), 1);
        assert_eq!(state.mode, Mode::CollectionBrowser);
    }

    #[test]
    fn test_refresh_collections_clears_error() {
        let mut state = AppState::new();
        state.ui.error = "old failure".to_string();
        assert_eq!(
            state.update(Message::RefreshCollections),
            Command::LoadCollections
        );
        assert_eq!(state.ui.status, "Refreshing indices...");
        assert!(state.ui.error.is_empty());
    }

    #[test]
    fn test_open_collection_issues_page_and_fields() {
        let mut state = with_collections(&["logs", "metrics"]);
        state.active_query = "stale".to_string();
        state.fields.merge(&["old.field"]);
        state.update(Message::Navigate(Movement::Down));

        let command = state.update(Message::OpenCollection);

        assert_eq!(command, reload("metrics", ""));
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.active_collection, "metrics");
        assert_eq!(state.active_query, "");
        assert!(state.fields.is_empty());
        assert_eq!(state.ui.status, "Loading docs for metrics...");
    }

    #[test]
    fn test_open_collection_with_empty_list_is_noop() {
        let mut state = AppState::new();
        assert_eq!(state.update(Message::OpenCollection), Command::None);
        assert_eq!(state.mode, Mode::CollectionBrowser);
    }

    #[test]
    fn test_documents_loaded_updates_list_fields_and_status() {
        let state = browsing_logs();
        assert_eq!(state.documents.items.len(), 2);
        assert_eq!(state.fields.to_vec(), vec!["level"]);
        assert_eq!(state.ui.status, "logs: 2 docs • 12ms • query=match_all");
    }

    #[test]
    fn test_documents_loaded_empty_status() {
        let mut state = browsing_logs();
        state.update(loaded("logs", "", Ok(page(Vec::new(), &[]))));
        assert_eq!(state.ui.status, "logs: no docs (query: match_all)");
        assert!(state.documents.items.is_empty());
        // empty field lists never shrink the set
        assert_eq!(state.fields.to_vec(), vec!["level"]);
    }

    #[test]
    fn test_stale_page_for_other_collection_is_discarded() {
        let mut state = browsing_logs();
        let before: Vec<String> = state
            .documents
            .items
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        let status = state.ui.status.clone();

        let command = state.update(loaded(
            "metrics",
            "",
            Ok(page(vec![doc("m-1", json!({ "cpu": 1 }))], &["cpu"])),
        ));

        assert_eq!(command, Command::None);
        let after: Vec<String> = state
            .documents
            .items
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(before, after);
        assert_eq!(state.ui.status, status);
        assert!(!state.fields.contains("cpu"));
    }

    #[test]
    fn test_stale_page_for_other_query_is_discarded_even_on_error() {
        let mut state = browsing_logs();
        state.update(loaded("logs", "status:500", Err("boom".to_string())));
        assert!(state.ui.error.is_empty());
        assert_eq!(state.documents.items.len(), 2);
    }

    #[test]
    fn test_page_error_sets_error_line() {
        let mut state = browsing_logs();
        state.update(loaded("logs", "", Err("search: index_not_found".to_string())));
        assert_eq!(state.ui.error, "search: index_not_found");
        assert_eq!(state.documents.items.len(), 2);
    }

    #[test]
    fn test_fields_loaded_is_not_stale_checked() {
        let mut state = browsing_logs();
        state.update(Message::FieldsLoaded(Ok(vec![
            "host".to_string(),
            "level".to_string(),
        ])));
        assert_eq!(state.fields.to_vec(), vec!["host", "level"]);

        state.update(Message::FieldsLoaded(Err("mapping failed".to_string())));
        assert_eq!(state.ui.error, "mapping failed");
        assert_eq!(state.fields.len(), 2);
    }

    #[test]
    fn test_back_and_refresh() {
        let mut state = browsing_logs();
        assert_eq!(state.update(Message::RefreshDocuments), reload("logs", ""));
        assert_eq!(state.ui.status, "Refreshing logs");

        state.update(Message::BackToCollections);
        assert_eq!(state.mode, Mode::CollectionBrowser);
        assert_eq!(state.ui.status, "Back to indices");
        // the document list is retained for when the index is reopened
        assert_eq!(state.documents.items.len(), 2);
    }

    #[test]
    fn test_query_editor_submit_trims_and_fetches_page_only() {
        let mut state = browsing_logs();
        state.update(Message::OpenQueryEditor);
        assert_eq!(state.mode, Mode::QueryEditor);
        assert_eq!(state.query_input.text(), "");

        type_into(&mut state, "  level:warn ", Message::EditQuery);
        let command = state.update(Message::SubmitQuery);

        assert_eq!(
            command,
            Command::LoadDocuments {
                collection: "logs".to_string(),
                query: "level:warn".to_string(),
            }
        );
        assert_eq!(state.active_query, "level:warn");
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.status, "Searching logs...");
    }

    #[test]
    fn test_query_editor_prefills_and_cancel_keeps_query() {
        let mut state = browsing_logs();
        state.active_query = "level:info".to_string();

        state.update(Message::OpenQueryEditor);
        assert_eq!(state.query_input.text(), "level:info");
        assert_eq!(state.query_input.cursor_position(), 10);

        type_into(&mut state, "xyz", Message::EditQuery);
        assert_eq!(state.update(Message::CancelQuery), Command::None);
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.active_query, "level:info");
    }

    #[test]
    fn test_create_flow_with_generated_id() {
        let mut state = browsing_logs();
        state.update(Message::NewDocument);
        assert_eq!(
            state.mode,
            Mode::DocumentCreator {
                step: CreateStep::Id
            }
        );
        assert_eq!(state.help_text(), "enter:next esc:cancel");

        assert_eq!(state.update(Message::SubmitCreator), Command::None);
        assert_eq!(
            state.mode,
            Mode::DocumentCreator {
                step: CreateStep::Body
            }
        );
        assert_eq!(state.help_text(), "enter:create esc:cancel");

        state.creator.body.set_text(r#" {"a":1} "#);
        let command = state.update(Message::SubmitCreator);
        assert_eq!(
            command,
            Command::CreateDocument {
                collection: "logs".to_string(),
                id: String::new(),
                body: r#"{"a":1}"#.to_string(),
            }
        );
        assert_eq!(state.ui.status, "Creating document...");
        // the creator stays up until the result arrives
        assert!(matches!(state.mode, Mode::DocumentCreator { .. }));

        let command = state.update(Message::DocumentCreated(Ok("AbC123".to_string())));
        assert_eq!(command, reload("logs", ""));
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert!(state.ui.status.contains("AbC123"));
    }

    #[test]
    fn test_typed_body_is_sent_as_is() {
        let mut state = browsing_logs();
        state.update(Message::NewDocument);
        state.update(Message::SubmitCreator);
        type_into(&mut state, r#"{"a":1}"#, Message::EditCreator);

        let command = state.update(Message::SubmitCreator);
        assert_eq!(
            command,
            Command::CreateDocument {
                collection: "logs".to_string(),
                id: String::new(),
                body: r#"{"a":1}"#.to_string(),
            }
        );
    }

    #[test]
    fn test_creator_typing_targets_current_step() {
        let mut state = browsing_logs();
        state.update(Message::NewDocument);
        type_into(&mut state, "doc-9", Message::EditCreator);
        assert_eq!(state.creator.id.text(), "doc-9");
        assert_eq!(state.creator.body.text(), "");

        state.update(Message::SubmitCreator);
        state.update(Message::EditCreator(KeyEvent::new(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        )));
        type_into(&mut state, r#"{"b":2}"#, Message::EditCreator);
        assert_eq!(state.creator.id.text(), "doc-9");
        assert_eq!(state.creator.body.text(), r#"{"b":2}"#);
    }

    #[test]
    fn test_creator_resets_on_every_entry() {
        let mut state = browsing_logs();
        state.update(Message::NewDocument);
        type_into(&mut state, "abc", Message::EditCreator);
        state.update(Message::SubmitCreator);
        state.update(Message::CancelCreate);
        assert_eq!(state.mode, Mode::DocumentBrowser);

        state.update(Message::NewDocument);
        assert_eq!(
            state.mode,
            Mode::DocumentCreator {
                step: CreateStep::Id
            }
        );
        assert_eq!(state.creator.id.text(), "");
        assert_eq!(state.creator.body.text(), "");
    }

    #[test]
    fn test_create_failure_still_returns_to_documents() {
        let mut state = browsing_logs();
        state.update(Message::NewDocument);
        state.update(Message::SubmitCreator);
        state.update(Message::SubmitCreator);

        let command = state.update(Message::DocumentCreated(Err(
            "invalid document body: expected value".to_string(),
        )));
        assert_eq!(command, reload("logs", ""));
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.error, "invalid document body: expected value");
    }

    #[test]
    fn test_mutation_result_forces_document_browser_from_any_mode() {
        let mut state = browsing_logs();
        state.update(Message::BackToCollections);
        assert_eq!(state.mode, Mode::CollectionBrowser);

        let command = state.update(Message::DocumentDeleted {
            id: "doc-1".to_string(),
            outcome: Ok(()),
        });
        assert_eq!(command, reload("logs", ""));
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.status, "Document doc-1 deleted");
    }

    #[test]
    fn test_delete_confirm_flow() {
        let mut state = browsing_logs();
        state.update(Message::RequestDelete);
        match &state.mode {
            Mode::DeleteConfirmation { pending } => assert_eq!(pending.id(), "doc-1"),
            other => panic!("expected delete confirmation, got {other:?}"),
        }
        assert_eq!(state.ui.status, "Delete doc-1? (y/N)");

        let command = state.update(Message::ConfirmDelete);
        assert_eq!(
            command,
            Command::DeleteDocument {
                collection: "logs".to_string(),
                id: "doc-1".to_string(),
            }
        );
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.status, "Deleting doc-1...");
    }

    #[test]
    fn test_delete_decline_leaves_list() {
        let mut state = browsing_logs();
        state.update(Message::Navigate(Movement::Down));
        state.update(Message::RequestDelete);

        assert_eq!(state.update(Message::DeclineDelete), Command::None);
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.status, "Delete canceled");
        assert_eq!(state.documents.items.len(), 2);
        assert_eq!(state.documents.selected_index, 1);
    }

    #[test]
    fn test_delete_with_empty_list_is_noop() {
        let mut state = with_collections(&["logs"]);
        state.update(Message::OpenCollection);
        state.update(Message::RequestDelete);
        assert_eq!(state.mode, Mode::DocumentBrowser);
    }

    #[test]
    fn test_delete_failure_sets_error() {
        let mut state = browsing_logs();
        state.update(Message::RequestDelete);
        state.update(Message::ConfirmDelete);
        state.update(Message::DocumentDeleted {
            id: "doc-1".to_string(),
            outcome: Err("delete: not_found".to_string()),
        });
        assert_eq!(state.ui.error, "delete: not_found");
        assert_eq!(state.mode, Mode::DocumentBrowser);
    }

    #[test]
    fn test_view_detail_and_back() {
        let mut state = browsing_logs();
        state.update(Message::Navigate(Movement::Down));
        state.update(Message::ViewDocument);
        match &state.mode {
            Mode::DocumentDetail { document, scroll } => {
                assert_eq!(document.id(), "doc-2");
                assert_eq!(*scroll, 0);
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(state.ui.status, "Viewing doc-2");

        state.update(Message::CloseDetail);
        assert_eq!(state.mode, Mode::DocumentBrowser);
        assert_eq!(state.ui.status, "Back to logs");
        assert_eq!(state.documents.selected_index, 1);
    }

    #[test]
    fn test_detail_scroll_is_clamped() {
        let mut state = with_collections(&["logs"]);
        state.update(Message::OpenCollection);
        let mut source = json!({});
        for i in 0..40 {
            source[format!("f{i:02}")] = json!(i);
        }
        state.update(loaded("logs", "", Ok(page(vec![doc("big", source)], &[]))));
        state.update(Message::Resize(80, 24));
        state.update(Message::ViewDocument);

        let scroll = |state: &AppState| match &state.mode {
            Mode::DocumentDetail { scroll, .. } => *scroll,
            _ => usize::MAX,
        };

        state.update(Message::Navigate(Movement::Up));
        assert_eq!(scroll(&state), 0);

        state.update(Message::Navigate(Movement::Down));
        assert_eq!(scroll(&state), 1);

        // 42 lines with 20 visible
        state.update(Message::Navigate(Movement::End));
        assert_eq!(scroll(&state), 22);
        state.update(Message::Navigate(Movement::PageDown));
        assert_eq!(scroll(&state), 22);

        state.update(Message::Navigate(Movement::PageUp));
        assert_eq!(scroll(&state), 2);
        state.update(Message::Navigate(Movement::Home));
        assert_eq!(scroll(&state), 0);
    }

    #[test]
    fn test_detail_view_resumes_list_position() {
        let mut state = browsing_logs();
        state.update(Message::Navigate(Movement::End));
        state.update(Message::ViewDocument);
        state.update(Message::Navigate(Movement::Down));
        state.update(Message::CloseDetail);
        assert_eq!(state.documents.selected_index, 1);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = with_collections(&["a", "b", "c"]);
        state.update(Message::Navigate(Movement::Up));
        assert_eq!(state.collections.selected_index, 0);

        state.update(Message::Navigate(Movement::PageDown));
        assert_eq!(state.collections.selected_index, 2);

        state.update(Message::Navigate(Movement::Home));
        assert_eq!(state.collections.selected_index, 0);
    }

    #[test]
    fn test_refreshed_list_clamps_selection() {
        let mut state = with_collections(&["a", "b", "c"]);
        state.update(Message::Navigate(Movement::End));
        state.update(Message::CollectionsLoaded(Ok(vec![summary("a")])));
        assert_eq!(state.collections.selected_index, 0);
    }

    #[test]
    fn test_resize_sets_page_sizes() {
        let mut state = AppState::new();
        state.update(Message::Resize(100, 44));
        assert_eq!(state.ui.viewport, (100, 44));
        assert_eq!(state.list_page(), 20);
        assert_eq!(state.detail_page(), 40);

        state.update(Message::Resize(10, 2));
        assert_eq!(state.list_page(), 1);
        assert_eq!(state.detail_page(), 1);
    }

    #[test]
    fn test_index_list_pages_without_title_row() {
        let mut state = browsing_logs();
        state.update(Message::Resize(80, 45));
        // 45 rows minus title, footer and borders
        assert_eq!(state.list_page(), 20);

        state.update(Message::BackToCollections);
        // no title row above the index list
        assert_eq!(state.list_page(), 21);

        let many = (0..30).map(|i| summary(&format!("idx-{i}"))).collect();
        state.update(Message::CollectionsLoaded(Ok(many)));
        state.update(Message::Navigate(Movement::Home));
        state.update(Message::Navigate(Movement::PageDown));
        assert_eq!(state.collections.selected_index, 21);
    }

    #[test]
    fn test_messages_outside_their_mode_are_ignored() {
        let mut state = with_collections(&["logs"]);
        assert_eq!(state.update(Message::SubmitQuery), Command::None);
        assert_eq!(state.update(Message::ConfirmDelete), Command::None);
        assert_eq!(state.update(Message::RefreshDocuments), Command::None);
        assert_eq!(state.mode, Mode::CollectionBrowser);

        let mut state = browsing_logs();
        assert_eq!(state.update(Message::OpenCollection), Command::None);
        assert_eq!(state.update(Message::SubmitCreator), Command::None);
        assert_eq!(state.mode, Mode::DocumentBrowser);
    }

    #[test]
    fn test_quit_only_from_browsers() {
        let mut state = AppState::new();
        assert_eq!(state.update(Message::Quit), Command::Quit);

        let mut state = browsing_logs();
        assert_eq!(state.update(Message::Quit), Command::Quit);

        state.update(Message::OpenQueryEditor);
        assert_eq!(state.update(Message::Quit), Command::None);
        assert_eq!(state.mode, Mode::QueryEditor);
    }

    #[test]
    fn test_reopening_collection_clears_fields() {
        let mut state = browsing_logs();
        state.update(Message::FieldsLoaded(Ok(vec!["host".to_string()])));
        state.update(Message::BackToCollections);
        state.update(Message::Navigate(Movement::Down));
        state.update(Message::OpenCollection);

        assert_eq!(state.active_collection, "metrics");
        assert!(state.fields.is_empty());
        assert!(state.documents.items.is_empty());
    }
}
