use crate::config::BrowserOptions;
use crate::formatters::payload_field_paths;
use crate::gateway::{GatewayError, SearchGateway, SearchPage};
use crate::interactive_ratatui::domain::models::{DocumentItem, DocumentPage, DocumentsLoaded};
use crate::interactive_ratatui::ui::events::{AppEvent, Message};
use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Runs backend calls off the UI thread.
///
/// Every call is a spawned task bounded by the command timeout that sends
/// exactly one completion [`Message`] back into the event queue.
pub struct CommandDispatcher {
    gateway: Arc<dyn SearchGateway>,
    runtime: Handle,
    sender: UnboundedSender<AppEvent>,
    page_size: usize,
    timeout: Duration,
}

impl CommandDispatcher {
    pub fn new(
        gateway: Arc<dyn SearchGateway>,
        runtime: Handle,
        sender: UnboundedSender<AppEvent>,
        options: &BrowserOptions,
    ) -> Self {
        Self {
            gateway,
            runtime,
            sender,
            page_size: options.page_size,
            timeout: options.command_timeout,
        }
    }

    pub fn load_collections(&self) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        self.spawn(
            "list_collections",
            async move { gateway.list_collections().await },
            Message::CollectionsLoaded,
        )
    }

    pub fn load_documents(&self, collection: String, query: String) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let page_size = self.page_size;
        let (target, text) = (collection.clone(), query.clone());
        self.spawn(
            "search_page",
            async move {
                let page = gateway.search_page(&target, &text, page_size).await?;
                Ok(build_document_page(page))
            },
            move |outcome| {
                Message::DocumentsLoaded(DocumentsLoaded {
                    collection,
                    query,
                    outcome,
                })
            },
        )
    }

    pub fn load_fields(&self, collection: String) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        self.spawn(
            "list_field_names",
            async move { gateway.list_field_names(&collection).await },
            Message::FieldsLoaded,
        )
    }

    pub fn create_document(&self, collection: String, id: String, body: String) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        self.spawn(
            "create_document",
            async move {
                let assigned = gateway.create_document(&collection, &id, &body).await?;
                refresh_after_write(gateway.as_ref(), &collection).await;
                Ok(assigned)
            },
            Message::DocumentCreated,
        )
    }

    pub fn delete_document(&self, collection: String, id: String) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let target = id.clone();
        self.spawn(
            "delete_document",
            async move {
                gateway.delete_document(&collection, &target).await?;
                refresh_after_write(gateway.as_ref(), &collection).await;
                Ok(())
            },
            move |outcome| Message::DocumentDeleted { id, outcome },
        )
    }

    fn spawn<T, F, C>(&self, operation: &'static str, work: F, complete: C) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, GatewayError>> + Send + 'static,
        C: FnOnce(Result<T, String>) -> Message + Send + 'static,
    {
        let sender = self.sender.clone();
        let timeout = self.timeout;
        self.runtime.spawn(async move {
            let outcome = match tokio::time::timeout(timeout, work).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::Timeout(timeout)),
            };
            let outcome = outcome.map_err(|err| {
                warn!(operation, error = %err, "backend call failed");
                err.to_string()
            });
            if sender.send(AppEvent::Message(complete(outcome))).is_err() {
                debug!(operation, "event loop gone, dropping completion");
            }
        })
    }
}

/// Make a write visible to search. A failure here does not change the
/// outcome of the write itself.
async fn refresh_after_write(gateway: &dyn SearchGateway, collection: &str) {
    if let Err(err) = gateway.refresh_index(collection).await {
        warn!(collection, error = %err, "refresh after write failed");
    }
}

/// List rows plus the sorted field paths seen across every payload
pub(crate) fn build_document_page(page: SearchPage) -> DocumentPage {
    let mut fields = BTreeSet::new();
    for record in &page.documents {
        payload_field_paths(&record.source, &mut fields);
    }
    DocumentPage {
        items: page.documents.into_iter().map(DocumentItem::new).collect(),
        took: page.took,
        fields: fields.into_iter().collect(),
    }
}
