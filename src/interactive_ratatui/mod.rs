use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, error, info};

use crate::config::BrowserOptions;
use crate::gateway::SearchGateway;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::dispatcher::CommandDispatcher;
use self::constants::EVENT_POLL_INTERVAL_MS;
use self::ui::{
    app_state::AppState,
    commands::Command,
    events::{AppEvent, Message},
    renderer::Renderer,
};

/// The interactive index/document browser.
///
/// Input events and command completions share one queue that the UI loop
/// drains one event at a time; `AppState` is touched only from that loop.
pub struct InteractiveBrowser {
    state: AppState,
    renderer: Renderer,
    dispatcher: CommandDispatcher,
    sender: UnboundedSender<AppEvent>,
    events: UnboundedReceiver<AppEvent>,
    should_quit: bool,
    // Dropped last so in-flight tasks never outlive their handle's runtime
    runtime: Runtime,
}

impl InteractiveBrowser {
    pub fn new(gateway: Arc<dyn SearchGateway>, options: BrowserOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("esbrowse-worker")
            .build()
            .context("failed to start async runtime")?;
        let (sender, events) = unbounded_channel();
        let dispatcher =
            CommandDispatcher::new(gateway, runtime.handle().clone(), sender.clone(), &options);

        Ok(Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            dispatcher,
            sender,
            events,
            should_quit: false,
            runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(terminal),
            Err(err) => {
                restore_terminal(&mut io::stdout());
                Err(err.into())
            }
        }
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        self.handle_message(Message::Resize(size.width, size.height));

        let stop = Arc::new(AtomicBool::new(false));
        let input = spawn_input_thread(self.sender.clone(), Arc::clone(&stop));

        info!("browser started");
        let command = self.state.init();
        self.execute_command(command);

        let result = loop {
            if let Err(err) = terminal.draw(|f| self.renderer.render(f, &self.state)) {
                break Err(err.into());
            }
            let Some(event) = self.events.blocking_recv() else {
                break Ok(());
            };
            self.process_event(event);
            if self.should_quit {
                break Ok(());
            }
        };

        stop.store(true, Ordering::Relaxed);
        if input.join().is_err() {
            error!("input thread panicked");
        }
        info!("browser stopped");
        result
    }

    /// Turn one queued event into at most one message and apply it
    pub(crate) fn process_event(&mut self, event: AppEvent) {
        let message = match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.renderer.handle_key(&self.state.mode, key)
            }
            AppEvent::Input(Event::Resize(width, height)) => Some(Message::Resize(width, height)),
            AppEvent::Input(_) => None,
            AppEvent::Message(message) => Some(message),
        };

        if let Some(message) = message {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: Message) {
        debug!(mode = self.state.mode.name(), "handling message");
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Quit => {
                self.should_quit = true;
            }
            Command::LoadCollections => {
                self.dispatcher.load_collections();
            }
            Command::LoadDocuments { collection, query } => {
                debug!(%collection, %query, "fetching page");
                self.dispatcher.load_documents(collection, query);
            }
            Command::LoadFields { collection } => {
                self.dispatcher.load_fields(collection);
            }
            Command::CreateDocument {
                collection,
                id,
                body,
            } => {
                info!(%collection, %id, "creating document");
                self.dispatcher.create_document(collection, id, body);
            }
            Command::DeleteDocument { collection, id } => {
                info!(%collection, %id, "deleting document");
                self.dispatcher.delete_document(collection, id);
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn start(&mut self) {
        let command = self.state.init();
        self.execute_command(command);
    }

    /// Next queued event, or `None` once `wait` elapses
    #[cfg(test)]
    pub(crate) fn next_event(&mut self, wait: Duration) -> Option<AppEvent> {
        let events = &mut self.events;
        self.runtime
            .block_on(async move { tokio::time::timeout(wait, events.recv()).await.ok().flatten() })
    }
}

/// Best-effort undo of raw mode and the alternate screen after a failed setup
fn restore_terminal<W: io::Write>(out: &mut W) {
    let _ = execute!(out, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Forward terminal events into the shared queue until `stop` is set or the
/// queue closes.
fn spawn_input_thread(sender: UnboundedSender<AppEvent>, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        let interval = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
        while !stop.load(Ordering::Relaxed) {
            match poll(interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.send(AppEvent::Input(event)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        error!(error = %err, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    error!(error = %err, "failed to poll terminal");
                    break;
                }
            }
        }
    })
}
