mod app;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jobboard_runtime::{DetailOutcome, DetailTicket, JobBoard};
use jobboard_types::PostingId;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::notifier::ToastNotifier;
use app::{BrowseAction, BrowseApp};
pub use tui_event::TuiEvent;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Interactive posting browser.
///
/// Routes key presses to `BrowseApp`, applies the resulting actions to the
/// board and paints the frame. Detail fetches run on the tokio runtime and
/// report back over a channel, so the UI keeps responding while one is in
/// flight and a late response for an older ticket is simply dropped.
pub struct BrowseTui {
    board: JobBoard,
    toast: Arc<ToastNotifier>,
    runtime: Handle,
}

impl BrowseTui {
    pub fn new(board: JobBoard, toast: Arc<ToastNotifier>, runtime: Handle) -> Self {
        Self {
            board,
            toast,
            runtime,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let (tx, rx) = mpsc::channel();
        let result = self.event_loop(&mut terminal, tx, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        tx: Sender<TuiEvent>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        let mut app = BrowseApp::new();

        loop {
            app.clamp_selection(self.board.view().visible().len());
            let toast = self.toast.visible();
            terminal.draw(|f| ui::draw(f, &mut app, self.board.view(), toast.as_ref()))?;

            if event::poll(TICK_RATE)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = app.handle_key(key, self.board.view())
            {
                if action == BrowseAction::Quit {
                    return Ok(());
                }
                self.apply(action, &tx);
            }

            while let Ok(event) = rx.try_recv() {
                self.on_event(event);
            }
        }
    }

    fn apply(&mut self, action: BrowseAction, tx: &Sender<TuiEvent>) {
        match action {
            BrowseAction::Quit => {}
            BrowseAction::SelectDepartment(value) => self.board.view_mut().select_department(&value),
            BrowseAction::Search(term) => self.board.view_mut().search(&term),
            BrowseAction::Sort(field, direction) => self.board.view_mut().sort_by(field, direction),
            BrowseAction::RowAction { action, row_index } => {
                let Some(row) = self.board.view().visible().get(row_index).cloned() else {
                    return;
                };
                if let Some(ticket) = self.board.view_mut().handle_row_action(action, &row) {
                    self.spawn_detail_fetch(ticket, row.id().clone(), tx.clone());
                }
            }
            BrowseAction::CloseDetail => self.board.view_mut().close_detail(),
            BrowseAction::Reload => {
                self.toast.dismiss();
                if let Err(err) = self.runtime.block_on(self.board.refresh()) {
                    tracing::debug!(error = %err, "reload failed, keeping current list");
                }
            }
        }
    }

    fn spawn_detail_fetch(&self, ticket: DetailTicket, id: PostingId, tx: Sender<TuiEvent>) {
        let source = self.board.source();
        self.runtime.spawn(async move {
            let result = source.get_detail(&id).await;
            // The UI may already be gone
            let _ = tx.send(TuiEvent::DetailFetched { ticket, result });
        });
    }

    fn on_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::DetailFetched { ticket, result } => {
                let notifier = self.board.notifier();
                match self
                    .board
                    .view_mut()
                    .complete_detail(ticket, result, notifier.as_ref())
                {
                    Ok(DetailOutcome::Opened) => tracing::debug!(%ticket, "detail opened"),
                    Ok(DetailOutcome::Superseded) => {}
                    // Already logged and shown as a toast
                    Err(_) => {}
                }
            }
        }
    }
}
