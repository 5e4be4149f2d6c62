use jobboard_runtime::DetailTicket;
use jobboard_types::Posting;

/// Results delivered to the UI thread from background tasks
#[derive(Debug)]
pub enum TuiEvent {
    DetailFetched {
        ticket: DetailTicket,
        result: Result<Posting, jobboard_providers::Error>,
    },
}
