use jobboard_types::{Posting, PostingId};
use std::fmt;

/// Identifies one detail request. Tickets increase monotonically per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DetailTicket(u64);

impl DetailTicket {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn seq(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DetailTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Detail modal state machine.
///
/// ```text
/// Closed --row action--> Loading --ok--> Open --close--> Closed
///                           |
///                           +--err--> Closed (notified)
/// ```
///
/// A newer row action while `Loading` or `Open` restarts at `Loading` with a
/// fresh ticket; responses carrying an older ticket are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailModal {
    #[default]
    Closed,
    Loading {
        ticket: DetailTicket,
        id: PostingId,
    },
    Open {
        ticket: DetailTicket,
        posting: Box<Posting>,
    },
}

impl DetailModal {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailModal::Open { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailModal::Loading { .. })
    }

    pub fn selected(&self) -> Option<&Posting> {
        match self {
            DetailModal::Open { posting, .. } => Some(posting),
            _ => None,
        }
    }

    /// Ticket of the request the modal is currently waiting for
    pub fn pending_ticket(&self) -> Option<DetailTicket> {
        match self {
            DetailModal::Loading { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

/// What happened to a completed detail response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The modal opened with the fetched record
    Opened,
    /// A newer request (or a close) superseded this one; the response was dropped
    Superseded,
}
