pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod feed;
pub mod notifier;
pub mod view;

pub use client::JobBoard;
pub use config::{Config, SourceConfig, ViewConfig};
pub use detail::{DetailModal, DetailOutcome, DetailTicket};
pub use error::{Error, Result};
pub use feed::{FeedSubscription, ListEvent, PostingFeed};
pub use notifier::{
    FETCH_ERROR_MESSAGE, FETCH_ERROR_TITLE, Notification, Notifier, RecordingNotifier,
};
pub use view::{PostingListView, RowAction};
