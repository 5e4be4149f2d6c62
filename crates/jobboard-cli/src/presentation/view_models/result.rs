use serde::Serialize;

use super::common::ListNotice;

/// What a console command hands to the renderer: the payload, plus a notice
/// when a posting list came back empty.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<ListNotice>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<ListNotice>) -> Self {
        self.notice = notice;
        self
    }
}
