use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobboard_runtime::PostingListView;
use jobboard_types::{SortDirection, SortField, VIEW_DETAILS_ACTION, posting_columns};
use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Search,
}

/// Domain actions the router applies to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseAction {
    Quit,
    SelectDepartment(String),
    Search(String),
    Sort(SortField, SortDirection),
    RowAction {
        action: &'static str,
        row_index: usize,
    },
    CloseDetail,
    Reload,
}

/// UI-only state of the browse screen: cursor, input mode, search box.
pub(crate) struct BrowseApp {
    pub table_state: TableState,
    pub mode: InputMode,
    pub search_input: String,
}

impl Default for BrowseApp {
    fn default() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
            mode: InputMode::Normal,
            search_input: String::new(),
        }
    }
}

impl BrowseApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(selected));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &PostingListView) -> Option<BrowseAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(BrowseAction::Quit);
        }

        if !matches!(view.modal(), jobboard_runtime::DetailModal::Closed) {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(BrowseAction::CloseDetail),
                _ => None,
            };
        }

        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key, view),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<BrowseAction> {
        match key.code {
            KeyCode::Char(c) => {
                self.search_input.push(c);
                Some(BrowseAction::Search(self.search_input.clone()))
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                Some(BrowseAction::Search(self.search_input.clone()))
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = InputMode::Normal;
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, view: &PostingListView) -> Option<BrowseAction> {
        let len = view.visible().len();
        match key.code {
            KeyCode::Char('q') => Some(BrowseAction::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(len);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Char('/') => {
                self.mode = InputMode::Search;
                None
            }
            KeyCode::Esc if !self.search_input.is_empty() => {
                self.search_input.clear();
                Some(BrowseAction::Search(String::new()))
            }
            KeyCode::Tab | KeyCode::Char('d') => cycle_department(view, 1),
            KeyCode::BackTab | KeyCode::Char('D') => cycle_department(view, -1),
            KeyCode::Char(c @ '1'..='9') => sort_column(view, c as usize - '1' as usize),
            KeyCode::Enter => self.table_state.selected().filter(|i| *i < len).map(|row_index| {
                BrowseAction::RowAction {
                    action: VIEW_DETAILS_ACTION.name,
                    row_index,
                }
            }),
            KeyCode::Char('r') => Some(BrowseAction::Reload),
            _ => None,
        }
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |i| (i + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }
}

fn cycle_department(view: &PostingListView, step: isize) -> Option<BrowseAction> {
    let facets = view.facets();
    if facets.is_empty() {
        return None;
    }
    let current = facets
        .iter()
        .position(|f| f.value == view.filter().selected_department)
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(facets.len() as isize) as usize;
    Some(BrowseAction::SelectDepartment(facets[next].value.clone()))
}

/// Header sort: a new column starts ascending, the sorted column flips
fn sort_column(view: &PostingListView, index: usize) -> Option<BrowseAction> {
    let column = posting_columns().into_iter().nth(index)?;
    if !column.sortable {
        return None;
    }
    let current = view.sort();
    let direction = if view.is_sorted() && current.field == column.field {
        current.direction.reversed()
    } else {
        SortDirection::Asc
    };
    Some(BrowseAction::Sort(column.field, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_runtime::{ListEvent, RecordingNotifier};
    use jobboard_types::Posting;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> PostingListView {
        let mut view = PostingListView::new();
        let postings = vec![
            Posting::new("1").title("Engineer").department("Eng"),
            Posting::new("2").title("Analyst").department("Sales"),
        ];
        view.on_list_event(ListEvent::Loaded(postings), &RecordingNotifier::new())
            .unwrap();
        view
    }

    #[test]
    fn test_tab_cycles_departments_and_wraps() {
        let mut app = BrowseApp::new();
        let mut view = view();

        let action = app.handle_key(key(KeyCode::Tab), &view);
        assert_eq!(action, Some(BrowseAction::SelectDepartment("Eng".into())));

        view.select_department("Sales");
        let action = app.handle_key(key(KeyCode::Tab), &view);
        assert_eq!(action, Some(BrowseAction::SelectDepartment(String::new())));

        view.select_department("");
        let action = app.handle_key(key(KeyCode::BackTab), &view);
        assert_eq!(action, Some(BrowseAction::SelectDepartment("Sales".into())));
    }

    #[test]
    fn test_search_mode_emits_each_keystroke() {
        let mut app = BrowseApp::new();
        let view = view();

        assert_eq!(app.handle_key(key(KeyCode::Char('/')), &view), None);
        assert_eq!(
            app.handle_key(key(KeyCode::Char('E')), &view),
            Some(BrowseAction::Search("E".into()))
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Char('n')), &view),
            Some(BrowseAction::Search("En".into()))
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Backspace), &view),
            Some(BrowseAction::Search("E".into()))
        );
        assert_eq!(app.handle_key(key(KeyCode::Enter), &view), None);
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[test]
    fn test_header_sort_toggles_direction() {
        let mut app = BrowseApp::new();
        let mut view = view();

        let action = app.handle_key(key(KeyCode::Char('1')), &view);
        assert_eq!(
            action,
            Some(BrowseAction::Sort(SortField::Title, SortDirection::Asc))
        );

        view.sort_by(SortField::Title, SortDirection::Asc);
        let action = app.handle_key(key(KeyCode::Char('1')), &view);
        assert_eq!(
            action,
            Some(BrowseAction::Sort(SortField::Title, SortDirection::Desc))
        );
    }

    #[test]
    fn test_location_column_is_not_sortable() {
        let mut app = BrowseApp::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('3')), &view()), None);
    }

    #[test]
    fn test_enter_requests_view_details() {
        let mut app = BrowseApp::new();
        let view = view();
        app.handle_key(key(KeyCode::Down), &view);

        let action = app.handle_key(key(KeyCode::Enter), &view);
        assert_eq!(
            action,
            Some(BrowseAction::RowAction {
                action: "view_details",
                row_index: 1
            })
        );
    }

    #[test]
    fn test_open_modal_captures_keys() {
        let mut app = BrowseApp::new();
        let mut view = view();
        view.begin_detail("1".into());

        assert_eq!(app.handle_key(key(KeyCode::Char('q')), &view), Some(BrowseAction::CloseDetail));
        assert_eq!(app.handle_key(key(KeyCode::Tab), &view), None);
    }

    #[test]
    fn test_clamp_selection() {
        let mut app = BrowseApp::new();
        app.table_state.select(Some(5));
        app.clamp_selection(2);
        assert_eq!(app.table_state.selected(), Some(1));
        app.clamp_selection(0);
        assert_eq!(app.table_state.selected(), None);
    }
}
