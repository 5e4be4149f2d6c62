use jobboard_runtime::{DetailModal, Notification, PostingListView};
use jobboard_types::{
    ALL_DEPARTMENTS_LABEL, Posting, PostingRow, PriorityClass, SortDirection, SortField,
    posting_columns,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use super::app::{BrowseApp, InputMode};
use crate::presentation::formatters::{date, text};

const HELP: &str = "↑↓ move  Enter details  Tab department  / search  1-5 sort  r reload  q quit";

pub(crate) fn draw(
    f: &mut Frame,
    app: &mut BrowseApp,
    view: &PostingListView,
    toast: Option<&Notification>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Toast / help
        ])
        .split(f.area());

    draw_filter_bar(f, chunks[0], app, view);
    draw_table(f, chunks[1], app, view);
    draw_status_line(f, chunks[2], toast);

    match view.modal() {
        DetailModal::Closed => {}
        DetailModal::Loading { id, .. } => {
            let area = centered_rect(40, 5, f.area());
            f.render_widget(Clear, area);
            let loading = Paragraph::new(format!("Loading posting {}…", id))
                .block(Block::default().borders(Borders::ALL).title(" Details "));
            f.render_widget(loading, area);
        }
        DetailModal::Open { posting, .. } => draw_detail(f, posting),
    }
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &BrowseApp, view: &PostingListView) {
    let selected = &view.filter().selected_department;
    let department = view
        .facets()
        .iter()
        .find(|facet| &facet.value == selected)
        .map_or(ALL_DEPARTMENTS_LABEL, |facet| facet.label.as_str());

    let search_style = if app.mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let cursor = if app.mode == InputMode::Search { "▏" } else { "" };

    let line = Line::from(vec![
        Span::styled("Department: ", Style::default().fg(Color::DarkGray)),
        Span::raw(department.to_string()),
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", app.search_input, cursor), search_style),
        Span::raw("   "),
        Span::styled(
            format!("{}/{} postings", view.visible().len(), view.full_list().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" jobboard "));
    f.render_widget(bar, area);
}

fn draw_table(f: &mut Frame, area: Rect, app: &mut BrowseApp, view: &PostingListView) {
    let columns = posting_columns();
    let sort = view.is_sorted().then(|| view.sort());

    let header_cells = columns.iter().enumerate().map(|(i, column)| {
        let mut label = if column.sortable {
            format!("{} {}", i + 1, column.label)
        } else {
            column.label.to_string()
        };
        if let Some(sort) = sort.filter(|s| s.field == column.field) {
            label.push_str(match sort.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            });
        }
        Cell::from(label)
    });
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.visible().iter().map(|row| {
        let cells = columns.iter().map(|column| {
            let value = cell_value(row, column.field);
            if column.priority_styled {
                Cell::from(value).style(priority_style(row.priority_class))
            } else {
                Cell::from(value)
            }
        });
        Row::new(cells)
    });

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
        Constraint::Percentage(14),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn cell_value(row: &PostingRow, field: SortField) -> String {
    let posting = &row.posting;
    match field {
        SortField::Title => text::or_missing(posting.title.as_deref()).to_string(),
        SortField::Department => text::or_missing(posting.department.as_deref()).to_string(),
        SortField::Location => text::or_missing(posting.location.as_deref()).to_string(),
        SortField::OpenPositions => posting
            .open_positions
            .map_or_else(|| text::MISSING.to_string(), |n| n.to_string()),
        SortField::PostingDate => date::format_date(posting.posting_date),
    }
}

fn priority_style(priority: PriorityClass) -> Style {
    match priority {
        PriorityClass::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        PriorityClass::Medium => Style::default().fg(Color::Yellow),
        PriorityClass::Low => Style::default().fg(Color::Green),
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, toast: Option<&Notification>) {
    let line = match toast {
        Some(n) => Paragraph::new(format!("✖ {}: {}", n.title, n.message))
            .style(Style::default().fg(Color::White).bg(Color::Red)),
        None => Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(line, area);
}

fn draw_detail(f: &mut Frame, posting: &Posting) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            text::or_missing(posting.title.as_deref()).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        field("Department", text::or_missing(posting.department.as_deref()).to_string()),
        field("Location", text::or_missing(posting.location.as_deref()).to_string()),
        field(
            "Open",
            posting
                .open_positions
                .map_or_else(|| text::MISSING.to_string(), |n| n.to_string()),
        ),
        field("Posted", date::format_long_date(posting.posting_date)),
    ];
    if let Some(description) = &posting.description {
        lines.push(Line::raw(""));
        lines.extend(description.lines().map(|l| Line::raw(l.to_string())));
    }

    let detail = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", posting.id))
                .title_bottom(" Esc close "),
        );
    f.render_widget(detail, area);
}

/// Rect of `percent_x`% width and `percent_y`% height centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
