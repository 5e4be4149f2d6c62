use std::fmt;

use jobboard_types::{ColumnKind, SortField, posting_columns};

use crate::presentation::formatters::{date, style, text};
use crate::presentation::view_models::{
    FacetListViewModel, FilterSummary, PostingDetailViewModel, PostingEntryViewModel,
    PostingListViewModel, SortSummary, ViewMode,
};

const TITLE_WIDTH: usize = 30;
const DEPARTMENT_WIDTH: usize = 14;
const LOCATION_WIDTH: usize = 16;
// Wide enough for the header label plus a sort arrow
const OPEN_WIDTH: usize = 16;
const DATE_WIDTH: usize = 14;

// --------------------------------------------------------
// Posting Table View
// --------------------------------------------------------

pub struct PostingTableView<'a> {
    data: &'a PostingListViewModel,
    mode: ViewMode,
    color: bool,
}

impl<'a> PostingTableView<'a> {
    pub fn new(data: &'a PostingListViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            color: style::color_enabled(),
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for posting in &self.data.postings {
            writeln!(f, "{}", posting.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.postings.is_empty() {
            return writeln!(f, "No postings found.");
        }

        for posting in &self.data.postings {
            let title = text::or_missing(posting.title.as_deref());
            writeln!(
                f,
                "{} {} [{}] {} ({} open)",
                posting.id,
                style::priority(title, &posting.priority_class, self.color),
                text::or_missing(posting.department.as_deref()),
                text::or_missing(posting.location.as_deref()),
                posting
                    .open_positions
                    .map_or_else(|| text::MISSING.to_string(), |n| n.to_string()),
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        if self.data.postings.is_empty() {
            writeln!(f, "No postings found.")?;
            return self.render_footer(f);
        }

        let mut header = String::from("   ");
        if verbose {
            header.push_str(&text::fit("ID", 10));
            header.push(' ');
        }
        for column in posting_columns() {
            let mut label = column.label.to_uppercase();
            if let Some(arrow) = sort_arrow(self.data.sort.as_ref(), column.field.as_str()) {
                label.push(' ');
                label.push_str(arrow);
            }
            let width = column_width(column.field);
            let cell = match column.kind {
                ColumnKind::Number => format!("{:>width$}", label, width = width),
                _ => text::fit(&label, width),
            };
            header.push_str(&cell);
            header.push_str("  ");
        }
        if verbose {
            header.push_str("PRIORITY");
        }
        writeln!(f, "{}", style::header(header.trim_end(), self.color))?;

        for posting in &self.data.postings {
            writeln!(f, "{}", self.render_row(posting, verbose).trim_end())?;
        }

        self.render_footer(f)
    }

    fn render_row(&self, posting: &PostingEntryViewModel, verbose: bool) -> String {
        let marker = if self.color {
            "  "
        } else {
            style::priority_marker(&posting.priority_class)
        };
        let title = text::fit(text::or_missing(posting.title.as_deref()), TITLE_WIDTH);
        let open = posting
            .open_positions
            .map_or_else(|| text::MISSING.to_string(), |n| n.to_string());

        let mut row = format!("{} ", marker);
        if verbose {
            row.push_str(&text::fit(&posting.id, 10));
            row.push(' ');
        }
        row.push_str(&format!(
            "{}  {}  {}  {:>open_width$}  {}",
            style::priority(&title, &posting.priority_class, self.color),
            text::fit(
                text::or_missing(posting.department.as_deref()),
                DEPARTMENT_WIDTH
            ),
            text::fit(text::or_missing(posting.location.as_deref()), LOCATION_WIDTH),
            open,
            text::fit(&date::format_date(posting.posting_date), DATE_WIDTH),
            open_width = OPEN_WIDTH,
        ));
        if verbose {
            row.push_str("  ");
            row.push_str(&posting.priority_class);
        }
        row
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = vec![format!(
            "Showing {} of {} postings",
            self.data.postings.len(),
            self.data.total_count
        )];
        parts.extend(describe_filter(&self.data.filter));
        if let Some(sort) = &self.data.sort {
            parts.push(format!("sorted by {} {}", sort.field, sort.direction));
        }
        writeln!(f)?;
        writeln!(f, "{}", style::dimmed(&parts.join(" · "), self.color))
    }
}

impl<'a> fmt::Display for PostingTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

fn column_width(field: SortField) -> usize {
    match field {
        SortField::Title => TITLE_WIDTH,
        SortField::Department => DEPARTMENT_WIDTH,
        SortField::Location => LOCATION_WIDTH,
        SortField::OpenPositions => OPEN_WIDTH,
        SortField::PostingDate => DATE_WIDTH,
    }
}

fn sort_arrow(sort: Option<&SortSummary>, field: &str) -> Option<&'static str> {
    let sort = sort.filter(|s| s.field == field)?;
    Some(if sort.direction == "asc" { "▲" } else { "▼" })
}

fn describe_filter(filter: &FilterSummary) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(department) = &filter.department {
        parts.push(format!("department: {}", department));
    }
    if let Some(search) = &filter.search {
        parts.push(format!("search: \"{}\"", search));
    }
    parts
}

// --------------------------------------------------------
// Facet List View
// --------------------------------------------------------

pub struct FacetListView<'a> {
    data: &'a FacetListViewModel,
    mode: ViewMode,
}

impl<'a> FacetListView<'a> {
    pub fn new(data: &'a FacetListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for FacetListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for facet in &self.data.facets {
            match self.mode {
                ViewMode::Minimal => writeln!(f, "{}", facet.label)?,
                ViewMode::Compact | ViewMode::Standard => {
                    writeln!(f, "{} ({})", facet.label, facet.count)?
                }
                ViewMode::Verbose => writeln!(
                    f,
                    "{:<24} {:>4}  value={:?}",
                    facet.label, facet.count, facet.value
                )?,
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Posting Detail View
// --------------------------------------------------------

pub struct PostingDetailView<'a> {
    data: &'a PostingDetailViewModel,
    mode: ViewMode,
    color: bool,
}

impl<'a> PostingDetailView<'a> {
    pub fn new(data: &'a PostingDetailViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            color: style::color_enabled(),
        }
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{} {} [{}] {} {}",
            d.id,
            text::or_missing(d.title.as_deref()),
            text::or_missing(d.department.as_deref()),
            text::or_missing(d.location.as_deref()),
            d.description
                .as_deref()
                .map(|s| text::truncate(&text::single_line(s), 60))
                .unwrap_or_default(),
        )
    }

    fn render_full(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        let d = self.data;
        let title = text::or_missing(d.title.as_deref());
        writeln!(f, "{}", style::priority(title, &d.priority_class, self.color))?;
        writeln!(f, "  ID:          {}", d.id)?;
        writeln!(
            f,
            "  Department:  {}",
            text::or_missing(d.department.as_deref())
        )?;
        writeln!(f, "  Location:    {}", text::or_missing(d.location.as_deref()))?;
        match d.open_positions {
            Some(n) => writeln!(f, "  Open:        {} ({})", n, d.priority_class)?,
            None => writeln!(f, "  Open:        {}", text::MISSING)?,
        }
        writeln!(f, "  Posted:      {}", date::format_long_date(d.posting_date))?;
        if verbose {
            writeln!(f, "  Active:      {}", if d.active { "yes" } else { "no" })?;
        }

        if let Some(description) = &d.description {
            writeln!(f)?;
            writeln!(f, "{}", style::header("Description", self.color))?;
            for line in description.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PostingDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.id),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
