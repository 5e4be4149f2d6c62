use super::{SortDirectionArg, SortFieldArg, ViewModeArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List active postings, optionally filtered and sorted")]
    List {
        #[arg(long, help = "Only postings in this department (exact match)")]
        department: Option<String>,

        #[arg(long, help = "Case-insensitive match on title, department or location")]
        search: Option<String>,

        #[arg(long, help = "Sort the visible postings by this field")]
        sort: Option<SortFieldArg>,

        #[arg(long, help = "Sort direction (default from config)")]
        direction: Option<SortDirectionArg>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List the department filter options")]
    Departments {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the full detail of one posting")]
    Show {
        posting_id: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Interactive posting browser")]
    Browse,
}
