use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgsift", bin_name = "imgsift", version)]
#[command(
    about = "Sort, filter and group an image catalog by its attributes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON catalog to read records from
    #[arg(short, long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log view passes to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the catalog sorted, filtered and grouped
    View(ViewArgs),

    /// List the sort criteria
    Criteria,

    /// Show the attributes of one record
    Info {
        /// Record id
        id: String,
    },

    /// Show or set default view settings
    Config {
        /// Config key (catalog, sort, reverse, groups)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ViewArgs {
    /// Free-text query (prefix with # to match colors)
    pub query: Option<String>,

    /// Sort criterion id (see `imgsift criteria`)
    #[arg(short, long, value_name = "ID")]
    pub sort: Option<String>,

    /// Reverse the display direction
    #[arg(short, long)]
    pub reverse: bool,

    /// Group records under criterion labels
    #[arg(short, long)]
    pub groups: bool,

    /// Attribute expression, e.g. "date >= 2020; format = PNG"
    #[arg(short, long, value_name = "EXPR")]
    pub filter: Option<String>,

    /// Print the render plan as JSON
    #[arg(long)]
    pub json: bool,
}
