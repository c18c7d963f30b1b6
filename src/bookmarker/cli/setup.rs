use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookmarker", bin_name = "bookmarker", version = get_version())]
#[command(about = "Save pages with a reminder and find them again", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding saved pages and settings
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a page with a reminder
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Address of the page (default: $BOOKMARKER_TAB_URL)
        #[arg(long)]
        url: Option<String>,

        /// Title of the page (default: $BOOKMARKER_TAB_TITLE, then the address)
        #[arg(long)]
        title: Option<String>,

        /// Why you want to come back to it
        #[arg(required = true, trailing_var_arg = true)]
        reminder: Vec<String>,
    },

    /// List saved pages, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only pages whose title, address or reminder contain this
        #[arg(short, long)]
        search: Option<String>,

        /// Treat the search term as a regular expression
        #[arg(long, requires = "search")]
        regex: bool,
    },

    /// Search saved pages
    #[command(display_order = 3)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Treat the search term as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Show the details of one or more pages
    #[command(alias = "v", display_order = 10)]
    View {
        /// Indexes or ids of the pages (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Change the reminder of a page
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index or id of the page
        index: String,

        /// New reminder text
        #[arg(required = true, trailing_var_arg = true)]
        reminder: Vec<String>,
    },

    /// Open pages in the browser
    #[command(alias = "o", display_order = 12)]
    Open {
        /// Indexes or ids of the pages (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Remove the pages once opened
        #[arg(long, short)]
        delete: bool,

        /// Print the addresses instead of launching a browser
        #[arg(long)]
        print: bool,
    },

    /// Delete one or more pages
    #[command(alias = "rm", display_order = 13)]
    Delete {
        /// Indexes or ids of the pages (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete every saved page
    #[command(display_order = 20)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export all pages to a JSON file
    #[command(display_order = 21)]
    Export {
        /// File or directory to write to (default: ./bookmarker-saved-pages.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace all pages with the ones in a JSON export
    #[command(display_order = 22)]
    Import {
        /// The .json file to import
        path: PathBuf,
    },

    /// Get or set preferences
    #[command(display_order = 30)]
    Config {
        /// Setting name (e.g. auto-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },

    /// Generate shell completions
    #[command(display_order = 31)]
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Output page indexes for shell completion (hidden)
    #[command(hide = true, name = "__complete-pages")]
    CompletePages,
}
