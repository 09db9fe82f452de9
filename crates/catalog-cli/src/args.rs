use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Add, search and remove products in a local catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $CATALOG_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a product
    Add {
        #[arg(long, allow_hyphen_values = true)]
        name: String,

        /// Price in dollars, e.g. 9.5
        #[arg(long, allow_hyphen_values = true)]
        price: String,

        /// Path to an image file (max ~3 MB)
        #[arg(long)]
        image: Option<String>,
    },

    /// List products, newest first
    List {
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Delete one product by id or unique id prefix
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete every product
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Open the interactive editor
    Ui,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
