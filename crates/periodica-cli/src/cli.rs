use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "periodica",
    version,
    about = "Periodica CLI - Explore the periodic table, mix elements into compounds, and quiz yourself on chemistry basics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.max-results=5
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Override the element catalog (CSV).
    #[arg(long, global = true, value_name = "PATH")]
    pub elements: Option<PathBuf>,

    /// Override the compound catalog (TOML).
    #[arg(long, global = true, value_name = "PATH")]
    pub compounds: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the details, uses, facts and safety notes of one element.
    Element(ElementArgs),
    /// List the elements of the periodic table.
    List(ListArgs),
    /// Search elements by name, symbol, category or atomic number.
    Search(SearchArgs),
    /// Mix a set of element symbols and show the resulting compound.
    Mix(MixArgs),
    /// Start an interactive lab session to build up a selection and mix it.
    Lab,
    /// Run an interactive multiple-choice quiz.
    Quiz(QuizArgs),
    /// Browse the compound catalog.
    Compound(CompoundArgs),
    /// Manage the local data directory holding editable catalogs.
    Data(DataArgs),
}

/// Arguments for the `element` subcommand.
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Element symbol, name or atomic number (e.g., 'Fe', 'iron', '26').
    #[arg(required = true, value_name = "SYMBOL|NUMBER")]
    pub query: String,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list elements whose category label matches (case-insensitive).
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query.
    #[arg(required = true, value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to show. Overrides `search.max-results`.
    #[arg(short = 'n', long, value_name = "INT")]
    pub limit: Option<usize>,
}

/// Arguments for the `mix` subcommand.
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Element symbols to mix; repeat a symbol to add more atoms (e.g., H H O).
    #[arg(required = true, num_args = 1.., value_name = "SYMBOL")]
    pub symbols: Vec<String>,
}

/// Arguments for the `quiz` subcommand.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Number of questions to ask. Overrides `quiz.num-questions`.
    #[arg(short = 'n', long, value_name = "INT")]
    pub num_questions: Option<usize>,

    /// Seed for the random number generator, for reproducible quizzes.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Draw questions from a static question bank instead of generating them.
    #[arg(long, value_name = "PATH")]
    pub questions: Option<PathBuf>,
}

/// Arguments for the `compound` subcommand.
#[derive(Args, Debug)]
pub struct CompoundArgs {
    #[command(subcommand)]
    pub command: CompoundCommands,
}

#[derive(Subcommand, Debug)]
pub enum CompoundCommands {
    /// Show a randomly chosen catalog compound.
    Random {
        /// Seed for the random number generator.
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
    },
    /// Show a catalog compound by name or formula.
    Show {
        /// Compound name or formula (e.g., 'Water', 'H2O').
        #[arg(required = true, value_name = "NAME|FORMULA")]
        query: String,
    },
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write the bundled catalogs into the data directory so they can be edited.
    Init {
        /// Overwrite catalog files that already exist.
        #[arg(long)]
        force: bool,
    },
    /// Show the absolute path to the local data directory.
    Path,
    /// Set a custom absolute path for the local data directory.
    SetPath {
        /// The new path to use for storing data files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the data path to its default, OS-specific location.
    ResetPath,
}
