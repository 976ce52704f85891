use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// A fast CLI for browsing TheMealDB recipes
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(version, propagate_version = true)]
#[command(about = "A fast CLI for browsing TheMealDB recipes")]
pub struct Cli {
    /// Output format for command results (defaults to output.format from config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Override the API base URL
    #[arg(long, env = "COOKBOOK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Log request and cache activity to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value, falling back to pretty
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List meal categories
    #[command(alias = "c")]
    Categories(CategoriesArgs),

    /// List meals in a category
    #[command(alias = "m")]
    Meals(MealsArgs),

    /// Show full details of a meal
    Meal(MealArgs),

    /// Download an image through the in-memory cache
    #[command(alias = "img")]
    Image(ImageArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the categories command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Filter categories by name
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the meals command
#[derive(Args)]
pub struct MealsArgs {
    /// Category name (e.g. Seafood)
    pub category: String,

    /// Maximum number of meals to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the meal command
#[derive(Args)]
pub struct MealArgs {
    /// Meal id (e.g. 52772)
    pub id: String,
}

/// Arguments for the image command
#[derive(Args)]
pub struct ImageArgs {
    /// Absolute image URL
    pub url: String,

    /// Save the decoded image to a file (format from extension)
    #[arg(long)]
    pub save: Option<String>,

    /// Fetch the same URL this many times to exercise the cache
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.base_url)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
