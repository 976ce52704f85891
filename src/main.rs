use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cookbook::cli::args::{Cli, Commands, CompletionsArgs, OutputFormat};
use cookbook::cli::commands;
use cookbook::config::Config;
use cookbook::error::CookbookError;
use cookbook::mealdb::MealDbClient;

/// Initialize the tracing subscriber; RUST_LOG wins over the CLI flags
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), CookbookError> {
    let cli = Cli::parse();

    // Handle completions command early (no config or client needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    init_tracing(cli.verbose, cli.quiet);

    let mut config = Config::load()?;
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => commands::config(&mut config, args, format)?,

        // All other commands need the API client
        _ => {
            if let Some(ref base_url) = cli.base_url {
                config.api.base_url = base_url.clone();
            }
            let client = MealDbClient::new(&config)?;

            match &cli.command {
                Commands::Categories(args) => commands::categories(&client, args, format).await?,
                Commands::Meals(args) => commands::meals(&client, args, format).await?,
                Commands::Meal(args) => commands::meal(&client, args, format).await?,
                Commands::Image(args) => commands::image(&client, args, format).await?,
                Commands::Config(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    Ok(())
}
