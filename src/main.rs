use anyhow::Result;
use clap::{Parser, Subcommand};
use coincards::cli::OutputFormat;
use coincards::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Print cards as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List currencies whose id or name contains QUERY
    Currencies {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show exchange rates for currency codes containing QUERY
    Rates {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the buy price for a pair such as BTC-USD
    Buy { pair: String },
    /// Show the sell price for a pair such as BTC-USD
    Sell { pair: String },
    /// Render a selector value: currencies, exchange-rates, buy-price-<PAIR>, sell-price-<PAIR>
    Show {
        selector: String,
        #[arg(default_value = "")]
        query: String,
    },
    /// Search interactively
    Interactive,
}

impl From<Commands> for coincards::AppCommand {
    fn from(cmd: Commands) -> coincards::AppCommand {
        match cmd {
            Commands::Currencies { query } => coincards::AppCommand::Currencies { query },
            Commands::Rates { query } => coincards::AppCommand::Rates { query },
            Commands::Buy { pair } => coincards::AppCommand::Buy { pair },
            Commands::Sell { pair } => coincards::AppCommand::Sell { pair },
            Commands::Show { selector, query } => coincards::AppCommand::Show { selector, query },
            Commands::Interactive => coincards::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Cards
    };

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => coincards::cli::setup::setup_at_path(path),
            None => coincards::cli::setup::setup(),
        },
        cmd => {
            let command = cmd.map_or(coincards::AppCommand::Load, Into::into);
            coincards::run_command(command, cli.config_path.as_deref(), format).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
