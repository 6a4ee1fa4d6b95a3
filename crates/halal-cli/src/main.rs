mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "halal",
    version,
    about = "Halal food identifier: check E-codes, ingredients and products"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference table (CSV, XLSX or JSON). Defaults to the built-in table
    #[arg(long, global = true, env = "HALAL_REFERENCE", value_name = "FILE")]
    reference: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up E-codes or ingredient names (comma-separated)
    Check {
        /// E-code(s) or ingredient name(s), e.g. "E120, gelatin"
        terms: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Analyze a free-text ingredient list and give an overall verdict
    Analyze {
        /// Ingredient list, e.g. "Sugar, cocoa butter, emulsifier (E471)"
        text: String,

        /// The product carries a halal certification label
        #[arg(long)]
        certified: bool,

        /// Alcohol content as declared on the product
        #[arg(long, value_name = "VALUE")]
        alcohol: Option<Decimal>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Look up a product by barcode (8, 12 or 13 digits) and classify it
    Barcode {
        /// Barcode digits
        barcode: String,

        /// Base URL of the product-data service
        #[arg(
            long,
            env = "HALAL_PRODUCT_API",
            default_value = halal_core::sources::openfoodfacts::DEFAULT_BASE_URL
        )]
        api_url: String,

        /// Lookup timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Ask the assistant a question
    Ask {
        /// Free-text question, e.g. "how does the app work" or "E471"
        query: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect reference data
    Reference {
        #[command(subcommand)]
        action: ReferenceAction,
    },
}

#[derive(Subcommand)]
enum ReferenceAction {
    /// Show the size of the loaded reference table
    Stats,
    /// Validate a reference file without using it
    Validate {
        /// Path to CSV, XLSX or JSON reference file
        file: PathBuf,
    },
    /// List the keywords that flag unknown ingredients as doubtful
    Keywords,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: failed to install log subscriber");
    }

    let reference = cli.reference;
    let result = match cli.command {
        Commands::Check { terms, output } => commands::check::run(reference, &terms, &output),
        Commands::Analyze {
            text,
            certified,
            alcohol,
            output,
        } => commands::analyze::run(reference, &text, certified, alcohol, &output),
        Commands::Barcode {
            barcode,
            api_url,
            timeout,
            output,
        } => commands::barcode::run(reference, &barcode, api_url, timeout, &output),
        Commands::Ask { query, output } => commands::ask::run(reference, &query, &output),
        Commands::Reference { action } => match action {
            ReferenceAction::Stats => commands::reference::stats(reference),
            ReferenceAction::Validate { file } => commands::reference::validate(&file),
            ReferenceAction::Keywords => commands::reference::keywords(),
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", e.category());
        std::process::exit(1);
    }
}
