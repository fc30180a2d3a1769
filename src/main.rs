use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voucher_cli::cli::{
    handle_convert_command, handle_generate_command, handle_inspect_command, ConvertArgs,
    GenerateArgs, InspectArgs,
};

#[derive(Parser)]
#[command(
    name = "voucher",
    version,
    about = "Cash voucher generator for double-entry ledger exports",
    long_about = "voucher-cli reads a loosely structured CSV export of \
                  bookkeeping entries, finds the transactions that moved \
                  physical cash, and derives one printable voucher record \
                  per transaction: a receipt when cash was received, a \
                  payment voucher when cash was paid out."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate voucher records from a ledger export
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show normalized rows and voucher grouping for an export
    Inspect(InspectArgs),

    /// Convert an amount to its capital-numeral form (大写金额)
    Convert(ConvertArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => handle_generate_command(args)?,
        Commands::Inspect(args) => handle_inspect_command(args)?,
        Commands::Convert(args) => handle_convert_command(args)?,
    }

    Ok(())
}
