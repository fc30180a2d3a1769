//! `voucher generate` command handler
//!
//! Runs the full pipeline over a CSV ledger export and prints or writes the
//! resulting voucher records.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display;
use crate::error::{VoucherError, VoucherResult};
use crate::export;
use crate::reader;
use crate::services::Engine;

/// Output format for generated vouchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// CSV on stdout (or vouchers.csv under --out)
    Csv,
    /// JSON on stdout (or vouchers.json under --out)
    Json,
}

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the CSV ledger export
    pub file: PathBuf,

    /// Directory to write vouchers.csv and vouchers.json into
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// How to print records on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to a JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Handle the generate command
pub fn handle_generate_command(args: &GenerateArgs) -> VoucherResult<()> {
    let settings = Settings::load_or_default(args.config.as_deref())?;
    let table = reader::read_table_from_path(&args.file)?;
    let report = Engine::new(settings).run(&table)?;

    match args.format {
        OutputFormat::Table => {
            print!("{}", display::format_voucher_table(&report.records));
            println!();
        }
        OutputFormat::Csv => {
            let mut stdout = std::io::stdout();
            export::export_vouchers_csv(&report.records, &mut stdout)?;
        }
        OutputFormat::Json => {
            let mut stdout = std::io::stdout();
            export::export_vouchers_json(&report.records, &mut stdout)?;
        }
    }

    print!("{}", display::format_run_summary(&report));

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)
            .map_err(|e| VoucherError::Export(format!("cannot create {}: {}", dir.display(), e)))?;

        let csv_path = dir.join("vouchers.csv");
        let mut csv_file = std::fs::File::create(&csv_path)
            .map_err(|e| VoucherError::Export(e.to_string()))?;
        export::export_vouchers_csv(&report.records, &mut csv_file)?;

        let json_path = dir.join("vouchers.json");
        let mut json_file = std::fs::File::create(&json_path)
            .map_err(|e| VoucherError::Export(e.to_string()))?;
        export::export_vouchers_json(&report.records, &mut json_file)?;

        println!(
            "Wrote {} and {}",
            csv_path.display(),
            json_path.display()
        );
    }

    Ok(())
}
