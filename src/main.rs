use anyhow::Result;
use clap::{Parser, Subcommand};

use contas_cli::cli::{run_logins, run_pro_shell, run_simple_shell};
use contas_cli::config::ContasPaths;

#[derive(Parser)]
#[command(
    name = "contas",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "contas records income and expense transactions, keeps them \
                  in an append-only CSV file or a SQLite database, and prints \
                  summaries, statements, and per-category spending reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flat-file ledger: record transactions in an append-only CSV
    #[command(alias = "csv")]
    Simple,

    /// Database ledger: edit, delete, filter, and category reports
    #[command(alias = "db")]
    Pro,

    /// Show recent login-history events, newest first
    Logins {
        /// Maximum number of events to show
        #[arg(short, long, default_value_t = 100)]
        limit: u32,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = ContasPaths::new()?;

    match cli.command {
        Some(Commands::Simple) => run_simple_shell(&paths)?,
        Some(Commands::Pro) => run_pro_shell(&paths)?,
        Some(Commands::Logins { limit }) => run_logins(&paths, limit)?,
        Some(Commands::Config) => {
            println!("contas configuration");
            println!("====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("CSV ledger:     {}", paths.csv_file().display());
            println!("Database:       {}", paths.db_file().display());
        }
        None => {
            println!("contas - Terminal-based personal finance ledger");
            println!();
            println!("Run 'contas --help' for usage information.");
            println!("Run 'contas simple' for the CSV ledger.");
            println!("Run 'contas pro' for the database ledger.");
        }
    }

    Ok(())
}
