use std::path::PathBuf;
use std::process;

use bank_statement::statement::{Statement, UBER_TRIP};
use clap::Parser;
use log::{error, info};

/// Total the outgoing payments to one merchant on a tab separated bank statement.
#[derive(Parser)]
struct Cli {
    /// Statement export, first row is the header
    #[clap(default_value = "bankstatement")]
    input: PathBuf,
    /// Exact description of the payments to total
    #[clap(long, default_value = UBER_TRIP)]
    description: String,
    /// Write the matched payments before the total
    #[clap(long)]
    list: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "totalling `{}` payments in {}",
        cli.description,
        cli.input.display()
    );
    let statement = Statement::from_path(&cli.input)?;

    if cli.list {
        Statement::serialize(&statement.payments_to(&cli.description), std::io::stdout())?;
    }

    println!("{}", statement.pounds_paid_to(&cli.description));
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
