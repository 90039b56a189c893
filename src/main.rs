use clap::Parser;
use std::process::ExitCode;

use leakscan::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            // Exit 1 means "secrets detected"; a scan that never ran exits
            // 2, the same code clap uses for usage errors.
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
