use clap::Parser;
use fov_selector::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("fov_selector={}", args.get_log_level()))
            }),
        )
        .with_target(false)
        .init();

    match commands::run(&args) {
        Ok(Some(summary)) => {
            println!(
                "Selected {} of {} matching records ({} scanned)",
                summary.records_selected, summary.records_matched, summary.records_scanned
            );
            println!("Output written to {}", summary.output_path.display());
            process::exit(0);
        }
        Ok(None) => {
            // User aborted at a prompt; nothing was read or written
            println!("Aborted.");
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
