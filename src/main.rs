mod center;
mod error;
mod layout;

use crate::center::center_of_file;
use crate::layout::HETATM_LAYOUT;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Structure file with fixed-column heteroatom records.
    #[arg(default_value = "faj_atoms.txt")]
    file: PathBuf,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let center = center_of_file(&args.file, &HETATM_LAYOUT)
        .with_context(|| format!("failed to compute the center of mass of {:?}", args.file))?;
    log::info!("averaged {} heteroatom records", center.n_records);

    println!("center of mass (x, y, z): {center}");

    Ok(())
}
