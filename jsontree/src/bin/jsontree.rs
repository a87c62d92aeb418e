// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Check whether a file contains valid JSON.
#[derive(Parser)]
#[command(name = "jsontree", version, about, long_about = None)]
struct Cli {
    /// JSON file to validate
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match jsontree::parse_file(&cli.file) {
        Ok(value) => {
            log::info!("{} parsed as {}", cli.file.display(), value.type_name());
            println!("Valid JSON");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Invalid JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
