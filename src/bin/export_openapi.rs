//! Export OpenAPI specification to JSON file
//!
//! Usage:
//!   cargo run --bin export_openapi > openapi.json
//!
//! Or with file output:
//!   cargo run --bin export_openapi -- --output docs/openapi.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use utoipa::OpenApi;

use minimal_api_bench::gateway::openapi::ApiDoc;

#[derive(Parser, Debug)]
#[command(name = "export_openapi", about = "Print or write the OpenAPI document")]
struct Args {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let json = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("❌ Failed to serialize OpenAPI spec: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &json) {
                eprintln!("❌ Failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            eprintln!("✅ OpenAPI spec exported to: {}", path.display());
        }
        None => println!("{}", json),
    }

    ExitCode::SUCCESS
}
