//! Minimal API Bench server
//!
//! ```text
//! minimal_api_bench [--env dev] [--host 127.0.0.1] [--port 5003]
//! ```
//!
//! Reads `config/<env>.yaml`, installs logging, then serves
//! `GET /users`, `GET /benchmark`, `GET /health` and Swagger UI at `/docs`.

use std::process::ExitCode;

use clap::Parser;

use minimal_api_bench::config::AppConfig;
use minimal_api_bench::error::AppError;
use minimal_api_bench::{BUILD_VERSION, gateway, logging};

#[derive(Parser, Debug)]
#[command(name = "minimal_api_bench", version, about = "Synthetic users + CPU benchmark HTTP API")]
struct Cli {
    /// Config environment, loads config/<ENV>.yaml
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Override gateway.host
    #[arg(long)]
    host: Option<String>,

    /// Override gateway.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let app_config = AppConfig::load(&cli.env)?.with_overrides(cli.host, cli.port);
    let _log_guard = logging::init_logging(&app_config)?;

    let workers = app_config.gateway.worker_threads();
    tracing::info!(
        "Starting minimal_api_bench ({}) in {} mode",
        BUILD_VERSION,
        cli.env
    );
    tracing::info!("Using {} worker threads", workers);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    let result = runtime.block_on(gateway::run_server(&app_config.gateway));
    if let Err(ref e) = result {
        tracing::error!("{}", e);
    }
    result
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ FATAL: {}", e);
            ExitCode::FAILURE
        }
    }
}
