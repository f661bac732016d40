//! cloudsdk CLI - inspect the API definitions and models, validate payloads
//! and call read-only endpoints.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cloudsdk", version)]
#[command(about = "Typed clients for Azure Monitor, Intersight, OCI and XClarity", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available APIs
    Apis,

    /// List the endpoints of an API
    Operations {
        /// API name, e.g. "oci"
        #[arg(value_name = "API")]
        api: String,
    },

    /// Show a model's attribute map and constraints
    Describe {
        /// Model name, e.g. "KubernetesSysConfigPolicy"
        #[arg(value_name = "MODEL")]
        model: String,
    },

    /// Validate a JSON payload against a model
    Validate {
        #[arg(value_name = "MODEL")]
        model: String,

        /// JSON file to check ("-" reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Call a GET endpoint and print the response body
    Get {
        #[arg(value_name = "API")]
        api: String,

        /// Endpoint id, e.g. "GetVcn"
        #[arg(value_name = "ENDPOINT")]
        endpoint: String,

        /// Path parameter (repeatable: --param vcnId=ocid1...)
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = commands::parse_key_value)]
        params: Vec<(String, String)>,

        /// Query parameter (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = commands::parse_key_value)]
        query: Vec<(String, String)>,

        /// Client configuration file (YAML or TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,cloudsdk=info,cloudsdk_models=info".to_string(),
            2 => "info,cloudsdk=debug,cloudsdk_models=debug".to_string(),
            _ => "debug,cloudsdk=trace,cloudsdk_models=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    match cli.command {
        Commands::Apis => print!("{}", commands::list_apis()),
        Commands::Operations { api } => print!("{}", commands::list_operations(&api)?),
        Commands::Describe { model } => print!("{}", commands::describe_model(&model)?),
        Commands::Validate { model, input } => {
            let report = commands::validate_payload(&model, &input)?;
            print!("{}", report.render());
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Get {
            api,
            endpoint,
            params,
            query,
            config,
        } => {
            let body = commands::get(&api, &endpoint, &params, &query, config.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
