mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, OutputFormat};
use futures::future::join_all;
use pokeapi::{lookup, resource_names, ApiError, ClientConfig, PokeApi};
use serde::Serialize;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command-line client for PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokeapi", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// API root to query instead of https://pokeapi.co/api/v2
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Output format for records and pages
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Persist the options given on this invocation as defaults
    #[arg(long, global = true)]
    save_config: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the resource names accepted by `get` and `list`
    Resources,

    /// Fetch one or more records by id
    Get {
        /// Resource name, e.g. `berry` or `pokemon-species`
        resource: String,

        #[arg(required = true, allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Fetch one page of summaries
    List {
        resource: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Show where a Pokémon can be encountered in the wild
    Encounters {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl Args {
    fn overrides(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone(),
            output: self.output,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = Config::log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {e}", log_path.display());
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("pokeapi started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn build_client(config: &Config) -> Result<PokeApi> {
    let mut client_config = ClientConfig::default()
        .with_base_url(config.effective_base_url())?
        .with_user_agent(config.effective_user_agent());

    if let Some(secs) = config.timeout_secs {
        client_config = client_config.with_timeout(Duration::from_secs(secs));
    }

    tracing::info!("Using API at {}", client_config.base_url());

    PokeApi::new(client_config).context("Failed to create PokeAPI client")
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// One-line message for a failed call, naming what was requested
fn describe_failure(target: &str, err: &ApiError) -> String {
    match err {
        ApiError::NotFound => format!("{target}: not found"),
        ApiError::ClientError { status, .. } => format!("{target}: request rejected (HTTP {status})"),
        ApiError::ServerError { status, .. } => format!("{target}: server error (HTTP {status})"),
        ApiError::Transport(e) => format!("{target}: network failure: {e}"),
        other => format!("{target}: {other}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut config = Config::load();
    config.merge(args.overrides());
    if args.save_config {
        config.save()?;
    }

    let output = config.effective_output();

    match &args.command {
        Command::Resources => {
            for name in resource_names() {
                println!("{name}");
            }
        }
        Command::Get { resource, ids } => {
            lookup(resource)?;
            let api = build_client(&config)?;

            let results = join_all(ids.iter().map(|&id| api.get_resource(resource, id))).await;

            let mut failures = 0;
            for (id, result) in ids.iter().zip(results) {
                match result {
                    Ok(record) => println!("{}", render(&record, output)?),
                    Err(e) => {
                        failures += 1;
                        eprintln!("{}", describe_failure(&format!("{resource} {id}"), &e));
                    }
                }
            }

            if failures > 0 {
                bail!("{failures} of {} requests failed", ids.len());
            }
        }
        Command::List {
            resource,
            offset,
            limit,
        } => {
            lookup(resource)?;
            let api = build_client(&config)?;

            match api.get_resource_list(resource, *offset, *limit).await {
                Ok(page) => println!("{}", render(&page, output)?),
                Err(e) => bail!(describe_failure(&format!("{resource} list"), &e)),
            }
        }
        Command::Encounters { id } => {
            let api = build_client(&config)?;

            match api.get_pokemon_encounters(*id).await {
                Ok(encounters) => println!("{}", render(&encounters, output)?),
                Err(e) => bail!(describe_failure(&format!("pokemon {id} encounters"), &e)),
            }
        }
    }

    Ok(())
}
