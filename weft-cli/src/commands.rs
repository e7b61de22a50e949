use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use weft_config::WeftConfig;
use weft_core::{Environment, LogLevel, Logger};

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file to load instead of config/weft.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send messages through the environment's logger
    Emit(EmitArgs),
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct EmitArgs {
    /// Severity name (verbose, info, warning, error, fatal) or number
    #[arg(short, long, default_value = "info", allow_negative_numbers = true)]
    pub level: LogLevel,
    /// Source file reported with each message
    #[arg(long, default_value = "weft-cli")]
    pub file: String,
    /// Source line reported with each message
    #[arg(long, default_value_t = 0)]
    pub line: u32,
    /// Messages to emit, one log record each
    #[arg(required = true)]
    pub message: Vec<String>,
}

pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Emit(args) => {
            emit(&config, &args)?;
        }
        Commands::Config => print!("{}", render_config(&config)?),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> CliResult<WeftConfig> {
    let config = match path {
        Some(path) => WeftConfig::load_from_path(path)?,
        None => WeftConfig::load()?,
    };
    Ok(config)
}

fn render_config(config: &WeftConfig) -> CliResult<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Initializes logging, installs a default environment and sends every
/// message through its logger. Returns how many messages were sent.
fn emit(config: &WeftConfig, args: &EmitArgs) -> CliResult<usize> {
    weft_telemetry::init(&config.logging)?;

    let env = Environment::new();
    env.install()?;

    let logger = env.logger();
    for message in &args.message {
        logger.log_message(args.level, &args.file, args.line, message);
    }

    debug!(count = args.message.len(), level = %args.level, "Messages emitted");
    Ok(args.message.len())
}
