//! Command-line harness for the handler logger.
//!
//! - `emit`: write one record at a level, honouring `LOG_LEVEL`
//! - `invoke`: run an echo handler on a JSON event through the wrapping form

use std::io::Read;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use serde_json::{json, Value};

use handler_log::observability::logging::init_diagnostics;
use handler_log::{logger, wrap, ErrorInfo, Fields, Level};

#[derive(Parser)]
#[command(name = "handler-log")]
#[command(about = "Emit structured records and run instrumented handlers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a single record
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        #[arg(short, long)]
        message: String,

        /// JSON object attached as record data
        #[arg(short, long)]
        data: Option<String>,

        /// Error name; rejected unless the level is warn or error
        #[arg(long, requires = "error_message")]
        error_name: Option<String>,

        /// Error message; rejected unless the level is warn or error
        #[arg(long)]
        error_message: Option<String>,
    },
    /// Run an echo handler on an event, logging trigger and response
    Invoke {
        /// JSON event; read from stdin when omitted
        #[arg(short, long)]
        event: Option<String>,

        /// Make the handler fail
        #[arg(long)]
        fail: bool,
    },
}

impl Cli {
    /// Checks clap cannot express: error details only fit warn and error records.
    fn validate(&self) -> Result<(), String> {
        match &self.command {
            Commands::Emit {
                level: level @ (Level::Debug | Level::Info),
                error_message: Some(_),
                ..
            } => Err(format!(
                "--error-message cannot be used with --level {level}; use warn or error"
            )),
            _ => Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_diagnostics();
    let cli = Cli::parse();
    if let Err(msg) = cli.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, msg).exit();
    }

    match cli.command {
        Commands::Emit {
            level,
            message,
            data,
            error_name,
            error_message,
        } => {
            let data = data
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()?
                .map(|value| handler_log::logger::fields_from(&value))
                .transpose()?;
            let error = error_message
                .map(|msg| ErrorInfo::new(error_name.unwrap_or_else(|| "Error".into()), msg));
            emit(level, &message, data, error)?;
        }
        Commands::Invoke { event, fail } => {
            let raw = match event {
                Some(raw) => raw,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let event: Value = serde_json::from_str(&raw)?;

            let handler = wrap(logger().clone(), |event: Value, fail: bool| async move {
                if fail {
                    return Err::<Value, Box<dyn std::error::Error + Send + Sync>>(
                        "handler failed".into(),
                    );
                }
                Ok(json!({ "ok": true, "input": event }))
            });
            handler.call(event, fail).await?;
        }
    }

    Ok(())
}

fn emit(
    level: Level,
    message: &str,
    data: Option<Fields>,
    error: Option<ErrorInfo>,
) -> Result<(), handler_log::LogError> {
    let logger = logger();
    match level {
        Level::Debug => logger.debug(message, data),
        Level::Info => logger.info(message, data),
        Level::Warn => logger.warn_with(message, data, error),
        Level::Error => logger.error_with(message, data, error),
    }
}
