//! ssap-remote CLI
//!
//! Translates one command and prints the encoded frame to stdout:
//! - `register`: pairing request built from the stored config
//! - `send <json>`: a remote-control command, e.g. `{"command":"setVolume","level":42}`
//! - `settings <json>`: a Luna settings write, e.g. `{"command":"setPictureMode","mode":"vivid"}`

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use ssap_core::error::Result;
use ssap_core::{Command, SettingsCommand};
use ssap_remote::dispatch::{Dispatcher, UuidIds};
use ssap_remote::transport::StdoutTransport;
use ssap_remote::{config, obs};

#[derive(Debug, Parser)]
#[command(name = "ssap-remote", version, about = "Encode SSAP remote-control requests")]
struct Cli {
    /// Path to the YAML config.
    #[arg(long, default_value = "ssap.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Pairing request, resuming with the stored client key if present.
    Register,
    /// Remote-control command in tagged JSON form.
    Send { command: String },
    /// Luna settings write in tagged JSON form.
    Settings { command: String },
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_from_file(&cli.config)?;
    let dispatcher = Dispatcher::new(
        Arc::new(StdoutTransport::new()),
        Arc::new(UuidIds),
        &cfg.limits,
    );

    let id = match cli.action {
        Action::Register => dispatcher.send(&cfg.register_command()).await?,
        Action::Send { command } => dispatcher.send(&Command::from_json(&command)?).await?,
        Action::Settings { command } => {
            dispatcher
                .send_settings(&SettingsCommand::from_json(&command)?)
                .await?
        }
    };

    tracing::info!(%id, "frame written");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    obs::init_tracing();

    let cli = Cli::parse();
    tracing::info!(config = %cli.config.display(), "ssap-remote starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            ExitCode::FAILURE
        }
    }
}
