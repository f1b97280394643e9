//! `custody`: command-line entry point for the custodial wallet core.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use custody_types::Network;
use custody_utils::LogFormat;
use serde::Serialize;

use crate::config::{CustodyConfig, Overrides};

#[derive(Parser)]
#[command(name = "custody", about = "Custodial Nano/Banano wallet core")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "CUSTODY_CONFIG")]
    config: Option<PathBuf>,

    /// Network: "nano" or "banano".
    #[arg(long, env = "CUSTODY_NETWORK")]
    network: Option<Network>,

    /// Work peer URLs (comma-separated).
    #[arg(long = "peer", global = true, env = "CUSTODY_WORK_PEERS", value_delimiter = ',')]
    peers: Vec<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CUSTODY_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log filter, e.g. "info" or "debug,custody_work=trace".
    #[arg(long, env = "CUSTODY_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Wallet operations.
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
    /// Account operations.
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Proof-of-work operations.
    Work {
        #[command(subcommand)]
        action: WorkAction,
    },
}

#[derive(clap::Subcommand)]
enum WalletAction {
    /// Create a wallet and print its seed and accounts.
    Create {
        /// 64 hex characters. A random seed is generated when omitted.
        #[arg(long)]
        seed: Option<String>,
        /// Accounts to create beyond index 0.
        #[arg(long, default_value_t = 0)]
        accounts: u32,
    },
}

#[derive(clap::Subcommand)]
enum AccountAction {
    /// Print the accounts a seed derives.
    Derive {
        #[arg(long)]
        seed: String,
        #[arg(long, default_value_t = 0)]
        index: u32,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

#[derive(clap::Subcommand)]
enum WorkAction {
    /// Race the work peers for a block hash.
    Generate {
        #[arg(long)]
        hash: String,
        /// 16 hex characters. Defaults to the network's threshold.
        #[arg(long)]
        difficulty: Option<String>,
        /// Use the receive threshold when no difficulty is given.
        #[arg(long)]
        receive: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CustodyConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CustodyConfig::default(),
    };
    let config = file_config.with_overrides(Overrides {
        network: cli.network,
        work_peers: cli.peers,
        log_format: cli.log_format,
        log_level: cli.log_level,
    });

    custody_utils::init_logging(config.log_format, &config.log_level)
        .context("initialising logging")?;
    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Wallet { action } => match action {
            WalletAction::Create { seed, accounts } => {
                print_json(&commands::wallet_create(&config, seed.as_deref(), accounts)?)?;
            }
        },
        Command::Account { action } => match action {
            AccountAction::Derive { seed, index, count } => {
                print_json(&commands::account_derive(config.network, &seed, index, count)?)?;
            }
        },
        Command::Work { action } => match action {
            WorkAction::Generate {
                hash,
                difficulty,
                receive,
            } => {
                tracing::info!(
                    peers = config.work_peers.len(),
                    timeout_secs = config.work_timeout_secs,
                    "generating work"
                );
                let report =
                    commands::work_generate(&config, &hash, difficulty.as_deref(), receive).await?;
                print_json(&report)?;
            }
        },
    }

    Ok(())
}
