//! Command implementations. Each returns a serializable report that `main`
//! prints as JSON.

use std::sync::Arc;

use anyhow::Context;
use custody_crypto::{derive_keypair, encode_address, generate_seed, parse_seed};
use custody_nullables::NullStore;
use custody_types::Network;
use custody_wallet::AccountRegistry;
use custody_work::thresholds::{default_difficulty, format_difficulty, WorkKind};
use custody_work::{HttpPeerTransport, WorkCoordinator};
use serde::Serialize;

use crate::config::CustodyConfig;

#[derive(Debug, Serialize)]
pub struct AccountReport {
    pub index: Option<u32>,
    pub address: String,
    pub public_key: String,
}

#[derive(Debug, Serialize)]
pub struct WalletReport {
    pub id: String,
    pub seed: String,
    pub network: Network,
    pub accounts: Vec<AccountReport>,
}

#[derive(Debug, Serialize)]
pub struct WorkReport {
    pub hash: String,
    pub difficulty: String,
    pub work: String,
}

/// Create a wallet (random seed unless one is given) plus `extra` accounts
/// beyond index 0.
pub fn wallet_create(
    config: &CustodyConfig,
    seed: Option<&str>,
    extra: u32,
) -> anyhow::Result<WalletReport> {
    let seed = match seed {
        Some(seed) => seed.to_string(),
        None => generate_seed().context("generating seed")?.to_hex(),
    };

    // Nothing is persisted: the report is the only record of the wallet.
    let registry = AccountRegistry::with_store(NullStore::new(), config.registry_config());
    let wallet = registry.wallet_create(&seed)?;
    if extra > 0 {
        registry.accounts_create(Some(&wallet), extra)?;
    }

    let accounts = registry
        .accounts(Some(&wallet))?
        .into_iter()
        .map(|a| AccountReport {
            index: a.index,
            address: a.address.to_string(),
            public_key: a.public_key.to_hex(),
        })
        .collect();

    Ok(WalletReport {
        id: wallet.id.to_string(),
        seed: wallet.seed.to_hex(),
        network: config.network,
        accounts,
    })
}

/// Derive `count` accounts starting at `index` without storing anything.
pub fn account_derive(
    network: Network,
    seed: &str,
    index: u32,
    count: u32,
) -> anyhow::Result<Vec<AccountReport>> {
    anyhow::ensure!(count > 0, "count must be at least 1");
    let seed = parse_seed(seed).context("seed must be 64 hex characters")?;
    let last = index
        .checked_add(count - 1)
        .context("index range overflows u32")?;

    Ok((index..=last)
        .map(|i| {
            let kp = derive_keypair(&seed, i);
            AccountReport {
                index: Some(i),
                address: encode_address(&kp.public, network).to_string(),
                public_key: kp.public.to_hex(),
            }
        })
        .collect())
}

/// Race the configured peers for work on `hash`.
pub async fn work_generate(
    config: &CustodyConfig,
    hash: &str,
    difficulty: Option<&str>,
    receive: bool,
) -> anyhow::Result<WorkReport> {
    let difficulty = match difficulty {
        Some(d) => d.to_string(),
        None => {
            let kind = if receive { WorkKind::Receive } else { WorkKind::Send };
            format_difficulty(default_difficulty(config.network, kind))
        }
    };

    let transport = HttpPeerTransport::new().context("building HTTP client")?;
    let coordinator = WorkCoordinator::new(Arc::new(transport), config.work_peers.clone())
        .with_timeout(config.work_timeout())
        .with_verification(config.verify_work);

    let work = coordinator.generate(hash, &difficulty).await?;
    Ok(WorkReport {
        hash: hash.to_string(),
        difficulty,
        work,
    })
}
