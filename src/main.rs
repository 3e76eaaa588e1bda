// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::Path;
use std::sync::Arc;

use retrograde::api::{serve, AppState};
use retrograde::config::{load_and_validate_config, Config};
use retrograde::observability::messages::server::{ConfigDefaulted, ConfigLoaded};
use retrograde::observability::messages::StructuredLog;
use retrograde::storage::MemoryHistoryStore;
use retrograde::transforms::TransformRegistry;

const DEFAULT_CONFIG_PATH: &str = "configs/server.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml]", args[0]);
        eprintln!("Example: {} configs/server.yaml", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => {
            let cfg = load_and_validate_config(path)?;
            ConfigLoaded {
                path: path.as_str(),
            }
            .log();
            cfg
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            let cfg = load_and_validate_config(DEFAULT_CONFIG_PATH)?;
            ConfigLoaded {
                path: DEFAULT_CONFIG_PATH,
            }
            .log();
            cfg
        }
        None => {
            ConfigDefaulted {
                path: DEFAULT_CONFIG_PATH,
            }
            .log();
            Config::default()
        }
    };

    let registry =
        TransformRegistry::from_config(&config).map_err(|reason| anyhow::anyhow!(reason))?;
    let store = Arc::new(MemoryHistoryStore::new());
    let state = Arc::new(AppState::from_config(&config, store, registry));

    serve(&config, state).await
}
