/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod store;
pub mod types;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use store::connect_store;
use tracing_subscriber::EnvFilter;
use types::*;

pub fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", cli.log_level)));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Parses configuration and sets up logging. Nothing is connected yet.
pub fn init_cli() -> Cli {
    let cli = Cli::parse();
    init_logging(&cli);
    cli
}

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!(
        store = ?cli.store,
        "Starting Recipes Server on {}:{}",
        cli.ip,
        cli.port
    );

    let store = connect_store(&cli).await?;

    Ok(Arc::new(ServerState { store, cli }))
}
