/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use recipes_core::{init_cli, init_state};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = init_cli();

    // started before the store connects so startup failures are reported too
    let _guard = cli.sentry_dsn.as_deref().map(sentry::init);

    let state = match init_state(cli).await {
        Ok(state) => state,
        Err(e) => {
            sentry::capture_message(&format!("{:#}", e), sentry::Level::Error);
            return Err(e);
        }
    };

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
