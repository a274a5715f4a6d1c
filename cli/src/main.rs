/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::process::exit;

#[tokio::main]
pub async fn main() {
    match recipes_cli::commands::run_cli().await {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    }
}
