/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use recipes_core::store::{DatabaseStore, MemoryStore, RecipeStore};
use recipes_core::types::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 8082,
        serve_url: None,
        store: StoreBackend::Memory,
        supabase_url: None,
        supabase_key: None,
        supabase_key_file: None,
        supabase_table: "recipes".to_string(),
        database_url: None,
        database_url_file: None,
        sentry_dsn: None,
    }
}

pub fn recipe(id: i64, title: &str, ingredients: &[&str]) -> MRecipe {
    MRecipe {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: vec!["Step 1".to_string()],
    }
}

pub fn create_state(store: Arc<dyn RecipeStore>) -> Arc<ServerState> {
    Arc::new(ServerState {
        store,
        cli: create_mock_cli(),
    })
}

pub fn create_mock_state(recipes: Vec<MRecipe>) -> Arc<ServerState> {
    create_state(Arc::new(MemoryStore::with_recipes(recipes)))
}

pub fn create_db_state(db: DatabaseConnection) -> Arc<ServerState> {
    create_state(Arc::new(DatabaseStore::new(db)))
}

pub fn create_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::create_router(state)).unwrap()
}
