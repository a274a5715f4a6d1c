/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Storage port for recipes and the adapters behind it.
//!
//! Handlers only ever talk to [`RecipeStore`]. Which datastore sits behind it
//! is decided once at startup by [`connect_store`].

mod database;
mod memory;
mod supabase;

pub use database::DatabaseStore;
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use crate::database::connect_db;
use crate::input::load_secret;
use crate::types::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::DbErr;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] DbErr),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error("Datastore did not return the written recipe")]
    MissingRecord,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// All recipes, highest id first.
    async fn list(&self) -> StoreResult<Vec<MRecipe>>;

    /// Inserts one recipe and returns it with the id the datastore assigned.
    async fn insert(&self, recipe: NewRecipe) -> StoreResult<MRecipe>;

    /// `None` when no recipe has `id`.
    async fn update(&self, id: i64, changes: RecipeChanges) -> StoreResult<Option<MRecipe>>;

    /// Number of recipes removed; zero is not an error.
    async fn delete(&self, id: i64) -> StoreResult<u64>;
}

pub async fn connect_store(cli: &Cli) -> Result<Arc<dyn RecipeStore>> {
    let store: Arc<dyn RecipeStore> = match cli.store {
        StoreBackend::Supabase => {
            let url = cli
                .supabase_url
                .clone()
                .context("No datastore url provided (RECIPES_SUPABASE_URL)")?;

            let key = if let Some(file) = &cli.supabase_key_file {
                load_secret(file).context("Failed to read datastore key from file")?
            } else if let Some(key) = &cli.supabase_key {
                key.clone()
            } else {
                anyhow::bail!("No datastore key provided (RECIPES_SUPABASE_KEY)")
            };

            Arc::new(SupabaseStore::new(url, key, cli.supabase_table.clone()))
        }

        StoreBackend::Database => Arc::new(DatabaseStore::new(connect_db(cli).await?)),

        StoreBackend::Memory => {
            tracing::warn!("Using in-memory recipe store, data is lost on exit");
            Arc::new(MemoryStore::default())
        }
    };

    Ok(store)
}
