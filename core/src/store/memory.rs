/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RecipeStore, StoreResult};
use crate::types::*;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, MRecipe>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    /// Seeds the store; ids assigned afterwards continue after the highest seeded id.
    pub fn with_recipes(recipes: impl IntoIterator<Item = MRecipe>) -> Self {
        let rows: BTreeMap<i64, MRecipe> = recipes.into_iter().map(|r| (r.id, r)).collect();
        let last_id = rows.keys().next_back().copied().unwrap_or_default();

        Self {
            table: Mutex::new(Table { rows, last_id }),
        }
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<MRecipe>> {
        let table = self.table.lock().await;
        Ok(table.rows.values().rev().cloned().collect())
    }

    async fn insert(&self, recipe: NewRecipe) -> StoreResult<MRecipe> {
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let recipe = MRecipe {
            id: table.last_id,
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        };

        table.rows.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: i64, changes: RecipeChanges) -> StoreResult<Option<MRecipe>> {
        let mut table = self.table.lock().await;

        Ok(table.rows.get_mut(&id).map(|recipe| {
            changes.apply(recipe);
            recipe.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut table = self.table.lock().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
