/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RecipeStore, StoreResult};
use crate::types::*;
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

#[derive(Debug)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeStore for DatabaseStore {
    async fn list(&self) -> StoreResult<Vec<MRecipe>> {
        let recipes = ERecipe::find()
            .order_by_desc(CRecipe::Id)
            .all(&self.db)
            .await?;

        Ok(recipes)
    }

    async fn insert(&self, recipe: NewRecipe) -> StoreResult<MRecipe> {
        let recipe = ARecipe {
            id: NotSet,
            title: Set(recipe.title),
            description: Set(recipe.description),
            ingredients: Set(recipe.ingredients),
            instructions: Set(recipe.instructions),
        };

        Ok(recipe.insert(&self.db).await?)
    }

    async fn update(&self, id: i64, changes: RecipeChanges) -> StoreResult<Option<MRecipe>> {
        let recipe = ARecipe {
            id: Unchanged(id),
            title: changes.title.map_or(NotSet, Set),
            description: changes.description.map_or(NotSet, Set),
            ingredients: changes.ingredients.map_or(NotSet, Set),
            instructions: changes.instructions.map_or(NotSet, Set),
        };

        match recipe.update(&self.db).await {
            Ok(recipe) => Ok(Some(recipe)),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let res = ERecipe::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
