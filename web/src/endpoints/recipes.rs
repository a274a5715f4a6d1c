/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use recipes_core::input::validate_new_recipe;
use recipes_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

pub async fn get_list(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MRecipe>>> {
    let recipes = state.store.list().await?;

    Ok(Json(recipes))
}

pub async fn post_create(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeRecipeRequest>, JsonRejection>,
) -> WebResult<Json<MRecipe>> {
    let Json(body) = body?;
    tracing::debug!(?body, "POST /recipes/create");

    let recipe = validate_new_recipe(
        body.title,
        body.description,
        body.ingredients,
        body.instructions,
    )?;

    let recipe = state.store.insert(recipe).await?;
    tracing::info!(id = recipe.id, "Created recipe");

    Ok(Json(recipe))
}

pub async fn put_recipe(
    state: State<Arc<ServerState>>,
    recipe_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<RecipeChanges>, JsonRejection>,
) -> WebResult<Json<MRecipe>> {
    let Path(recipe_id) = recipe_id?;
    let Json(body) = body?;

    let recipe = state
        .store
        .update(recipe_id, body)
        .await?
        .ok_or_else(|| WebError::not_found("Recipe"))?;

    tracing::info!(id = recipe.id, "Updated recipe");

    Ok(Json(recipe))
}

pub async fn delete_recipe(
    state: State<Arc<ServerState>>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> WebResult<Json<MessageResponse>> {
    let Path(recipe_id) = recipe_id?;

    let removed = state.store.delete(recipe_id).await?;

    if removed == 0 {
        tracing::debug!(id = recipe_id, "No recipe matched delete");
    } else {
        tracing::info!(id = recipe_id, "Deleted recipe");
    }

    let res = MessageResponse {
        message: "Recipe deleted successfully".to_string(),
    };

    Ok(Json(res))
}
