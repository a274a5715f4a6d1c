/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MakeRecipeRequest {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

pub async fn list(config: &RequestConfig) -> ConnectorResult<Vec<Recipe>> {
    let res = get_client(config, "recipes/list", RequestType::GET)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn create(config: &RequestConfig, recipe: &MakeRecipeRequest) -> ConnectorResult<Recipe> {
    let res = get_client(config, "recipes/create", RequestType::POST)
        .json(recipe)
        .send()
        .await?;

    parse_response(res).await
}

/// Sends the full record; the server keys the update on the path id.
pub async fn update(config: &RequestConfig, recipe: &Recipe) -> ConnectorResult<Recipe> {
    let res = get_client(
        config,
        &format!("recipes/{}", recipe.id),
        RequestType::PUT,
    )
    .json(recipe)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<MessageResponse> {
    let res = get_client(config, &format!("recipes/{}", id), RequestType::DELETE)
        .send()
        .await?;

    parse_response(res).await
}
