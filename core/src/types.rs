/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::{DEFAULT_PORT, DEFAULT_SUPABASE_TABLE};
use super::input::port_in_range;
use super::store::RecipeStore;
use clap::{Parser, ValueEnum};
use entity::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Parser, Debug, Clone)]
#[command(name = "Recipes", display_name = "Recipes", bin_name = "recipes-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "RECIPES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "RECIPES_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "RECIPES_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "RECIPES_PORT", value_parser = port_in_range, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Origin allowed to call the API from a browser. Any origin when unset.
    #[arg(long, env = "RECIPES_SERVE_URL")]
    pub serve_url: Option<String>,
    #[arg(long, env = "RECIPES_STORE", value_enum, default_value_t = StoreBackend::Supabase)]
    pub store: StoreBackend,
    #[arg(long, env = "RECIPES_SUPABASE_URL")]
    pub supabase_url: Option<String>,
    #[arg(long, env = "RECIPES_SUPABASE_KEY")]
    pub supabase_key: Option<String>,
    #[arg(long, env = "RECIPES_SUPABASE_KEY_FILE")]
    pub supabase_key_file: Option<String>,
    #[arg(long, env = "RECIPES_SUPABASE_TABLE", default_value = DEFAULT_SUPABASE_TABLE)]
    pub supabase_table: String,
    #[arg(long, env = "RECIPES_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "RECIPES_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "RECIPES_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// Hosted datastore reached over its REST interface.
    Supabase,
    /// Postgres reached directly, migrated on startup.
    Database,
    /// Process-local, lost on exit.
    Memory,
}

#[derive(Debug)]
pub struct ServerState {
    pub store: Arc<dyn RecipeStore>,
    pub cli: Cli,
}

/// A recipe that has not been assigned an id yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Replacement values for an existing recipe. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
}

impl RecipeChanges {
    pub fn apply(self, recipe: &mut MRecipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }

        if let Some(description) = self.description {
            recipe.description = description;
        }

        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }

        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
    }
}

impl From<NewRecipe> for RecipeChanges {
    fn from(recipe: NewRecipe) -> Self {
        Self {
            title: Some(recipe.title),
            description: Some(recipe.description),
            ingredients: Some(recipe.ingredients),
            instructions: Some(recipe.instructions),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ERecipe = recipe::Entity;

pub type MRecipe = recipe::Model;

pub type ARecipe = recipe::ActiveModel;

pub type CRecipe = recipe::Column;
