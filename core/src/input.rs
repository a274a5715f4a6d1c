/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use std::fs;

use super::consts::*;
use super::types::NewRecipe;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Title, description, and instructions are required")]
    MissingRequiredFields,
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

/// Reads a secret from a file, dropping the trailing newline most editors leave behind.
pub fn load_secret(path: &str) -> Result<String> {
    let secret = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    Ok(secret.trim().to_string())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Presence check for a recipe about to be created.
///
/// `title` and `description` must be non-empty and `instructions` must be
/// given. `ingredients` is optional and defaults to an empty list.
pub fn validate_new_recipe(
    title: Option<String>,
    description: Option<String>,
    ingredients: Option<Vec<String>>,
    instructions: Option<Vec<String>>,
) -> Result<NewRecipe, InputError> {
    if !is_present(&title) || !is_present(&description) {
        return Err(InputError::MissingRequiredFields);
    }

    let (Some(title), Some(description), Some(instructions)) = (title, description, instructions)
    else {
        return Err(InputError::MissingRequiredFields);
    };

    Ok(NewRecipe {
        title,
        description,
        ingredients: ingredients.unwrap_or_default(),
        instructions,
    })
}
