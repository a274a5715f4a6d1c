/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::recipes::Recipe;

pub const NO_MATCHES: &str = "No recipes found with that ingredient.";

/// Case-insensitive ingredient substring match. A blank filter matches everything.
pub fn matches_ingredient(recipe: &Recipe, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();

    needle.is_empty()
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
}

pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches_ingredient(recipe, filter))
        .collect()
}
