/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Local copy of the server's recipes.
//!
//! The book is the only owner of the list. Every mutation goes through one of
//! the explicit methods below and is published to subscribers, so views never
//! hold a stale copy of their own.

use connector::recipes::Recipe;
use std::collections::BTreeMap;
use tokio::sync::watch;

pub type Recipes = BTreeMap<i64, Recipe>;

#[derive(Debug)]
pub struct RecipeBook {
    tx: watch::Sender<Recipes>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBook {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Recipes::new());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Recipes> {
        self.tx.subscribe()
    }

    pub fn replace_all(&self, recipes: Vec<Recipe>) {
        self.tx
            .send_replace(recipes.into_iter().map(|r| (r.id, r)).collect());
    }

    pub fn insert(&self, recipe: Recipe) {
        self.tx.send_modify(|book| {
            book.insert(recipe.id, recipe);
        });
    }

    /// Swaps in `recipe` for the entry with the same id. False if there is none.
    pub fn replace(&self, recipe: Recipe) -> bool {
        self.tx.send_if_modified(|book| match book.get_mut(&recipe.id) {
            Some(entry) => {
                *entry = recipe;
                true
            }
            None => false,
        })
    }

    pub fn remove(&self, id: i64) -> bool {
        self.tx.send_if_modified(|book| book.remove(&id).is_some())
    }

    pub fn get(&self, id: i64) -> Option<Recipe> {
        self.tx.borrow().get(&id).cloned()
    }

    /// Newest first.
    pub fn recipes(&self) -> Vec<Recipe> {
        newest_first(&self.tx.borrow())
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }
}

pub fn newest_first(recipes: &Recipes) -> Vec<Recipe> {
    recipes.values().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            ingredients: vec![],
            instructions: vec!["Step".to_string()],
        }
    }

    #[test]
    fn test_replace_all_orders_newest_first() {
        let book = RecipeBook::new();
        book.replace_all(vec![recipe(1, "a"), recipe(3, "c"), recipe(2, "b")]);

        let ids: Vec<i64> = book.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_insert_lands_on_top() {
        let book = RecipeBook::new();
        book.replace_all(vec![recipe(1, "a")]);
        book.insert(recipe(2, "b"));

        assert_eq!(book.recipes()[0].id, 2);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_replace_only_existing() {
        let book = RecipeBook::new();
        book.replace_all(vec![recipe(1, "a"), recipe(2, "b")]);

        assert!(book.replace(recipe(1, "a2")));
        assert!(!book.replace(recipe(9, "ghost")));

        assert_eq!(book.get(1).unwrap().title, "a2");
        assert_eq!(book.get(2).unwrap().title, "b");
        assert!(book.get(9).is_none());
    }

    #[test]
    fn test_remove() {
        let book = RecipeBook::new();
        book.replace_all(vec![recipe(1, "a"), recipe(2, "b")]);

        assert!(book.remove(1));
        assert!(!book.remove(1));
        assert_eq!(book.recipes(), vec![recipe(2, "b")]);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let book = RecipeBook::new();
        let mut rx = book.subscribe();
        assert!(!rx.has_changed().unwrap());

        book.insert(recipe(1, "a"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(newest_first(&rx.borrow_and_update()), vec![recipe(1, "a")]);

        assert!(!book.remove(42));
        assert!(!rx.has_changed().unwrap());
    }
}
