/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::input::split_list;
use connector::recipes::{MakeRecipeRequest, Recipe};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Entry cannot be empty")]
    EmptyEntry,
    #[error("No entry {0}")]
    NoEntry(usize),
    #[error("No entry is being edited")]
    NotEditing,
    #[error("Please fill in the title, description and at least one instruction")]
    Incomplete,
}

/// Ordered entries where each one can be edited in place.
///
/// Positions are zero based. An edit is opened with [`EntryList::begin_edit`]
/// and closed by either [`EntryList::confirm_edit`] or [`EntryList::cancel_edit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<String>,
    editing: Option<usize>,
    capitalize_new: bool,
}

impl From<Vec<String>> for EntryList {
    fn from(entries: Vec<String>) -> Self {
        Self {
            entries,
            editing: None,
            capitalize_new: false,
        }
    }
}

impl EntryList {
    /// Entries added from now on get their first letter capitalized. Existing ones are kept as is.
    pub fn capitalize_new(mut self) -> Self {
        self.capitalize_new = true;
        self
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn add(&mut self, entry: &str) -> Result<(), FormError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(FormError::EmptyEntry);
        }

        let entry = if self.capitalize_new {
            capitalize_first(entry)
        } else {
            entry.to_string()
        };

        self.entries.push(entry);
        Ok(())
    }

    /// Opens entry `index` for editing and returns its current text.
    pub fn begin_edit(&mut self, index: usize) -> Result<&str, FormError> {
        let entry = self.entries.get(index).ok_or(FormError::NoEntry(index))?;
        self.editing = Some(index);
        Ok(entry)
    }

    /// Empty text is refused and the edit stays open.
    pub fn confirm_edit(&mut self, text: &str) -> Result<(), FormError> {
        let index = self.editing.ok_or(FormError::NotEditing)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(FormError::EmptyEntry);
        }

        let entry = self
            .entries
            .get_mut(index)
            .ok_or(FormError::NoEntry(index))?;
        *entry = text.to_string();
        self.editing = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn remove(&mut self, index: usize) -> Result<String, FormError> {
        if index >= self.entries.len() {
            return Err(FormError::NoEntry(index));
        }

        // removing shifts positions, an open edit would point at the wrong entry
        self.editing = None;
        Ok(self.entries.remove(index))
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

pub fn capitalize_first(text: &str) -> String {
    let text = text.trim();
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Input for a recipe that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Comma separated, as typed.
    pub ingredients: String,
    pub instructions: EntryList,
}

impl RecipeDraft {
    pub fn submit(&self) -> Result<MakeRecipeRequest, FormError> {
        let title = self.title.trim();
        let description = self.description.trim();

        if title.is_empty() || description.is_empty() || self.instructions.is_empty() {
            return Err(FormError::Incomplete);
        }

        Ok(MakeRecipeRequest {
            title: title.to_string(),
            description: description.to_string(),
            ingredients: split_list(&self.ingredients),
            instructions: self.instructions.entries().to_vec(),
        })
    }
}

/// An existing recipe opened for editing.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub ingredients: EntryList,
    pub instructions: EntryList,
}

impl From<Recipe> for EditForm {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            ingredients: EntryList::from(recipe.ingredients).capitalize_new(),
            instructions: recipe.instructions.into(),
        }
    }
}

impl EditForm {
    pub fn submit(self) -> Result<Recipe, FormError> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();

        if title.is_empty() || description.is_empty() || self.instructions.is_empty() {
            return Err(FormError::Incomplete);
        }

        Ok(Recipe {
            id: self.id,
            title,
            description,
            ingredients: self.ingredients.into_entries(),
            instructions: self.instructions.into_entries(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(entries: &[&str]) -> EntryList {
        entries
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_add_refuses_empty() {
        let mut list = EntryList::default();

        assert_eq!(list.add("   "), Err(FormError::EmptyEntry));
        list.add(" Toast it ").unwrap();
        assert_eq!(list.entries(), ["Toast it"]);
    }

    #[test]
    fn test_edit_confirm() {
        let mut list = steps(&["Slice", "Toast"]);

        assert_eq!(list.begin_edit(1).unwrap(), "Toast");
        assert_eq!(list.editing(), Some(1));

        assert_eq!(list.confirm_edit(""), Err(FormError::EmptyEntry));
        assert_eq!(list.editing(), Some(1));

        list.confirm_edit("Toast lightly").unwrap();
        assert_eq!(list.entries(), ["Slice", "Toast lightly"]);
        assert_eq!(list.editing(), None);
    }

    #[test]
    fn test_edit_cancel_keeps_entry() {
        let mut list = steps(&["Slice"]);

        list.begin_edit(0).unwrap();
        list.cancel_edit();

        assert_eq!(list.entries(), ["Slice"]);
        assert_eq!(list.confirm_edit("x"), Err(FormError::NotEditing));
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut list = steps(&["Slice"]);

        assert_eq!(list.begin_edit(3).unwrap_err(), FormError::NoEntry(3));
        assert_eq!(list.remove(3), Err(FormError::NoEntry(3)));
    }

    #[test]
    fn test_remove_closes_edit() {
        let mut list = steps(&["Slice", "Toast", "Serve"]);

        list.begin_edit(2).unwrap();
        assert_eq!(list.remove(0).unwrap(), "Slice");
        assert_eq!(list.editing(), None);
        assert_eq!(list.entries(), ["Toast", "Serve"]);
    }

    #[test]
    fn test_capitalize_new_keeps_existing_entries() {
        let mut list = EntryList::from(vec!["salt".to_string()]).capitalize_new();

        list.add(" pepper ").unwrap();
        list.begin_edit(0).unwrap();
        list.confirm_edit("sea salt").unwrap();

        assert_eq!(list.entries(), ["sea salt", "Pepper"]);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("butter"), "Butter");
        assert_eq!(capitalize_first(" éclair "), "Éclair");
        assert_eq!(capitalize_first("Egg"), "Egg");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_draft_submit() {
        let draft = RecipeDraft {
            title: " Toast ".to_string(),
            description: "Simple".to_string(),
            ingredients: "Bread, , Butter".to_string(),
            instructions: steps(&["Toast it"]),
        };

        let request = draft.submit().unwrap();
        assert_eq!(request.title, "Toast");
        assert_eq!(request.ingredients, vec!["Bread", "Butter"]);
        assert_eq!(request.instructions, vec!["Toast it"]);
    }

    #[test]
    fn test_draft_requires_fields_and_a_step() {
        let complete = RecipeDraft {
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: String::new(),
            instructions: steps(&["Toast it"]),
        };
        assert!(complete.submit().is_ok());

        let mut no_title = complete.clone();
        no_title.title = "  ".to_string();
        assert_eq!(no_title.submit(), Err(FormError::Incomplete));

        let mut no_description = complete.clone();
        no_description.description.clear();
        assert_eq!(no_description.submit(), Err(FormError::Incomplete));

        let mut no_steps = complete;
        no_steps.instructions = EntryList::default();
        assert_eq!(no_steps.submit(), Err(FormError::Incomplete));
    }

    #[test]
    fn test_edit_form_round_trip() {
        let recipe = Recipe {
            id: 7,
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: vec!["Bread".to_string()],
            instructions: vec!["Toast it".to_string()],
        };

        let mut form = EditForm::from(recipe);
        form.title = "Toast v2".to_string();
        form.ingredients.add("butter").unwrap();
        form.instructions.add("spread").unwrap();

        let updated = form.submit().unwrap();
        assert_eq!(updated.id, 7);
        assert_eq!(updated.title, "Toast v2");
        assert_eq!(updated.ingredients, vec!["Bread", "Butter"]);
        assert_eq!(updated.instructions, vec!["Toast it", "spread"]);
    }
}
