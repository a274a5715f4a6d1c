/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::book::RecipeBook;
use crate::filter::{NO_MATCHES, filter_recipes};
use crate::forms::{EditForm, EntryList, FormError, RecipeDraft};
use crate::input::Prompt;
use connector::recipes::{self, Recipe};
use connector::{ConnectorError, RequestConfig};
use std::io::{self, Write};

pub const INGREDIENTS_PER_COLUMN: usize = 6;

const SHELL_HELP: &str = "\
Commands:
  list              show recipes matching the current search
  search <text>     filter by ingredient, empty to clear
  add               create a recipe
  show <id>         show one recipe
  edit <id>         edit one recipe
  delete <id>       delete one recipe
  help              show this help
  quit              leave";

/// A client session against one server.
///
/// Successful mutations are applied to the [`RecipeBook`] with the record the
/// server returned. Failed ones print a notice and leave the book as it was.
pub struct Session<P, W> {
    config: RequestConfig,
    book: RecipeBook,
    prompt: P,
    out: W,
    filter: String,
    assume_yes: bool,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(config: RequestConfig, prompt: P, out: W) -> Self {
        Self {
            config,
            book: RecipeBook::new(),
            prompt,
            out,
            filter: String::new(),
            assume_yes: false,
        }
    }

    /// Skip "are you sure" questions.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn prompt(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_string();
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        self.prompt.confirm(question)
    }

    fn notice(&mut self, failure: &str, err: ConnectorError) -> io::Result<()> {
        match err {
            ConnectorError::Transport(e) => writeln!(self.out, "Network error: {}", e),
            err => writeln!(self.out, "{}: {}", failure, err),
        }
    }

    /// Replaces local state with the server's list.
    pub async fn load(&mut self) -> io::Result<bool> {
        match recipes::list(&self.config).await {
            Ok(list) => {
                self.book.replace_all(list);
                Ok(true)
            }
            Err(e) => {
                self.notice("Failed to load recipes", e)?;
                Ok(false)
            }
        }
    }

    pub fn render_list(&mut self) -> io::Result<()> {
        let recipes = self.book.recipes();
        let shown = filter_recipes(&recipes, &self.filter);

        if shown.is_empty() {
            return writeln!(self.out, "{}", NO_MATCHES);
        }

        for recipe in shown {
            writeln!(self.out, "{:>4}  {}", recipe.id, recipe.title)?;
        }

        Ok(())
    }

    pub fn show(&mut self, id: i64) -> io::Result<bool> {
        match self.book.get(id) {
            Some(recipe) => {
                write!(self.out, "{}", render_detail(&recipe))?;
                Ok(true)
            }
            None => {
                writeln!(self.out, "Recipe {} not found", id)?;
                Ok(false)
            }
        }
    }

    pub async fn create(&mut self, draft: RecipeDraft) -> io::Result<bool> {
        let request = match draft.submit() {
            Ok(request) => request,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(false);
            }
        };

        if !self.confirm("Is that all?")? {
            writeln!(self.out, "Recipe not added.")?;
            return Ok(false);
        }

        match recipes::create(&self.config, &request).await {
            Ok(recipe) => {
                writeln!(self.out, "Added recipe {}: {}", recipe.id, recipe.title)?;
                self.book.insert(recipe);
                Ok(true)
            }
            Err(e) => {
                self.notice("Failed to add recipe", e)?;
                Ok(false)
            }
        }
    }

    pub async fn save(&mut self, form: EditForm) -> io::Result<bool> {
        let recipe = match form.submit() {
            Ok(recipe) => recipe,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(false);
            }
        };

        match recipes::update(&self.config, &recipe).await {
            Ok(recipe) => {
                writeln!(self.out, "Updated recipe {}: {}", recipe.id, recipe.title)?;
                if !self.book.replace(recipe.clone()) {
                    self.book.insert(recipe);
                }
                Ok(true)
            }
            Err(e) => {
                self.notice("Failed to update recipe", e)?;
                Ok(false)
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> io::Result<bool> {
        if !self.confirm("Are you sure you want to delete this recipe?")? {
            writeln!(self.out, "Recipe kept.")?;
            return Ok(false);
        }

        match recipes::delete(&self.config, id).await {
            Ok(res) => {
                writeln!(self.out, "{}", res.message)?;
                self.book.remove(id);
                Ok(true)
            }
            Err(e) => {
                self.notice("Failed to delete recipe", e)?;
                Ok(false)
            }
        }
    }

    /// Asks for whatever `draft` is still missing.
    pub fn fill_draft(&mut self, mut draft: RecipeDraft) -> io::Result<RecipeDraft> {
        if draft.title.trim().is_empty() {
            draft.title = self.prompt.ask("Title")?;
        }

        if draft.description.trim().is_empty() {
            draft.description = self.prompt.ask("Description")?;
        }

        if draft.ingredients.trim().is_empty() {
            draft.ingredients = self.prompt.ask("Ingredients (separated by commas)")?;
        }

        if draft.instructions.is_empty() {
            loop {
                let step = self.prompt.ask(&format!(
                    "Step {} (empty to finish)",
                    draft.instructions.len() + 1
                ))?;

                if step.is_empty() {
                    break;
                }

                if let Err(e) = draft.instructions.add(&step) {
                    writeln!(self.out, "{}", e)?;
                }
            }

            self.edit_entries("Instructions", &mut draft.instructions)?;
        }

        Ok(draft)
    }

    /// Walks the user through changing `form`. `None` when they cancel.
    pub fn edit_form(&mut self, mut form: EditForm) -> io::Result<Option<EditForm>> {
        loop {
            self.render_form(&form)?;

            let command = self
                .prompt
                .ask("Edit [title | description | ingredients | steps | save | cancel]")?;

            match command.as_str() {
                "title" => form.title = self.prompt.ask("Title")?,
                "description" => form.description = self.prompt.ask("Description")?,
                "ingredients" => self.edit_entries("Ingredients", &mut form.ingredients)?,
                "steps" => self.edit_entries("Instructions", &mut form.instructions)?,
                "save" => return Ok(Some(form)),
                "cancel" => return Ok(None),
                other => writeln!(self.out, "Unknown choice: {}", other)?,
            }
        }
    }

    fn render_form(&mut self, form: &EditForm) -> io::Result<()> {
        writeln!(self.out, "Title: {}", form.title)?;
        writeln!(self.out, "Description: {}", form.description)?;
        writeln!(self.out, "Ingredients:")?;
        self.render_entries(&form.ingredients)?;
        writeln!(self.out, "Instructions:")?;
        self.render_entries(&form.instructions)
    }

    fn render_entries(&mut self, list: &EntryList) -> io::Result<()> {
        for (i, entry) in list.entries().iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, entry)?;
        }

        Ok(())
    }

    /// Add, edit or remove single entries until the user is done.
    fn edit_entries(
        &mut self,
        label: &str,
        list: &mut EntryList,
    ) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}:", label)?;
            self.render_entries(list)?;

            let line = self
                .prompt
                .ask(&format!("{} [add <text> | edit <n> | remove <n> | done]", label))?;
            let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
            let rest = rest.trim();

            let result = match command {
                "" | "done" => return Ok(()),
                "add" => list.add(rest),
                "edit" => match parse_position(rest) {
                    Some(index) => self.edit_entry(list, index)?,
                    None => {
                        writeln!(self.out, "Expected an entry number")?;
                        continue;
                    }
                },
                "remove" => match parse_position(rest) {
                    Some(index) => list.remove(index).map(|_| ()),
                    None => {
                        writeln!(self.out, "Expected an entry number")?;
                        continue;
                    }
                },
                other => {
                    writeln!(self.out, "Unknown choice: {}", other)?;
                    continue;
                }
            };

            if let Err(e) = result {
                writeln!(self.out, "{}", e)?;
            }
        }
    }

    fn edit_entry(
        &mut self,
        list: &mut EntryList,
        index: usize,
    ) -> io::Result<Result<(), FormError>> {
        let current = match list.begin_edit(index) {
            Ok(current) => current.to_string(),
            Err(e) => return Ok(Err(e)),
        };

        loop {
            let text = self
                .prompt
                .ask(&format!("Entry {} [:cancel keeps \"{}\"]", index + 1, current))?;

            if text == ":cancel" {
                list.cancel_edit();
                return Ok(Ok(()));
            }

            match list.confirm_edit(&text) {
                Ok(()) => return Ok(Ok(())),
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }
    }

    /// Interactive loop until `quit` or end of input.
    pub async fn run_shell(&mut self) -> io::Result<()> {
        self.load().await?;
        self.render_list()?;

        let mut changes = self.book.subscribe();
        changes.mark_unchanged();

        loop {
            let line = match self.prompt.ask("recipes") {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(e) => return Err(e),
            };

            let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
            let rest = rest.trim();

            match command {
                "" => continue,
                "quit" | "exit" => return Ok(()),
                "help" => writeln!(self.out, "{}", SHELL_HELP)?,
                "list" => self.render_list()?,
                "search" => {
                    self.set_filter(rest);
                    self.render_list()?;
                }
                "add" => {
                    let draft = self.fill_draft(RecipeDraft::default())?;
                    self.create(draft).await?;
                }
                "show" | "edit" | "delete" => match rest.parse::<i64>() {
                    Ok(id) => self.run_on_recipe(command, id).await?,
                    Err(_) => writeln!(self.out, "Expected a recipe id")?,
                },
                other => writeln!(self.out, "Unknown command: {}. Try `help`.", other)?,
            }

            if changes.has_changed().unwrap_or(false) {
                changes.mark_unchanged();
                self.render_list()?;
            }
        }
    }

    async fn run_on_recipe(&mut self, command: &str, id: i64) -> io::Result<()> {
        match command {
            "show" => {
                self.show(id)?;
            }
            "edit" => match self.book.get(id) {
                Some(recipe) => {
                    if let Some(form) = self.edit_form(recipe.into())? {
                        self.save(form).await?;
                    }
                }
                None => writeln!(self.out, "Recipe {} not found", id)?,
            },
            _ => {
                if self.book.get(id).is_none() {
                    writeln!(self.out, "Recipe {} not found", id)?;
                } else {
                    self.delete(id).await?;
                }
            }
        }

        Ok(())
    }
}

/// One based position as typed by the user.
fn parse_position(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

/// Ingredients fill columns of [`INGREDIENTS_PER_COLUMN`] top to bottom.
pub fn ingredient_rows(ingredients: &[String]) -> Vec<Vec<&str>> {
    let columns: Vec<&[String]> = ingredients.chunks(INGREDIENTS_PER_COLUMN).collect();
    let height = columns.first().map_or(0, |column| column.len());

    (0..height)
        .map(|row| {
            columns
                .iter()
                .filter_map(|column| column.get(row).map(String::as_str))
                .collect()
        })
        .collect()
}

pub fn render_detail(recipe: &Recipe) -> String {
    let mut text = format!("{} (#{})\n{}\n\nIngredients:\n", recipe.title, recipe.id, recipe.description);

    let width = recipe
        .ingredients
        .iter()
        .map(|i| i.chars().count())
        .max()
        .unwrap_or_default();

    for row in ingredient_rows(&recipe.ingredients) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!("{:<width$}", cell, width = width))
            .collect();
        text.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }

    text.push_str("\nInstructions:\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        text.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_ingredient_rows_short_list() {
        let ingredients = named(&["Bread", "Butter"]);
        assert_eq!(ingredient_rows(&ingredients), vec![vec!["Bread"], vec!["Butter"]]);
    }

    #[test]
    fn test_ingredient_rows_wrap_after_six() {
        let ingredients = named(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let rows = ingredient_rows(&ingredients);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], vec!["a", "g"]);
        assert_eq!(rows[1], vec!["b", "h"]);
        assert_eq!(rows[2], vec!["c"]);
        assert_eq!(rows[5], vec!["f"]);
    }

    #[test]
    fn test_ingredient_rows_empty() {
        assert!(ingredient_rows(&[]).is_empty());
    }

    #[test]
    fn test_render_detail_numbers_steps() {
        let recipe = Recipe {
            id: 3,
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: named(&["Bread"]),
            instructions: named(&["Slice", "Toast it"]),
        };

        let text = render_detail(&recipe);
        assert!(text.starts_with("Toast (#3)\nSimple\n"));
        assert!(text.contains("  Bread\n"));
        assert!(text.contains("  1. Slice\n  2. Toast it\n"));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1"), Some(0));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("x"), None);
    }
}
