/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::forms::{EditForm, RecipeDraft};
use crate::input::{Terminal, split_list};
use crate::session::Session;
use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::ConnectorError;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "Recipes", display_name = "Recipes", bin_name = "recipes", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    pub generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
pub enum MainCommands {
    /// Read or change a client setting.
    Config {
        key: String,
        value: Option<String>,
    },
    /// Check that the server is reachable.
    Status,
    List {
        /// Only recipes with an ingredient containing this text.
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Show {
        id: i64,
    },
    Add {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Comma separated.
        #[arg(short, long)]
        ingredients: Option<String>,
        /// One per step, in order.
        #[arg(short, long = "step")]
        steps: Vec<String>,
        #[arg(short, long)]
        yes: bool,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Comma separated, replaces all ingredients.
        #[arg(short, long)]
        ingredients: Option<String>,
        /// Replaces all steps.
        #[arg(short, long = "step")]
        steps: Vec<String>,
    },
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive session.
    Shell,
}

type TerminalSession = Session<Terminal, io::Stdout>;

async fn open_session() -> Result<TerminalSession> {
    let config = get_request_config(&load_config()?)?;
    Ok(Session::new(config, Terminal, io::stdout()))
}

/// Opens a session and loads the list. `None` when loading failed; the notice is already printed.
async fn loaded_session() -> Result<Option<TerminalSession>> {
    let mut session = open_session().await?;

    if session.load().await? {
        Ok(Some(session))
    } else {
        Ok(None)
    }
}

/// Returns whether the command succeeded.
pub async fn run_cli() -> Result<bool> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(true);
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        return Ok(true);
    };

    match cmd {
        MainCommands::Config { key, value } => {
            let key: ConfigKey = key.parse().map_err(|e: String| anyhow!(e))?;
            let quiet = value.is_some();

            match set_get_value(&get_config_file()?, key, value)? {
                Some(value) if quiet => println!("{} set to \"{}\"", key, value),
                Some(value) => println!("{}", value),
                None => println!("[unset]"),
            }

            Ok(true)
        }

        MainCommands::Status => {
            let config = get_request_config(&load_config()?)?;

            match connector::health(&config).await {
                Ok(res) => {
                    println!("{}: {}", config.server_url, res.message);
                    Ok(true)
                }
                Err(ConnectorError::Transport(e)) => {
                    eprintln!("Network error: {}", e);
                    Ok(false)
                }
                Err(e) => {
                    eprintln!("Server unhealthy: {}", e);
                    Ok(false)
                }
            }
        }

        MainCommands::List { search, json } => {
            let Some(mut session) = loaded_session().await? else {
                return Ok(false);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&session.book().recipes())?);
                return Ok(true);
            }

            session.set_filter(search.as_deref().unwrap_or_default());
            session.render_list()?;
            Ok(true)
        }

        MainCommands::Show { id } => {
            let Some(mut session) = loaded_session().await? else {
                return Ok(false);
            };

            Ok(session.show(id)?)
        }

        MainCommands::Add {
            title,
            description,
            ingredients,
            steps,
            yes,
        } => {
            let Some(session) = loaded_session().await? else {
                return Ok(false);
            };
            let mut session = session.assume_yes(yes);

            let mut draft = RecipeDraft {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
                ingredients: ingredients.unwrap_or_default(),
                ..Default::default()
            };

            for step in &steps {
                if let Err(e) = draft.instructions.add(step) {
                    eprintln!("{}", e);
                    return Ok(false);
                }
            }

            let draft = session.fill_draft(draft)?;
            Ok(session.create(draft).await?)
        }

        MainCommands::Edit {
            id,
            title,
            description,
            ingredients,
            steps,
        } => {
            let Some(mut session) = loaded_session().await? else {
                return Ok(false);
            };

            let Some(recipe) = session.book().get(id) else {
                eprintln!("Recipe {} not found", id);
                return Ok(false);
            };

            let changed_by_flags = title.is_some()
                || description.is_some()
                || ingredients.is_some()
                || !steps.is_empty();

            let mut form = EditForm::from(recipe);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(ingredients) = ingredients {
                form.ingredients = split_list(&ingredients).into();
            }
            if !steps.is_empty() {
                form.instructions = steps.into();
            }

            let form = if changed_by_flags {
                Some(form)
            } else {
                session.edit_form(form)?
            };

            match form {
                Some(form) => Ok(session.save(form).await?),
                None => {
                    println!("Edit cancelled.");
                    Ok(true)
                }
            }
        }

        MainCommands::Delete { id, yes } => {
            let Some(session) = loaded_session().await? else {
                return Ok(false);
            };
            let mut session = session.assume_yes(yes);

            if session.book().get(id).is_none() {
                eprintln!("Recipe {} not found", id);
                return Ok(false);
            }

            Ok(session.delete(id).await?)
        }

        MainCommands::Shell => {
            let mut session = open_session().await?;
            session.run_shell().await?;
            Ok(true)
        }
    }
}
