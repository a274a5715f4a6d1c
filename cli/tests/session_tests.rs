/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::RequestConfig;
use recipes_cli::forms::{EditForm, RecipeDraft};
use recipes_cli::input::Scripted;
use recipes_cli::session::Session;
use recipes_core::store::MemoryStore;
use recipes_core::types::{Cli, ServerState, StoreBackend};
use std::sync::Arc;

fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 0,
        serve_url: None,
        store: StoreBackend::Memory,
        supabase_url: None,
        supabase_key: None,
        supabase_key_file: None,
        supabase_table: "recipes".to_string(),
        database_url: None,
        database_url_file: None,
        sentry_dsn: None,
    }
}

async fn spawn_server() -> RequestConfig {
    let state = Arc::new(ServerState {
        store: Arc::new(MemoryStore::default()),
        cli: create_mock_cli(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, web::create_router(state)).await.unwrap();
    });

    RequestConfig {
        server_url: format!("http://{}", addr),
    }
}

fn output(session: &Session<Scripted, Vec<u8>>) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}

fn toast_draft() -> RecipeDraft {
    let mut draft = RecipeDraft {
        title: "Toast".to_string(),
        description: "Simple".to_string(),
        ingredients: "Bread, Butter".to_string(),
        ..Default::default()
    };
    draft.instructions.add("Toast it").unwrap();
    draft
}

#[tokio::test]
async fn test_recipe_lifecycle_against_server() {
    let config = spawn_server().await;
    let mut session = Session::new(config, Scripted::new(["y", "y"]), Vec::new());

    assert!(session.load().await.unwrap());
    assert!(session.book().is_empty());

    assert!(session.create(toast_draft()).await.unwrap());
    let created = session.book().recipes()[0].clone();
    assert_eq!(created.title, "Toast");
    assert_eq!(created.ingredients, vec!["Bread", "Butter"]);

    let mut form = EditForm::from(created.clone());
    form.title = "Toast v2".to_string();
    assert!(session.save(form).await.unwrap());

    let renamed = session.book().get(created.id).unwrap();
    assert_eq!(renamed.title, "Toast v2");
    assert_eq!(session.book().len(), 1);

    assert!(session.delete(created.id).await.unwrap());
    assert!(session.book().get(created.id).is_none());

    // a fresh load agrees with local state
    assert!(session.load().await.unwrap());
    assert!(session.book().is_empty());

    let out = output(&session);
    assert!(out.contains("Added recipe"));
    assert!(out.contains("Recipe deleted successfully"));
}

#[tokio::test]
async fn test_declined_confirmation_sends_nothing() {
    let config = spawn_server().await;
    let mut session = Session::new(config, Scripted::new(["n"]), Vec::new());

    assert!(!session.create(toast_draft()).await.unwrap());
    assert!(session.book().is_empty());

    assert!(session.load().await.unwrap());
    assert!(session.book().is_empty());
}

#[tokio::test]
async fn test_server_rejection_leaves_state_unchanged() {
    let config = spawn_server().await;
    let mut session = Session::new(config, Scripted::new(["y", "y"]), Vec::new());

    assert!(session.create(toast_draft()).await.unwrap());
    let before = session.book().recipes();

    let mut ghost = EditForm::from(before[0].clone());
    ghost.id = 999;
    assert!(!session.save(ghost).await.unwrap());

    assert_eq!(session.book().recipes(), before);
    assert!(output(&session).contains("Failed to update recipe: Recipe not found"));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = RequestConfig {
        server_url: "http://127.0.0.1:1".to_string(),
    };
    let mut session = Session::new(config, Scripted::new(["y"]), Vec::new());

    assert!(!session.load().await.unwrap());
    assert!(!session.create(toast_draft()).await.unwrap());
    assert!(session.book().is_empty());

    let out = output(&session);
    assert!(out.starts_with("Network error: "));
}

#[tokio::test]
async fn test_shell_session() {
    let config = spawn_server().await;
    let answers = [
        "add",
        "Pancakes",
        "Fluffy",
        "flour, milk, egg",
        "Mix",
        "Fry",
        "",
        "edit 2",
        "",
        "Fry both sides",
        "done",
        "y",
        "search milk",
        "search zzz",
        "show 1",
        "edit 1",
        "ingredients",
        "add sugar",
        "done",
        "save",
        "delete 1",
        "y",
        "quit",
    ];
    let mut session = Session::new(config, Scripted::new(answers), Vec::new());

    session.run_shell().await.unwrap();

    assert!(session.book().is_empty());

    let out = output(&session);
    assert!(out.contains("Entry cannot be empty"));
    assert!(out.contains("  2. Fry both sides"));
    assert!(out.contains("Added recipe 1: Pancakes"));
    assert!(out.contains("No recipes found with that ingredient."));
    assert!(out.contains("Pancakes (#1)"));
    assert!(out.contains("  4. Sugar"));
    assert!(out.contains("Updated recipe 1: Pancakes"));
    assert!(out.contains("Recipe deleted successfully"));
}
