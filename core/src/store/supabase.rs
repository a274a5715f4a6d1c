/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RecipeStore, StoreError, StoreResult};
use crate::consts::SUPABASE_REST_PATH;
use crate::types::*;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Deserialize, Debug)]
struct RemoteError {
    message: String,
}

/// Recipe table of a hosted Postgres, reached through its REST interface.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    url: String,
    key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(url: String, key: String, table: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            key,
            table,
        }
    }

    pub fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.url.trim_end_matches('/'),
            SUPABASE_REST_PATH,
            self.table
        )
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn returning(&self, method: Method, id: Option<i64>) -> RequestBuilder {
        let builder = self
            .request(method)
            .header("Prefer", "return=representation");

        match id {
            Some(id) => builder.query(&[("id", format!("eq.{}", id))]),
            None => builder,
        }
    }
}

async fn read_response<T: DeserializeOwned>(res: Response) -> StoreResult<T> {
    let status = res.status();

    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let body = res.bytes().await?;
    let message = match serde_json::from_slice::<RemoteError>(&body) {
        Ok(err) => err.message,
        Err(_) if body.is_empty() => status.to_string(),
        Err(_) => String::from_utf8_lossy(&body).into_owned(),
    };

    tracing::debug!(status = status.as_u16(), %message, "Datastore rejected request");

    Err(StoreError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecipeStore for SupabaseStore {
    async fn list(&self) -> StoreResult<Vec<MRecipe>> {
        let res = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "id.desc")])
            .send()
            .await?;

        read_response(res).await
    }

    async fn insert(&self, recipe: NewRecipe) -> StoreResult<MRecipe> {
        let res = self
            .returning(Method::POST, None)
            .json(&[recipe])
            .send()
            .await?;

        let recipes: Vec<MRecipe> = read_response(res).await?;
        recipes.into_iter().next().ok_or(StoreError::MissingRecord)
    }

    async fn update(&self, id: i64, changes: RecipeChanges) -> StoreResult<Option<MRecipe>> {
        let res = self
            .returning(Method::PATCH, Some(id))
            .json(&changes)
            .send()
            .await?;

        let recipes: Vec<MRecipe> = read_response(res).await?;
        Ok(recipes.into_iter().next())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let res = self.returning(Method::DELETE, Some(id)).send().await?;

        let recipes: Vec<MRecipe> = read_response(res).await?;
        Ok(recipes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = SupabaseStore::new(
            "https://example.supabase.co/".to_string(),
            "key".to_string(),
            "recipes".to_string(),
        );

        assert_eq!(
            store.table_url(),
            "https://example.supabase.co/rest/v1/recipes"
        );
    }

    #[test]
    fn test_changes_skip_absent_fields() {
        let changes = RecipeChanges {
            title: Some("Toast v2".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&changes).unwrap();
        assert_eq!(json, r#"{"title":"Toast v2"}"#);
    }
}
