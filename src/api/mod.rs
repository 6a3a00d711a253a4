//! Typed client for the recipe backend API.
//!
//! A thin pass-through over the REST endpoints: recipes, AI search and
//! assistant, user auth, and the root health check. Every method returns the
//! deserialized wire model or a `NusaError` carrying the failing status and
//! response body.

use reqwest::{Client, RequestBuilder};

use crate::config::Config;
use crate::error::{NusaError, Result};
use crate::models::{AssistantAnswer, AssistantQuery, HealthStatus, Recipe, Token, User, UserCreate};

/// Client for the recipe backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            token: None,
        })
    }

    /// Create a client with a custom base URL and default HTTP settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Attach a bearer token to subsequent requests.
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(NusaError::Api { status, message })
    }

    /// Check whether the backend is up. Hits the root endpoint, outside the
    /// versioned API prefix.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = format!("{}/", self.base_url);
        let response = Self::check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch a page of recipes.
    pub async fn list_recipes(&self, skip: u32, limit: u32) -> Result<Vec<Recipe>> {
        let url = self.api("/recipes/");
        let request = self
            .client
            .get(&url)
            .query(&[("skip", skip), ("limit", limit)]);
        let response = Self::check(self.authed(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single recipe by id.
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let url = self.api(&format!("/recipes/{}", id));
        let response = Self::check(self.authed(self.client.get(&url)).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Create a recipe.
    pub async fn create_recipe(&self, recipe: &Recipe) -> Result<Recipe> {
        let url = self.api("/recipes/");
        let request = self.client.post(&url).json(recipe);
        let response = Self::check(self.authed(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// AI recipe search. The backend returns raw graph rows, passed through
    /// as JSON values.
    pub async fn ai_search(&self, query: &str) -> Result<Vec<serde_json::Value>> {
        let url = self.api("/ai/search");
        let request = self.client.post(&url).query(&[("query", query)]);
        let response = Self::check(self.authed(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Ask the AI assistant a question about a recipe.
    pub async fn ai_assistant(&self, question: &str, context: &str) -> Result<AssistantAnswer> {
        let url = self.api("/ai/assistant");
        let body = AssistantQuery {
            question: question.to_string(),
            context: context.to_string(),
        };
        let request = self.client.post(&url).json(&body);
        let response = Self::check(self.authed(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Register a new user.
    pub async fn register(&self, user: &UserCreate) -> Result<User> {
        let url = self.api("/users/register");
        let response = Self::check(self.client.post(&url).json(user).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Log in and obtain a bearer token (form-encoded, OAuth2 password flow).
    pub async fn login(&self, username: &str, password: &str) -> Result<Token> {
        let url = self.api("/users/token");
        let form = [("username", username), ("password", password)];
        let response = Self::check(self.client.post(&url).form(&form).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Save a recipe to the authenticated user's collection.
    pub async fn save_recipe(&self, recipe_id: &str) -> Result<serde_json::Value> {
        let url = self.api(&format!(
            "/users/me/saved-recipes?recipe_id={}",
            urlencoding::encode(recipe_id)
        ));
        let response = Self::check(self.authed(self.client.post(&url)).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch the authenticated user's saved recipes.
    pub async fn saved_recipes(&self) -> Result<Vec<Recipe>> {
        let url = self.api("/users/me/saved-recipes");
        let response = Self::check(self.authed(self.client.get(&url)).send().await?).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_joins_version_prefix() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.api("/recipes/"),
            "http://localhost:8000/api/v1/recipes/"
        );
    }

    #[test]
    fn test_trailing_slash_stripped_from_base_url() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
