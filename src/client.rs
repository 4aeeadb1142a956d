//! HTTP clients for the catalog and the user service.

use crate::error::FetchError;
use crate::model::*;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, FetchError>;
    async fn get_movie(&self, id: Uuid) -> Result<Movie, FetchError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves a session token to its user.
    async fn user_by_token(&self, token: &str) -> Result<User, FetchError>;
    /// Tells the user service that the user has paid.
    async fn mark_paid(&self, user_id: &str) -> Result<(), FetchError>;
}

/// Builds the shared client. The timeout bounds the whole request, so a
/// slow downstream service only holds up its own caller.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
}

async fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, FetchError> {
    Ok(request.send().await?.error_for_status()?.json().await?)
}

pub struct HttpCatalog {
    client: Client,
    base: String,
}

impl HttpCatalog {
    pub fn new(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }
}

#[async_trait]
impl MovieCatalog for HttpCatalog {
    async fn list_movies(&self) -> Result<Vec<Movie>, FetchError> {
        get_json(self.client.get(format!("{}/movies", self.base))).await
    }

    async fn get_movie(&self, id: Uuid) -> Result<Movie, FetchError> {
        get_json(self.client.get(format!("{}/movie/{}", self.base, id))).await
    }
}

pub struct HttpUserDirectory {
    client: Client,
    base: String,
}

impl HttpUserDirectory {
    pub fn new(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn user_by_token(&self, token: &str) -> Result<User, FetchError> {
        let lookup: UserLookup = get_json(
            self.client
                .get(format!("{}/user", self.base))
                .query(&[("token", token)]),
        )
        .await?;
        // `null` and `""` both mean no error
        if let Some(err) = lookup.error.filter(|err| !err.is_empty()) {
            return Err(FetchError::Remote(err));
        }
        Ok(lookup.user)
    }

    async fn mark_paid(&self, user_id: &str) -> Result<(), FetchError> {
        self.client
            .patch(format!("{}/user", self.base))
            .form(&[("id", user_id), ("is_paid", "true")])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
