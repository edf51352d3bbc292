//! Userbase HTTP client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthInfo};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use userbase_core::{User, UserId, UserPayload};

/// Client for the `/users` API.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// client can be handed to many concurrent workers.
#[derive(Clone)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("userbase-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server is up.
    pub async fn health(&self) -> Result<HealthInfo> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(unreachable)?;
        parse_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// GET /users
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);

        let response = self.http.get(&url).send().await.map_err(unreachable)?;
        parse_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// GET /users/{id}
    ///
    /// Returns `None` when the server answers 404.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let url = format!("{}/users/{}", self.base_url, id);

        let response = self.http.get(&url).send().await.map_err(unreachable)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        parse_json(expect_status(response, StatusCode::OK).await?)
            .await
            .map(Some)
    }

    /// GET /users/count
    pub async fn count(&self) -> Result<i64> {
        let url = format!("{}/users/count", self.base_url);

        let response = self.http.get(&url).send().await.map_err(unreachable)?;
        parse_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// GET /users/range?start=&range=
    pub async fn get_range(&self, start: UserId, range: i64) -> Result<Vec<User>> {
        let url = format!("{}/users/range", self.base_url);
        debug!(start, range, "Fetching user range");

        let response = self
            .http
            .get(&url)
            .query(&[("start", start), ("range", range)])
            .send()
            .await
            .map_err(unreachable)?;
        parse_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// POST /users
    pub async fn create_user(&self, name: &str) -> Result<()> {
        let url = format!("{}/users", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&UserPayload::with_name(name))
            .send()
            .await
            .map_err(unreachable)?;
        expect_status(response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, id);

        let response = self.http.delete(&url).send().await.map_err(unreachable)?;
        expect_status(response, StatusCode::OK).await?;
        Ok(())
    }

    /// PATCH /users/{id}
    ///
    /// A `None` name clears it on the server. Returns `false` when the
    /// user does not exist.
    pub async fn rename_user(&self, id: UserId, name: Option<&str>) -> Result<bool> {
        let url = format!("{}/users/{}", self.base_url, id);
        let payload = UserPayload {
            id: None,
            name: name.map(str::to_string),
        };

        let response = self
            .http
            .patch(&url)
            .json(&payload)
            .send()
            .await
            .map_err(unreachable)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        expect_status(response, StatusCode::OK).await?;
        Ok(true)
    }
}

fn unreachable(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(e.to_string()))
}
