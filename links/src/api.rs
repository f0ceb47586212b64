//! Links API seam and its `reqwest` client.
//!
//! Both endpoints are authenticated with the session's bearer token. The
//! create response body is not read: callers always reload the full list
//! after a successful create.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{Link, NewLink, Session};

#[async_trait(?Send)]
pub trait LinksApi {
    /// `GET /api/links`: the caller's links in server order.
    async fn list_links(&self, session: &Session) -> Result<Vec<Link>, ApiError>;

    /// `POST /api/links` with `{title, url}`.
    async fn create_link(&self, session: &Session, link: &NewLink) -> Result<(), ApiError>;
}

pub struct HttpLinksApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLinksApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { http: reqwest::Client::new(), base_url: config.api_url.clone() }
    }
}

#[async_trait(?Send)]
impl LinksApi for HttpLinksApi {
    async fn list_links(&self, session: &Session) -> Result<Vec<Link>, ApiError> {
        let response = self
            .http
            .get(links_endpoint(&self.base_url))
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ApiError::Response { status, body: text });
        }
        parse_links(&text)
    }

    async fn create_link(&self, session: &Session, link: &NewLink) -> Result<(), ApiError> {
        let response = self
            .http
            .post(links_endpoint(&self.base_url))
            .header(AUTHORIZATION, session.bearer())
            .json(link)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Response { status, body })
    }
}

pub(crate) fn links_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/links")
}

pub(crate) fn parse_links(body: &str) -> Result<Vec<Link>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
