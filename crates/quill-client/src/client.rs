//! HTTP client for the `/blogs` API.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use quill_shared::dto::{
    CreatePostRequest, DeletePostResponse, ListPostsQuery, PostResponse, UpdatePostRequest,
};

use crate::error::{ClientError, ClientResult};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    http: Client,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Reuses a preconfigured `reqwest::Client` (timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post_url(&self, id: Uuid) -> String {
        self.url(&format!("/blogs/{id}"))
    }

    pub async fn list_posts(
        &self,
        session: &Session,
        filter: &ListPostsQuery,
    ) -> ClientResult<Vec<PostResponse>> {
        let request = self
            .http
            .get(self.url("/blogs"))
            .query(&query_pairs(filter));

        send(request, session).await
    }

    /// Posts whose author matches the session user's display name.
    pub async fn my_posts(&self, session: &Session) -> ClientResult<Vec<PostResponse>> {
        let filter = ListPostsQuery {
            category: None,
            author: Some(session.user.name.clone()),
        };
        self.list_posts(session, &filter).await
    }

    /// There is no single-post endpoint, so this lists every post and picks one.
    pub async fn find_post(
        &self,
        session: &Session,
        id: Uuid,
    ) -> ClientResult<Option<PostResponse>> {
        let posts = self.list_posts(session, &ListPostsQuery::default()).await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    pub async fn create_post(
        &self,
        session: &Session,
        post: &CreatePostRequest,
    ) -> ClientResult<PostResponse> {
        let request = self.http.post(self.url("/blogs")).json(post);
        send(request, session).await
    }

    pub async fn update_post(
        &self,
        session: &Session,
        id: Uuid,
        patch: &UpdatePostRequest,
    ) -> ClientResult<PostResponse> {
        let request = self.http.put(self.post_url(id)).json(patch);
        send(request, session).await
    }

    pub async fn delete_post(
        &self,
        session: &Session,
        id: Uuid,
    ) -> ClientResult<DeletePostResponse> {
        let request = self.http.delete(self.post_url(id));
        send(request, session).await
    }
}

/// Filters with no value (or an empty one) are left out of the query string.
fn query_pairs(filter: &ListPostsQuery) -> Vec<(&'static str, &str)> {
    [("category", &filter.category), ("author", &filter.author)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key, v))
        })
        .collect()
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, session: &Session) -> ClientResult<T> {
    let response = request
        .header(reqwest::header::AUTHORIZATION, session.bearer())
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ClientError::from_body(status, &body);
    tracing::debug!(%status, error = %err, "API request rejected");
    Err(err)
}
