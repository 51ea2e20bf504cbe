//! HTTP client for the tracker REST API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::resources::{
    MembershipResource, NewStory, ProjectResource, StoryFilter, StoryResource, StoryUpdate,
};
use crate::{Connect, Tracker};

/// Default tracker API URL.
pub const DEFAULT_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5";

/// Maximum page size accepted by the stories endpoint.
const PAGE_SIZE: usize = 500;

const TOKEN_HEADER: &str = "X-TrackerToken";

/// Tracker client bound to one API token.
#[derive(Clone)]
pub struct TrackerClient {
    base_url: String,
    token: String,
    page_size: usize,
    client: reqwest::Client,
}

impl TrackerClient {
    /// Create a client for `base_url` authenticating with `token`.
    pub fn new(base_url: &str, token: &str) -> TrackerResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            page_size: PAGE_SIZE,
            client,
        })
    }

    /// Override the stories page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> TrackerResult<T> {
        let response = request.header(TOKEN_HEADER, &self.token).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> TrackerResult<T> {
        debug!(path = %path, "GET tracker resource");
        self.send(self.client.get(self.url(path)), path).await
    }
}

#[async_trait]
impl Tracker for TrackerClient {
    async fn projects(&self) -> TrackerResult<Vec<ProjectResource>> {
        self.get("/projects").await
    }

    async fn project(&self, project_id: u64) -> TrackerResult<ProjectResource> {
        self.get(&format!("/projects/{}", project_id)).await
    }

    async fn memberships(&self, project_id: u64) -> TrackerResult<Vec<MembershipResource>> {
        self.get(&format!("/projects/{}/memberships", project_id)).await
    }

    async fn stories(
        &self,
        project_id: u64,
        filter: &StoryFilter,
    ) -> TrackerResult<Vec<StoryResource>> {
        let path = format!("/projects/{}/stories", project_id);
        let query = filter.to_query();
        let mut stories = Vec::new();
        let mut offset = 0;

        loop {
            let mut params = vec![
                ("limit", self.page_size.to_string()),
                ("offset", offset.to_string()),
            ];
            if !query.is_empty() {
                params.push(("filter", query.clone()));
            }

            debug!(path = %path, offset, filter = %query, "GET stories page");
            let page: Vec<StoryResource> = self
                .send(self.client.get(self.url(&path)).query(&params), &path)
                .await?;

            let fetched = page.len();
            stories.extend(page);
            if fetched < self.page_size {
                break;
            }
            offset += fetched;
        }

        Ok(stories)
    }

    async fn story(&self, project_id: u64, story_id: u64) -> TrackerResult<Option<StoryResource>> {
        match self
            .get(&format!("/projects/{}/stories/{}", project_id, story_id))
            .await
        {
            Ok(story) => Ok(Some(story)),
            Err(TrackerError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_story(
        &self,
        project_id: u64,
        story_id: u64,
        update: &StoryUpdate,
    ) -> TrackerResult<StoryResource> {
        let path = format!("/projects/{}/stories/{}", project_id, story_id);
        debug!(path = %path, ?update, "PUT story");
        self.send(self.client.put(self.url(&path)).json(update), &path).await
    }

    async fn create_story(
        &self,
        project_id: u64,
        story: &NewStory,
    ) -> TrackerResult<StoryResource> {
        let path = format!("/projects/{}/stories", project_id);
        debug!(path = %path, name = %story.name, "POST story");
        self.send(self.client.post(self.url(&path)).json(story), &path).await
    }
}

/// Opens [`TrackerClient`]s against a fixed base URL.
#[derive(Clone)]
pub struct HttpConnector {
    base_url: String,
}

impl HttpConnector {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl Connect for HttpConnector {
    fn connect(&self, token: &str) -> TrackerResult<Arc<dyn Tracker>> {
        Ok(Arc::new(TrackerClient::new(&self.base_url, token)?))
    }
}
