//! Confluence REST client

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::RequestBuilder;
use wfa_core::http::{build_client, ensure_success, SERVICE_TIMEOUT};
use wfa_core::{BasicAuth, ConfluenceSettings};

use crate::types::{ContentList, NewPage, Page, PageUpdate, PageVersion, SpaceRef, StorageBody};
use crate::{Error, Result};

const EXPAND: &str = "version,body.storage";

pub struct ConfluenceClient {
    http: reqwest::Client,
    base_url: String,
    auth: BasicAuth,
}

impl ConfluenceClient {
    pub fn new(settings: &ConfluenceSettings) -> Result<Self> {
        Ok(Self {
            http: build_client(SERVICE_TIMEOUT)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            auth: BasicAuth::new(&settings.email, &settings.api_token),
        })
    }

    /// Browser URL for a page
    pub fn page_view_url(&self, page_id: &str) -> String {
        format!("{}/pages/viewpage.action?pageId={}", self.base_url, page_id)
    }

    /// Find a page by space and exact title. Returns the first match.
    pub async fn get_page_by_title(&self, space_key: &str, title: &str) -> Result<Option<Page>> {
        let url = self.content_url();
        tracing::debug!(%url, space_key, title, "Looking up page by title");

        let request = self.http.get(&url).query(&[
            ("spaceKey", space_key),
            ("title", title),
            ("expand", EXPAND),
        ]);
        let list: ContentList = self.send(request).await?;

        Ok(list.results.into_iter().next())
    }

    pub async fn get_page(&self, page_id: &str) -> Result<Page> {
        let url = self.page_url(page_id);
        tracing::debug!(%url, "Fetching page");

        let request = self.http.get(&url).query(&[("expand", EXPAND)]);
        self.send(request).await
    }

    pub async fn create_page(&self, space_key: &str, title: &str, body: &str) -> Result<Page> {
        let url = self.content_url();
        tracing::debug!(%url, space_key, title, "Creating page");

        let payload = NewPage {
            kind: "page",
            title,
            space: SpaceRef { key: space_key },
            body: StorageBody::new(body),
        };
        self.send(self.http.post(&url).json(&payload)).await
    }

    /// Overwrite a page. Confluence only accepts the write when the new version
    /// number is exactly one past the current one.
    pub async fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &str,
        current_version: u64,
    ) -> Result<Page> {
        let url = self.page_url(page_id);
        let version = current_version.checked_add(1).ok_or_else(|| {
            Error::MalformedResponse(format!(
                "page {} reports version {} which cannot be incremented",
                page_id, current_version
            ))
        })?;
        tracing::debug!(%url, version, "Updating page");

        let payload = PageUpdate {
            id: page_id,
            kind: "page",
            title,
            version: PageVersion { number: version },
            body: StorageBody::new(body),
        };
        self.send(self.http.put(&url).json(&payload)).await
    }

    /// Create the page, or update it if it already exists.
    ///
    /// An explicit `page_id` always wins and skips the title lookup, so callers
    /// can pin a page whose title has changed. Otherwise the page is looked up
    /// by `(space_key, title)`.
    pub async fn upsert_page(
        &self,
        space_key: &str,
        title: &str,
        body: &str,
        page_id: Option<&str>,
    ) -> Result<Page> {
        if let Some(page_id) = page_id.filter(|id| !id.is_empty()) {
            let page = self.get_page(page_id).await?;
            tracing::info!(page_id, version = page.current_version(), "Updating page by id");
            return self
                .update_page(page_id, title, body, page.current_version())
                .await;
        }

        match self.get_page_by_title(space_key, title).await? {
            Some(existing) => {
                let existing_id = existing.id.as_deref().ok_or_else(|| {
                    Error::MalformedResponse(format!("page '{}' has no id", title))
                })?;
                tracing::info!(
                    page_id = existing_id,
                    version = existing.current_version(),
                    "Updating existing page"
                );
                self.update_page(existing_id, title, body, existing.current_version())
                    .await
            }
            None => {
                tracing::info!(space_key, title, "Creating new page");
                self.create_page(space_key, title, body).await
            }
        }
    }

    fn content_url(&self) -> String {
        format!("{}/rest/api/content", self.base_url)
    }

    fn page_url(&self, page_id: &str) -> String {
        format!("{}/rest/api/content/{}", self.base_url, page_id)
    }

    async fn send<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header(AUTHORIZATION, self.auth.to_header())
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}
