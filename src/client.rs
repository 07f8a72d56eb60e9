//! awork API client.
//!
//! Low-level HTTP client that handles authentication, query parameters and
//! raw requests. Resource operations are implemented via traits on model
//! types and reach the API through the [`Requester`] capability.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{AworkError, Result};
use crate::query::QueryParameters;
use crate::response::{classify, ApiResponse};

/// Base URL of the awork API.
pub const BASE_URL: &str = "https://api.awork.com/api";

/// API version segment appended to the base URL.
pub const VERSION: &str = "v1";

const USER_AGENT: &str = concat!("awork/", env!("CARGO_PKG_VERSION"));

/// The request capability shared by every resource operation.
///
/// [`AworkClient`] is the production implementation; anything that can
/// answer these calls (a recording fake, a proxy) can stand in for it.
#[async_trait]
pub trait Requester: Send + Sync {
    /// GET `path` with the session query parameters.
    async fn get(&self, path: &str) -> Result<ApiResponse>;

    /// GET `path` with an explicit parameter set.
    async fn get_with_query(&self, path: &str, query: &QueryParameters) -> Result<ApiResponse>;

    /// POST a JSON body to `path`.
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse>;

    /// PUT a JSON body to `path`.
    async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse>;

    /// The session query parameters applied by [`Requester::get`].
    fn query_parameters(&self) -> &QueryParameters;
}

/// Low-level awork API client.
///
/// Holds the bearer token and the session query parameters. Parameters set
/// through [`set_filter`](Self::set_filter) and friends apply to every
/// subsequent GET until they are overwritten or
/// [`reset_query`](Self::reset_query) is called; nothing clears them
/// automatically.
///
/// A client has no interior synchronization. Share it by reference for
/// sequential calls; give concurrent tasks their own clone.
///
/// # Example
///
/// ```no_run
/// use awork::AworkClient;
///
/// # async fn example() -> awork::Result<()> {
/// // Create from environment variables
/// let client = AworkClient::from_env()?;
///
/// // Or configure manually
/// let mut client = AworkClient::new("your-api-token")?;
///
/// client.set_filter("isPrio eq true").set_page_size(20);
/// let response = client.get("tasks").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AworkClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    query: QueryParameters,
}

impl std::fmt::Debug for AworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AworkClient")
            .field("base_url", &self.base_url.as_str())
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl AworkClient {
    /// Create a client from environment variables.
    ///
    /// Uses `AWORK_API_TOKEN` for authentication and optionally
    /// `AWORK_API_URL` to override the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `AWORK_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("AWORK_API_TOKEN").map_err(|_| {
            AworkError::ConfigMissing("AWORK_API_TOKEN environment variable not set".to_string())
        })?;

        let base_url = env::var("AWORK_API_URL").unwrap_or_else(|_| BASE_URL.to_string());

        Self::with_base_url(&token, &base_url)
    }

    /// Create a client for the awork API.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client against a different base URL.
    ///
    /// The version segment is always appended, so a mock server at
    /// `http://127.0.0.1:8080` is addressed as `http://127.0.0.1:8080/v1/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let root = format!("{}/{VERSION}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&root)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
            query: QueryParameters::default(),
        })
    }

    /// The versioned API root every path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path such as `tasks/123` below the API root.
    ///
    /// The path is appended to the root, never joined, so it cannot change
    /// the scheme or host. Dot segments that climb out of the root are
    /// rejected.
    pub fn url(&self, path: &str) -> Result<Url> {
        let root = self.base_url.as_str();
        let url = Url::parse(&format!("{root}{}", path.trim_start_matches('/')))?;

        if !url.as_str().starts_with(root) {
            return Err(AworkError::InvalidPath(path.to_string()));
        }
        Ok(url)
    }

    /// Set the `filterby` expression. Persists across calls.
    pub fn set_filter(&mut self, filter: impl Into<String>) -> &mut Self {
        self.query.filter = Some(filter.into());
        self
    }

    /// Set the `orderby` expression. Persists across calls.
    pub fn set_order(&mut self, order: impl Into<String>) -> &mut Self {
        self.query.order = Some(order.into());
        self
    }

    /// Set the page number. Persists across calls.
    pub fn set_page(&mut self, page: u32) -> &mut Self {
        self.query.page = Some(page);
        self
    }

    /// Set the page size. Persists across calls.
    pub fn set_page_size(&mut self, page_size: u32) -> &mut Self {
        self.query.page_size = Some(page_size);
        self
    }

    /// Replace the session query parameters wholesale.
    pub fn set_query(&mut self, query: QueryParameters) -> &mut Self {
        self.query = query;
        self
    }

    /// Clear every session query parameter.
    pub fn reset_query(&mut self) -> &mut Self {
        self.query = QueryParameters::default();
        self
    }

    /// The session query parameters.
    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    /// Render the session query parameters.
    pub fn build_query_parameters(&self) -> std::collections::BTreeMap<&'static str, String> {
        self.query.build()
    }

    /// Make a GET request with the session query parameters.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.get_with_query(path, &self.query).await
    }

    /// Make a GET request with an explicit parameter set.
    #[tracing::instrument(skip(self))]
    pub async fn get_with_query(&self, path: &str, query: &QueryParameters) -> Result<ApiResponse> {
        let request = self.request(reqwest::Method::GET, path)?.query(query);
        self.execute(request).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = self.request(reqwest::Method::POST, path)?.json(body);
        self.execute(request).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = self.request(reqwest::Method::PUT, path)?.json(body);
        self.execute(request).await
    }

    /// Start an authenticated request against the API root.
    fn request(&self, method: reqwest::Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        Ok(self.http.request(method, url).bearer_auth(&self.token))
    }

    /// Send a request, read the response and classify it.
    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let response = ApiResponse::read(response).await?;
        classify(response)
    }
}

#[async_trait]
impl Requester for AworkClient {
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        AworkClient::get(self, path).await
    }

    async fn get_with_query(&self, path: &str, query: &QueryParameters) -> Result<ApiResponse> {
        AworkClient::get_with_query(self, path, query).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        AworkClient::post(self, path, body).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        AworkClient::put(self, path, body).await
    }

    fn query_parameters(&self) -> &QueryParameters {
        &self.query
    }
}
