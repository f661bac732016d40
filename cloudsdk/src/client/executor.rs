//! Request execution with retry and tracing instrumentation.
//!
//! This module provides [`ApiClient`], the transport every resource client
//! delegates to. It joins the base URL with the rendered path, merges
//! default and operation headers, applies credentials, retries transient
//! failures, checks the status against the operation's expected set and
//! decodes the body.

use std::time::Duration;

use bytes::Bytes;
use cloudsdk_define::{AuthStrategy, RestApi, RestMethod};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use super::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, ConfigError, OperationError};
use crate::request::RequestParts;
use crate::response::HttpResponse;
use crate::retry::RetryPolicy;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("cloudsdk/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    user_agent: String,
    default_headers: Vec<(String, String)>,
    default_query: Vec<(String, String)>,
    credentials: Credentials,
    retry: RetryPolicy,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: Vec::new(),
            default_query: Vec::new(),
            credentials: Credentials::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a default header to all requests. Operation headers with the
    /// same name (case-insensitive) take precedence.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let (name, value) = (name.as_ref(), value.as_ref());
        HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
        HeaderValue::try_from(value).map_err(|e| ConfigError::invalid_header(name, e))?;
        self.default_headers.push((name.to_string(), value.to_string()));
        Ok(self)
    }

    /// Adds a query pair sent with every request, such as Azure's
    /// `api-version`.
    pub fn default_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_query.push((key.into(), value.into()));
        self
    }

    /// Sets the authentication strategy.
    pub fn auth(mut self, strategy: AuthStrategy) -> Self {
        self.credentials.strategy = strategy;
        self
    }

    /// Sets the secret (token, key or password) explicitly.
    pub fn credential(mut self, secret: impl Into<String>) -> Self {
        self.credentials.secret = Some(secret.into());
        self
    }

    /// Sets the username used with [`AuthStrategy::Basic`].
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.credentials.username = Some(username.into());
        self
    }

    /// Sets the environment variables consulted, in order, when no secret
    /// is set explicitly.
    pub fn env_credentials<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.credentials.env_secret = vars.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the environment variable holding the Basic-auth username.
    pub fn env_username(mut self, var: impl Into<String>) -> Self {
        self.credentials.env_username = Some(var.into());
        self
    }

    /// Sets the retry policy.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot carry a path or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase {
                url: self.base_url.to_string(),
            }
            .into());
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Build)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            default_query: self.default_query,
            credentials: self.credentials,
            retry: self.retry,
        })
    }
}

/// Async HTTP transport shared by the resource clients.
///
/// Cheap to clone: the underlying `reqwest::Client` pools connections
/// behind an `Arc`.
///
/// ## Examples
///
/// ```rust,ignore
/// use cloudsdk::{ApiClient, RequestParts};
/// use cloudsdk_define::RestMethod;
/// use url::Url;
///
/// let client = ApiClient::builder(Url::parse("https://xclarity.example.com")?)
///     .auth(cloudsdk_define::AuthStrategy::Basic)
///     .username("USERID")
///     .credential("PASSW0RD")
///     .build()?;
///
/// let parts = RequestParts::new("list_nodes", RestMethod::Get, "/nodes");
/// let nodes: serde_json::Value = client.send(parts).await?.into_body();
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    default_query: Vec<(String, String)>,
    credentials: Credentials,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a client with default settings and no authentication.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Starts a builder pre-populated from an API definition: base URL,
    /// static headers and query, auth strategy and credential env chain.
    ///
    /// ## Errors
    ///
    /// Returns an error if the definition's base URL or a header is invalid.
    pub fn for_api(api: &RestApi) -> Result<ApiClientBuilder, ConfigError> {
        let mut builder = Self::builder(Url::parse(&api.base_url)?)
            .auth(api.auth.clone())
            .env_credentials(api.env_auth.iter().cloned());
        builder.credentials.api = api.name.clone();
        if let Some(var) = &api.env_username {
            builder = builder.env_username(var.clone());
        }
        for (name, value) in &api.headers {
            builder = builder.default_header(name, value)?;
        }
        for (key, value) in &api.query {
            builder = builder.default_query(key.clone(), value.clone());
        }
        Ok(builder)
    }

    /// Builds a client for an API definition with configuration applied on
    /// top: base URL, timeout, retry, user agent, extra headers and auth.
    ///
    /// ## Errors
    ///
    /// Returns an error if a URL or header in either source is invalid.
    pub fn from_config(api: &RestApi, config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Self::for_api(api)?
            .timeout(Duration::from_secs(config.timeout_secs))
            .retry(config.retry.clone());
        if let Some(base_url) = &config.base_url {
            builder.base_url = Url::parse(base_url).map_err(ConfigError::from)?;
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        for (name, value) in &config.headers {
            builder = builder.default_header(name, value)?;
        }
        if let Some(strategy) = &config.auth.strategy {
            builder = builder.auth(strategy.clone());
        }
        if !config.auth.credential_env.is_empty() {
            builder = builder.env_credentials(config.auth.credential_env.iter().cloned());
        }
        if let Some(var) = &config.auth.username_env {
            builder = builder.env_username(var.clone());
        }
        builder.build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the retry policy.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Sends a request and decodes the body into `T`.
    ///
    /// Transient failures are retried according to the [`RetryPolicy`] when
    /// the request is replayable. An empty body decodes as JSON `null`, so
    /// `T = ()` suits operations without a response body.
    ///
    /// ## Errors
    ///
    /// - [`ApiError::Config`] / [`ApiError::Auth`] before anything is sent
    /// - [`ApiError::Client`] for transport failures
    /// - [`ApiError::Operation`] when the status is not expected
    /// - [`ApiError::Deserialize`] when the body does not fit `T`
    pub async fn send<T: DeserializeOwned>(
        &self,
        parts: RequestParts,
    ) -> Result<HttpResponse<T>, ApiError> {
        let url = self.url_for(&parts);
        let headers = self.merged_headers(&parts)?;
        let replayable = parts.is_replayable();

        let mut retry = 0;
        let (status, headers, body) = loop {
            match self.execute(&parts, &url, &headers).await {
                Ok(raw) => break raw,
                Err(err)
                    if replayable && err.is_retryable() && retry < self.retry.max_retries =>
                {
                    let retry_after = match &err {
                        ApiError::Operation(e) => e.retry_after_secs(),
                        _ => None,
                    };
                    let delay = self.retry.delay(retry, retry_after);
                    debug!(
                        operation = %parts.operation,
                        attempt = retry + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                Err(err) => {
                    if retry > 0 && err.is_retryable() {
                        warn!(
                            operation = %parts.operation,
                            attempts = retry + 1,
                            error = %err,
                            "retries exhausted"
                        );
                    }
                    return Err(err);
                }
            }
        };

        let body = decode(&parts.operation, &body)?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Performs one HTTP exchange and checks the status.
    #[instrument(
        name = "api_request",
        skip(self, parts, url, headers),
        fields(
            http.method = %parts.method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
            operation.id = %parts.operation,
        )
    )]
    async fn execute(
        &self,
        parts: &RequestParts,
        url: &Url,
        headers: &HeaderMap,
    ) -> Result<(u16, HeaderMap, Bytes), ApiError> {
        let mut request = self
            .client
            .request(http_method(parts.method), url.clone())
            .headers(headers.clone());
        if let Some(body) = &parts.body {
            request = request.json(body);
        }
        request = self.credentials.apply(request)?;

        let timeout_ms = self.timeout.as_millis() as u64;
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::sending(&parts.operation, e, timeout_ms))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        let response_headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::reading(&parts.operation, e, timeout_ms))?;

        if !parts.expects(status_code) {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let text = String::from_utf8_lossy(&body).into_owned();
            return Err(OperationError {
                operation: parts.operation.clone(),
                method: parts.method.to_string(),
                url: url.to_string(),
                status: status_code,
                headers: header_pairs(&response_headers),
                parsed: serde_json::from_str(&text).ok(),
                body: text,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");
        Ok((status_code, response_headers, body))
    }

    fn url_for(&self, parts: &RequestParts) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), parts.path);
        url.set_path(&path);
        let defaults = self
            .default_query
            .iter()
            .filter(|(key, _)| !parts.query.iter().any(|(own, _)| own == key));
        let mut pairs = defaults.chain(parts.query.iter()).peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    fn merged_headers(&self, parts: &RequestParts) -> Result<HeaderMap, ConfigError> {
        let mut map = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(parts.headers.iter()) {
            let header = HeaderName::try_from(name.as_str())
                .map_err(|e| ConfigError::invalid_header(name.as_str(), e))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name.as_str(), e))?;
            map.insert(header, value);
        }
        Ok(map)
    }
}

fn decode<T: DeserializeOwned>(operation: &str, body: &[u8]) -> Result<T, ApiError> {
    let result = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(body)
    };
    result.map_err(|source| ApiError::Deserialize {
        operation: operation.to_string(),
        source,
    })
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn http_method(method: RestMethod) -> Method {
    match method {
        RestMethod::Get => Method::GET,
        RestMethod::Post => Method::POST,
        RestMethod::Put => Method::PUT,
        RestMethod::Patch => Method::PATCH,
        RestMethod::Delete => Method::DELETE,
        RestMethod::Head => Method::HEAD,
        RestMethod::Options => Method::OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::builder(Url::parse(base).unwrap())
            .default_query("api-version", "2018-06-01-preview")
            .default_header("Accept", "application/json")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_keeps_base_path_and_query_order() {
        let client = client("https://example.test/api/v1/");
        let parts = RequestParts::new("x", RestMethod::Get, "/kubernetes/SysConfigPolicies")
            .query("$top", 5);
        let url = client.url_for(&parts);
        assert_eq!(
            url.as_str(),
            "https://example.test/api/v1/kubernetes/SysConfigPolicies?api-version=2018-06-01-preview&%24top=5"
        );
    }

    #[test]
    fn test_operation_query_overrides_default() {
        let client = client("https://example.test");
        let parts = RequestParts::new("x", RestMethod::Get, "/a").query("api-version", "2020-01-01");
        assert_eq!(client.url_for(&parts).as_str(), "https://example.test/a?api-version=2020-01-01");
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let client = ApiClient::new(Url::parse("https://example.test").unwrap()).unwrap();
        let parts = RequestParts::new("x", RestMethod::Get, "/nodes");
        assert_eq!(client.url_for(&parts).as_str(), "https://example.test/nodes");
    }

    #[test]
    fn test_operation_headers_win_case_insensitively() {
        let client = client("https://example.test");
        let parts = RequestParts::new("x", RestMethod::Get, "/").header("accept", "text/plain");
        let headers = client.merged_headers(&parts).unwrap();
        assert_eq!(headers.get_all("accept").iter().count(), 1);
        assert_eq!(headers.get("Accept").unwrap(), "text/plain");
    }

    #[test]
    fn test_invalid_default_header() {
        let err = ApiClient::builder(Url::parse("https://example.test").unwrap())
            .default_header("bad header", "v")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { .. }));
    }

    #[test]
    fn test_cannot_be_a_base() {
        let err = ApiClient::new(Url::parse("mailto:ops@example.test").unwrap()).unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::CannotBeABase { .. })));
    }

    #[test]
    fn test_from_config_overrides_definition() {
        let api = RestApi {
            name: "OCI".to_string(),
            description: String::new(),
            base_url: "https://iaas.us-ashburn-1.oraclecloud.com".to_string(),
            docs_url: None,
            auth: AuthStrategy::None,
            env_auth: vec![],
            env_username: None,
            headers: vec![],
            query: vec![],
            endpoints: vec![],
            module_path: None,
        };
        let config = ClientConfig {
            base_url: Some("https://iaas.eu-frankfurt-1.oraclecloud.com".to_string()),
            retry: RetryPolicy {
                max_retries: 7,
                ..RetryPolicy::default()
            },
            ..ClientConfig::default()
        };
        let client = ApiClient::from_config(&api, &config).unwrap();
        assert_eq!(client.base_url().host_str(), Some("iaas.eu-frankfurt-1.oraclecloud.com"));
        assert_eq!(client.retry_policy().max_retries, 7);
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        decode::<()>("delete", b"").unwrap();
        let none: Option<u32> = decode("get", b"  ").unwrap();
        assert_eq!(none, None);
        let err = decode::<u32>("get", b"\"x\"").unwrap_err();
        assert!(matches!(err, ApiError::Deserialize { .. }));
    }
}
