//! Docker Hub API client implementation

use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::models::Credentials;
use super::pagination::{Page, PageQuery};
use crate::error::{Error, Result};

/// Docker Hub v2 API root
pub const DEFAULT_ENDPOINT: &str = "https://hub.docker.com/v2";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated Docker Hub session.
///
/// Construction performs the login exchange; the bearer token is set exactly
/// once and never refreshed. The token is read-only afterwards, so a `Client`
/// can be shared freely between threads.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl Client {
    /// Log in against the public Docker Hub endpoint.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_endpoint(credentials, DEFAULT_ENDPOINT)
    }

    /// Log in against a custom endpoint.
    ///
    /// Fails with [`Error::Config`] before any network call if either
    /// credential is empty or the endpoint is not an absolute URL. Login
    /// failures surface as [`Error::Api`] or [`Error::Connection`]; a login
    /// body without a usable token is [`Error::Decode`]. No client is
    /// produced unless login succeeded.
    pub fn with_endpoint(credentials: &Credentials, endpoint: &str) -> Result<Self> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(Error::Config(
                "username and password are required".to_string(),
            ));
        }
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let token = login(&http, &endpoint, credentials)?;
        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    /// The bearer token obtained at login.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Perform one authenticated request and return the raw response body.
    ///
    /// Sets `Content-Type: application/json` and the bearer token on every
    /// call. A 2xx status returns the body verbatim; anything else is
    /// [`Error::Api`] with the status code and raw body. No schema
    /// validation happens at this layer, and nothing is retried.
    pub fn execute(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!("{} {}", method, url);
        let mut request = self.request(method, &url);
        if let Some(body) = body {
            request = request.body(body);
        }
        read_body(request.send()?)
    }

    /// GET a path and decode the response body as JSON.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.execute(Method::GET, path, None)?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Serialize `payload` as JSON and send it with the given verb.
    pub(crate) fn send_json<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(payload).map_err(|e| Error::Decode(e.to_string()))?;
        self.execute(method, path, Some(body))
    }

    /// Fetch one page of a list endpoint and decode the next cursor from the
    /// server's `next` link.
    pub(crate) fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        cursor: &PageQuery,
    ) -> Result<(Vec<T>, PageQuery)> {
        let url = self.url(path);
        debug!("GET {} ({:?})", url, cursor);
        let request = self
            .request(Method::GET, &url)
            .query(&cursor.to_query_params());
        let body = read_body(request.send()?)?;
        let page: Page<T> =
            serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))?;
        let next = page.next_cursor()?;
        Ok((page.results, next))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }
}

/// Login exchange: POST credentials, receive `{"token": ...}`.
///
/// The only unauthenticated call in the crate; it bypasses the bearer header
/// since no token exists yet.
fn login(http: &HttpClient, endpoint: &Url, credentials: &Credentials) -> Result<String> {
    #[derive(Deserialize)]
    struct LoginResponse {
        token: String,
    }

    let url = format!("{}/users/login", endpoint.as_str().trim_end_matches('/'));
    debug!("POST {}", url);
    let payload = serde_json::to_vec(credentials).map_err(|e| Error::Decode(e.to_string()))?;
    let response = http
        .post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()?;
    let body = read_body(response)?;
    let login: LoginResponse = serde_json::from_slice(&body)
        .map_err(|e| Error::Decode(format!("login response: {e}")))?;
    if login.token.is_empty() {
        return Err(Error::Decode("login response had an empty token".to_string()));
    }
    Ok(login.token)
}

/// Read the full body; non-2xx becomes [`Error::Api`] carrying status + body.
fn read_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let body = response.bytes()?.to_vec();
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }
    Ok(body)
}
