//! RPC bridge client for the panel's tRPC endpoint.
//!
//! [`PanelClient`] turns a `(procedure, input)` pair into an HTTP request,
//! attaches the session credential when one is known, and unwraps the
//! response envelope into a plain JSON value or a [`PanelError`].
//!
//! ```no_run
//! use easypanel_mcp::client::PanelClient;
//!
//! # async fn example() -> easypanel_mcp::error::Result<()> {
//! let client = PanelClient::new("https://panel.example.com/", None);
//! client.login("admin@example.com", "secret").await?;
//! let projects = client.query("projects.listProjects", None).await?;
//! println!("{projects}");
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod envelope;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use serde_json::Value;

use crate::error::{PanelError, Result};

/// JSON object used as call input.
pub type JsonObject = serde_json::Map<String, Value>;

/// Path segment between the endpoint and the procedure name.
pub const RPC_PATH_PREFIX: &str = "api/trpc";

/// Procedure used by [`PanelClient::login`].
pub const LOGIN_PROCEDURE: &str = "auth.login";

/// How a procedure is called. Only changes transport mechanics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum CallKind {
    /// Read call; input travels in the URL.
    Query,
    /// Side-effecting call; input travels in the request body.
    Mutation,
}

/// Client for a single panel endpoint.
///
/// Cloning is cheap; clones share the session credential.
#[derive(Clone)]
pub struct PanelClient {
    http: reqwest::Client,
    endpoint: String,
    credential: Arc<RwLock<Option<String>>>,
}

impl fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelClient")
            .field("endpoint", &self.endpoint)
            .field("credential", &self.credential().map(|_| ".."))
            .finish()
    }
}

impl PanelClient {
    /// Create a client for `endpoint`, optionally with a pre-issued token.
    ///
    /// Trailing slashes are stripped so procedure paths can be appended.
    pub fn new(endpoint: impl Into<String>, credential: Option<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            endpoint,
            credential: Arc::new(RwLock::new(credential)),
        }
    }

    /// Use a custom reqwest client (proxies, TLS roots, ...).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Normalized endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current session credential. Empty tokens count as absent.
    pub fn credential(&self) -> Option<String> {
        let guard = self.credential.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    /// Log in and keep the returned token for all later calls.
    ///
    /// The stored credential is only replaced when the panel answers with a
    /// token; any failure leaves it untouched.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<String> {
        let mut payload = JsonObject::new();
        payload.insert("email".into(), Value::String(identifier.to_owned()));
        payload.insert("password".into(), Value::String(secret.to_owned()));

        let result = self.mutation(LOGIN_PROCEDURE, &payload).await?;
        let token = match result.get("token") {
            Some(Value::String(token)) => token.clone(),
            _ => return Err(PanelError::protocol(&result.to_string())),
        };

        *self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        Ok(token)
    }

    /// Call a read procedure. `None` sends no query string at all.
    pub async fn query(&self, procedure: &str, input: Option<&JsonObject>) -> Result<Value> {
        let mut url = self.procedure_url(procedure);
        if let Some(input) = input {
            url.push_str(&encoding::query_suffix(input));
        }
        let request = self.http.get(url).headers(self.headers()?);
        self.send(request).await
    }

    /// Call a write procedure. Pass an empty object for no-argument mutations.
    pub async fn mutation(&self, procedure: &str, input: &JsonObject) -> Result<Value> {
        let body = encoding::mutation_body(input);
        let mut headers = self.headers()?;
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

        let request = self
            .http
            .post(self.procedure_url(procedure))
            .headers(headers)
            .body(body);
        self.send(request).await
    }

    /// Dispatch on [`CallKind`].
    pub async fn call(
        &self,
        kind: CallKind,
        procedure: &str,
        input: Option<&JsonObject>,
    ) -> Result<Value> {
        match kind {
            CallKind::Query => self.query(procedure, input).await,
            CallKind::Mutation => match input {
                Some(input) => self.mutation(procedure, input).await,
                None => self.mutation(procedure, &JsonObject::new()).await,
            },
        }
    }

    fn procedure_url(&self, procedure: &str) -> String {
        format!("{}/{RPC_PATH_PREFIX}/{procedure}", self.endpoint)
    }

    /// Headers shared by every request. The credential is read once here.
    ///
    /// A stored token that cannot be sent as a header value fails the call
    /// instead of going out unauthenticated.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.credential() {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                PanelError::InvalidArgument("session token is not a valid header value".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let body = response.text().await?;
        envelope::interpret(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slashes_are_stripped() {
        let client = PanelClient::new("http://panel.local:3000///", None);
        assert_eq!(client.endpoint(), "http://panel.local:3000");
        assert_eq!(
            client.procedure_url("app.deployService"),
            "http://panel.local:3000/api/trpc/app.deployService"
        );
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let client = PanelClient::new("http://panel.local", Some(String::new()));
        assert!(!client.has_credential());
        assert!(client.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let client = PanelClient::new("http://panel.local", Some("tok\nevil".into()));
        assert!(client.has_credential());
        let err = client.headers().unwrap_err();
        assert!(matches!(err, PanelError::InvalidArgument(msg) if msg.contains("header")));
    }

    #[test]
    fn headers_carry_bearer_token_when_present() {
        let client = PanelClient::new("http://panel.local", Some("tok".into()));
        let headers = client.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn debug_output_redacts_token() {
        let client = PanelClient::new("http://panel.local", Some("secret-token".into()));
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn call_kind_round_trips_through_strings() {
        assert_eq!(CallKind::Mutation.to_string(), "mutation");
        assert_eq!("query".parse::<CallKind>().unwrap(), CallKind::Query);
    }
}
