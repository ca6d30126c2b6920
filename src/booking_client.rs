use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

/// Credential pair for the `/auth` endpoint. Used once per call.
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// Opaque bearer token issued by the booking API.
///
/// No internal structure is assumed beyond being a non-empty string; it is
/// sent back verbatim as a `token=<value>` cookie on mutating requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(inner: String) -> Self {
        Self(inner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    /// The server answered, but the body carried no token. The API returns
    /// HTTP 200 even for bad credentials, so the status code alone never
    /// proves a login succeeded; the original status and body are kept for
    /// inspection.
    #[error("Authentication failed: {reason}")]
    Rejected {
        status: StatusCode,
        body: serde_json::Value,
        reason: String,
    },
    /// The HTTP layer itself failed (connection, timeout, malformed body).
    #[error("Authentication network or processing error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(serde::Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// One configured HTTP client bound to the booking API's base URL.
///
/// The raw verb methods return the `reqwest::Response` untouched; scenarios
/// assert on status and body themselves. `authenticate` is the only call
/// that interprets a response.
#[derive(Clone, Debug)]
pub struct BookingApiClient {
    base_url: String,
    http_client: Client,
}

impl BookingApiClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            base_url,
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.http_client
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
    }

    pub async fn post_json<Body>(
        &self,
        path: &str,
        body: &Body,
    ) -> Result<reqwest::Response, reqwest::Error>
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
    }

    pub async fn put_json<Body>(
        &self,
        path: &str,
        body: &Body,
        token: Option<&AuthToken>,
    ) -> Result<reqwest::Response, reqwest::Error>
    where
        Body: serde::Serialize,
    {
        let mut request = self
            .http_client
            .put(self.url(path))
            .header("Accept", "application/json")
            .json(body);
        if let Some(token) = token {
            request = request.header("Cookie", format!("token={}", token.as_str()));
        }
        request.send().await
    }

    pub async fn delete(
        &self,
        path: &str,
        token: Option<&AuthToken>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.http_client.delete(self.url(path));
        if let Some(token) = token {
            request = request.header("Cookie", format!("token={}", token.as_str()));
        }
        request.send().await
    }

    /// Exchange a credential pair for a bearer token.
    ///
    /// The API answers 200 for bad credentials too; the discriminator is the
    /// body shape. A `token` field resolves to `Ok`, anything else becomes
    /// `AuthError::Rejected` carrying the original status and body.
    #[tracing::instrument(
        name = "Authenticating against the booking API",
        skip(self, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let request_body = AuthRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };
        let response = self
            .http_client
            .post(self.url("/auth"))
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        let body: serde_json::Value = response.json().await?;
        match body.get("token").and_then(|token| token.as_str()) {
            Some(token) if !token.is_empty() => Ok(AuthToken(token.to_owned())),
            _ => {
                let reason = body
                    .get("reason")
                    .and_then(|reason| reason.as_str())
                    .unwrap_or("No token received.")
                    .to_owned();
                tracing::error!(
                    status = %status,
                    body = %body,
                    "Authentication request rejected"
                );
                Err(AuthError::Rejected {
                    status,
                    body,
                    reason,
                })
            }
        }
    }

    /// Best-effort teardown for bookings created by mutating scenarios.
    ///
    /// Any failure is logged and discarded; leaked test data in the external
    /// system is an accepted risk.
    pub async fn cleanup_booking(&self, booking_id: i64, token: &AuthToken) {
        match self
            .delete(&format!("/booking/{booking_id}"), Some(token))
            .await
        {
            Ok(response) => {
                tracing::debug!(
                    status = %response.status(),
                    "Cleaned up booking {booking_id}"
                );
            }
            Err(e) => {
                tracing::warn!("Failed to clean up booking {booking_id}: {e:?}");
            }
        }
    }
}
