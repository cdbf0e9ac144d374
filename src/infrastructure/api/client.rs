use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::auth::Credentials;
use super::endpoint::Endpoint;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure the supervisor sees as an UNKNOWN verdict, one variant per cause
/// the output message distinguishes.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not connect to PVE API: connection timeout")]
    Timeout,
    #[error("Could not connect to PVE API: certificate validation failed")]
    CertificateValidation,
    #[error("Could not connect to PVE API: {0}")]
    Connection(String),
    #[error("Could not fetch data from API: invalid username or password")]
    InvalidCredentials,
    #[error("Could not fetch data from API: access denied, check that the API user has sufficient permissions and the role has been assigned")]
    AccessDenied,
    #[error("Could not fetch data from API: HTTP error code was {0}")]
    HttpStatus(u16),
    #[error("Could not decode API response: {0}")]
    Decode(String),
    #[error("Could not initialize HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if err.is_connect() {
            if chain_mentions(&err, "certificate") {
                return Self::CertificateValidation;
            }
            return Self::Connection(root_cause(&err));
        }
        if err.is_decode() {
            return Self::Decode(root_cause(&err));
        }
        Self::Connection(root_cause(&err))
    }
}

fn chain_mentions(err: &dyn std::error::Error, needle: &str) -> bool {
    let mut current: Option<&dyn std::error::Error> = Some(err);
    while let Some(e) = current {
        if e.to_string().contains(needle) {
            return true;
        }
        current = e.source();
    }
    false
}

fn root_cause(err: &reqwest::Error) -> String {
    let mut current: &dyn std::error::Error = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

/// Every response wraps its payload in a `data` member.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TicketData {
    ticket: String,
}

/// Thin authenticated client for the PVE JSON API. One instance serves the
/// single request a probe run issues.
pub struct PveClient {
    http: reqwest::Client,
    host: String,
    port: u16,
    authorization: Option<String>,
    cookie: Option<String>,
}

impl PveClient {
    /// Builds the underlying HTTP client. `insecure` disables certificate
    /// verification for clusters running self-signed certificates.
    pub fn new(host: impl Into<String>, port: u16, insecure: bool) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;
        Ok(Self {
            http,
            host: host.into(),
            port,
            authorization: None,
            cookie: None,
        })
    }

    fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!(
            "https://{}:{}/api2/json/{}",
            self.host,
            self.port,
            endpoint.path()
        )
    }

    /// Prepares authentication material: a static token becomes an
    /// Authorization header; a password is exchanged for a session ticket
    /// attached as a cookie on the data request.
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<(), ApiError> {
        match credentials {
            Credentials::Token { .. } => {
                self.authorization = credentials.authorization_header();
            }
            Credentials::Password { user, password } => {
                let ticket = self.request_ticket(user, password).await?;
                self.cookie = Some(format!("PVEAuthCookie={ticket}"));
            }
        }
        Ok(())
    }

    async fn request_ticket(&self, user: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url(&Endpoint::AccessTicket);
        debug!(%url, "requesting session ticket");
        let response = self
            .http
            .post(&url)
            .form(&[("username", user), ("password", password)])
            .send()
            .await?;
        let data: TicketData = Self::decode(response).await?;
        Ok(data.ticket)
    }

    /// Issues one GET and unwraps the `data` envelope into `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!(%url, "querying API");
        let mut request = self.http.get(&url);
        if let Some(ref authorization) = self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization.as_str());
        }
        if let Some(ref cookie) = self.cookie {
            request = request.header(reqwest::header::COOKIE, cookie.as_str());
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        debug!(code = status.as_u16(), "API response");
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => ApiError::InvalidCredentials,
                403 => ApiError::AccessDenied,
                code => ApiError::HttpStatus(code),
            });
        }
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }
}
