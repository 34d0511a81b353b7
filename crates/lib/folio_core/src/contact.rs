//! Contact form model, validation and client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Path of the contact endpoint relative to the server base URL.
pub const CONTACT_PATH: &str = "/contact";

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Reply of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Contact request failed: {0}")]
    Request(String),

    #[error("Unexpected contact response: {0}")]
    Response(String),
}

impl ContactRequest {
    /// Every field must be non-blank and the email must look like `a@b`.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::Validation(format!("{field} is required")));
            }
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::Validation(
                "email must be a valid address".into(),
            )),
        }
    }
}

/// Submits contact forms to a Folio server.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: Url,
}

impl ContactClient {
    /// Client targeting `{base_url}/contact`.
    pub fn new(base_url: &str) -> Result<Self, ContactError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(CONTACT_PATH))
            .map_err(|e| ContactError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validates locally, then posts. A `success: false` reply is returned
    /// as-is; only transport and decoding failures are errors.
    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, ContactError> {
        request.validate()?;

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ContactError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ContactError::Request(e.to_string()))?;

        serde_json::from_slice::<ContactResponse>(&body).map_err(|e| {
            ContactError::Response(format!(
                "{status}: {e}: {}",
                String::from_utf8_lossy(&body)
            ))
        })
    }
}
