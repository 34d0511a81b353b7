//! Server-backed responder.
//!
//! Posts `{"message": ...}` to the chat endpoint and renders whatever text
//! comes back in the `response` field. One request per message, no retry, no
//! timeout beyond the transport default.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::{CONNECTION_ERROR_REPLY, ERROR_REPLY, Responder};
use crate::message::ChatRequest;

/// Path of the chat endpoint relative to the server base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Failures below the HTTP semantics layer: DNS, connect, abort, body read.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid chat endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Chat request failed: {0}")]
    Request(String),

    #[error("Chat response body could not be read: {0}")]
    Body(String),
}

/// Moves one [`ChatRequest`] to the server and returns the raw response body.
///
/// The HTTP status is not interpreted here; an error status with a JSON body
/// is still a delivered response.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_chat(&self, request: &ChatRequest) -> Result<Vec<u8>, TransportError>;
}

/// [`ChatTransport`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: Url,
}

impl ReqwestTransport {
    /// Transport targeting `{base_url}/api/chat`.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(CHAT_PATH))
            .map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for ReqwestTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<Vec<u8>, TransportError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!("chat endpoint answered {status}");
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// How a delivered response body reads.
#[derive(Debug, PartialEq, Eq)]
enum ReplyBody {
    /// A non-empty `response` string.
    Reply(String),
    /// JSON, but no usable `response` field.
    Unusable,
    /// Not JSON at all, or `null`.
    Undecodable,
}

fn parse_reply(body: &[u8]) -> ReplyBody {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) | Err(_) => ReplyBody::Undecodable,
        Ok(value) => match value.get("response").and_then(Value::as_str) {
            Some(r) if !r.is_empty() => ReplyBody::Reply(r.to_string()),
            _ => ReplyBody::Unusable,
        },
    }
}

/// [`Responder`] that asks the chat server.
pub struct ServerResponder<T = ReqwestTransport> {
    transport: T,
}

impl<T: ChatTransport> ServerResponder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl ServerResponder<ReqwestTransport> {
    /// Responder posting to `{base_url}/api/chat`.
    pub fn from_base_url(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self::new(ReqwestTransport::new(base_url)?))
    }
}

#[async_trait]
impl<T: ChatTransport> Responder for ServerResponder<T> {
    async fn reply(&self, message: &str) -> String {
        let request = ChatRequest {
            message: message.to_string(),
        };
        let body = match self.transport.post_chat(&request).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{e}");
                return CONNECTION_ERROR_REPLY.to_string();
            }
        };

        match parse_reply(&body) {
            ReplyBody::Reply(reply) => reply,
            ReplyBody::Unusable => {
                log::warn!(
                    "chat response had no usable 'response' field: {}",
                    String::from_utf8_lossy(&body)
                );
                ERROR_REPLY.to_string()
            }
            ReplyBody::Undecodable => {
                log::warn!(
                    "chat response is not a JSON value: {}",
                    String::from_utf8_lossy(&body)
                );
                CONNECTION_ERROR_REPLY.to_string()
            }
        }
    }
}
