use reqwest::{Client, Response};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

/// Collapses a finished `reqwest` call into the body text or a typed error.
#[allow(async_fn_in_trait)]
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::ResponseStatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to send the request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("unexpected status code {status}")]
    ResponseStatusError { status: u16, body: String },
    #[error("failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("failed to parse response")]
    ParseResponseError {
        body: String,
        #[source]
        cause: serde_json::Error,
    },
}
