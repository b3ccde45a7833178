use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    answer: String,
}

#[derive(Debug)]
pub enum ServiceError {
    RequestFailed,
    Transport(String),
    MissingAnswer,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed => write!(f, "Something went wrong with the API request."),
            Self::Transport(detail) => write!(f, "{detail}"),
            Self::MissingAnswer => write!(f, "The API response did not contain an answer."),
        }
    }
}

impl Error for ServiceError {}

#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String, ServiceError>;
}

pub struct HttpAnswerService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!("{}/api/query", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, query: &str) -> Result<String, ServiceError> {
        let url = self.query_url();
        tracing::debug!(%url, "sending query");

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;

        let status = response.status();
        tracing::debug!(%status, "query settled");

        if !status.is_success() {
            return Err(ServiceError::RequestFailed);
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|_| ServiceError::MissingAnswer)?;

        Ok(body.answer)
    }
}
