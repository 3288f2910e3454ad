//! REST client for the customers endpoint.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use domain::CUSTOMERS_PATH;

use crate::config::ConsoleConfig;
use crate::model::{CustomerPayload, CustomerRecord, RecordId};

/// The request being made, used to word failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message reported when the server answers with a non-2xx status.
    pub fn failure(&self) -> &'static str {
        match self {
            Self::List => "Failed to fetch customers",
            Self::Get => "Failed to fetch customer details",
            Self::Create => "Failed to create customer",
            Self::Update => "Failed to update customer",
            Self::Delete => "Failed to delete customer",
        }
    }
}

/// Errors from talking to the customers API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .op.failure())]
    Status { op: Operation, status: StatusCode },

    #[error("{}: {source}", .op.failure())]
    Transport {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}: unreadable response: {source}", .op.failure())]
    Decode {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The five calls the console makes.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// `GET /customers`
    async fn list(&self) -> ApiResult<Vec<CustomerRecord>>;

    /// `GET /customers/{id}`
    async fn get(&self, id: &RecordId) -> ApiResult<CustomerRecord>;

    /// `POST /customers`
    async fn create(&self, payload: &CustomerPayload) -> ApiResult<CustomerRecord>;

    /// `PUT /customers/{id}`
    async fn update(&self, id: &RecordId, payload: &CustomerPayload) -> ApiResult<CustomerRecord>;

    /// `DELETE /customers/{id}`
    async fn delete(&self, id: &RecordId) -> ApiResult<()>;
}

/// `CustomerApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: Url,
}

impl HttpCustomerApi {
    pub fn new(config: &ConsoleConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.api_url.clone()));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    /// `{base}/customers` or `{base}/customers/{id}`, with the id encoded as
    /// one path segment.
    fn url(&self, id: Option<&RecordId>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(CUSTOMERS_PATH);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    async fn send(
        &self,
        op: Operation,
        method: Method,
        id: Option<&RecordId>,
        body: Option<&CustomerPayload>,
    ) -> ApiResult<Response> {
        let url = self.url(id);
        tracing::debug!(method = %method, url = %url, "Sending customer request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { op, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, operation = ?op, "Customer request rejected");
            return Err(ApiError::Status { op, status });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(op: Operation, response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { op, source })
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn list(&self) -> ApiResult<Vec<CustomerRecord>> {
        let op = Operation::List;
        let response = self.send(op, Method::GET, None, None).await?;
        Self::decode(op, response).await
    }

    async fn get(&self, id: &RecordId) -> ApiResult<CustomerRecord> {
        let op = Operation::Get;
        let response = self.send(op, Method::GET, Some(id), None).await?;
        Self::decode(op, response).await
    }

    async fn create(&self, payload: &CustomerPayload) -> ApiResult<CustomerRecord> {
        let op = Operation::Create;
        let response = self.send(op, Method::POST, None, Some(payload)).await?;
        Self::decode(op, response).await
    }

    async fn update(&self, id: &RecordId, payload: &CustomerPayload) -> ApiResult<CustomerRecord> {
        let op = Operation::Update;
        let response = self.send(op, Method::PUT, Some(id), Some(payload)).await?;
        Self::decode(op, response).await
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        self.send(Operation::Delete, Method::DELETE, Some(id), None)
            .await?;
        Ok(())
    }
}
