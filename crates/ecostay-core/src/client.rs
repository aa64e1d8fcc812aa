//! Transport for the recommendation request.

use std::time::Duration;

use async_trait::async_trait;
use ecostay_config::ApiConfig;
use tracing::debug;

use crate::error::ClientError;
use crate::models::{RecommendationResponse, RecommendationSet, SearchQuery};

/// Anything that can turn a query into a ranked hotel list.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn recommend(&self, query: &SearchQuery) -> Result<RecommendationSet, ClientError>;
}

/// `POST`s the query as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpRecommendationClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRecommendationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport(&self, source: reqwest::Error) -> ClientError {
        ClientError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(&self, query: &SearchQuery) -> Result<RecommendationSet, ClientError> {
        debug!(endpoint = %self.endpoint, top_n = query.result_limit, "sending recommendation request");

        let res = self
            .client
            .post(&self.endpoint)
            .json(&query.to_request())
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| self.transport(e))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecommendationResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> HttpRecommendationClient {
        HttpRecommendationClient::new(server.url("/recommend"), Duration::from_secs(5)).unwrap()
    }

    async fn respond_with(server: &MockServer, status: u16, body: &str) {
        let body = body.to_string();
        server
            .mock_async(|when, then| {
                when.method(POST).path("/recommend");
                then.status(status).body(body);
            })
            .await;
    }

    #[tokio::test]
    async fn test_posts_wire_body_and_parses_hotels() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/recommend")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "user_query": "quiet",
                        "user_lat": 45.0,
                        "user_lng": 1.0,
                        "top_n": 4
                    }));
                then.status(200).json_body(json!({
                    "recommendations": [
                        { "Name": "A", "Rating": 8.0, "HotelLink": "https://a",
                          "address": "1 rue A", "description": "a",
                          "images_parsed": ["a1", "a2"] },
                        { "Name": "B", "Rating": 5.0, "HotelLink": "https://b",
                          "address": "2 rue B", "description": "b" }
                    ]
                }));
            })
            .await;

        let query = SearchQuery::new("quiet", Coordinate::new(45.0, 1.0));
        let set = client_for(&server).recommend(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().images, vec!["a1", "a2"]);
        assert!(set.get(1).unwrap().images.is_empty());
    }

    #[tokio::test]
    async fn test_missing_recommendations_field_is_empty() {
        let server = MockServer::start_async().await;
        respond_with(&server, 200, "{}").await;

        let query = SearchQuery::new("", Coordinate::PARIS);
        let set = client_for(&server).recommend(&query).await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let server = MockServer::start_async().await;
        respond_with(&server, 500, r#"{"detail": "model not loaded"}"#).await;

        let query = SearchQuery::new("x", Coordinate::PARIS);
        let err = client_for(&server).recommend(&query).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start_async().await;
        respond_with(&server, 200, "<html>not json</html>").await;

        let query = SearchQuery::new("x", Coordinate::PARIS);
        let err = client_for(&server).recommend(&query).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Nothing listens on the discard port locally.
        let client =
            HttpRecommendationClient::new("http://127.0.0.1:9/recommend", Duration::from_secs(2))
                .unwrap();
        let err = client
            .recommend(&SearchQuery::new("x", Coordinate::PARIS))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
    }
}
