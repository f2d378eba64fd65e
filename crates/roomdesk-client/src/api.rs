use reqwest::Response;

use roomdesk_common::error::ApiError;
use roomdesk_common::room::{Room, RoomDraft};

/// HTTP client for the room-booking service. Thin: no retries, no caching,
/// every call is an independent request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/rooms", self.base_url))
            .send()
            .await
            .map_err(network)?;
        let response = check_status(response).await?;
        response.json::<Vec<Room>>().await.map_err(network)
    }

    pub async fn create_room(&self, draft: &RoomDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/api/rooms", self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn update_room(&self, id: u64, draft: &RoomDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .put(format!("{}/api/rooms/{}", self.base_url, id))
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn delete_room(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/api/rooms/{}", self.base_url, id))
            .send()
            .await
            .map_err(network)?;
        check_status(response).await?;
        Ok(())
    }
}

fn network(e: reqwest::Error) -> ApiError {
    tracing::warn!("request failed: {}", e);
    ApiError::Network(e.to_string())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        message
    };
    Err(ApiError::Remote {
        status: status.as_u16(),
        message,
    })
}
