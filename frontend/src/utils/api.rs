use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Maps an HTTP status to success only for the 2xx range.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Thin request builder used by every network call on the page.
pub struct Api;

/// Request wrapper that turns transport and status failures into `ApiError`
pub struct RequestWrapper {
    request: Request,
    url: String,
}

impl RequestWrapper {
    fn new(url: &str, method: &str) -> Self {
        let request = match method {
            "POST" => Request::post(url),
            _ => Request::get(url),
        };

        Self {
            request,
            url: url.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, ApiError> {
        let body_string = serde_json::to_string(data)?;
        self.request = self.request.header("Content-Type", "application/json");
        self.request = self.request.body(body_string);
        Ok(self)
    }

    /// Send the request; anything outside 2xx comes back as `ApiError::Status`.
    pub async fn send(self) -> Result<Response, ApiError> {
        let response = self
            .request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Err(e) = check_status(response.status()) {
            log::warn!("{} returned {}", self.url, response.status());
            return Err(e);
        }
        Ok(response)
    }
}

impl Api {
    pub fn get(url: &str) -> RequestWrapper {
        RequestWrapper::new(url, "GET")
    }

    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::new(url, "POST")
    }
}

/// GET `url` and decode the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Api::get(url).send().await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_success() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(500), Err(ApiError::Status(500))));
        assert!(matches!(check_status(404), Err(ApiError::Status(404))));
        assert!(matches!(check_status(301), Err(ApiError::Status(301))));
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Server responded with status 500"
        );
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network request failed: offline"
        );
    }
}
