use reqwest::Client;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
        }
    }

    pub fn new_with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some(endpoint.into()),
        }
    }

    async fn resolved_endpoint(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            endpoint.clone()
        } else {
            config::await_sign_in_endpoint().await
        }
    }

    /// Posts the credentials once. Any 2xx is a success whatever the body says.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<(), SignInError> {
        let endpoint = self.resolved_endpoint().await;
        log::debug!("sign-in submitted: {:?}", request);

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SignInError::transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await;
        match &body {
            Ok(raw) => log::debug!("sign-in response {}: {}", status, raw),
            Err(err) => log::debug!("sign-in response {} with unreadable body: {}", status, err),
        }

        if status.is_success() {
            return Ok(());
        }

        let raw = body.map_err(|e| SignInError::transport(format!("Failed to read error: {}", e)))?;
        Err(SignInError::Rejected {
            status: status.as_u16(),
            message: RejectionBody::from_body(&raw),
        })
    }
}
