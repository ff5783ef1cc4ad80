use std::time::Duration;

use reqwest::StatusCode;

use plaza_types::api::{
    CreateListingRequest, LoginRequest, LoginResponse, MessageBody, RegisterRequest, RemoteUser,
};

use crate::error::CoreError;

/// A hung request must not leave a screen waiting forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the account/listing HTTP service.
///
/// Transport failures, timeouts, 5xx and unreadable bodies all surface as
/// `RemoteUnavailable`; a 401 on login is `AuthFailure`; a 400 carries the
/// server's own message as `Validation`. Nothing retries automatically and
/// no call mutates local state.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<(), CoreError> {
        let resp = self.http.post(self.url("/register")).json(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::BAD_REQUEST {
            Err(CoreError::Validation(error_message(resp).await))
        } else {
            Err(CoreError::RemoteUnavailable(format!(
                "register failed with status {status}"
            )))
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<RemoteUser, CoreError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let resp = self.http.post(self.url("/login")).json(&req).send().await?;
        let status = resp.status();
        if status.is_success() {
            let body: LoginResponse = resp.json().await?;
            Ok(body.user)
        } else if status == StatusCode::UNAUTHORIZED {
            Err(CoreError::AuthFailure)
        } else if status == StatusCode::BAD_REQUEST {
            Err(CoreError::Validation(error_message(resp).await))
        } else {
            Err(CoreError::RemoteUnavailable(format!(
                "login failed with status {status}"
            )))
        }
    }

    pub async fn create_listing(&self, req: &CreateListingRequest) -> Result<(), CoreError> {
        let resp = self.http.post(self.url("/listings")).json(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::BAD_REQUEST {
            Err(CoreError::Validation(error_message(resp).await))
        } else {
            Err(CoreError::RemoteUnavailable(format!(
                "listing submission failed with status {status}"
            )))
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn error_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_maps_to_remote_unavailable() {
        // Nothing listens on this port; connect either refuses or times out,
        // and both must surface the same way.
        let client = RemoteClient::new("http://127.0.0.1:9").unwrap();

        let err = client.login("a@b.com", "secret1").await.unwrap_err();
        assert!(matches!(err, CoreError::RemoteUnavailable(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = RemoteClient::new("http://example.com/").unwrap();
        assert_eq!(client.url("/login"), "http://example.com/login");
    }
}
