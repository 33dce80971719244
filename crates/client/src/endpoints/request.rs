//! Shared request plumbing for provisioning calls.
//!
//! Every request builds its own header set; nothing is shared or mutated
//! between calls, so operations stay safe if they are ever issued
//! concurrently.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::{ClientError, Result};

/// POST a serializable body as JSON and return the response body text.
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &T,
) -> Result<String> {
    let response = client
        .post(url)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, api_key)
        .json(body)
        .send()
        .await?;

    read_response(response).await
}

/// POST pre-rendered JSON text and return the response body text.
pub(crate) async fn post_rendered(
    client: &Client,
    url: &str,
    api_key: &str,
    body: String,
) -> Result<String> {
    let response = client
        .post(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, api_key)
        .body(body)
        .send()
        .await?;

    read_response(response).await
}

/// Map the response to its body text, or to `ApiError` on non-2xx status.
async fn read_response(response: Response) -> Result<String> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read response body".to_string());

    if status.is_success() {
        Ok(body)
    } else {
        Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: body,
        })
    }
}
