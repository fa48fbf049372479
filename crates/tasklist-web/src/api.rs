use gloo::net::http::{
  Request,
  RequestBuilder
};
use serde::de::DeserializeOwned;
use tasklist_core::http::{
  check_status,
  decode_json
};
use tasklist_core::{
  ApiRequest,
  Method,
  SyncConfig,
  SyncError
};

/// Performs [`ApiRequest`]s with the
/// browser's fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
  config: SyncConfig
}

impl ApiClient {
  pub fn new(config: &SyncConfig) -> Self {
    Self {
      config: config.clone()
    }
  }

  async fn send(
    &self,
    request: &ApiRequest
  ) -> Result<(u16, String), SyncError> {
    let url = self.config.url(&request.path);
    tracing::debug!(
      method = request.method.as_str(),
      url = %url,
      "sending request"
    );

    let builder: RequestBuilder =
      match request.method {
        | Method::Get => Request::get(&url),
        | Method::Post => Request::post(&url),
        | Method::Put => Request::put(&url),
        | Method::Delete => {
          Request::delete(&url)
        }
      };

    let response = match &request.body {
      | Some(body) => {
        builder
          .header(
            "Content-Type",
            "application/json"
          )
          .body(body.to_string())
          .map_err(transport)?
          .send()
          .await
      }
      | None => builder.send().await
    }
    .map_err(transport)?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(transport)?;
    tracing::debug!(
      status,
      bytes = text.len(),
      "received response"
    );
    Ok((status, text))
  }

  /// Sends `request` and decodes a JSON
  /// body from a 2xx response.
  pub async fn json<T: DeserializeOwned>(
    &self,
    request: &ApiRequest
  ) -> Result<T, SyncError> {
    let (status, body) =
      self.send(request).await?;
    decode_json(status, &body)
  }

  /// Sends `request`; only the status
  /// matters.
  pub async fn status(
    &self,
    request: &ApiRequest
  ) -> Result<(), SyncError> {
    let (status, body) =
      self.send(request).await?;
    check_status(status, &body)
  }
}

fn transport(
  error: gloo::net::Error
) -> SyncError {
  SyncError::Transport(error.to_string())
}
