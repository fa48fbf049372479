use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tasklist_shared::{
  TodoCreate,
  TodoId,
  TodoPatch
};

use crate::error::SyncError;

pub const CATEGORIES_PATH: &str =
  "/api/categories";
pub const TODOS_PATH: &str = "/api/todos";

/// Bytes escaped in an id path segment;
/// RFC 3986 unreserved characters pass.
const ID_SEGMENT: &AsciiSet =
  &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Method::Get => "GET",
      | Method::Post => "POST",
      | Method::Put => "PUT",
      | Method::Delete => "DELETE"
    }
  }
}

/// A request against the collection API,
/// described without performing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  pub method: Method,
  /// Absolute path, `api_base` excluded.
  pub path:   String,
  pub body:   Option<Value>
}

impl ApiRequest {
  pub fn list_categories() -> Self {
    Self {
      method: Method::Get,
      path:   CATEGORIES_PATH.to_string(),
      body:   None
    }
  }

  pub fn list_todos() -> Self {
    Self {
      method: Method::Get,
      path:   TODOS_PATH.to_string(),
      body:   None
    }
  }

  pub fn create_todo(
    create: &TodoCreate
  ) -> Result<Self, SyncError> {
    Ok(Self {
      method: Method::Post,
      path:   TODOS_PATH.to_string(),
      body:   Some(encode(create)?)
    })
  }

  pub fn update_todo(
    id: &TodoId,
    patch: &TodoPatch
  ) -> Result<Self, SyncError> {
    Ok(Self {
      method: Method::Put,
      path:   todo_path(id),
      body:   Some(encode(patch)?)
    })
  }

  pub fn delete_todo(id: &TodoId) -> Self {
    Self {
      method: Method::Delete,
      path:   todo_path(id),
      body:   None
    }
  }
}

pub fn todo_path(id: &TodoId) -> String {
  let segment = id.to_string();
  format!(
    "{TODOS_PATH}/{}",
    utf8_percent_encode(&segment, ID_SEGMENT)
  )
}

fn encode<T: Serialize>(
  value: &T
) -> Result<Value, SyncError> {
  serde_json::to_value(value)
    .map_err(SyncError::Encode)
}

pub fn is_success(status: u16) -> bool {
  (200..300).contains(&status)
}

/// Maps a non-2xx status to an error.
pub fn check_status(
  status: u16,
  body: &str
) -> Result<(), SyncError> {
  if is_success(status) {
    Ok(())
  } else {
    Err(SyncError::Status {
      status,
      body: body.to_string()
    })
  }
}

/// Status check followed by JSON decode.
pub fn decode_json<T: DeserializeOwned>(
  status: u16,
  body: &str
) -> Result<T, SyncError> {
  check_status(status, body)?;
  serde_json::from_str(body)
    .map_err(SyncError::Decode)
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use tasklist_shared::TodoDto;

  use super::*;

  #[test]
  fn update_targets_item_path_with_partial_body()
  {
    let req = ApiRequest::update_todo(
      &TodoId::Int(9),
      &TodoPatch::completed(false)
    )
    .expect("encode");

    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/api/todos/9");
    assert_eq!(
      req.body,
      Some(json!({ "completed": false }))
    );
  }

  #[test]
  fn delete_has_no_body() {
    let req = ApiRequest::delete_todo(
      &TodoId::Text("abc".to_string())
    );
    assert_eq!(req.method.as_str(), "DELETE");
    assert_eq!(req.path, "/api/todos/abc");
    assert!(req.body.is_none());
  }

  #[test]
  fn text_ids_are_escaped_as_one_segment()
  {
    let id = TodoId::Text("a/b?c".to_string());
    assert_eq!(
      ApiRequest::delete_todo(&id).path,
      "/api/todos/a%2Fb%3Fc"
    );
    assert_eq!(
      todo_path(&TodoId::Text(
        "x y#1".to_string()
      )),
      "/api/todos/x%20y%231"
    );
    assert_eq!(
      todo_path(&TodoId::Text(
        "a-b_c.d~e".to_string()
      )),
      "/api/todos/a-b_c.d~e"
    );
  }

  #[test]
  fn non_success_status_is_an_error() {
    let err = decode_json::<TodoDto>(
      500,
      r#"{"error":"boom"}"#
    )
    .expect_err("500 must fail");
    assert_eq!(err.status(), Some(500));
    assert_eq!(
      err.to_string(),
      "HTTP error! status: 500"
    );
  }

  #[test]
  fn malformed_body_is_a_decode_error() {
    let err =
      decode_json::<Vec<String>>(200, "{")
        .expect_err("bad json");
    assert!(matches!(
      err,
      SyncError::Decode(_)
    ));
  }

  #[test]
  fn no_content_passes_status_check() {
    assert!(check_status(204, "").is_ok());
    assert!(check_status(404, "").is_err());
  }
}
