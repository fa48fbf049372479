use std::fmt;

use serde::{
  Deserialize,
  Deserializer,
  Serialize
};

/// Server-assigned task identifier.
///
/// The collection API hands out integer keys today, but the client treats
/// the value as opaque and accepts string keys as well. Two ids are equal
/// when their text forms are, so `1` and `"1"` name the same task.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
)]
#[serde(untagged)]
pub enum TodoId {
  Int(i64),
  Text(String)
}

impl PartialEq for TodoId {
  fn eq(
    &self,
    other: &Self
  ) -> bool {
    match (self, other) {
      | (TodoId::Int(a), TodoId::Int(b)) => {
        a == b
      }
      | (TodoId::Text(a), TodoId::Text(b)) => {
        a == b
      }
      | (TodoId::Int(n), TodoId::Text(s))
      | (TodoId::Text(s), TodoId::Int(n)) => {
        n.to_string() == *s
      }
    }
  }
}

impl Eq for TodoId {}

impl fmt::Display for TodoId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | TodoId::Int(id) => {
        write!(f, "{id}")
      }
      | TodoId::Text(id) => {
        f.write_str(id)
      }
    }
  }
}

/// Treats an explicit JSON `null` like a
/// missing field.
fn null_as_default<'de, D, T>(
  deserializer: D
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>
{
  Option::<T>::deserialize(deserializer)
    .map(Option::unwrap_or_default)
}

pub type Category = String;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoDto {
  pub id:        TodoId,
  #[serde(
    default,
    deserialize_with = "null_as_default"
  )]
  pub task:      String,
  #[serde(default)]
  pub category:  Option<Category>,
  #[serde(default)]
  pub due_date:  Option<String>,
  #[serde(
    default,
    deserialize_with = "null_as_default"
  )]
  pub completed: bool
}

/// Body of `POST /api/todos`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoCreate {
  pub task:     String,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub category: Option<Category>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date: Option<String>
}

/// Body of `PUT /api/todos/{id}`. Absent fields are left untouched by the
/// server.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TodoPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub task:      Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub category:  Option<Category>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub completed: Option<bool>
}

impl TodoPatch {
  pub fn completed(
    completed: bool
  ) -> Self {
    Self {
      completed: Some(completed),
      ..Self::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn todo_id_accepts_integer_and_string_keys()
  {
    let int: TodoId =
      serde_json::from_value(json!(42))
        .expect("integer id");
    let text: TodoId =
      serde_json::from_value(json!(
        "a1b2"
      ))
      .expect("string id");

    assert_eq!(int, TodoId::Int(42));
    assert_eq!(int.to_string(), "42");
    assert_eq!(
      text,
      TodoId::Text("a1b2".to_string())
    );
    assert_eq!(text.to_string(), "a1b2");
  }

  #[test]
  fn todo_dto_defaults_missing_optional_fields()
  {
    let dto: TodoDto =
      serde_json::from_value(json!({
        "id": 7,
        "task": "Water plants"
      }))
      .expect("decode todo");

    assert_eq!(dto.id, TodoId::Int(7));
    assert_eq!(dto.category, None);
    assert_eq!(dto.due_date, None);
    assert!(!dto.completed);
  }

  #[test]
  fn null_task_and_completed_decode_as_defaults()
  {
    let todos: Vec<TodoDto> =
      serde_json::from_value(json!([
        { "id": 1, "task": null, "completed": false },
        { "id": 2, "task": "Pay rent", "completed": null }
      ]))
      .expect("nulls are tolerated");

    assert_eq!(todos[0].task, "");
    assert!(!todos[0].completed);
    assert_eq!(todos[1].task, "Pay rent");
    assert!(!todos[1].completed);
  }

  #[test]
  fn integer_and_string_ids_with_same_text_are_equal()
  {
    assert_eq!(
      TodoId::Int(1),
      TodoId::Text("1".to_string())
    );
    assert_ne!(
      TodoId::Int(1),
      TodoId::Text("01".to_string())
    );
    assert_ne!(TodoId::Int(1), TodoId::Int(2));
  }

  #[test]
  fn completed_patch_only_carries_completed_field()
  {
    let body = serde_json::to_value(
      TodoPatch::completed(true)
    )
    .expect("encode patch");

    assert_eq!(
      body,
      json!({ "completed": true })
    );
  }

  #[test]
  fn create_body_omits_missing_optionals()
  {
    let body =
      serde_json::to_value(TodoCreate {
        task:     "Call mom".to_string(),
        category: None,
        due_date: None
      })
      .expect("encode create");

    assert_eq!(
      body,
      json!({ "task": "Call mom" })
    );
  }
}
