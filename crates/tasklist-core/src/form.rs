use tasklist_shared::TodoCreate;

use crate::error::ValidationError;

/// Raw values of the create form, as read
/// from its inputs.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FormValues {
  pub task:     String,
  pub category: String,
  pub due_date: String
}

impl FormValues {
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  /// Trims the inputs and builds the
  /// create body. Empty optionals are
  /// omitted.
  pub fn validate(
    &self,
    require_category: bool
  ) -> Result<TodoCreate, ValidationError>
  {
    let task = self.task.trim();
    if task.is_empty() {
      return Err(
        ValidationError::EmptyTask
      );
    }

    let category =
      non_empty(&self.category);
    if require_category
      && category.is_none()
    {
      return Err(
        ValidationError::MissingCategory
      );
    }

    Ok(TodoCreate {
      task: task.to_string(),
      category,
      due_date: non_empty(&self.due_date)
    })
  }
}

fn non_empty(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  (!trimmed.is_empty())
    .then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn values(
    task: &str,
    category: &str,
    due: &str
  ) -> FormValues {
    FormValues {
      task:     task.to_string(),
      category: category.to_string(),
      due_date: due.to_string()
    }
  }

  #[test]
  fn blank_task_is_rejected() {
    assert_eq!(
      values("   ", "Work", "").validate(false),
      Err(ValidationError::EmptyTask)
    );
  }

  #[test]
  fn category_required_only_when_configured()
  {
    let form = values(" Buy milk ", "", "");
    assert_eq!(
      form.validate(true),
      Err(ValidationError::MissingCategory)
    );

    let create = form
      .validate(false)
      .expect("minimal form accepts");
    assert_eq!(create.task, "Buy milk");
    assert_eq!(create.category, None);
    assert_eq!(create.due_date, None);
  }

  #[test]
  fn full_form_builds_create_body() {
    let create =
      values("Buy milk", "Errands", "2024-01-01")
        .validate(true)
        .expect("valid form");
    assert_eq!(
      create.category.as_deref(),
      Some("Errands")
    );
    assert_eq!(
      create.due_date.as_deref(),
      Some("2024-01-01")
    );
  }
}
