//! Pure projection of synchronizer state
//! into what the list markup shows.

use tasklist_shared::{
  TodoDto,
  TodoId
};

use crate::config::SyncConfig;
use crate::datetime::format_due_date;

pub const COMPLETED_CLASS: &str =
  "completed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
  pub id:             TodoId,
  /// Value of the row's `data-id`.
  pub dom_id:         String,
  pub text:           String,
  pub text_class:     &'static str,
  pub category_label: String,
  pub due_label:      String,
  pub toggle_label:   String,
  pub delete_label:   String,
  pub completed:      bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
  /// No task list has arrived yet.
  Loading,
  Ready,
  /// The last load failed; the message is
  /// shown as a single error row ahead of
  /// any rows created since.
  Failed(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
  pub status: ListStatus,
  pub rows:   Vec<RowView>
}

impl ListView {
  pub fn error(&self) -> Option<&str> {
    match &self.status {
      | ListStatus::Failed(message) => {
        Some(message.as_str())
      }
      | _ => None
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
  pub value: String,
  pub label: String
}

pub fn render_row(
  todo: &TodoDto,
  cfg: &SyncConfig
) -> RowView {
  let labels = &cfg.labels;

  let text = if todo.task.trim().is_empty()
  {
    labels.unnamed_task.clone()
  } else {
    todo.task.clone()
  };

  let category_label = todo
    .category
    .as_deref()
    .map(str::trim)
    .filter(|c| !c.is_empty())
    .map(str::to_string)
    .unwrap_or_else(|| {
      labels.no_category.clone()
    });

  let due = todo
    .due_date
    .as_deref()
    .filter(|d| !d.trim().is_empty())
    .map(|d| {
      format_due_date(d, cfg.date_locale)
    })
    .unwrap_or_else(|| {
      labels.no_due_date.clone()
    });

  RowView {
    id: todo.id.clone(),
    dom_id: todo.id.to_string(),
    text,
    text_class: if todo.completed {
      COMPLETED_CLASS
    } else {
      ""
    },
    category_label,
    due_label: format!(
      "{}{due}",
      labels.due_prefix
    ),
    toggle_label: if todo.completed {
      labels.undo.clone()
    } else {
      labels.complete.clone()
    },
    delete_label: labels.delete.clone(),
    completed: todo.completed
  }
}

/// Placeholder option first, then one
/// option per category in received order.
pub fn category_options(
  categories: &[String],
  cfg: &SyncConfig
) -> Vec<SelectOption> {
  std::iter::once(SelectOption {
    value: String::new(),
    label: cfg
      .labels
      .category_placeholder
      .clone()
  })
  .chain(categories.iter().map(|c| {
    SelectOption {
      value: c.clone(),
      label: c.clone()
    }
  }))
  .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> TodoDto {
    TodoDto {
      id:        TodoId::Int(42),
      task:      "Buy milk".to_string(),
      category:  Some("Errands".to_string()),
      due_date:  Some(
        "2024-01-01".to_string()
      ),
      completed: false
    }
  }

  #[test]
  fn renders_all_labels() {
    let row =
      render_row(&sample(), &SyncConfig::default());

    assert_eq!(row.dom_id, "42");
    assert_eq!(row.text, "Buy milk");
    assert_eq!(row.text_class, "");
    assert_eq!(row.category_label, "Errands");
    assert_eq!(row.due_label, "Due: 1/1/2024");
    assert_eq!(row.toggle_label, "Complete");
    assert_eq!(row.delete_label, "Delete");
  }

  #[test]
  fn completed_rows_are_marked_and_offer_undo()
  {
    let mut todo = sample();
    todo.completed = true;
    let row =
      render_row(&todo, &SyncConfig::default());

    assert_eq!(row.text_class, COMPLETED_CLASS);
    assert_eq!(row.toggle_label, "Undo");
  }

  #[test]
  fn absent_fields_fall_back_to_placeholders()
  {
    let todo = TodoDto {
      id:        TodoId::Text("x".to_string()),
      task:      "  ".to_string(),
      category:  None,
      due_date:  Some(String::new()),
      completed: false
    };
    let row =
      render_row(&todo, &SyncConfig::default());

    assert_eq!(row.text, "Unnamed Task");
    assert_eq!(row.category_label, "No Category");
    assert_eq!(row.due_label, "Due: No due date");
  }

  #[test]
  fn options_start_with_placeholder() {
    let options = category_options(
      &["Work".to_string(), "Home".to_string()],
      &SyncConfig::default()
    );

    let labels: Vec<_> = options
      .iter()
      .map(|o| o.label.as_str())
      .collect();
    assert_eq!(
      labels,
      vec!["Select a category", "Work", "Home"]
    );
    assert_eq!(options[0].value, "");
  }
}
