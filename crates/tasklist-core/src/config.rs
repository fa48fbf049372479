use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

use crate::datetime::DateLocale;

fn config_true() -> bool {
  true
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SyncConfig {
  /// Prefix for every API path, e.g.
  /// `https://todo.example.com`. Empty
  /// means same origin.
  #[serde(default)]
  pub api_base:         String,
  /// Require a category on submit. Off
  /// gives the task-text-only form.
  #[serde(default = "config_true")]
  pub require_category: bool,
  #[serde(default)]
  pub date_locale:      DateLocale,
  #[serde(default)]
  pub labels:           Labels
}

impl Default for SyncConfig {
  fn default() -> Self {
    Self {
      api_base:         String::new(),
      require_category: true,
      date_locale:      DateLocale::default(),
      labels:           Labels::default()
    }
  }
}

/// Every user-visible string the
/// synchronizer produces.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub category_placeholder: String,
  pub no_category:          String,
  pub no_due_date:          String,
  pub due_prefix:           String,
  pub unnamed_task:         String,
  pub complete:             String,
  pub undo:                 String,
  pub delete:               String,
  pub load_error:           String,
  pub update_failed:        String,
  pub delete_failed:        String,
  pub create_failed:        String,
  pub prompt_task_and_category: String,
  pub prompt_task:              String
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      category_placeholder: "Select a category".to_string(),
      no_category:          "No Category".to_string(),
      no_due_date:          "No due date".to_string(),
      due_prefix:           "Due: ".to_string(),
      unnamed_task:         "Unnamed Task".to_string(),
      complete:             "Complete".to_string(),
      undo:                 "Undo".to_string(),
      delete:               "Delete".to_string(),
      load_error:           "Error loading todos. Please try again later.".to_string(),
      update_failed:        "Failed to update todo. Please try again.".to_string(),
      delete_failed:        "Failed to delete todo. Please try again.".to_string(),
      create_failed:        "Failed to add todo. Please try again.".to_string(),
      prompt_task_and_category: "Please enter a task and select a category.".to_string(),
      prompt_task:              "Please enter a task.".to_string()
    }
  }
}

impl Labels {
  /// Restores the default for every blank
  /// label. `due_prefix` may be empty.
  fn fill_blanks(&mut self) {
    let defaults = Labels::default();
    for (name, label, fallback) in [
      (
        "category_placeholder",
        &mut self.category_placeholder,
        defaults.category_placeholder
      ),
      (
        "no_category",
        &mut self.no_category,
        defaults.no_category
      ),
      (
        "no_due_date",
        &mut self.no_due_date,
        defaults.no_due_date
      ),
      (
        "unnamed_task",
        &mut self.unnamed_task,
        defaults.unnamed_task
      ),
      (
        "complete",
        &mut self.complete,
        defaults.complete
      ),
      ("undo", &mut self.undo, defaults.undo),
      (
        "delete",
        &mut self.delete,
        defaults.delete
      ),
      (
        "load_error",
        &mut self.load_error,
        defaults.load_error
      ),
      (
        "update_failed",
        &mut self.update_failed,
        defaults.update_failed
      ),
      (
        "delete_failed",
        &mut self.delete_failed,
        defaults.delete_failed
      ),
      (
        "create_failed",
        &mut self.create_failed,
        defaults.create_failed
      ),
      (
        "prompt_task_and_category",
        &mut self.prompt_task_and_category,
        defaults.prompt_task_and_category
      ),
      (
        "prompt_task",
        &mut self.prompt_task,
        defaults.prompt_task
      )
    ] {
      if label.trim().is_empty() {
        warn!(
          label = name,
          fallback = %fallback,
          "empty label in config; \
           using default"
        );
        *label = fallback;
      }
    }
  }
}

impl SyncConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: SyncConfig =
      toml::from_str(text).context(
        "failed to parse tasklist \
         config"
      )?;
    cfg.sanitize();
    info!(
      api_base = %cfg.api_base,
      require_category = cfg.require_category,
      date_locale = ?cfg.date_locale,
      "loaded tasklist config"
    );
    Ok(cfg)
  }

  /// Parses `text`, falling back to the
  /// defaults when it is malformed.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        tracing::error!(error = %format!("{error:#}"), "failed parsing tasklist config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    let trimmed = self
      .api_base
      .trim()
      .trim_end_matches('/')
      .to_string();
    if trimmed != self.api_base {
      debug!(
        from = %self.api_base,
        to = %trimmed,
        "normalized api_base"
      );
      self.api_base = trimmed;
    }

    self.labels.fill_blanks();
  }

  /// Prompt shown when the create form
  /// fails validation.
  pub fn validation_prompt(
    &self
  ) -> &str {
    if self.require_category {
      &self.labels.prompt_task_and_category
    } else {
      &self.labels.prompt_task
    }
  }

  pub fn url(
    &self,
    path: &str
  ) -> String {
    format!("{}{path}", self.api_base)
  }
}
