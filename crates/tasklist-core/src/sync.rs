//! The list synchronizer.
//!
//! Every remote operation is split in two:
//! a `begin_*` step that describes the
//! request and hands back a ticket, and a
//! `finish_*` step that applies the
//! response. The caller performs the
//! request in between. State changes only
//! happen in `finish_*`, after the server
//! has confirmed them.

use tasklist_shared::{
  Category,
  TodoDto,
  TodoId,
  TodoPatch
};
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::form::FormValues;
use crate::http::ApiRequest;
use crate::store::TodoStore;
use crate::view::{
  ListStatus,
  ListView,
  SelectOption,
  category_options,
  render_row
};

/// Ticket for a task-list load.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct LoadTicket {
  generation: u64
}

/// Ticket for a row-scoped action. It
/// names the row by id and by the epoch
/// of the entry that was clicked, plus the
/// completion state seen at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTicket {
  id:    TodoId,
  epoch: u64,
  from:  bool
}

/// Result of applying a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Applied,
  /// The response belongs to a superseded
  /// load or to a row that is gone.
  Stale,
  Failed {
    /// Notice for the user, if the failure
    /// warrants one.
    alert: Option<String>
  }
}

impl Outcome {
  pub fn alert(&self) -> Option<&str> {
    match self {
      | Outcome::Failed {
        alert: Some(alert)
      } => Some(alert.as_str()),
      | _ => None
    }
  }
}

/// What to do with a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
  Send(ApiRequest),
  /// Validation failed; nothing is sent.
  Prompt(String),
  Failed(String)
}

#[derive(Debug)]
pub struct ListSynchronizer {
  config:          SyncConfig,
  categories:      Vec<Category>,
  store:           TodoStore,
  status:          ListStatus,
  load_generation: u64,
  form:            FormValues
}

impl ListSynchronizer {
  pub fn new(config: SyncConfig) -> Self {
    Self {
      config,
      categories: vec![],
      store: TodoStore::new(),
      status: ListStatus::Loading,
      load_generation: 0,
      form: FormValues::default()
    }
  }

  pub fn form(&self) -> &FormValues {
    &self.form
  }

  pub fn form_mut(
    &mut self
  ) -> &mut FormValues {
    &mut self.form
  }

  // categories

  pub fn begin_load_categories(
    &self
  ) -> ApiRequest {
    debug!("fetching categories");
    ApiRequest::list_categories()
  }

  #[tracing::instrument(skip_all)]
  pub fn finish_load_categories(
    &mut self,
    result: Result<Vec<Category>, SyncError>
  ) -> Outcome {
    match result {
      | Ok(categories) => {
        info!(
          count = categories.len(),
          "categories fetched"
        );
        self.categories = categories;
        Outcome::Applied
      }
      | Err(error) => {
        error!(%error, "error fetching categories");
        Outcome::Failed {
          alert: None
        }
      }
    }
  }

  pub fn category_options(
    &self
  ) -> Vec<SelectOption> {
    category_options(
      &self.categories,
      &self.config
    )
  }

  // task list

  pub fn begin_load_tasks(
    &mut self
  ) -> (LoadTicket, ApiRequest) {
    self.load_generation += 1;
    debug!(
      generation = self.load_generation,
      "fetching todos"
    );
    (
      LoadTicket {
        generation: self.load_generation
      },
      ApiRequest::list_todos()
    )
  }

  #[tracing::instrument(skip(self, result))]
  pub fn finish_load_tasks(
    &mut self,
    ticket: LoadTicket,
    result: Result<Vec<TodoDto>, SyncError>
  ) -> Outcome {
    if ticket.generation
      != self.load_generation
    {
      debug!(
        current = self.load_generation,
        "dropping superseded todo list"
      );
      return Outcome::Stale;
    }

    match result {
      | Ok(todos) => {
        info!(
          count = todos.len(),
          "todos fetched"
        );
        self.store.replace_all(todos);
        self.status = ListStatus::Ready;
        Outcome::Applied
      }
      | Err(error) => {
        error!(%error, "error fetching todos");
        self.store.clear();
        self.status = ListStatus::Failed(
          self.config.labels.load_error.clone()
        );
        Outcome::Failed {
          alert: None
        }
      }
    }
  }

  pub fn view(&self) -> ListView {
    ListView {
      status: self.status.clone(),
      rows:   self
        .store
        .iter()
        .map(|entry| {
          render_row(
            &entry.todo,
            &self.config
          )
        })
        .collect()
    }
  }

  // row actions

  /// Builds the toggle request from the
  /// row's confirmed state at click time.
  #[tracing::instrument(skip(self))]
  pub fn begin_toggle(
    &self,
    id: &TodoId
  ) -> Option<(RowTicket, ApiRequest)> {
    let Some(entry) = self.store.get(id)
    else {
      warn!(%id, "toggle for unknown row");
      return None;
    };

    let patch = TodoPatch::completed(
      !entry.todo.completed
    );
    match ApiRequest::update_todo(id, &patch)
    {
      | Ok(request) => {
        debug!(%id, completed = !entry.todo.completed, "toggling todo completion");
        Some((
          RowTicket {
            id:    id.clone(),
            epoch: entry.epoch,
            from:  entry.todo.completed
          },
          request
        ))
      }
      | Err(error) => {
        error!(%id, %error, "failed to build toggle request");
        None
      }
    }
  }

  #[tracing::instrument(skip(self, result), fields(id = %ticket.id))]
  pub fn finish_toggle(
    &mut self,
    ticket: RowTicket,
    result: Result<TodoDto, SyncError>
  ) -> Outcome {
    let alert =
      self.config.labels.update_failed.clone();
    let Some(entry) = self
      .store
      .get_at_mut(&ticket.id, ticket.epoch)
    else {
      return self
        .finish_toggle_after_reinsert(
          &ticket, result
        );
    };

    match result {
      | Ok(updated) => {
        if updated.id != ticket.id {
          warn!(returned = %updated.id, "update response names a different id");
        }
        info!(
          completed = updated.completed,
          "todo updated"
        );
        entry.todo.completed =
          updated.completed;
        Outcome::Applied
      }
      | Err(error) => {
        error!(%error, "error toggling todo completion");
        Outcome::Failed {
          alert: Some(alert)
        }
      }
    }
  }

  /// The clicked entry was replaced by a
  /// reload or a re-create. A confirmed
  /// toggle still applies when the new
  /// entry shows the pre-click state, since
  /// that snapshot predates the update.
  fn finish_toggle_after_reinsert(
    &mut self,
    ticket: &RowTicket,
    result: Result<TodoDto, SyncError>
  ) -> Outcome {
    let updated = match result {
      | Ok(updated) => updated,
      | Err(error) => {
        warn!(%error, "toggle failed for a row that is gone");
        return Outcome::Stale;
      }
    };
    match self.store.get_mut(&ticket.id) {
      | Some(entry)
        if entry.todo.completed
          == ticket.from =>
      {
        info!(
          completed = updated.completed,
          "todo updated after reload"
        );
        entry.todo.completed =
          updated.completed;
        Outcome::Applied
      }
      | Some(_) => {
        debug!("reloaded row already reflects the toggle");
        Outcome::Stale
      }
      | None => {
        debug!("toggle response for a row that is gone");
        Outcome::Stale
      }
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn begin_delete(
    &self,
    id: &TodoId
  ) -> Option<(RowTicket, ApiRequest)> {
    let Some(entry) = self.store.get(id)
    else {
      warn!(%id, "delete for unknown row");
      return None;
    };

    debug!(%id, "deleting todo");
    Some((
      RowTicket {
        id:    id.clone(),
        epoch: entry.epoch,
        from:  entry.todo.completed
      },
      ApiRequest::delete_todo(id)
    ))
  }

  #[tracing::instrument(skip(self, result), fields(id = %ticket.id))]
  pub fn finish_delete(
    &mut self,
    ticket: RowTicket,
    result: Result<(), SyncError>
  ) -> Outcome {
    match result {
      | Ok(()) => {
        match self
          .store
          .remove_at(&ticket.id, ticket.epoch)
        {
          | Some(_) => {
            info!("todo deleted successfully");
            Outcome::Applied
          }
          | None => {
            debug!("delete response for a row that is gone");
            Outcome::Stale
          }
        }
      }
      | Err(error) => {
        if !self
          .store
          .contains_at(&ticket.id, ticket.epoch)
        {
          warn!(%error, "delete failed for a row that is gone");
          return Outcome::Stale;
        }
        error!(%error, "error deleting todo");
        Outcome::Failed {
          alert: Some(
            self
              .config
              .labels
              .delete_failed
              .clone()
          )
        }
      }
    }
  }

  // create form

  /// Validates the current form values.
  /// Nothing is sent when they are
  /// incomplete.
  #[tracing::instrument(skip(self))]
  pub fn submit(&self) -> Submission {
    let create = match self
      .form
      .validate(self.config.require_category)
    {
      | Ok(create) => create,
      | Err(reason) => {
        debug!(%reason, "form incomplete");
        return Submission::Prompt(
          self
            .config
            .validation_prompt()
            .to_string()
        );
      }
    };

    match ApiRequest::create_todo(&create) {
      | Ok(request) => {
        debug!(task = %create.task, category = ?create.category, due_date = ?create.due_date, "submitting todo");
        Submission::Send(request)
      }
      | Err(error) => {
        error!(%error, "error adding todo");
        Submission::Failed(
          self
            .config
            .labels
            .create_failed
            .clone()
        )
      }
    }
  }

  #[tracing::instrument(skip_all)]
  pub fn finish_submit(
    &mut self,
    result: Result<TodoDto, SyncError>
  ) -> Outcome {
    match result {
      | Ok(todo) => {
        info!(id = %todo.id, "new todo added");
        self.store.upsert(todo);
        self.form.clear();
        Outcome::Applied
      }
      | Err(error) => {
        error!(%error, "error adding todo");
        Outcome::Failed {
          alert: Some(
            self
              .config
              .labels
              .create_failed
              .clone()
          )
        }
      }
    }
  }
}
