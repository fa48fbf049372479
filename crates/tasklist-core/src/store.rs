use tasklist_shared::{
  TodoDto,
  TodoId
};
use tracing::warn;

/// One task as last confirmed by the
/// server.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
  pub todo:  TodoDto,
  /// Bumped every time an entry is
  /// inserted; responses addressed to an
  /// older epoch are stale.
  pub epoch: u64
}

/// Ordered `id -> task` mapping. Order is
/// the server's list order followed by
/// tasks created in this session.
#[derive(Debug, Default)]
pub struct TodoStore {
  entries:    Vec<Entry>,
  next_epoch: u64
}

impl TodoStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn bump(&mut self) -> u64 {
    self.next_epoch += 1;
    self.next_epoch
  }

  fn position(
    &self,
    id: &TodoId
  ) -> Option<usize> {
    self
      .entries
      .iter()
      .position(|entry| &entry.todo.id == id)
  }

  pub fn replace_all(
    &mut self,
    todos: Vec<TodoDto>
  ) {
    self.entries.clear();
    for todo in todos {
      if self.position(&todo.id).is_some()
      {
        warn!(id = %todo.id, "duplicate id in task list; keeping first occurrence");
        continue;
      }
      let epoch = self.bump();
      self
        .entries
        .push(Entry { todo, epoch });
    }
  }

  /// Appends `todo`, or replaces the entry
  /// already holding its id in place.
  pub fn upsert(
    &mut self,
    todo: TodoDto
  ) -> u64 {
    let epoch = self.bump();
    match self.position(&todo.id) {
      | Some(idx) => {
        self.entries[idx] =
          Entry { todo, epoch };
      }
      | None => {
        self
          .entries
          .push(Entry { todo, epoch });
      }
    }
    epoch
  }

  pub fn get(
    &self,
    id: &TodoId
  ) -> Option<&Entry> {
    self
      .entries
      .iter()
      .find(|entry| &entry.todo.id == id)
  }

  pub fn get_mut(
    &mut self,
    id: &TodoId
  ) -> Option<&mut Entry> {
    self
      .entries
      .iter_mut()
      .find(|entry| &entry.todo.id == id)
  }

  /// The live entry for `id`, provided it
  /// is still at `epoch`.
  pub fn get_at_mut(
    &mut self,
    id: &TodoId,
    epoch: u64
  ) -> Option<&mut Entry> {
    self.entries.iter_mut().find(
      |entry| {
        &entry.todo.id == id
          && entry.epoch == epoch
      }
    )
  }

  pub fn contains_at(
    &self,
    id: &TodoId,
    epoch: u64
  ) -> bool {
    self
      .get(id)
      .is_some_and(|entry| entry.epoch == epoch)
  }

  pub fn remove_at(
    &mut self,
    id: &TodoId,
    epoch: u64
  ) -> Option<TodoDto> {
    let idx =
      self.entries.iter().position(
        |entry| {
          &entry.todo.id == id
            && entry.epoch == epoch
        }
      )?;
    Some(self.entries.remove(idx).todo)
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Entry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn todo(id: i64, task: &str) -> TodoDto {
    TodoDto {
      id:        TodoId::Int(id),
      task:      task.to_string(),
      category:  None,
      due_date:  None,
      completed: false
    }
  }

  #[test]
  fn replace_all_keeps_order_and_drops_duplicates()
  {
    let mut store = TodoStore::new();
    store.replace_all(vec![
      todo(3, "c"),
      todo(1, "a"),
      todo(3, "dup"),
    ]);

    let tasks: Vec<_> = store
      .iter()
      .map(|e| e.todo.task.as_str())
      .collect();
    assert_eq!(tasks, vec!["c", "a"]);
  }

  #[test]
  fn integer_and_string_forms_of_an_id_share_one_entry()
  {
    let mut store = TodoStore::new();
    let mut text = todo(0, "as text");
    text.id = TodoId::Text("1".to_string());
    store.replace_all(vec![
      todo(1, "as int"),
      text.clone(),
    ]);
    assert_eq!(store.len(), 1);

    text.task = "renamed".to_string();
    store.upsert(text);
    assert_eq!(store.len(), 1);
    assert_eq!(
      store
        .get(&TodoId::Int(1))
        .expect("entry 1")
        .todo
        .task,
      "renamed"
    );
  }

  #[test]
  fn upsert_replaces_in_place_with_new_epoch()
  {
    let mut store = TodoStore::new();
    store.replace_all(vec![
      todo(1, "a"),
      todo(2, "b"),
    ]);
    let old = store
      .get(&TodoId::Int(1))
      .expect("entry 1")
      .epoch;

    let new = store.upsert(todo(1, "a2"));

    assert_ne!(old, new);
    assert_eq!(store.len(), 2);
    assert_eq!(
      store
        .iter()
        .next()
        .expect("first")
        .todo
        .task,
      "a2"
    );
    assert!(
      store
        .get_at_mut(&TodoId::Int(1), old)
        .is_none()
    );
  }

  #[test]
  fn remove_at_ignores_stale_epoch() {
    let mut store = TodoStore::new();
    let epoch = store.upsert(todo(5, "e"));

    assert!(
      store
        .remove_at(
          &TodoId::Int(5),
          epoch + 1
        )
        .is_none()
    );
    assert_eq!(store.len(), 1);
    assert!(
      store
        .remove_at(&TodoId::Int(5), epoch)
        .is_some()
    );
    assert!(store.is_empty());
  }
}
