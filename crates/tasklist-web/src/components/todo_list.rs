use tasklist_core::ListView;
use tasklist_shared::TodoId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoRow;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub view:      ListView,
  pub on_toggle: Callback<TodoId>,
  pub on_delete: Callback<TodoId>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <ul id="todo-list">
          {
              if let Some(message) = props.view.error() {
                  html! { <li class="error-row">{ message }</li> }
              } else {
                  html! {}
              }
          }
          {
              for props.view.rows.iter().cloned().map(|row| html! {
                  <TodoRow
                      key={row.dom_id.clone()}
                      row={row.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </ul>
  }
}
