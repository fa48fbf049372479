use tasklist_core::RowView;
use tasklist_shared::TodoId;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TodoRowProps {
  pub row:       RowView,
  pub on_toggle: Callback<TodoId>,
  pub on_delete: Callback<TodoId>
}

#[function_component(TodoRow)]
pub fn todo_row(
  props: &TodoRowProps
) -> Html {
  let row = &props.row;
  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = row.id.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(id.clone())
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = row.id.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(id.clone())
    })
  };

  html! {
      <li data-id={row.dom_id.clone()}>
          <span class={row.text_class}>{ &row.text }</span>
          <span class="category">{ &row.category_label }</span>
          <span class="due-date">{ &row.due_label }</span>
          <div>
              <button class="toggle-btn" onclick={on_toggle}>{ &row.toggle_label }</button>
              <button class="delete-btn" onclick={on_delete}>{ &row.delete_label }</button>
          </div>
      </li>
  }
}
