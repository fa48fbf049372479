use tasklist_core::SelectOption;
use tasklist_core::form::FormValues;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html
};

use super::CategorySelect;

/// A single edited input of the create
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
  Task(String),
  Category(String),
  DueDate(String)
}

impl FormField {
  pub fn apply(
    self,
    values: &mut FormValues
  ) {
    match self {
      | FormField::Task(v) => values.task = v,
      | FormField::Category(v) => {
        values.category = v
      }
      | FormField::DueDate(v) => {
        values.due_date = v
      }
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct TodoFormProps {
  pub values:    FormValues,
  pub options:   Vec<SelectOption>,
  pub on_input:  Callback<FormField>,
  pub on_submit: Callback<()>
}

#[function_component(TodoForm)]
pub fn todo_form(
  props: &TodoFormProps
) -> Html {
  let on_submit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(());
    })
  };
  let on_task_input = {
    let on_input = props.on_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_input
        .emit(FormField::Task(input.value()));
    })
  };
  let on_due_input = {
    let on_input = props.on_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_input.emit(FormField::DueDate(
        input.value()
      ));
    })
  };
  let on_category_change = props
    .on_input
    .reform(FormField::Category);

  html! {
      <form id="todo-form" onsubmit={on_submit}>
          <input
              id="todo-input"
              type="text"
              placeholder="Add a new task"
              value={props.values.task.clone()}
              oninput={on_task_input}
          />
          <CategorySelect
              options={props.options.clone()}
              selected={props.values.category.clone()}
              on_change={on_category_change}
          />
          <input
              id="due-date-input"
              type="date"
              value={props.values.due_date.clone()}
              oninput={on_due_input}
          />
          <button type="submit">{ "Add" }</button>
      </form>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fields_update_only_their_own_value() {
    let mut values = FormValues {
      task:     "Buy milk".to_string(),
      category: "Errands".to_string(),
      due_date: String::new()
    };

    FormField::DueDate(
      "2024-01-01".to_string()
    )
    .apply(&mut values);
    FormField::Category(String::new())
      .apply(&mut values);

    assert_eq!(values.task, "Buy milk");
    assert_eq!(values.category, "");
    assert_eq!(values.due_date, "2024-01-01");
  }
}
