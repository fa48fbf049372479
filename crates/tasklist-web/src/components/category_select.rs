use tasklist_core::SelectOption;
use web_sys::HtmlSelectElement;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
  pub options:   Vec<SelectOption>,
  pub selected:  String,
  pub on_change: Callback<String>
}

#[function_component(CategorySelect)]
pub fn category_select(
  props: &CategorySelectProps
) -> Html {
  let select_ref = use_node_ref();

  // select value tracks form state
  {
    let select_ref = select_ref.clone();
    use_effect_with(
      (
        props.selected.clone(),
        props.options.clone()
      ),
      move |(selected, _)| {
        if let Some(select) = select_ref
          .cast::<HtmlSelectElement>()
        {
          select.set_value(selected);
        }
        || ()
      }
    );
  }

  let on_change = {
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: HtmlSelectElement =
          e.target_unchecked_into();
        on_change.emit(select.value());
      }
    )
  };

  html! {
      <select id="category-select" ref={select_ref} onchange={on_change}>
          {
              for props.options.iter().map(|option| html! {
                  <option value={option.value.clone()}>{ &option.label }</option>
              })
          }
      </select>
  }
}
