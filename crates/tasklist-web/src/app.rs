use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::dialogs::alert;
use tasklist_core::{
  ListSynchronizer,
  Outcome,
  Submission,
  SyncConfig
};
use tasklist_shared::{
  Category,
  TodoDto,
  TodoId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo,
  use_mut_ref
};

use crate::api::ApiClient;
use crate::components::{
  FormField,
  TodoForm,
  TodoList
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: SyncConfig
}

type Shared = Rc<RefCell<ListSynchronizer>>;

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let sync: Shared = {
    let config = props.config.clone();
    use_mut_ref(move || {
      ListSynchronizer::new(config)
    })
  };
  let client = use_memo(
    props.config.clone(),
    ApiClient::new
  );
  let redraw = use_force_update();

  {
    let sync = sync.clone();
    let client = client.clone();
    let redraw = redraw.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "loading categories and todos"
      );

      {
        let sync = sync.clone();
        let client = (*client).clone();
        let redraw = redraw.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let request = sync
              .borrow()
              .begin_load_categories();
            let result = client
              .json::<Vec<Category>>(
                &request
              )
              .await;
            sync
              .borrow_mut()
              .finish_load_categories(result);
            redraw.force_update();
          }
        );
      }

      {
        let client = (*client).clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let (ticket, request) = sync
              .borrow_mut()
              .begin_load_tasks();
            let result = client
              .json::<Vec<TodoDto>>(
                &request
              )
              .await;
            sync
              .borrow_mut()
              .finish_load_tasks(
                ticket, result
              );
            redraw.force_update();
          }
        );
      }

      || ()
    });
  }

  let on_toggle = {
    let sync = sync.clone();
    let client = client.clone();
    let redraw = redraw.clone();
    Callback::from(move |id: TodoId| {
      let begun =
        sync.borrow().begin_toggle(&id);
      let Some((ticket, request)) = begun
      else {
        return;
      };

      let sync = sync.clone();
      let client = (*client).clone();
      let redraw = redraw.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client
            .json::<TodoDto>(&request)
            .await;
          let outcome = sync
            .borrow_mut()
            .finish_toggle(ticket, result);
          report(&outcome);
          redraw.force_update();
        }
      );
    })
  };

  let on_delete = {
    let sync = sync.clone();
    let client = client.clone();
    let redraw = redraw.clone();
    Callback::from(move |id: TodoId| {
      let begun =
        sync.borrow().begin_delete(&id);
      let Some((ticket, request)) = begun
      else {
        return;
      };

      let sync = sync.clone();
      let client = (*client).clone();
      let redraw = redraw.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result =
            client.status(&request).await;
          let outcome = sync
            .borrow_mut()
            .finish_delete(ticket, result);
          report(&outcome);
          redraw.force_update();
        }
      );
    })
  };

  let on_input = {
    let sync = sync.clone();
    let redraw = redraw.clone();
    Callback::from(
      move |field: FormField| {
        field.apply(
          sync.borrow_mut().form_mut()
        );
        redraw.force_update();
      }
    )
  };

  let on_submit = {
    let sync = sync.clone();
    let client = client.clone();
    let redraw = redraw.clone();
    Callback::from(move |()| {
      ui_debug(
        "form.submit",
        "form submitted"
      );
      let submission =
        sync.borrow().submit();
      let request = match submission {
        | Submission::Send(request) => {
          request
        }
        | Submission::Prompt(prompt) => {
          alert(&prompt);
          return;
        }
        | Submission::Failed(message) => {
          alert(&message);
          return;
        }
      };

      let sync = sync.clone();
      let client = (*client).clone();
      let redraw = redraw.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client
            .json::<TodoDto>(&request)
            .await;
          let outcome = sync
            .borrow_mut()
            .finish_submit(result);
          report(&outcome);
          redraw.force_update();
        }
      );
    })
  };

  let (values, options, view) = {
    let sync = sync.borrow();
    (
      sync.form().clone(),
      sync.category_options(),
      sync.view()
    )
  };

  html! {
      <div class="container">
          <h1>{ "Todo List" }</h1>
          <TodoForm
              values={values}
              options={options}
              on_input={on_input}
              on_submit={on_submit}
          />
          <TodoList
              view={view}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />
      </div>
  }
}

fn report(outcome: &Outcome) {
  if let Some(message) = outcome.alert() {
    alert(message);
  }
}

fn ui_debug(event: &str, detail: &str) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
