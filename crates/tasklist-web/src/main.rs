mod api;
mod app;
mod components;

use tasklist_core::SyncConfig;

const CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting tasklist frontend"
  );

  let config =
    SyncConfig::load_or_default(
      CONFIG_TOML
    );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config
    }
  )
  .render();
}
