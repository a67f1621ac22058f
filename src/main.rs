use leptos::prelude::*;
use folio_webui::App;

fn main() {
    // set up logging
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! { <App /> }
    })
}
