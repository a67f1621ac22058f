#![cfg(target_arch = "wasm32")]

use std::sync::Arc;
use folio_webui::components::contact::Contact;
use folio_webui::i18n::{provide_i18n, Locale, CATALOG};
use folio_webui::storage::{MemoryPreferences, PreferenceStore, LANGUAGE_KEY};
use leptos::prelude::*;
use leptos::task::Executor;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn text_of(selector: &str) -> String {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} should be rendered"))
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn switching_language_rewrites_marked_elements() {
    let _ = Executor::init_wasm_bindgen();
    let store = Arc::new(MemoryPreferences::default());
    let shared: Arc<dyn PreferenceStore> = store.clone();

    let parent = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&parent).unwrap();
    let _handle = leptos::mount::mount_to(parent.unchecked_into(), move || {
        let i18n = provide_i18n(shared.clone());
        view! {
            <button id="to-en" on:click=move |_| i18n.change_locale(Locale::En)>"EN"</button>
            <Contact />
        }
    });

    let label = r#"label [data-i18n="contact.form.name"]"#;
    assert_eq!(text_of(label), "Nombre");

    document()
        .get_element_by_id("to-en")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
    Executor::tick().await;

    assert_eq!(text_of(label), "Name");
    assert_eq!(text_of(r#"[data-i18n="contact.title"]"#), CATALOG.translate(Locale::En, "contact.title"));
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
}
