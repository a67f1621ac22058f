use leptos::prelude::*;
use leptos_meta::*;
// Modules
pub mod api;
pub mod components;
pub mod config;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod theme;

use crate::components::brand_carousel::BrandCarousel;
use crate::components::contact::Contact;
use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::youtube_carousel::YouTubeCarousel;
use crate::i18n::provide_i18n;
use crate::storage::default_store;
use crate::theme::provide_theme;

fn build_info() -> String {
    let git_sha = match option_env!("VERGEN_GIT_SHA") { Some(s) => s, None => "unknown" };
    let git_describe = match option_env!("VERGEN_GIT_DESCRIBE") { Some(s) => s, None => "unknown" };
    let git_commit_timestamp = match option_env!("VERGEN_GIT_COMMIT_TIMESTAMP") { Some(s) => s, None => "unknown" };
    let git_dirty = match option_env!("VERGEN_GIT_DIRTY") { Some(s) => s, None => "unknown" };
    let opt_level = match option_env!("VERGEN_CARGO_OPT_LEVEL") { Some(s) => s, None => "unknown" };

    serde_json::to_string_pretty(&serde_json::json!({
        "VERSION": env!("CARGO_PKG_VERSION"),
        "SHA": git_sha,
        "DESCRIBE": git_describe,
        "COMMIT_TIMESTAMP": git_commit_timestamp,
        "DIRTY": git_dirty,
        "OPT_LEVEL": opt_level,
    })).unwrap_or_else(|_| "{}".to_string())
}

/// The whole one-page site
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let store = default_store();
    let i18n = provide_i18n(store.clone());
    let theme = provide_theme(store);

    view! {
        <Html attr:lang=move || i18n.locale().as_str() attr:data-theme=move || theme.theme().as_str() />

        // sets the document title
        <Title text=move || format!("Ariel Mesa · {}", i18n.t("hero.subtitle")) />
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />

        <div class="min-h-screen bg-base-100 text-base-content">
            <Navbar />
            <main>
                <Hero />
                <BrandCarousel />
                <YouTubeCarousel />
                <Projects />
                <Faq />
                <Contact />
            </main>
            <Footer />
        </div>
        <script>
            {format!("window.buildInfo={};", build_info())}
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_is_json() {
        let info: serde_json::Value = serde_json::from_str(&build_info()).unwrap();
        assert_eq!(info["VERSION"], env!("CARGO_PKG_VERSION"));
        assert!(info["SHA"].is_string());
    }
}
