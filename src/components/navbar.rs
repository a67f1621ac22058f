use leptos::prelude::*;
use leptos_use::use_window_scroll;
use crate::components::icons::{CloseIcon, GlobeIcon, MenuIcon, MoonIcon, SunIcon};
use crate::components::scroll_to_section;
use crate::i18n::{use_i18n, Locale};
use crate::theme::{use_theme, Theme};

const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "nav.home"),
    ("projects", "nav.projects"),
    ("faq", "nav.faq"),
    ("contact", "nav.contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > 50.0;

    let go_to = move |section: &'static str| {
        scroll_to_section(section);
        set_menu_open.set(false);
    };

    let lang_button = move |locale: Locale, label_key: &'static str| {
        view! {
            <button
                class="px-1 text-sm transition-opacity opacity-60 hover:opacity-100"
                class:font-bold=move || i18n.locale() == locale
                class:opacity-100=move || i18n.locale() == locale
                aria-label=i18n.tr(label_key)
                aria-pressed=move || (i18n.locale() == locale).to_string()
                on:click=move |_| i18n.change_locale(locale)
            >
                {locale.label()}
            </button>
        }
    };

    view! {
        <nav class="fixed top-0 z-50 w-full transition-all duration-300 navbar" class:scrolled=scrolled class:shadow-md=scrolled class:bg-base-100=scrolled>
            <div class="container flex items-center justify-between px-4 py-3 mx-auto">
                <button class="text-2xl font-bold tracking-wider" aria-label=i18n.tr("nav.goHome") on:click=move |_| go_to("home")>
                    "AM"
                </button>

                <div class="absolute left-0 flex-col w-full gap-6 p-4 top-full md:static md:flex md:flex-row md:w-auto md:p-0 bg-base-100 md:bg-transparent"
                    class:hidden=move || !menu_open.get()
                    class:flex=move || menu_open.get()>
                    {NAV_LINKS.into_iter().map(|(section, key)| view! {
                        <button class="hover:text-primary" data-i18n=key on:click=move |_| go_to(section)>
                            {i18n.tr(key)}
                        </button>
                    }).collect_view()}
                </div>

                <div class="flex items-center gap-3">
                    <div class="flex items-center gap-1">
                        <GlobeIcon />
                        {lang_button(Locale::Es, "nav.switchToEs")}
                        <span class="opacity-40">"|"</span>
                        {lang_button(Locale::En, "nav.switchToEn")}
                    </div>

                    <button
                        class="btn btn-ghost btn-sm btn-circle"
                        aria-label=move || match theme.theme() {
                            Theme::Light => i18n.t("nav.darkMode"),
                            Theme::Dark => i18n.t("nav.lightMode"),
                        }
                        on:click=move |_| theme.toggle()
                    >
                        {move || match theme.theme() {
                            Theme::Light => view! { <MoonIcon /> }.into_any(),
                            Theme::Dark => view! { <SunIcon /> }.into_any(),
                        }}
                    </button>

                    <button
                        class="btn btn-ghost btn-sm md:hidden"
                        aria-label=i18n.tr("nav.toggleMenu")
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() {
                            view! { <CloseIcon /> }.into_any()
                        } else {
                            view! { <MenuIcon /> }.into_any()
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
