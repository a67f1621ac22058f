use chrono::{Datelike, Utc};
use leptos::prelude::*;
use crate::components::icons::{InstagramIcon, WhatsAppIcon};
use crate::config::{instagram_url, whatsapp_link, whatsapp_number};
use crate::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let year = Utc::now().year().to_string();

    view! {
        <footer class="py-8 border-t border-base-300">
            <div class="container flex flex-col items-center justify-between gap-4 px-4 mx-auto md:flex-row">
                <p class="text-sm opacity-70" data-i18n="footer.copyright">
                    {move || i18n.t_with("footer.copyright", &[("year", &year)])}
                </p>
                <div class="flex gap-4">
                    <a
                        href=whatsapp_link(&whatsapp_number(), None)
                        class="hover:text-primary"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=i18n.tr("footer.whatsapp")
                    >
                        <WhatsAppIcon />
                    </a>
                    <a
                        href=instagram_url()
                        class="hover:text-primary"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=i18n.tr("footer.instagram")
                    >
                        <InstagramIcon />
                    </a>
                </div>
            </div>
        </footer>
    }
}
