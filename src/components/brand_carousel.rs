use leptos::prelude::*;
use leptos_use::use_media_query;
use crate::components::icons::{PauseIcon, PlayIcon};
use crate::i18n::use_i18n;
use crate::models::showcase::{looped, BRANDS};

/// Pause/resume button shared by the marquee strips. Hidden when the user
/// prefers reduced motion, since the strip never moves then.
#[component]
pub fn CarouselToggle(
    paused: ReadSignal<bool>,
    set_paused: WriteSignal<bool>,
    #[prop(into)] reduced_motion: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Show when=move || !reduced_motion.get()>
            <button
                class="mt-4 btn btn-circle btn-sm btn-ghost"
                aria-label=move || if paused.get() { i18n.t("carousel.resume") } else { i18n.t("carousel.pause") }
                on:click=move |_| set_paused.update(|p| *p = !*p)
            >
                {move || if paused.get() { view! { <PlayIcon /> }.into_any() } else { view! { <PauseIcon /> }.into_any() }}
            </button>
        </Show>
    }
}

#[component]
pub fn BrandCarousel() -> impl IntoView {
    let i18n = use_i18n();
    let (paused, set_paused) = signal(false);
    let (hovered, set_hovered) = signal(false);
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let stopped = move || paused.get() || hovered.get() || reduced_motion.get();

    view! {
        <section class="py-16 overflow-hidden" aria-label=i18n.tr("carousel.trustedBy")>
            <div class="container flex flex-col items-center mx-auto">
                <h2 class="mb-8 text-2xl font-semibold" data-i18n="carousel.trustedBy">{i18n.tr("carousel.trustedBy")}</h2>
                <div class="w-full overflow-hidden" role="img"
                    on:mouseenter=move |_| set_hovered.set(true)
                    on:mouseleave=move |_| set_hovered.set(false)>
                    <div class="flex gap-12 w-max animate-marquee" class:paused=stopped>
                        {looped(&BRANDS, 3).into_iter().map(|brand| view! {
                            <div class="flex items-center justify-center w-32 h-16">
                                <img src=brand.logo_url alt=brand.name class="object-contain h-10 grayscale" loading="lazy" />
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <CarouselToggle paused=paused set_paused=set_paused reduced_motion=reduced_motion />
            </div>
        </section>
    }
}
