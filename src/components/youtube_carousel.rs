use leptos::prelude::*;
use leptos_use::use_media_query;
use crate::components::brand_carousel::CarouselToggle;
use crate::i18n::use_i18n;
use crate::models::showcase::{looped, CHANNELS};

#[component]
pub fn YouTubeCarousel() -> impl IntoView {
    let i18n = use_i18n();
    let (paused, set_paused) = signal(false);
    let (hovered, set_hovered) = signal(false);
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let stopped = move || paused.get() || hovered.get() || reduced_motion.get();

    view! {
        <section class="py-16 overflow-hidden bg-base-200" aria-label=i18n.tr("carousel.followedBy")>
            <div class="container flex flex-col items-center mx-auto">
                <h2 class="mb-8 text-2xl font-semibold" data-i18n="carousel.followedBy">{i18n.tr("carousel.followedBy")}</h2>
                <div class="w-full overflow-hidden" role="img"
                    on:mouseenter=move |_| set_hovered.set(true)
                    on:mouseleave=move |_| set_hovered.set(false)>
                    <div class="flex gap-8 w-max animate-marquee" class:paused=stopped>
                        {looped(&CHANNELS, 3).into_iter().map(|channel| view! {
                            <div class="flex items-center gap-3 px-4 py-2 rounded-full bg-base-100" title=channel.handle>
                                <img src=channel.avatar_url alt=format!("{} profile", channel.name) class="w-12 h-12 rounded-full" loading="lazy" />
                                <div class="text-left">
                                    <div class="font-semibold">{channel.name}</div>
                                    <div class="text-xs opacity-70">
                                        {channel.subscribers}" "<span data-i18n="carousel.subscribers">{i18n.tr("carousel.subscribers")}</span>
                                    </div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <CarouselToggle paused=paused set_paused=set_paused reduced_motion=reduced_motion />
            </div>
        </section>
    }
}
