use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use crate::components::icons::PlayIcon;
use crate::i18n::use_i18n;
use crate::models::playback::Playback;
use crate::models::showcase::{projects, Category};

fn video_element(project_id: &str) -> Option<HtmlVideoElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(&format!("video-{project_id}"))?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

fn stop_video(project_id: &str) {
    if let Some(video) = video_element(project_id) {
        let _ = video.pause();
        video.set_current_time(0.0);
    }
}

fn play_video(project_id: &str) {
    let Some(video) = video_element(project_id) else { return };
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                leptos::logging::error!("Video playback refused: {:?}", e);
            }
        }),
        Err(e) => leptos::logging::error!("Failed to start video: {:?}", e),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();
    let (active, set_active) = signal(Category::Reels);
    let playback = RwSignal::new(Playback::default());

    let select_tab = move |category: Category| {
        set_active.set(category);
        if let Some(id) = playback.write().stop_all() {
            stop_video(&id);
        }
    };

    let toggle_video = move |project_id: String| {
        let paused = video_element(&project_id).map(|v| v.paused()).unwrap_or(true);
        let change = playback.write().toggle(&project_id, paused);
        if let Some(id) = change.stop { stop_video(&id); }
        if let Some(id) = change.pause {
            if let Some(video) = video_element(&id) { let _ = video.pause(); }
        }
        if let Some(id) = change.play { play_video(&id); }
    };

    view! {
        <section id="projects" class="py-20">
            <div class="container px-4 mx-auto">
                <h2 class="mb-10 text-4xl font-bold text-center" data-i18n="projects.title">{i18n.tr("projects.title")}</h2>

                <div class="justify-center mb-8 tabs tabs-boxed" role="tablist">
                    {Category::ALL.into_iter().map(|category| view! {
                        <button
                            id=format!("tab-{}", category.id())
                            class="tab"
                            class:tab-active=move || active.get() == category
                            role="tab"
                            aria-selected=move || (active.get() == category).to_string()
                            aria-controls=format!("panel-{}", category.id())
                            data-i18n=category.label_key()
                            on:click=move |_| select_tab(category)
                        >
                            {i18n.tr(category.label_key())}
                        </button>
                    }).collect_view()}
                </div>

                {Category::ALL.into_iter().map(|category| view! {
                    <div
                        id=format!("panel-{}", category.id())
                        role="tabpanel"
                        aria-labelledby=format!("tab-{}", category.id())
                        class="grid grid-cols-2 gap-6 md:grid-cols-3"
                        class:hidden=move || active.get() != category
                    >
                        {projects(category).into_iter().map(|project| {
                            let id = project.id.clone();
                            let play_id = project.id.clone();
                            let ended_id = project.id.clone();
                            let playing_id = project.id.clone();
                            let title = project.title.clone();
                            view! {
                                <div class="overflow-hidden shadow-lg card bg-base-100">
                                    <figure class="relative aspect-[9/16]">
                                        <img src=project.poster alt=project.alt class="absolute inset-0 object-cover w-full h-full" loading="lazy" decoding="async" />
                                        <video
                                            id=format!("video-{id}")
                                            src=project.video_url
                                            class="absolute inset-0 object-cover w-full h-full"
                                            preload="none"
                                            playsinline=true
                                            muted=true
                                            on:ended=move |_| playback.write().ended(&ended_id)
                                        ></video>
                                        <button
                                            class="absolute btn btn-circle btn-primary bottom-3 right-3"
                                            class:opacity-60=move || playback.read().is_playing(&playing_id)
                                            aria-label=move || format!("{} {}", i18n.t("projects.play"), title)
                                            on:click=move |_| toggle_video(play_id.clone())
                                        >
                                            <PlayIcon />
                                        </button>
                                    </figure>
                                    <h3 class="p-3 font-semibold">{project.title}</h3>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
