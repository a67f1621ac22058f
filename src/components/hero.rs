use leptos::prelude::*;
use leptos::html;
use leptos_use::{use_event_listener, use_media_query, use_raf_fn, use_window};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;
use crate::components::icons::PlayIcon;
use crate::components::scroll_to_section;
use crate::config::schedule_url;
use crate::i18n::use_i18n;
use crate::models::particles::ParticleField;

fn particle_color() -> String {
    web_sys::window()
        .and_then(|w| {
            let root = w.document()?.document_element()?;
            w.get_computed_style(&root).ok().flatten()
        })
        .and_then(|style| style.get_property_value("--particle-color").ok())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "#ffffff".to_string())
}

fn draw(canvas: &web_sys::HtmlCanvasElement, field: &ParticleField) {
    let Ok(Some(ctx)) = canvas.get_context("2d") else { return };
    let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else { return };
    let color = particle_color();
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    for dot in field.dots() {
        ctx.save();
        ctx.set_global_alpha(dot.alpha);
        ctx.set_fill_style_str(&color);
        ctx.begin_path();
        if ctx.arc(dot.x, dot.y, dot.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
        ctx.restore();
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let (paused, set_paused) = signal(false);
    let section_ref = NodeRef::<html::Section>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(ParticleField::default());

    // Match the canvas to the section and reseed the field
    let reseed = move || {
        let (Some(section), Some(canvas)) = (section_ref.get_untracked(), canvas_ref.get_untracked()) else { return };
        let (w, h) = (section.offset_width().max(0) as u32, section.offset_height().max(0) as u32);
        canvas.set_width(w);
        canvas.set_height(h);
        field.set_value(ParticleField::new(w as f64, h as f64, js_sys::Math::random));
    };

    Effect::new(move |_| {
        if canvas_ref.get().is_some() {
            reseed();
        }
    });
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| reseed());

    // Stops itself when the component is dropped
    let frames = use_raf_fn(move |_| {
        if paused.get_untracked() || reduced_motion.get_untracked() {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        field.update_value(|f| {
            f.step();
            draw(&canvas, f);
        });
    });
    Effect::new(move |_| {
        if paused.get() || reduced_motion.get() {
            (frames.pause)();
        } else {
            (frames.resume)();
        }
    });

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let Some(section) = section_ref.get_untracked() else { return };
        let rect = section.get_bounding_client_rect();
        field.update_value(|f| {
            f.set_mouse(ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top(), rect.width(), rect.height());
        });
    };

    let open_schedule = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(&schedule_url(), "_blank") {
                leptos::logging::error!("Failed to open scheduler: {:?}", e);
            }
        }
    };

    view! {
        <section id="home" node_ref=section_ref class="relative flex items-center justify-center min-h-screen overflow-hidden hero" on:mousemove=on_mouse_move>
            <Show when=move || !reduced_motion.get()>
                <canvas node_ref=canvas_ref class="absolute inset-0 pointer-events-none" aria-hidden="true"></canvas>
                <button
                    class="absolute z-10 btn btn-circle btn-sm bottom-4 right-4"
                    aria-label=move || if paused.get() { i18n.t("hero.resumeParticles") } else { i18n.t("hero.pauseParticles") }
                    on:click=move |_| set_paused.update(|p| *p = !*p)
                >
                    {move || if paused.get() { view! { <PlayIcon /> }.into_any() } else { view! { <span>"||"</span> }.into_any() }}
                </button>
            </Show>

            <div class="relative z-10 px-4 text-center">
                <h1 class="mb-4 text-5xl font-bold md:text-7xl" data-i18n="hero.title">{i18n.tr("hero.title")}</h1>
                <p class="mb-2 text-xl md:text-2xl" data-i18n="hero.subtitle">{i18n.tr("hero.subtitle")}</p>
                <p class="mb-8 text-sm italic opacity-70" data-i18n="hero.microcopy">{i18n.tr("hero.microcopy")}</p>
                <div class="flex flex-col justify-center gap-4 sm:flex-row">
                    <button class="btn btn-primary btn-lg" data-i18n="hero.projectsBtn" on:click=move |_| scroll_to_section("projects")>
                        {i18n.tr("hero.projectsBtn")}
                    </button>
                    <button class="btn btn-outline btn-lg" data-i18n="hero.scheduleBtn" on:click=open_schedule>
                        {i18n.tr("hero.scheduleBtn")}
                    </button>
                </div>
            </div>
        </section>
    }
}
