use leptos::prelude::*;
use std::collections::HashSet;
use crate::components::icons::ChevronDownIcon;
use crate::i18n::use_i18n;

const QUESTIONS: [(&str, &str, &str); 5] = [
    ("q1", "faq.q1.question", "faq.q1.answer"),
    ("q2", "faq.q2.question", "faq.q2.answer"),
    ("q3", "faq.q3.question", "faq.q3.answer"),
    ("q4", "faq.q4.question", "faq.q4.answer"),
    ("q5", "faq.q5.question", "faq.q5.answer"),
];

#[component]
pub fn Faq() -> impl IntoView {
    let i18n = use_i18n();
    let open_items = RwSignal::new(HashSet::<&'static str>::new());

    let toggle = move |id: &'static str| {
        open_items.update(|items| {
            if !items.remove(id) {
                items.insert(id);
            }
        });
    };

    view! {
        <section id="faq" class="py-20 bg-base-200">
            <div class="container max-w-3xl px-4 mx-auto">
                <h2 class="mb-10 text-4xl font-bold text-center" data-i18n="faq.title">{i18n.tr("faq.title")}</h2>

                <div class="space-y-3">
                    {QUESTIONS.into_iter().map(|(id, question_key, answer_key)| {
                        let is_open = Signal::derive(move || open_items.read().contains(id));
                        view! {
                            <div class="rounded-lg bg-base-100">
                                <button
                                    id=format!("question-{id}")
                                    class="flex items-center justify-between w-full p-4 font-semibold text-left"
                                    aria-expanded=move || is_open.get().to_string()
                                    aria-controls=format!("answer-{id}")
                                    on:click=move |_| toggle(id)
                                >
                                    <span data-i18n=question_key>{i18n.tr(question_key)}</span>
                                    <ChevronDownIcon open=is_open />
                                </button>
                                <div
                                    id=format!("answer-{id}")
                                    role="region"
                                    aria-labelledby=format!("question-{id}")
                                    class="px-4 pb-4"
                                    class:hidden=move || !is_open.get()
                                >
                                    <p data-i18n=answer_key>{i18n.tr(answer_key)}</p>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <h3 class="mb-2 text-2xl font-bold" data-i18n="cta.text">{i18n.tr("cta.text")}</h3>
                    <p class="opacity-80" data-i18n="cta.subtitle">{i18n.tr("cta.subtitle")}</p>
                </div>
            </div>
        </section>
    }
}
