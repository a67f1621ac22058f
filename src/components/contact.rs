use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::submit_contact;
use crate::i18n::{use_i18n, I18n};
use crate::models::contact::{ContactForm, Field, FieldErrors, SubmitStatus};

const STATUS_DISMISS_MS: u32 = 6_000;

fn field_view(
    i18n: I18n,
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    status: RwSignal<Option<SubmitStatus>>,
) -> impl IntoView {
    let key = field.label_key();
    let error_id = format!("{}-error", field.id());
    let has_error = move || errors.read().get(field).is_some();
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        // Typing again hides the result of the previous submission
        status.set(None);
        errors.update(|e| { e.update(field, &value); });
        form.update(|f| f.set(field, value));
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class="w-full textarea textarea-bordered"
                class:textarea-error=has_error
                placeholder=i18n.tr(key)
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| format!("{}-error", field.id()))
                prop:value=move || form.read().message.clone()
                on:input=on_input
            ></textarea>
        }.into_any(),
        _ => view! {
            <input
                type={if field == Field::Email { "email" } else { "text" }}
                id=field.id()
                name=field.id()
                class="w-full input input-bordered"
                class:input-error=has_error
                placeholder=i18n.tr(key)
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| format!("{}-error", field.id()))
                prop:value=move || form.read().value(field).to_string()
                on:input=on_input
            />
        }.into_any(),
    };

    view! {
        <div class="form-control">
            <label for=field.id() class="mb-1 label">
                <span class="label-text" data-i18n=key>{i18n.tr(key)}</span>
            </label>
            {control}
            {move || errors.read().get(field).map(|err| view! {
                <span id=error_id.clone() class="mt-1 text-sm text-error" role="alert" data-i18n=err.message_key()>
                    {i18n.tr(err.message_key())}
                </span>
            })}
        </div>
    }
}

/// Hide a success banner; errors stay until the next edit or submit.
fn dismiss_success(status: RwSignal<Option<SubmitStatus>>) {
    // The form may be gone by the time this fires
    if status.try_get_untracked() == Some(Some(SubmitStatus::Success)) {
        status.set(None);
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(None::<SubmitStatus>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(None);

        let current = form.get_untracked();
        let found = current.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match submit_contact(&current).await {
                Ok(()) => {
                    leptos::logging::log!("Contact form delivered");
                    status.set(Some(SubmitStatus::Success));
                    form.set(ContactForm::default());
                    Timeout::new(STATUS_DISMISS_MS, move || dismiss_success(status)).forget();
                }
                Err(e) => {
                    leptos::logging::error!("Form submission error: {e:?}");
                    status.set(Some(SubmitStatus::Error));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section id="contact" class="py-20">
            <div class="container max-w-xl px-4 mx-auto">
                <h2 class="mb-10 text-4xl font-bold text-center" data-i18n="contact.title">{i18n.tr("contact.title")}</h2>

                <form class="space-y-4" novalidate=true on:submit=on_submit>
                    {Field::ALL.into_iter().map(|field| field_view(i18n, field, form, errors, status)).collect_view()}

                    <button type="submit" class="w-full btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { i18n.t("contact.form.sending") } else { i18n.t("contact.form.submit") }}
                    </button>

                    {move || status.get().map(|s| {
                        let class = match s {
                            SubmitStatus::Success => "alert alert-success",
                            SubmitStatus::Error => "alert alert-error",
                        };
                        view! {
                            <div class=class role="alert" data-i18n=s.message_key()>
                                <span>{i18n.tr(s.message_key())}</span>
                            </div>
                        }
                    })}
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_clears_only_success() {
        let owner = Owner::new();
        owner.with(|| {
            let status = RwSignal::new(Some(SubmitStatus::Success));
            dismiss_success(status);
            assert_eq!(status.get_untracked(), None);

            status.set(Some(SubmitStatus::Error));
            dismiss_success(status);
            assert_eq!(status.get_untracked(), Some(SubmitStatus::Error));
        });
    }

    #[test]
    fn dismiss_after_unmount_is_harmless() {
        let owner = Owner::new();
        let status = owner.with(|| RwSignal::new(Some(SubmitStatus::Success)));
        owner.cleanup();
        dismiss_success(status);
        assert_eq!(status.try_get_untracked(), None);
    }
}
