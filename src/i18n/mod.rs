//! Localisation for the site.
//!
//! The active [`Locale`] is held by an [`I18n`] handle that is provided once at the
//! root of the view tree and fetched with [`use_i18n`]. Components read strings through
//! [`I18n::t`] or bind them with [`I18n::tr`]; both track the locale signal, so a call
//! to [`I18n::change_locale`] re-renders every translated node. Elements showing a
//! translated string also carry a `data-i18n` attribute naming their key.
use anyhow::Result;
use leptos::prelude::*;
use std::sync::Arc;
use crate::storage::{PreferenceStore, LANGUAGE_KEY};

pub mod catalog;
pub mod locale;

pub use catalog::CATALOG;
pub use locale::Locale;

#[derive(Clone, Copy)]
pub struct I18n {
  locale: RwSignal<Locale>,
  store: StoredValue<Arc<dyn PreferenceStore>>,
}

impl I18n {
  fn new(store: Arc<dyn PreferenceStore>) -> Self {
    let initial = Locale::from_persisted(store.get(LANGUAGE_KEY).as_deref());
    leptos::logging::log!("Starting with locale {}", initial);
    I18n {
      locale: RwSignal::new(initial),
      store: StoredValue::new(store),
    }
  }

  /// Current locale; tracked when read inside a reactive scope.
  pub fn locale(&self) -> Locale {
    self.locale.get()
  }

  pub fn t(&self, key: &str) -> String {
    CATALOG.translate(self.locale.get(), key)
  }

  pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
    CATALOG.translate_with(self.locale.get(), key, args)
  }

  /// A signal that follows the translation of `key` across locale changes.
  pub fn tr(&self, key: &'static str) -> Signal<String> {
    let this = *self;
    Signal::derive(move || this.t(key))
  }

  /// Switch the whole site to `locale` and remember the choice.
  pub fn change_locale(&self, locale: Locale) {
    self.locale.set(locale);
    let store = self.store.get_value();
    if let Err(e) = store.set(LANGUAGE_KEY, locale.as_str()) {
      leptos::logging::error!("Failed to persist locale: {e:?}");
    }
  }

  /// Switch by tag. Tags outside the supported set are rejected and leave the
  /// active locale unchanged.
  pub fn change_locale_tag(&self, tag: &str) -> Result<Locale> {
    let locale = tag.parse::<Locale>().inspect_err(|e| {
      leptos::logging::warn!("Refusing locale change: {e}");
    })?;
    self.change_locale(locale);
    Ok(locale)
  }
}

pub fn provide_i18n(store: Arc<dyn PreferenceStore>) -> I18n {
  let i18n = I18n::new(store);
  provide_context(i18n);
  i18n
}

pub fn use_i18n() -> I18n {
  use_context::<I18n>().expect("I18n to be provided")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryPreferences;
  use anyhow::anyhow;

  struct ReadOnlyPreferences;

  impl PreferenceStore for ReadOnlyPreferences {
    fn get(&self, _key: &str) -> Option<String> {
      None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
      Err(anyhow!("storage quota exceeded"))
    }
  }

  fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
  }

  #[test]
  fn starts_from_persisted_locale() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::with(LANGUAGE_KEY, "en")));
      assert_eq!(i18n.locale(), Locale::En);
    });
  }

  #[test]
  fn starts_in_spanish_without_a_preference() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::default()));
      assert_eq!(i18n.locale(), Locale::Es);
      assert_eq!(i18n.t("contact.form.name"), "Nombre");
    });
  }

  #[test]
  fn change_locale_switches_lookups_and_persists() {
    with_owner(|| {
      let prefs = MemoryPreferences::default();
      let i18n = provide_i18n(Arc::new(prefs.clone()));
      assert_eq!(i18n.t("contact.form.name"), "Nombre");

      i18n.change_locale(Locale::En);
      assert_eq!(i18n.t("contact.form.name"), "Name");
      assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
    });
  }

  #[test]
  fn failed_persist_keeps_the_new_locale() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(ReadOnlyPreferences));
      i18n.change_locale(Locale::En);
      assert_eq!(i18n.locale(), Locale::En);
      assert_eq!(i18n.t("contact.form.name"), "Name");
    });
  }

  #[test]
  fn context_handle_matches_provided_one() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::default()));
      i18n.change_locale(Locale::En);
      assert_eq!(use_i18n().locale(), Locale::En);
    });
  }

  #[test]
  fn derived_translation_follows_locale() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::default()));
      let label = i18n.tr("nav.projects");
      assert_eq!(label.get_untracked(), "Proyectos");
      i18n.change_locale(Locale::En);
      assert_eq!(label.get_untracked(), "Projects");
      i18n.change_locale(Locale::En);
      assert_eq!(label.get_untracked(), "Projects");
    });
  }

  #[test]
  fn unsupported_tag_is_rejected() {
    with_owner(|| {
      let prefs = MemoryPreferences::default();
      let i18n = provide_i18n(Arc::new(prefs.clone()));
      assert!(i18n.change_locale_tag("fr").is_err());
      assert_eq!(i18n.locale(), Locale::Es);
      assert_eq!(prefs.get(LANGUAGE_KEY), None);

      assert_eq!(i18n.change_locale_tag("en").unwrap(), Locale::En);
      assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
    });
  }

  #[test]
  fn missing_key_falls_back_to_key() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::default()));
      assert_eq!(i18n.t("contact.form.nonexistent"), "contact.form.nonexistent");
    });
  }

  #[test]
  fn interpolated_copyright() {
    with_owner(|| {
      let i18n = provide_i18n(Arc::new(MemoryPreferences::with(LANGUAGE_KEY, "en")));
      assert_eq!(i18n.t_with("footer.copyright", &[("year", "2026")]), "© 2026 Ariel Mesa. All rights reserved.");
    });
  }
}
