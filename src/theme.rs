use leptos::prelude::*;
use std::sync::Arc;
use crate::storage::{PreferenceStore, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn as_str(&self) -> &'static str {
    match self {
      Theme::Light => "light",
      Theme::Dark => "dark",
    }
  }

  pub fn parse(value: &str) -> Option<Theme> {
    match value {
      "light" => Some(Theme::Light),
      "dark" => Some(Theme::Dark),
      _ => None,
    }
  }

  pub fn toggled(&self) -> Theme {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }
}

/// Light/dark flag shared by the whole page, persisted across visits.
#[derive(Clone, Copy)]
pub struct ThemeState {
  theme: RwSignal<Theme>,
  store: StoredValue<Arc<dyn PreferenceStore>>,
}

impl ThemeState {
  pub fn theme(&self) -> Theme {
    self.theme.get()
  }

  pub fn set(&self, theme: Theme) {
    self.theme.set(theme);
    if let Err(e) = self.store.get_value().set(THEME_KEY, theme.as_str()) {
      leptos::logging::error!("Failed to persist theme: {e:?}");
    }
  }

  pub fn toggle(&self) {
    self.set(self.theme.get_untracked().toggled());
  }
}

pub fn provide_theme(store: Arc<dyn PreferenceStore>) -> ThemeState {
  let initial = store.get(THEME_KEY).as_deref().and_then(Theme::parse).unwrap_or_default();
  let state = ThemeState {
    theme: RwSignal::new(initial),
    store: StoredValue::new(store),
  };
  provide_context(state);
  state
}

pub fn use_theme() -> ThemeState {
  use_context::<ThemeState>().expect("ThemeState to be provided")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryPreferences;

  #[test]
  fn toggles_and_persists() {
    Owner::new().with(|| {
      let prefs = MemoryPreferences::default();
      let state = provide_theme(Arc::new(prefs.clone()));
      assert_eq!(state.theme(), Theme::Light);
      state.toggle();
      assert_eq!(state.theme(), Theme::Dark);
      assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
      state.toggle();
      assert_eq!(use_theme().theme(), Theme::Light);
    });
  }

  #[test]
  fn restores_saved_theme_and_ignores_junk() {
    Owner::new().with(|| {
      let state = provide_theme(Arc::new(MemoryPreferences::with(THEME_KEY, "dark")));
      assert_eq!(state.theme(), Theme::Dark);
    });
    Owner::new().with(|| {
      let state = provide_theme(Arc::new(MemoryPreferences::with(THEME_KEY, "sepia")));
      assert_eq!(state.theme(), Theme::Light);
    });
  }
}
