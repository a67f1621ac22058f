use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Durable key/value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

fn local_storage() -> Option<web_sys::Storage> {
  web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalPreferences {
  fn get(&self, key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let storage = local_storage().ok_or_else(|| anyhow!("localStorage is not available"))?;
    storage
      .set_item(key, value)
      .map_err(|e| anyhow!("Failed to store {key}: {e:?}"))
  }
}

/// In-memory preferences, used when the browser offers no storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
  values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
  pub fn with(key: &str, value: &str) -> Self {
    let prefs = Self::default();
    if let Ok(mut values) = prefs.values.lock() {
      values.insert(key.to_string(), value.to_string());
    }
    prefs
  }
}

impl PreferenceStore for MemoryPreferences {
  fn get(&self, key: &str) -> Option<String> {
    self.values.lock().ok()?.get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let mut values = self.values.lock().map_err(|e| anyhow!("Preference lock poisoned: {e}"))?;
    values.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Pick the browser store when it exists, otherwise keep preferences in memory.
pub fn default_store() -> Arc<dyn PreferenceStore> {
  if local_storage().is_some() {
    Arc::new(LocalPreferences)
  } else {
    log::info!("localStorage unavailable, preferences will not persist");
    Arc::new(MemoryPreferences::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn memory_store_round_trips() {
    let prefs = MemoryPreferences::default();
    assert_eq!(prefs.get(LANGUAGE_KEY), None);
    prefs.set(LANGUAGE_KEY, "en").unwrap();
    assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
  }

  #[test]
  fn clones_share_values() {
    let prefs = MemoryPreferences::with(THEME_KEY, "dark");
    let other = prefs.clone();
    other.set(THEME_KEY, "light").unwrap();
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
  }
}
