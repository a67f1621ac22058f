use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use serde_json::Value;
use std::collections::HashMap;
use super::locale::Locale;

const ES_JSON: &str = include_str!("../../locales/es.json");
const EN_JSON: &str = include_str!("../../locales/en.json");

lazy_static! {
  /// Translations shipped with the site, one tree per locale.
  pub static ref CATALOG: Catalog = Catalog::from_sources(&[
    (Locale::Es, ES_JSON),
    (Locale::En, EN_JSON),
  ]).unwrap_or_else(|e| {
    log::error!("Failed to load translations: {e:?}");
    Catalog::default()
  });
}

/// Read-only store of nested message trees keyed by locale.
#[derive(Debug, Default)]
pub struct Catalog {
  trees: HashMap<Locale, Value>,
}

impl Catalog {
  pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Catalog> {
    let mut trees = HashMap::new();
    for (locale, json) in sources {
      let tree: Value = serde_json::from_str(json)
        .map_err(|e| anyhow!("Invalid translation file for {locale}: {e}"))?;
      if !tree.is_object() {
        return Err(anyhow!("Translation file for {locale} must be an object"));
      }
      trees.insert(*locale, tree);
    }
    Ok(Catalog { trees })
  }

  /// Walk a dot-delimited key through the locale's tree.
  /// Only a terminal string counts as a hit.
  pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
    let mut node = self.trees.get(&locale)?;
    for segment in key.split('.') {
      node = node.as_object()?.get(segment)?;
    }
    node.as_str()
  }

  /// Resolve a key, returning the key itself when nothing is found.
  pub fn translate(&self, locale: Locale, key: &str) -> String {
    match self.lookup(locale, key) {
      Some(text) => text.to_string(),
      None => {
        log::warn!("Missing translation [{locale}] {key}");
        key.to_string()
      }
    }
  }

  /// Like `translate`, replacing `{name}` placeholders with the given values.
  pub fn translate_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = self.translate(locale, key);
    for (name, value) in args {
      text = text.replace(&format!("{{{name}}}"), value);
    }
    text
  }

  /// Every leaf key of a locale, sorted.
  #[cfg(test)]
  fn keys(&self, locale: Locale) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(tree) = self.trees.get(&locale) {
      collect_keys(tree, "", &mut out);
    }
    out.sort();
    out
  }
}

#[cfg(test)]
fn collect_keys(node: &Value, prefix: &str, out: &mut Vec<String>) {
  match node {
    Value::Object(map) => {
      for (k, v) in map {
        let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
        collect_keys(v, &path, out);
      }
    }
    Value::String(_) => out.push(prefix.to_string()),
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Catalog {
    Catalog::from_sources(&[
      (Locale::Es, r#"{"contact":{"form":{"name":"Nombre"}},"footer":{"copyright":"© {year} AM"}}"#),
      (Locale::En, r#"{"contact":{"form":{"name":"Name"}}}"#),
    ]).unwrap()
  }

  #[test]
  fn resolves_nested_keys_per_locale() {
    let catalog = sample();
    assert_eq!(catalog.translate(Locale::Es, "contact.form.name"), "Nombre");
    assert_eq!(catalog.translate(Locale::En, "contact.form.name"), "Name");
  }

  #[test]
  fn unknown_keys_come_back_verbatim() {
    let catalog = sample();
    assert_eq!(catalog.translate(Locale::Es, "contact.form.nonexistent"), "contact.form.nonexistent");
    assert_eq!(catalog.translate(Locale::Es, "nope"), "nope");
    assert_eq!(catalog.translate(Locale::Es, ""), "");
    assert_eq!(catalog.translate(Locale::Es, "contact..name"), "contact..name");
  }

  #[test]
  fn branch_nodes_are_not_leaves() {
    let catalog = sample();
    assert_eq!(catalog.lookup(Locale::Es, "contact.form"), None);
    assert_eq!(catalog.translate(Locale::Es, "contact.form"), "contact.form");
  }

  #[test]
  fn descending_past_a_leaf_misses() {
    let catalog = sample();
    assert_eq!(catalog.lookup(Locale::Es, "contact.form.name.extra"), None);
  }

  #[test]
  fn key_missing_in_one_locale_only_degrades_that_locale() {
    let catalog = sample();
    assert_eq!(catalog.translate(Locale::En, "footer.copyright"), "footer.copyright");
    assert_eq!(catalog.translate(Locale::Es, "footer.copyright"), "© {year} AM");
  }

  #[test]
  fn interpolates_named_arguments() {
    let catalog = sample();
    assert_eq!(catalog.translate_with(Locale::Es, "footer.copyright", &[("year", "2026")]), "© 2026 AM");
  }

  #[test]
  fn rejects_malformed_sources() {
    assert!(Catalog::from_sources(&[(Locale::Es, "{not json")]).is_err());
    assert!(Catalog::from_sources(&[(Locale::Es, r#"["a"]"#)]).is_err());
  }

  #[test]
  fn shipped_locales_share_the_same_keys() {
    let es = CATALOG.keys(Locale::Es);
    let en = CATALOG.keys(Locale::En);
    assert!(!es.is_empty());
    assert_eq!(es, en);
  }

  #[test]
  fn shipped_catalog_has_contact_labels() {
    assert_eq!(CATALOG.translate(Locale::Es, "contact.form.name"), "Nombre");
    assert_eq!(CATALOG.translate(Locale::En, "contact.form.name"), "Name");
  }
}
