use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// Languages the site ships translations for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
  #[default]
  Es,
  En,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

  pub fn as_str(&self) -> &'static str {
    match self {
      Locale::Es => "es",
      Locale::En => "en",
    }
  }

  /// Short label used by the language switcher.
  pub fn label(&self) -> &'static str {
    match self {
      Locale::Es => "ES",
      Locale::En => "EN",
    }
  }

  /// Resolve the startup locale from a persisted tag.
  /// Anything missing or unrecognised falls back to the default.
  pub fn from_persisted(stored: Option<&str>) -> Locale {
    match stored.map(str::parse::<Locale>) {
      Some(Ok(loc)) => loc,
      Some(Err(e)) => {
        log::warn!("Ignoring persisted language: {e}");
        Locale::default()
      }
      None => Locale::default(),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Locale {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim() {
      "es" => Ok(Locale::Es),
      "en" => Ok(Locale::En),
      other => Err(anyhow!("Unsupported locale tag: {other:?}")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_supported_tags() {
    assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
    assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
  }

  #[test]
  fn rejects_unknown_tags() {
    assert!("fr".parse::<Locale>().is_err());
    assert!("EN".parse::<Locale>().is_err());
    assert!("".parse::<Locale>().is_err());
  }

  #[test]
  fn startup_locale_uses_persisted_value() {
    assert_eq!(Locale::from_persisted(Some("en")), Locale::En);
    assert_eq!(Locale::from_persisted(Some("es")), Locale::Es);
  }

  #[test]
  fn startup_locale_defaults_to_spanish() {
    assert_eq!(Locale::from_persisted(None), Locale::Es);
    assert_eq!(Locale::from_persisted(Some("garbage")), Locale::Es);
  }

  #[test]
  fn tag_round_trips_through_display() {
    for loc in Locale::ALL {
      assert_eq!(loc.to_string().parse::<Locale>().unwrap(), loc);
    }
  }
}
