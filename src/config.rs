use url::Url;

// Values are baked in at build time; see build.rs for the .env handling.

pub fn contact_webhook_url() -> String {
  match option_env!("SITE_CONTACT_WEBHOOK_URL") { Some(s) => s.to_string(), None => "https://example.com/webhook-placeholder".to_string() }
}

pub fn schedule_url() -> String {
  match option_env!("SITE_SCHEDULE_URL") { Some(s) => s.to_string(), None => "https://calendly.com/arielmesa".to_string() }
}

pub fn whatsapp_number() -> String {
  match option_env!("SITE_WHATSAPP_NUMBER") { Some(s) => s.to_string(), None => "1234567890".to_string() }
}

pub fn instagram_url() -> String {
  match option_env!("SITE_INSTAGRAM_URL") { Some(s) => s.to_string(), None => "https://instagram.com/arielmesa".to_string() }
}

/// WhatsApp click-to-chat link, optionally with a prefilled message.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
  let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
  match message {
    Some(text) => format!("https://wa.me/{digits}?text={}", urlencoding::encode(text)),
    None => format!("https://wa.me/{digits}"),
  }
}

/// The placeholder webhook (or anything unparsable) means submissions are only simulated.
pub fn is_demo_webhook(webhook: &str) -> bool {
  match Url::parse(webhook) {
    Ok(url) => match url.host_str() {
      Some(host) => host == "example.com" || host.ends_with(".example.com"),
      None => true,
    },
    Err(_) => true,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn placeholder_webhook_is_demo() {
    assert!(is_demo_webhook("https://example.com/webhook-placeholder"));
    assert!(is_demo_webhook("https://hooks.example.com/x"));
    assert!(is_demo_webhook("not a url"));
    assert!(!is_demo_webhook("https://hooks.zapier.com/abc"));
  }

  #[test]
  fn whatsapp_link_strips_formatting() {
    assert_eq!(whatsapp_link("+1 (234) 567-890", None), "https://wa.me/1234567890");
    assert_eq!(whatsapp_link("123", Some("hola qué tal")), "https://wa.me/123?text=hola%20qu%C3%A9%20tal");
  }
}
