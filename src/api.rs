use gloo_net::http::Request;
use anyhow::{anyhow, Result};
use crate::config::{contact_webhook_url, is_demo_webhook};
use crate::models::contact::ContactForm;

/// Deliver a contact form to the configured webhook.
pub async fn submit_contact(form: &ContactForm) -> Result<()> {
    let url = contact_webhook_url();
    if is_demo_webhook(&url) {
        leptos::logging::log!("Demo submission: {:?}", form);
        return Ok(());
    }

    let resp = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(|e| anyhow!("Failed to build request: {e:?}"))?
        .send()
        .await
        .map_err(|e| anyhow!("Network error: {e:?}"))?;

    if !resp.ok() {
        return Err(anyhow!("HTTP {} {}", resp.status(), resp.status_text()));
    }
    Ok(())
}
