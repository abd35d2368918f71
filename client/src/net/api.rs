//! REST helpers for the external mail/AI API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the JSON-only calls have stubs returning an error; the
//! multipart calls carry a browser `File` and exist only under hydrate.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a message fit for a toast. The
//! server's `{ "message": ... }` body wins over the generic fallback. History
//! recording is best-effort: the mail is already sent when it runs.
//!
//! AUTH
//! ====
//! The bearer token and display name come from `localStorage` (`userToken`,
//! `userData.name`), written by the login flow of the external site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

pub const COMPOSE_EMAIL: &str = "/api/ai/compose-email";
pub const GENERATE_EMAIL: &str = "/api/ai/generate-email";
pub const DISPATCH_APPLICATION: &str = "/api/emails/dispatch";
pub const DISPATCH_GENERAL: &str = "/api/emails/dispatch-general";
pub const HISTORY: &str = "/api/history";

#[cfg(any(test, feature = "hydrate"))]
const TOKEN_KEY: &str = "userToken";
#[cfg(any(test, feature = "hydrate"))]
const USER_KEY: &str = "userData";

/// Subject and body produced from a list of key points.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ComposedEmail {
    pub subject: String,
    #[serde(rename = "emailBody")]
    pub email_body: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct GeneratedBody {
    #[serde(rename = "emailBody")]
    email_body: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ApiMessage {
    message: Option<String>,
}

/// Sent-mail row returned by `GET /api/history`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub recruiter_email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email_body: String,
    #[serde(default)]
    pub sent_at: String,
}

/// Sent-mail record posted to the history endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub recruiter_email: String,
    pub role: String,
    pub email_body: String,
    pub resume_file: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Display name from the stored `userData` JSON, empty when absent or malformed.
#[cfg(any(test, feature = "hydrate"))]
fn user_name_from(raw: Option<&str>) -> String {
    raw.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
        .and_then(|v| v.get("name").and_then(|n| n.as_str()).map(str::to_owned))
        .unwrap_or_default()
}

/// Error text for a non-OK response.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{fallback} ({status})"))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_generated_body(body: &str) -> Result<String, String> {
    serde_json::from_str::<GeneratedBody>(body)
        .map(|g| g.email_body)
        .map_err(|e| format!("unexpected response: {e}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_history(body: &str) -> Result<Vec<HistoryRecord>, String> {
    serde_json::from_str::<Vec<HistoryRecord>>(body).map_err(|e| format!("unexpected response: {e}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn history_item_url(id: i64) -> String {
    format!("{HISTORY}/{id}")
}

#[cfg(feature = "hydrate")]
fn stored_item(key: &str) -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(key).ok()?
}

#[cfg(feature = "hydrate")]
fn auth_header() -> String {
    bearer(stored_item(TOKEN_KEY).as_deref().unwrap_or_default())
}

#[cfg(feature = "hydrate")]
fn user_name() -> String {
    user_name_from(stored_item(USER_KEY).as_deref())
}

#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response, fallback: &str) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_message(status, &body, fallback)
}

#[cfg(feature = "hydrate")]
fn form_data(text_fields: &[(&str, &str)]) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in text_fields {
        form.append_with_str(name, value).map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn post_form(url: &str, form: web_sys::FormData, fallback: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::post(url)
        .header("Authorization", &auth_header())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(response_error(resp, fallback).await);
    }
    resp.text().await.map_err(|e| e.to_string())
}

/// Expand key points into a subject and body via `POST /api/ai/compose-email`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the request fails.
pub async fn compose_email(points: &str) -> Result<ComposedEmail, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "points": points });
        let resp = gloo_net::http::Request::post(COMPOSE_EMAIL)
            .header("Authorization", &auth_header())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "AI generation failed.").await);
        }
        resp.json::<ComposedEmail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = points;
        Err("not available on server".to_owned())
    }
}

/// Generate a cover email for `role` from the resume via `POST /api/ai/generate-email`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the request fails.
#[cfg(feature = "hydrate")]
pub async fn generate_email(role: &str, resume: &web_sys::File) -> Result<String, String> {
    let name = user_name();
    let form = form_data(&[("role", role), ("userName", name.as_str())])?;
    form.append_with_blob("resume", resume).map_err(|e| format!("{e:?}"))?;
    let body = post_form(GENERATE_EMAIL, form, "AI generation failed.").await?;
    parse_generated_body(&body)
}

/// Send a job application with the resume via `POST /api/emails/dispatch`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the send fails.
#[cfg(feature = "hydrate")]
pub async fn send_application(
    recruiter_email: &str,
    role: &str,
    email_body: &str,
    resume: &web_sys::File,
) -> Result<(), String> {
    let name = user_name();
    let form = form_data(&[
        ("recruiterEmail", recruiter_email),
        ("role", role),
        ("emailBody", email_body),
        ("userName", name.as_str()),
    ])?;
    form.append_with_blob("resume", resume).map_err(|e| format!("{e:?}"))?;
    post_form(DISPATCH_APPLICATION, form, "Failed to send email.").await?;
    Ok(())
}

/// Send a general email via `POST /api/emails/dispatch-general`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the send fails.
#[cfg(feature = "hydrate")]
pub async fn send_email(
    recipient_email: &str,
    subject: &str,
    email_body: &str,
    attachment: Option<&web_sys::File>,
) -> Result<(), String> {
    let name = user_name();
    let form = form_data(&[
        ("recipientEmail", recipient_email),
        ("subject", subject),
        ("emailBody", email_body),
        ("userName", name.as_str()),
    ])?;
    if let Some(file) = attachment {
        form.append_with_blob("attachment", file).map_err(|e| format!("{e:?}"))?;
    }
    post_form(DISPATCH_GENERAL, form, "Failed to send email.").await?;
    Ok(())
}

/// Record a sent email via `POST /api/history`. Failures are logged only.
pub async fn record_history(entry: &HistoryEntry) {
    #[cfg(feature = "hydrate")]
    {
        let sent = match gloo_net::http::Request::post(HISTORY)
            .header("Authorization", &auth_header())
            .json(entry)
        {
            Ok(req) => req.send().await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match sent {
            Ok(resp) if resp.ok() => {}
            Ok(resp) => leptos::logging::warn!("email sent, but history was not saved: {}", resp.status()),
            Err(e) => leptos::logging::warn!("email sent, but history was not saved: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry;
    }
}

/// Sent emails for the signed-in user via `GET /api/history`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the request fails.
pub async fn fetch_history() -> Result<Vec<HistoryRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(HISTORY)
            .header("Authorization", &auth_header())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "Could not fetch history.").await);
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_history(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Delete one history row via `DELETE /api/history/{id}`.
///
/// # Errors
///
/// Returns the server's message, or a generic one, when the delete fails.
pub async fn delete_history(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&history_item_url(id))
            .header("Authorization", &auth_header())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "Failed to delete on server.").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
