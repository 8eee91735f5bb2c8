// src/controller.rs
//! Action controllers: one per user-triggered operation. Each follows the
//! same template: validate the inputs, move the display state to Loading,
//! call the gateway, then settle on Result or Error.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::api::types::{ScrapeRequest, TailorRequest};
use crate::api::JobTailorApi;
use crate::clipboard::Clipboard;
use crate::download;
use crate::error::ApiError;
use crate::session::Session;

/// How long the scrape confirmation stays on screen.
pub const SCRAPE_NOTICE_TTL: Duration = Duration::from_secs(3);
/// How long the copy/download acknowledgment stays on screen.
pub const ACK_NOTICE_TTL: Duration = Duration::from_secs(2);

/// True when the input parses as an absolute URL per standard URL rules.
pub fn is_valid_url(input: &str) -> bool {
    reqwest::Url::parse(input).is_ok()
}

/// Extract a job description from the session's job URL. Success populates
/// the job-description field and posts a transient confirmation; the main
/// result surface stays hidden.
pub async fn extract_job_description<A>(api: &A, session: &mut Session)
where
    A: JobTailorApi + Sync,
{
    let job_url = session.job_url.trim().to_string();

    if job_url.is_empty() {
        session.fail("Please enter a job URL first.");
        return;
    }
    if !is_valid_url(&job_url) {
        session.fail("Please enter a valid URL.");
        return;
    }

    session.start_request();

    match api.scrape_job(&ScrapeRequest { job_url }).await {
        Ok(result) => {
            session.job_desc = result.job_description;
            session.back_to_idle();
            session.post_notice("Job description extracted successfully!", SCRAPE_NOTICE_TTL);
        }
        Err(err) => {
            session.fail(format!("Failed to scrape job description: {}", err));
        }
    }
}

/// Tailor the session's resume against its job description and/or job URL.
pub async fn tailor_resume<A>(api: &A, session: &mut Session)
where
    A: JobTailorApi + Sync,
{
    let request = match validate_tailor_inputs(session) {
        Ok(request) => request,
        Err(err) => {
            session.fail(err.to_string());
            return;
        }
    };

    session.start_request();
    info!("Tailoring resume ({} chars)", request.resume.len());

    match api.tailor_resume(&request).await {
        Ok(result) => session.succeed(result),
        Err(err) => session.fail(format!("Failed to tailor resume: {}", err)),
    }
}

fn validate_tailor_inputs(session: &Session) -> Result<TailorRequest, ApiError> {
    let resume = session.resume.trim().to_string();
    let job_desc = session.job_desc.trim().to_string();
    let job_url = session.job_url.trim().to_string();

    if resume.is_empty() {
        return Err(ApiError::validation("Please enter your resume."));
    }
    if job_desc.is_empty() && job_url.is_empty() {
        return Err(ApiError::validation(
            "Please enter a job description or provide a job URL.",
        ));
    }

    Ok(TailorRequest {
        resume,
        job_desc,
        job_url: if job_url.is_empty() {
            None
        } else {
            Some(job_url)
        },
    })
}

/// Reset every input field and hide all surfaces. No network call.
pub fn clear_all(session: &mut Session) {
    session.clear();
}

/// Copy the rendered tailored resume to the clipboard. The capability is
/// only invoked when there is something to copy.
pub fn copy_result<C: Clipboard>(clipboard: &mut C, session: &mut Session) {
    let text = match session.rendered_resume() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            session.fail("No resume to copy.");
            return;
        }
    };

    match clipboard.copy(&text) {
        Ok(()) => session.post_notice("Copied!", ACK_NOTICE_TTL),
        Err(err) => {
            warn!("Clipboard copy failed: {}", err);
            session.fail("Failed to copy to clipboard.");
        }
    }
}

/// Save the rendered tailored resume as a plain-text file.
pub async fn download_result(session: &mut Session, path: &Path) {
    let text = match session.rendered_resume() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            session.fail("No resume to download.");
            return;
        }
    };

    match download::save_plain_text(path, &text).await {
        Ok(()) => {
            info!("Saved tailored resume to {}", path.display());
            session.post_notice("Downloaded!", ACK_NOTICE_TTL);
        }
        Err(err) => session.fail(err.to_string()),
    }
}

/// Probe the health endpoint once at startup. Failure is non-fatal: it
/// surfaces a visible error but does not block the session.
pub async fn startup_health_check<A>(api: &A, session: &mut Session) -> bool
where
    A: JobTailorApi + Sync,
{
    match api.health().await {
        Ok(body) => {
            info!("Backend connection successful: {}", body);
            true
        }
        Err(err) => {
            warn!("Backend not accessible: {}", err);
            session.fail("Backend server is not running. Please start the backend first.");
            false
        }
    }
}
