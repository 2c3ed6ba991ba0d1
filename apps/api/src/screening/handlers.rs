//! Handlers for the upload form: validation, extraction, scoring, review.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_resume, DocumentKind};
use crate::review::{AiVerdict, ResumeReviewer};
use crate::screening::scoring::score_resume;
use crate::screening::views::{IndexPage, ScreeningResults};
use crate::state::AppState;

/// GET /
pub async fn show_form() -> Result<Response, AppError> {
    Ok(Html(IndexPage::empty().render()?).into_response())
}

/// One parsed upload form: the file field plus the opt-in checkbox.
struct UploadForm {
    filename: String,
    data: Bytes,
    ai_scoring: bool,
}

/// Reads the multipart fields. A missing file field yields `None`; an
/// unreadable body is a protocol error.
async fn read_upload_form(multipart: &mut Multipart) -> Result<Option<UploadForm>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut ai_scoring = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            // A checkbox submits a value only when checked.
            "enable_ai_scoring" => {
                let _ = field.text().await?;
                ai_scoring = true;
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    Ok(file.map(|(filename, data)| UploadForm {
        filename,
        data,
        ai_scoring,
    }))
}

/// Runs the always-on summary and the opt-in score, degrading each remote
/// failure to placeholder output so the page always renders.
async fn review_resume(
    reviewer: &dyn ResumeReviewer,
    text: &str,
    ai_scoring: bool,
) -> (String, Option<AiVerdict>) {
    let summary = match reviewer.summarize(text).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("summary unavailable: {e}");
            format!("The AI summary is unavailable: {e}")
        }
    };

    let ai = if ai_scoring {
        Some(match reviewer.score(text).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("AI scoring unavailable: {e}");
                AiVerdict {
                    score: 0,
                    reason: "Error connecting to the AI scoring service.".to_string(),
                }
            }
        })
    } else {
        None
    };

    (summary, ai)
}

/// POST /
///
/// Validation failures (no file, empty filename, unsupported extension)
/// redirect back to the empty form before anything is extracted or scored.
/// Extraction failures render a user-visible message. The rule-based score
/// renders whenever extraction succeeds, whatever the AI calls do.
pub async fn screen_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let Some(form) = read_upload_form(&mut multipart).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    if form.filename.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }
    let Some(kind) = DocumentKind::from_filename(&form.filename) else {
        return Ok(Redirect::to("/").into_response());
    };

    let screening_id = Uuid::new_v4();
    info!(
        %screening_id,
        filename = %form.filename,
        bytes = form.data.len(),
        "screening uploaded resume"
    );

    let text = match extract_resume(kind, &form.data) {
        Ok(text) => text,
        Err(e) => {
            warn!(%screening_id, "extraction failed: {e}");
            let page = IndexPage::with_error(
                "Could not read that document. Please upload a readable PDF or DOCX file.",
            );
            return Ok(Html(page.render()?).into_response());
        }
    };

    let rule = score_resume(&text);
    info!(%screening_id, rule_score = rule.total, "rule scoring complete");

    let (summary, ai) = review_resume(state.reviewer.as_ref(), &text, form.ai_scoring).await;

    let page = IndexPage::with_results(ScreeningResults { rule, summary, ai });
    Ok(Html(page.render()?).into_response())
}
