use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use amped_export::pdf::{generate_pdf, ReportMeta};

use crate::error::ApiError;
use crate::extract::EstimateForm;
use crate::state::AppState;

/// Validate the submission, render the estimate and return it as a download.
///
/// The same instant stamps the report header and the attachment filename.
pub async fn generate(
    State(state): State<AppState>,
    EstimateForm(submission): EstimateForm,
) -> Result<Response, ApiError> {
    let request = submission.normalize(&state.config.limits)?;
    let now = state.clock.now();

    let counts = request.input.counts();
    tracing::info!(
        routes = counts.routes,
        devices = counts.devices,
        conduit = counts.conduit,
        trade = request.branding.trade.key(),
        project = %request.branding.project_name,
        "generating estimate pdf"
    );

    let meta = ReportMeta {
        generated_at: now.datetime(),
        branding: request.branding,
    };
    let input = request.input;
    let styles = state.styles.clone();
    let report = tokio::task::spawn_blocking(move || generate_pdf(&input, &meta, &styles))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    let filename = format!("estimate_{}.pdf", now.strftime("%Y%m%d_%H%M%S"));
    tracing::info!(
        pages = report.page_count,
        bytes = report.bytes.len(),
        filename = %filename,
        "generated estimate pdf"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        report.bytes,
    )
        .into_response())
}
