use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;

use amped_core::submission::Submission;

use crate::error::ApiError;

/// A `/generate-pdf` submission, decoded from either body format.
///
/// `application/json` bodies may carry the category arrays directly; any
/// other content type (or none) is decoded as form-urlencoded text fields.
pub struct EstimateForm(pub Submission);

impl<S> FromRequest<S> for EstimateForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| {
                let mime = ct.split(';').next().unwrap_or_default().trim();
                mime == "application/json" || mime.ends_with("+json")
            });

        let body = Bytes::from_request(req, state).await?;

        if is_json {
            let value: serde_json::Value = serde_json::from_slice(&body)
                .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;
            Ok(Self(Submission::from_json(value)?))
        } else {
            let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&body)
                .map_err(|e| ApiError::BadRequest(format!("invalid form body: {e}")))?;
            Ok(Self(Submission::from_form_pairs(pairs)))
        }
    }
}
