use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("content stream encoding failed: {0}")]
    Encode(String),

    #[error("layout error: {0}")]
    Layout(String),
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
