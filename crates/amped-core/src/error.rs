use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl CoreError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the submitted field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            CoreError::InvalidInput { field, .. } => field,
        }
    }
}
