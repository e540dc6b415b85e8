//! View rendering error types.

/// View rendering error.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// Handlebars rendering error.
    #[error("View rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("View registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
