use std::borrow::Cow;

/// Page construction error.
#[dpi_derive::dpi_error]
pub enum PageError {
    #[error("Invalid page snapshot{}: {source}", format_context(.context))]
    Snapshot { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
