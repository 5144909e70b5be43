use std::borrow::Cow;

/// Showcase slice error type.
#[dpi_derive::dpi_error]
pub enum ShowcaseError {
    #[error("Showcase markup error{}: {source}", format_context(.context))]
    Markup { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Showcase element missing{}: {message}", format_context(.context))]
    MissingElement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
