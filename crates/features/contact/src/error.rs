use std::borrow::Cow;

/// Contact slice error type.
#[dpi_derive::dpi_error]
pub enum ContactError {
    #[error("Submission failed{}: {message}", format_context(.context))]
    Submission { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
