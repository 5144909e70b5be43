use std::borrow::Cow;

/// Disclosure slice error type.
#[dpi_derive::dpi_error]
pub enum DisclosureError {
    #[error("Disclosure panel missing{}: {message}", format_context(.context))]
    MissingPanel { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown disclosure trigger{}: {message}", format_context(.context))]
    UnknownTrigger { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
