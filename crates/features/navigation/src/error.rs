use std::borrow::Cow;

/// Navigation slice error type.
#[dpi_derive::dpi_error]
pub enum NavigationError {
    #[error("Anchor is a placeholder{}: {message}", format_context(.context))]
    PlaceholderAnchor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Anchor target missing{}: {message}", format_context(.context))]
    MissingTarget { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
