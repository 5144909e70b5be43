use std::borrow::Cow;

/// Reveal slice error type.
#[dpi_derive::dpi_error]
pub enum RevealError {
    #[error("Counter markup error{}: {source}", format_context(.context))]
    Markup { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    #[error("Counter markup error{}: {source}", format_context(.context))]
    Places { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Reveal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
