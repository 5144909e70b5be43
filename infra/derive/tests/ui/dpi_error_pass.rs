use dpi_derive::dpi_error;
use std::borrow::Cow;

#[dpi_error]
pub enum AssetError {
    #[error("Asset I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal asset error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: AssetError = "fallback missing".into();
    let _ = err.to_string();
}
