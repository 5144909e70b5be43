use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+\d\s\-()]{10,}$").expect("valid phone regex"));

pub const MIN_PHONE_DIGITS: usize = 10;

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Digits, spaces, `+`, `-` and parentheses, with at least ten digits among them.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
