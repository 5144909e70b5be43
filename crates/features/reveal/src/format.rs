/// How a counter renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Whole numbers with comma thousands separators (`12,000`).
    Grouped,
    /// Fixed decimal places (`4.8`).
    Fixed(u8),
}

impl NumberFormat {
    pub const MAX_DECIMALS: u8 = 2;

    /// `Grouped` for zero places, otherwise `places` capped at [`Self::MAX_DECIMALS`].
    #[must_use]
    pub fn with_places(places: u8) -> Self {
        if places == 0 { Self::Grouped } else { Self::Fixed(places.min(Self::MAX_DECIMALS)) }
    }

    /// Places written after the decimal point of `raw` (`"99.95"` is two, `"12,000"` none).
    #[must_use]
    pub fn from_source(raw: &str) -> Self {
        let places = raw.trim().split_once('.').map_or(0, |(_, fraction)| {
            fraction.chars().take_while(char::is_ascii_digit).count()
        });
        Self::with_places(u8::try_from(places).unwrap_or(u8::MAX))
    }

    /// Shortest format, up to two places, that shows `target` without rounding.
    #[must_use]
    pub fn for_target(target: f64) -> Self {
        let fixed = format!("{target:.prec$}", prec = usize::from(Self::MAX_DECIMALS));
        Self::from_source(fixed.trim_end_matches('0'))
    }

    /// Intermediate whole values are floored so the display never overshoots the target.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Grouped => group_thousands(value.floor() as i64),
            Self::Fixed(places) => format!("{value:.prec$}", prec = usize::from(places)),
        }
    }
}

#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
