//! Culture-specific numeric rendering.
//!
//! The single localization hook the printer offers: a [`Culture`] names
//! the decimal and grouping separators, and the sealed [`CultureFormat`]
//! trait applies them to the numeric terminal types.

/// Separator conventions for rendering numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Culture {
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits, if any.
    pub group_separator: Option<char>,
}

impl Culture {
    /// No grouping, `.` decimal point.
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: None,
    };

    /// `1,234.5`
    pub const EN_US: Self = Self {
        decimal_separator: '.',
        group_separator: Some(','),
    };

    /// `1.234,5`
    pub const DE_DE: Self = Self {
        decimal_separator: ',',
        group_separator: Some('.'),
    };

    // `digits` is a plain ASCII digit run (no sign, no decimal point).
    fn group(self, digits: &str) -> String {
        let Some(sep) = self.group_separator else {
            return digits.to_owned();
        };
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }

    fn format_integer(self, text: &str) -> String {
        match text.strip_prefix('-') {
            Some(rest) => format!("-{}", self.group(rest)),
            None => self.group(text),
        }
    }

    fn format_decimal(self, text: &str) -> String {
        match text.split_once('.') {
            Some((int, frac)) => format!(
                "{}{}{frac}",
                self.format_integer(int),
                self.decimal_separator
            ),
            None => self.format_integer(text),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric types that can be rendered under a [`Culture`].
pub trait CultureFormat: sealed::Sealed {
    /// Render with the culture's separators.
    fn format_with(&self, culture: Culture) -> String;
}

impl CultureFormat for i32 {
    fn format_with(&self, culture: Culture) -> String {
        culture.format_integer(&self.to_string())
    }
}

impl CultureFormat for f32 {
    fn format_with(&self, culture: Culture) -> String {
        culture.format_decimal(&self.to_string())
    }
}

impl CultureFormat for f64 {
    fn format_with(&self, culture: Culture) -> String {
        culture.format_decimal(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invariant_leaves_numbers_alone() {
        assert_eq!(1_234_567.format_with(Culture::INVARIANT), "1234567");
        assert_eq!(1234.5_f64.format_with(Culture::INVARIANT), "1234.5");
    }

    #[test]
    fn en_us_groups_thousands() {
        assert_eq!(1_234_567.format_with(Culture::EN_US), "1,234,567");
        assert_eq!(1000.format_with(Culture::EN_US), "1,000");
        assert_eq!(999.format_with(Culture::EN_US), "999");
    }

    #[test]
    fn de_de_swaps_separators() {
        assert_eq!(1234.5_f64.format_with(Culture::DE_DE), "1.234,5");
        assert_eq!(0.25_f32.format_with(Culture::DE_DE), "0,25");
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        assert_eq!((-1_234_567).format_with(Culture::EN_US), "-1,234,567");
        assert_eq!((-1234.5_f64).format_with(Culture::DE_DE), "-1.234,5");
    }

    #[test]
    fn fractional_digits_are_not_grouped() {
        assert_eq!(1234.567_89_f64.format_with(Culture::EN_US), "1,234.56789");
    }
}
