use std::fmt;

/// A bar height in percent of the containing element.
///
/// Heights are not clamped, negative values are written as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Height(i64);

impl Height {
    /// Parses a height from an attribute value the way browsers parse base-10 integers.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted and the longest run of
    /// leading digits is used while anything after it is ignored. Values without any digits
    /// result in a height of zero, values outside the 64-bit range saturate.
    pub fn parse(value: &str) -> Self {
        let value = value.trim_start_matches(is_script_whitespace);

        let (negative, digits) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };

        let magnitude = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u64, |magnitude, digit| {
                magnitude
                    .saturating_mul(10)
                    .saturating_add(u64::from(digit - b'0'))
            });

        if negative {
            Self(0i64.saturating_sub_unsigned(magnitude))
        } else {
            Self(0i64.saturating_add_unsigned(magnitude))
        }
    }

    /// Returns the height in percent.
    pub fn percent(self) -> i64 {
        self.0
    }
}

/// Whether the character is skipped by browsers before parsing an integer.
///
/// Differs from [`char::is_whitespace`], which also includes U+0085.
fn is_script_whitespace(character: char) -> bool {
    matches!(
        character,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &str) -> i64 {
        Height::parse(value).percent()
    }

    #[test]
    fn plain_integers() {
        assert_eq!(parse("75"), 75);
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("100"), 100);
        assert_eq!(parse("007"), 7);
    }

    #[test]
    fn unparsable_values_become_zero() {
        for value in ["", "abc", "   ", "-", "+", "%50", "px", ".5"] {
            assert_eq!(parse(value), 0, "`{value}` should become zero");
        }
    }

    #[test]
    fn negative_values_pass_through() {
        assert_eq!(parse("-10"), -10);
        assert_eq!(parse("-0"), 0);
    }

    #[test]
    fn leading_whitespace_and_trailing_garbage_are_ignored() {
        assert_eq!(parse("  42"), 42);
        assert_eq!(parse("\t\n12"), 12);
        assert_eq!(parse("\u{feff}8"), 8);
        assert_eq!(parse("+5"), 5);
        assert_eq!(parse("60%"), 60);
        assert_eq!(parse("33.9"), 33);
        assert_eq!(parse("1e3"), 1);
        assert_eq!(parse("12 34"), 12);
    }

    #[test]
    fn only_script_whitespace_is_skipped() {
        assert_eq!(parse("\u{b}\u{c}\r 9"), 9);
        assert_eq!(parse("\u{a0}\u{2003}\u{3000}4"), 4);
        assert_eq!(parse("\u{2028}\u{2029}3"), 3);
        assert_eq!(parse("\u{85}5"), 0);
        assert_eq!(parse("\u{180e}5"), 0);
    }

    #[test]
    fn default_is_zero_percent() {
        assert_eq!(Height::default(), Height::parse("abc"));
        assert_eq!(Height::default().percent(), 0);
    }

    #[test]
    fn out_of_range_values_saturate() {
        assert_eq!(parse("99999999999999999999999"), i64::MAX);
        assert_eq!(parse("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn displays_as_percentage() {
        assert_eq!(Height::parse("75").to_string(), "75%");
        assert_eq!(Height::parse("abc").to_string(), "0%");
        assert_eq!(Height::parse("-10").to_string(), "-10%");
    }
}
