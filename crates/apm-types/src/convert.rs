//! Token conversion helpers shared by every vocabulary type.
//!
//! Configuration values are plain strings. A single token maps to one value
//! through a static name table; a `|`-delimited string maps either to a set of
//! values (each token converted independently, failures dropped) or to a
//! bitmask (the OR of every recognised token).
//!
//! Scalars follow the permissive conventions of the configuration format:
//!
//! - [`parse_c_int`]: C `atoi` semantics, never fails
//! - [`parse_u32`]: whole-token unsigned decimal
//! - [`parse_bool`]: `1`/`true` and `0`/`false`, case-insensitive

/// Separator between tokens of a list or mask value.
pub const TOKEN_SEPARATOR: char = '|';

/// A static table mapping configuration token names to numeric values.
#[derive(Debug, Clone, Copy)]
pub struct TokenTable {
    entries: &'static [(&'static str, u32)],
}

impl TokenTable {
    /// Wrap a static `(name, value)` table.
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        Self { entries }
    }

    /// Look up a single token. Leading/trailing whitespace is ignored.
    pub fn value_of(&self, token: &str) -> Option<u32> {
        let token = token.trim();
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, value)| value)
    }

    /// First name registered for `value`.
    pub fn name_of(&self, value: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, v)| v == value)
            .map(|&(name, _)| name)
    }

    /// OR together every recognised token of a `|`-delimited string.
    ///
    /// Unknown and empty tokens contribute nothing.
    pub fn mask_from_tokens(&self, value: &str) -> u32 {
        tokens(value)
            .filter_map(|token| self.value_of(token))
            .fold(0, |mask, bits| mask | bits)
    }

    /// Every entry in the table.
    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }
}

/// Iterate the non-empty tokens of a `|`-delimited string.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse an integer the way C `atoi` does.
///
/// Leading whitespace and one optional sign are accepted, then as many decimal
/// digits as follow. Anything unparsable yields 0; trailing garbage is ignored.
/// Values outside `i32` wrap like the 32-bit accumulator they model.
pub fn parse_c_int(value: &str) -> i32 {
    let bytes = value.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i32, |acc, &b| {
            acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0'))
        });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Parse a whole token as an unsigned decimal.
pub fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

/// Parse a boolean token: `1`/`true` or `0`/`false` (case-insensitive).
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: TokenTable = TokenTable::new(&[("ONE", 0x1), ("TWO", 0x2), ("FOUR", 0x4)]);

    #[test]
    fn value_of_trims_and_matches_exactly() {
        assert_eq!(TABLE.value_of("ONE"), Some(1));
        assert_eq!(TABLE.value_of("  TWO "), Some(2));
        assert_eq!(TABLE.value_of("one"), None);
        assert_eq!(TABLE.value_of(""), None);
    }

    #[test]
    fn name_of_reverse_lookup() {
        assert_eq!(TABLE.name_of(4), Some("FOUR"));
        assert_eq!(TABLE.name_of(8), None);
    }

    #[test]
    fn mask_ignores_unknown_and_empty_tokens() {
        assert_eq!(TABLE.mask_from_tokens("ONE|FOUR"), 0x5);
        assert_eq!(TABLE.mask_from_tokens("ONE||BOGUS|TWO|"), 0x3);
        assert_eq!(TABLE.mask_from_tokens("BOGUS"), 0);
        assert_eq!(TABLE.mask_from_tokens(""), 0);
    }

    #[test]
    fn tokens_skip_empty_segments() {
        let parts: Vec<_> = tokens("A||B|").collect();
        assert_eq!(parts, vec!["A", "B"]);
    }

    #[test]
    fn c_int_matches_atoi() {
        assert_eq!(parse_c_int("42"), 42);
        assert_eq!(parse_c_int("  -300"), -300);
        assert_eq!(parse_c_int("+7"), 7);
        assert_eq!(parse_c_int("12abc"), 12);
        assert_eq!(parse_c_int("abc"), 0);
        assert_eq!(parse_c_int(""), 0);
        assert_eq!(parse_c_int("-"), 0);
    }

    #[test]
    fn u32_rejects_garbage() {
        assert_eq!(parse_u32("48000"), Some(48000));
        assert_eq!(parse_u32(" 44100 "), Some(44100));
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32("48k"), None);
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
