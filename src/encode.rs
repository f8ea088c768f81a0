//! RFC 3986 percent-encoding.

use std::borrow::Cow;

use percent_encoding::utf8_percent_encode;

use crate::constants::RFC3986_ENCODE_SET;

/// Percent-encode `s` per RFC 3986.
///
/// Every byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is rendered
/// as the percent-escaped hex of its UTF-8 bytes. In particular a space
/// becomes `%20` (never `+`), `*` becomes `%2A`, and `~` stays literal.
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, &RFC3986_ENCODE_SET).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode() {
        let cases = vec![
            ("", ""),
            ("a b", "a%20b"),
            ("a*b", "a%2Ab"),
            ("a~b", "a~b"),
            ("a+b", "a%2Bb"),
            ("a-b_c.d", "a-b_c.d"),
            ("key=value&", "key%3Dvalue%26"),
            ("打印", "%E6%89%93%E5%8D%B0"),
        ];

        for (input, expected) in cases {
            assert_eq!(percent_encode(input), expected, "failed on input: {input}");
        }
    }

    #[test]
    fn test_unreserved_passes_through() {
        let unreserved = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
        assert_eq!(percent_encode(unreserved), unreserved);
    }
}
