//! Header and form encoding helpers.
//!
//! archive.org carries arbitrary text in `x-archive-meta*` headers as
//! `uri(<percent-escaped value>)`. The service does not turn `+` back into a
//! space, so values are escaped with the RFC 3986 unreserved set: spaces become
//! `%20` and a literal `+` becomes `%2B`.

/// Wrap `value` in the `uri(...)` header convention.
pub fn uri_encode(value: &str) -> String {
    format!("uri({})", urlencoding::encode(value))
}

/// Encode `application/x-www-form-urlencoded` pairs, preserving their order.
pub fn form_encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri_decode(encoded: &str) -> String {
        let inner = encoded
            .strip_prefix("uri(")
            .and_then(|s| s.strip_suffix(')'))
            .expect("value should be wrapped in uri(...)");
        urlencoding::decode(inner)
            .expect("escaped value should be valid UTF-8")
            .into_owned()
    }

    #[test]
    fn uri_encode_wraps_value() {
        assert_eq!(uri_encode("value1"), "uri(value1)");
    }

    #[test]
    fn uri_encode_never_uses_plus_for_space() {
        let encoded = uri_encode("this is the title");
        assert_eq!(encoded, "uri(this%20is%20the%20title)");
        assert!(!encoded.contains('+'));
    }

    #[test]
    fn uri_encode_escapes_reserved_characters() {
        assert_eq!(
            uri_encode("http://creativecommons.org/publicdomain/mark/1.0/"),
            "uri(http%3A%2F%2Fcreativecommons.org%2Fpublicdomain%2Fmark%2F1.0%2F)"
        );
        assert_eq!(uri_encode("a+b"), "uri(a%2Bb)");
    }

    #[test]
    fn uri_encode_round_trips_printable_ascii() {
        let printable: String = (0x20u8..0x7f).map(char::from).collect();
        assert_eq!(uri_decode(&uri_encode(&printable)), printable);
    }

    #[test]
    fn uri_encode_round_trips_multiline_and_unicode() {
        let text = "This is my description\n\tit has many\n\n\tlines. Ünïcödé ✓";
        assert_eq!(uri_decode(&uri_encode(text)), text);
    }

    #[test]
    fn form_encode_keeps_order_and_escapes() {
        let body = form_encode([
            ("capture_outlinks", "on"),
            ("url", "https://reddit.com"),
        ]);
        assert_eq!(body, "capture_outlinks=on&url=https%3A%2F%2Freddit.com");
    }

    #[test]
    fn form_encode_empty() {
        assert_eq!(form_encode(std::iter::empty::<(&str, &str)>()), "");
    }
}
