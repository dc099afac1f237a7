use url::form_urlencoded;

const SLUG_KEY: &str = "content";

/// Extract the content slug from a feed item id.
///
/// Ids carry the slug in a query fragment, e.g.
/// `https://cdn.example.com/feed.json?content=the-project`. The part after
/// the first `?` (up to any `#`) is parsed as a form-urlencoded query; input
/// without `?` is parsed as a bare query. Returns `""` when there is no
/// `content` key.
pub fn decode_slug(encoded_id: &str) -> String {
    let query = match encoded_id.split_once('?') {
        Some((_, query)) => query,
        None => encoded_id,
    };
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SLUG_KEY)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_slug() {
        assert_eq!(decode_slug("https://x/y?content=abc"), "abc");
        assert_eq!(decode_slug("https://x/y"), "");
        assert_eq!(decode_slug(""), "");
    }

    #[test]
    fn test_decode_slug_among_other_params() {
        assert_eq!(
            decode_slug("https://x/feed.json?public_key=k1&content=the-project&lang=it"),
            "the-project"
        );
        assert_eq!(decode_slug("content=bare"), "bare");
        assert_eq!(decode_slug("https://x/y?content=abc#section"), "abc");
    }

    #[test]
    fn test_decode_slug_percent_decoding() {
        assert_eq!(decode_slug("https://x/y?content=a%20b+c"), "a b c");
    }

    #[test]
    fn test_decode_slug_malformed_degrades_to_empty() {
        assert_eq!(decode_slug("?"), "");
        assert_eq!(decode_slug("https://x/y?contents=abc"), "");
        assert_eq!(decode_slug("https://x/y?content"), "");
    }
}
