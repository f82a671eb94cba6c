//! Query-string parsing helpers.

/// Split a request URL into path and raw query string.
pub fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Extract one percent-decoded query parameter. Returns the first match;
/// a key without `=` yields an empty value.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == name {
            return match urlencoding::decode(value) {
                Ok(decoded) => Some(decoded.into_owned()),
                Err(_) => Some(value.to_string()),
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_url_without_query() {
        assert_eq!(split_url("/api/health"), ("/api/health", ""));
    }

    #[test]
    fn split_url_with_query() {
        assert_eq!(
            split_url("/api/compatibility?user=aries&other=leo"),
            ("/api/compatibility", "user=aries&other=leo")
        );
    }

    #[test]
    fn query_param_finds_first_match() {
        let query = "user=aries&other=leo&user=taurus";
        assert_eq!(query_param(query, "user").as_deref(), Some("aries"));
        assert_eq!(query_param(query, "other").as_deref(), Some("leo"));
    }

    #[test]
    fn query_param_decodes_percent_encoding() {
        assert_eq!(
            query_param("user=%20LIBRA%20", "user").as_deref(),
            Some(" LIBRA ")
        );
    }

    #[test]
    fn query_param_missing_is_none() {
        assert_eq!(query_param("user=aries", "other"), None);
        assert_eq!(query_param("", "user"), None);
    }

    #[test]
    fn bare_key_yields_empty_value() {
        assert_eq!(query_param("flag&user=aries", "flag").as_deref(), Some(""));
    }
}
