use reqwest::Url;

/// One-time code from an auth redirect URL (`...?code=abc`).
///
/// Returns `None` for unparsable URLs and for a missing or blank code.
pub fn extract_code(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.trim().to_string())
        .filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_code() {
        assert_eq!(
            extract_code("http://localhost:3000/auth/callback?code=abc-123").as_deref(),
            Some("abc-123")
        );
        assert_eq!(
            extract_code("https://movies.test/auth/callback?next=%2F&code=a%2Bb").as_deref(),
            Some("a+b")
        );
    }

    #[test]
    fn test_missing_or_blank_code() {
        assert_eq!(extract_code("http://localhost:3000/auth/callback"), None);
        assert_eq!(extract_code("http://localhost:3000/auth/callback?code="), None);
        assert_eq!(extract_code("http://localhost:3000/auth/callback?error=access_denied"), None);
    }

    #[test]
    fn test_unparsable_url() {
        assert_eq!(extract_code("not a url ?code=abc"), None);
        assert_eq!(extract_code(""), None);
    }

    #[test]
    fn test_fragment_is_not_query() {
        assert_eq!(extract_code("http://localhost:3000/auth/callback#code=abc"), None);
    }
}
