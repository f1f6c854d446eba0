//! CSRF token lookup and request headers for programmatic requests

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::{CoreError, CoreResult};

/// Header carrying the token
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Cookie the token is issued in
pub const CSRF_COOKIE: &str = "csrftoken";
/// Meta tag name the token may be rendered into
pub const CSRF_META_NAME: &str = "csrf-token";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Extract the CSRF token from a `Cookie` header string (`a=1; csrftoken=xyz`)
#[must_use]
pub fn token_from_cookie(cookie_header: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_string())
}

/// Pick the token: the meta tag wins when present, even if empty, else the cookie.
#[must_use]
pub fn resolve_token(meta: Option<&str>, cookie_header: Option<&str>) -> Option<String> {
    match meta {
        Some(token) => Some(token.to_string()),
        None => cookie_header.and_then(token_from_cookie),
    }
}

/// Headers to attach to a programmatic request.
///
/// A missing or empty token yields an empty map.
pub fn csrf_headers(token: Option<&str>) -> CoreResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        log::debug!("No CSRF token available, sending request without it");
        return Ok(headers);
    };

    let value =
        HeaderValue::from_str(token).map_err(|e| CoreError::InvalidHeader(e.to_string()))?;
    headers.insert(HeaderName::from_static("x-csrftoken"), value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_token_is_found_among_other_cookies() {
        assert_eq!(
            token_from_cookie("sessionid=abc; csrftoken=tok123; theme=dark"),
            Some("tok123".to_string())
        );
        assert_eq!(token_from_cookie("sessionid=abc"), None);
        assert_eq!(token_from_cookie(""), None);
    }

    #[test]
    fn meta_tag_takes_precedence_over_cookie() {
        assert_eq!(
            resolve_token(Some("meta"), Some("csrftoken=cookie")),
            Some("meta".to_string())
        );
        assert_eq!(
            resolve_token(None, Some("csrftoken=cookie")),
            Some("cookie".to_string())
        );
        assert_eq!(resolve_token(Some(""), Some("csrftoken=cookie")), Some(String::new()));
        assert_eq!(resolve_token(None, None), None);
    }

    #[test]
    fn headers_carry_token_and_form_content_type() {
        let headers = csrf_headers(Some("tok123")).unwrap();
        assert_eq!(headers.get(CSRF_HEADER).unwrap(), "tok123");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), FORM_CONTENT_TYPE);
    }

    #[test]
    fn empty_token_sends_no_headers() {
        assert!(csrf_headers(Some("")).unwrap().is_empty());
        assert!(csrf_headers(None).unwrap().is_empty());
    }

    #[test]
    fn control_characters_are_rejected() {
        assert!(matches!(
            csrf_headers(Some("bad\ntoken")),
            Err(CoreError::InvalidHeader(_))
        ));
    }
}
