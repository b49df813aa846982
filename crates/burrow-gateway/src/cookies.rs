use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use cookie::{Cookie, SameSite};
use jiff::SignedDuration;

pub const SESSION_COOKIE: &str = "session_token";

/// Extracts the session token from the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty())
}

fn base(value: String, max_age: cookie::time::Duration) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(max_age);
    cookie
}

pub fn session_cookie(token: &str, ttl: SignedDuration) -> Cookie<'static> {
    base(
        token.to_owned(),
        cookie::time::Duration::seconds(ttl.as_secs()),
    )
}

/// A cookie that makes the browser drop its session token.
pub fn cleared_session_cookie() -> Cookie<'static> {
    base(String::new(), cookie::time::Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(values: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(COOKIE, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn finds_token_among_other_cookies() {
        let headers = headers(&["theme=dark; session_token=abc-123_x; lang=en"]);
        assert_eq!(session_token(&headers).as_deref(), Some("abc-123_x"));
    }

    #[test]
    fn finds_token_in_second_header() {
        let headers = headers(&["theme=dark", "session_token=tok"]);
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn missing_or_empty_token() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        assert_eq!(session_token(&headers(&["theme=dark"])), None);
        assert_eq!(session_token(&headers(&["session_token="])), None);
    }

    #[test]
    fn session_cookie_attributes() {
        let rendered = session_cookie("tok", SignedDuration::from_mins(10)).to_string();

        assert!(rendered.starts_with("session_token=tok"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=600"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let rendered = cleared_session_cookie().to_string();

        assert!(rendered.starts_with("session_token=;"));
        assert!(rendered.contains("Max-Age=0"));
    }
}
