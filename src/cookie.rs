use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

const EXPIRED_ACCESS_TOKEN: &str =
    "access_token=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax";

/// Tells the client to drop its access token cookie.
pub fn clear_access_token_cookie(headers: &mut HeaderMap) {
    headers.append(SET_COOKIE, HeaderValue::from_static(EXPIRED_ACCESS_TOKEN));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_access_token_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, HeaderValue::from_static("other=1; Path=/"));
        clear_access_token_cookie(&mut headers);

        let cookies: Vec<_> = headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[1].starts_with(&format!("{ACCESS_TOKEN_COOKIE}=;")));
        assert!(cookies[1].contains("Max-Age=0"));
        assert!(cookies[1].contains("Path=/"));
    }
}
