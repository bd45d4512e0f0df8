use crate::i18n::Locale;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use std::convert::Infallible;

pub const LOCALE_COOKIE: &str = "lang";

/// Locale for the current request.
///
/// Looks at the `lang` query parameter, then the `lang` cookie, then
/// `Accept-Language`, and falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLocale(pub Locale);

fn from_query(parts: &Parts) -> Option<Locale> {
    let query = parts.uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == LOCALE_COOKIE)
        .and_then(|(_, value)| Locale::from_language_tag(&value))
}

fn from_cookie(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LOCALE_COOKIE)
        .and_then(|(_, value)| Locale::from_language_tag(value))
}

fn from_accept_language(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get(header::ACCEPT_LANGUAGE)?
        .to_str()
        .ok()?
        .split(',')
        .filter_map(|range| range.split(';').next())
        .find_map(Locale::from_language_tag)
}

#[async_trait]
impl<S> FromRequestParts<S> for UiLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = from_query(parts)
            .or_else(|| from_cookie(&parts.headers))
            .or_else(|| from_accept_language(&parts.headers))
            .unwrap_or_default();

        Ok(UiLocale(locale))
    }
}
