//! Backend address resolution.
//!
//! Public calls concatenate a base that always has a fallback. Privileged
//! calls join against a required prefix and keep every path segment of it.

use std::env;
use thiserror::Error;
use url::Url;

pub const PUBLIC_BASE_ENV: &str = "NEXT_PUBLIC_API_BASE";
pub const PUBLIC_BASE_FALLBACK_ENV: &str = "API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_PREFIX_ENV: &str = "API_PREFIX";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required base-path environment value `{0}`")]
    MissingBasePath(&'static str),
    #[error("invalid base-path `{value}`: {source}")]
    InvalidBasePath {
        value: String,
        source: url::ParseError,
    },
    #[error("cannot resolve `{path}` against `{base}`: {source}")]
    InvalidPath {
        base: String,
        path: String,
        source: url::ParseError,
    },
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// The public base, read from the environment on every call.
pub fn public_base() -> String {
    non_empty_var(PUBLIC_BASE_ENV)
        .or_else(|| non_empty_var(PUBLIC_BASE_FALLBACK_ENV))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Strips one trailing `/` from `base` and makes sure `path` starts with one.
/// Nothing else is normalized.
pub fn join_public(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

pub fn public_url(path: &str) -> String {
    join_public(&public_base(), path)
}

/// Resolves `path` under `prefix`, keeping the prefix's sub-path.
///
/// The prefix gets a trailing `/` so relative resolution does not drop its
/// last segment, and every leading `/` is stripped from `path` so it cannot
/// escape to the origin root.
pub fn resolve_backend(prefix: &str, path: &str) -> Result<Url, ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::MissingBasePath(API_PREFIX_ENV));
    }

    let normalized = if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{prefix}/")
    };
    let base = Url::parse(&normalized).map_err(|source| ConfigError::InvalidBasePath {
        value: prefix.to_string(),
        source,
    })?;

    let stripped = path.trim_start_matches('/');
    base.join(stripped).map_err(|source| ConfigError::InvalidPath {
        base: normalized,
        path: path.to_string(),
        source,
    })
}

fn api_prefix() -> Result<String, ConfigError> {
    non_empty_var(API_PREFIX_ENV).ok_or(ConfigError::MissingBasePath(API_PREFIX_ENV))
}

pub fn backend_url(path: &str) -> Result<Url, ConfigError> {
    let prefix = api_prefix()?;
    let url = resolve_backend(&prefix, path)?;
    tracing::trace!(%url, "resolved backend url");
    Ok(url)
}

pub fn backend_url_str(path: &str) -> Result<String, ConfigError> {
    backend_url(path).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_public_normalizes_leading_slash() {
        let base = "http://localhost:8000";
        assert_eq!(join_public(base, "/foo"), "http://localhost:8000/foo");
        assert_eq!(join_public(base, "foo"), "http://localhost:8000/foo");
    }

    #[test]
    fn test_join_public_strips_only_one_trailing_slash() {
        assert_eq!(
            join_public("http://localhost:8000/", "/foo"),
            "http://localhost:8000/foo"
        );
        assert_eq!(
            join_public("http://localhost:8000//", "foo"),
            "http://localhost:8000//foo"
        );
        assert_eq!(
            join_public("http://localhost:8000", "//a//b"),
            "http://localhost:8000//a//b"
        );
    }

    #[test]
    fn test_public_url_env_precedence() {
        temp_env::with_vars(
            [
                (PUBLIC_BASE_ENV, Some("https://public.tld/")),
                (PUBLIC_BASE_FALLBACK_ENV, Some("https://fallback.tld")),
            ],
            || assert_eq!(public_url("chat"), "https://public.tld/chat"),
        );
        temp_env::with_vars(
            [
                (PUBLIC_BASE_ENV, Some("")),
                (PUBLIC_BASE_FALLBACK_ENV, Some("https://fallback.tld")),
            ],
            || assert_eq!(public_url("/chat"), "https://fallback.tld/chat"),
        );
        temp_env::with_vars(
            [
                (PUBLIC_BASE_ENV, None::<&str>),
                (PUBLIC_BASE_FALLBACK_ENV, None),
            ],
            || assert_eq!(public_url("chat"), "http://localhost:8000/chat"),
        );
    }

    #[test]
    fn test_resolve_backend_keeps_sub_path() {
        for path in ["x", "/x", "//x", "///x"] {
            let url = resolve_backend("http://host/api/v2", path).unwrap();
            assert_eq!(url.as_str(), "http://host/api/v2/x");
        }
        let url = resolve_backend("http://host/api/v2/", "x").unwrap();
        assert_eq!(url.as_str(), "http://host/api/v2/x");
    }

    #[test]
    fn test_resolve_backend_empty_path() {
        let url = resolve_backend("http://host/api/v2", "").unwrap();
        assert_eq!(url.as_str(), "http://host/api/v2/");
    }

    #[test]
    fn test_resolve_backend_keeps_query() {
        let mut url = resolve_backend("http://host/api", "/items?page=2").unwrap();
        assert_eq!(url.query(), Some("page=2"));
        url.query_pairs_mut().append_pair("size", "10");
        assert_eq!(url.as_str(), "http://host/api/items?page=2&size=10");
    }

    #[test]
    fn test_resolve_backend_errors() {
        assert!(matches!(
            resolve_backend("", "x"),
            Err(ConfigError::MissingBasePath(API_PREFIX_ENV))
        ));
        assert!(matches!(
            resolve_backend("/api/v2", "x"),
            Err(ConfigError::InvalidBasePath { .. })
        ));
    }

    #[test]
    fn test_backend_url_requires_prefix() {
        temp_env::with_var_unset(API_PREFIX_ENV, || {
            let err = backend_url_str("x").unwrap_err();
            assert!(matches!(err, ConfigError::MissingBasePath(_)));
            assert!(err
                .to_string()
                .contains("missing required base-path environment value"));
            assert!(backend_url("x").is_err());
        });
        temp_env::with_var(API_PREFIX_ENV, Some(""), || {
            assert!(matches!(
                backend_url("x"),
                Err(ConfigError::MissingBasePath(_))
            ));
        });
    }

    #[test]
    fn test_backend_url_is_idempotent() {
        temp_env::with_var(API_PREFIX_ENV, Some("http://host/api/v2"), || {
            let first = backend_url_str("/x").unwrap();
            let second = backend_url_str("/x").unwrap();
            assert_eq!(first, "http://host/api/v2/x");
            assert_eq!(first, second);
            assert_eq!(backend_url("x").unwrap().path(), "/api/v2/x");
        });
    }
}
