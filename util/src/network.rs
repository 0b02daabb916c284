//! Endpoint URI validation.
//!
//! Accepts `http`/`https` URIs of the shape `scheme://host[:port][/]` and
//! returns the canonical scheme. The host is either a dotted IPv4-looking
//! address or a hostname; single-label hosts such as `http://redhat` are
//! accepted on purpose. Paths, queries and userinfo are rejected.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// Scheme and host match ASCII only (`-u`), otherwise case folding lets
// `\u{17F}` stand in for `s`. Port text is captured loosely and checked
// numerically afterwards; a regex cannot bound a digit run to 1..=65535.
// The port capture stops at userinfo, query and fragment delimiters so those
// fall through as shape mismatches.
static URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i-u:(https?)://([a-z0-9_-]+(?:\.[a-z0-9_-]+)*))(?::([^/@?#\s]*))?/?$")
        .expect("uri pattern is valid")
});

/// URI scheme accepted by [`uri`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Port implied when the URI carries none.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(Scheme::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Scheme::Https)
        } else {
            Err(UriError::InvalidScheme(s.to_string()))
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("invalid uri scheme or format: {0:?}")]
    InvalidScheme(String),
    #[error("invalid uri port: {0:?} (expected 1-65535)")]
    InvalidPort(String),
}

/// Host and effective port of a validated URI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    /// Explicit port, or the scheme's default when the URI carries none.
    pub port: u16,
}

/// Validate `input` as an `http`/`https` URI and return its scheme.
///
/// A missing or unknown scheme, or any shape mismatch, yields
/// [`UriError::InvalidScheme`]. A present port that is not a digit string in
/// `1..=65535` yields [`UriError::InvalidPort`].
pub fn uri(input: &str) -> Result<Scheme, UriError> {
    endpoint(input).map(|ep| ep.scheme)
}

/// Same rules as [`uri`], keeping the host and effective port.
pub fn endpoint(input: &str) -> Result<Endpoint, UriError> {
    if !has_http_prefix(input) {
        return Err(UriError::InvalidScheme(input.to_string()));
    }

    let caps = URI_REGEX
        .captures(input)
        .ok_or_else(|| UriError::InvalidScheme(input.to_string()))?;

    let scheme: Scheme = caps.get(1).map_or("", |m| m.as_str()).parse()?;
    let port = match caps.get(3) {
        Some(port) => parse_port(port.as_str())?,
        None => scheme.default_port(),
    };

    Ok(Endpoint {
        scheme,
        host: caps.get(2).map_or("", |m| m.as_str()).to_ascii_lowercase(),
        port,
    })
}

fn has_http_prefix(input: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Parse port text into a non-zero `u16`. Digits only: `u16::from_str` would
/// also accept a leading `+`.
fn parse_port(text: &str) -> Result<u16, UriError> {
    let invalid = || UriError::InvalidPort(text.to_string());
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(port) => Ok(port),
    }
}
