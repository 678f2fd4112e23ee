use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{Error, Result};

/// Characters left as-is when the query is written back into the uri.
static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signing context for request.
///
/// It's built from `http::request::Parts`, owned by exactly one in-flight
/// request and applied back once the signer is done with it.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters, percent decoded, in insertion order.
    ///
    /// Array values are stored as repeated keys.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let mut paq = if self.path.is_empty() {
                    "/".to_string()
                } else {
                    self.path
                };

                for (i, (k, v)) in self.query.iter().enumerate() {
                    paq.push(if i == 0 { '?' } else { '&' });
                    paq.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
                    paq.push('=');
                    paq.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
                }

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the path, falling back to `/` when it's empty.
    #[inline]
    pub fn path_or_root(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Extend the query list with structured parameters.
    ///
    /// - [`QueryValue::Null`] entries are dropped instead of being sent as empty strings.
    /// - [`QueryValue::Many`] entries become one pair per value.
    pub fn query_extend<K, V>(&mut self, params: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        for (key, value) in params {
            match value.into() {
                QueryValue::Null => {}
                QueryValue::One(v) => self.query.push((key.into(), v)),
                QueryValue::Many(vs) => {
                    let key = key.into();
                    self.query
                        .extend(vs.into_iter().map(|v| (key.clone(), v)));
                }
            }
        }
    }

    /// Get query value by key.
    ///
    /// Returns the first value if the key is repeated.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A query parameter value before it's flattened into the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// No value, the key is dropped.
    Null,
    /// A single value.
    One(String),
    /// An ordered sequence of values, sent as repeated keys.
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::One(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::One(v)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        QueryValue::Many(v)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(v: Vec<&str>) -> Self {
        QueryValue::Many(v.into_iter().map(String::from).collect())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(QueryValue::Null, Into::into)
    }
}
