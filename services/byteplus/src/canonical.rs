// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Canonical request construction.
//!
//! ```text
//! METHOD\n
//! /path\n
//! canonical query string\n
//! canonical headers\n
//! \n
//! signed headers\n
//! body hash
//! ```

use std::collections::BTreeMap;
use std::fmt::Write;

use bpsign_core::hash::hex_sha256;
use bpsign_core::{Error, Result, SigningRequest};
use http::{HeaderMap, HeaderValue};
use percent_encoding::utf8_percent_encode;

use crate::constants::{BYTEPLUS_QUERY_ENCODE_SET, UNSIGNABLE_HEADERS, X_CONTENT_SHA256};

/// Percent-encode a query key or value.
pub fn uri_escape(s: &str) -> String {
    utf8_percent_encode(s, &BYTEPLUS_QUERY_ENCODE_SET).to_string()
}

/// Build the canonical query string.
///
/// Keys are emitted in ascending order and repeated keys have their escaped
/// values sorted, so the output doesn't depend on insertion order.
pub fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (k, v) in query {
        if k.is_empty() {
            continue;
        }
        grouped.entry(k.as_str()).or_default().push(uri_escape(v));
    }

    let mut s = String::with_capacity(64);
    for (key, mut values) in grouped {
        let key = uri_escape(key);
        values.sort_unstable();
        for v in values {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&key);
            s.push('=');
            s.push_str(&v);
        }
    }

    s
}

/// Returns true if the (lower-cased) header name takes part in the signature.
#[inline]
pub fn is_signable_header(name: &str) -> bool {
    !UNSIGNABLE_HEADERS.contains(&name)
}

/// Collapse whitespace runs into a single space and trim both ends.
pub fn canonical_header_value(value: &str) -> String {
    value.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collect the signable headers as sorted `(name, value)` pairs.
///
/// Repeated headers are joined by `,`.
pub fn signable_headers(headers: &HeaderMap) -> Result<Vec<(&str, String)>> {
    let mut signable = Vec::with_capacity(headers.keys_len());
    for name in headers.keys() {
        let name = name.as_str();
        if !is_signable_header(name) {
            continue;
        }

        let mut values = Vec::new();
        for value in headers.get_all(name) {
            let value = value.to_str().map_err(|e| {
                Error::invalid_header_value(format!("header {name} contains invalid value"))
                    .with_source(e)
            })?;
            values.push(canonical_header_value(value));
        }
        signable.push((name, values.join(",")));
    }
    signable.sort_unstable();

    Ok(signable)
}

/// Build the `;` joined list of signed header names.
pub fn signed_headers(headers: &HeaderMap) -> String {
    let mut names = headers
        .keys()
        .map(|k| k.as_str())
        .filter(|k| is_signable_header(k))
        .collect::<Vec<_>>();
    names.sort_unstable();

    names.join(";")
}

/// Make sure the request carries `X-Content-Sha256` and return its value.
///
/// A caller supplied value is reused verbatim and `hash` is never called.
/// Otherwise `hash` runs exactly once over the body (or over the empty
/// payload when there's no body).
pub fn ensure_content_sha256(
    headers: &mut HeaderMap,
    body: Option<&[u8]>,
    hash: impl FnOnce(&[u8]) -> String,
) -> Result<String> {
    if let Some(v) = headers.get(X_CONTENT_SHA256) {
        return Ok(v.to_str()?.to_string());
    }

    let digest = hash(body.unwrap_or_default());
    headers.insert(X_CONTENT_SHA256, HeaderValue::from_str(&digest)?);
    Ok(digest)
}

/// Build the canonical request string.
///
/// The body hash is taken from `X-Content-Sha256` when present, otherwise
/// it's computed from `body`.
pub fn canonical_request_string(req: &SigningRequest, body: Option<&[u8]>) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method.as_str().to_ascii_uppercase())?;
    writeln!(f, "{}", req.path_or_root())?;
    writeln!(f, "{}", canonical_query_string(&req.query))?;
    let canonical_headers = signable_headers(&req.headers)?
        .into_iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>();
    // The header block is always followed by an empty line.
    writeln!(f, "{}", canonical_headers.join("\n"))?;
    writeln!(f)?;
    writeln!(f, "{}", signed_headers(&req.headers))?;
    match req.headers.get(X_CONTENT_SHA256) {
        Some(v) => write!(f, "{}", v.to_str()?)?,
        None => write!(f, "{}", hex_sha256(body.unwrap_or_default()))?,
    }

    Ok(f)
}
