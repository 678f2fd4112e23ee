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

use crate::canonical::{canonical_request_string, ensure_content_sha256, signed_headers};
use crate::constants::{ALGORITHM, V4_IDENTIFIER, X_DATE, X_SECURITY_TOKEN};
use crate::Credential;
use async_trait::async_trait;
use bpsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use bpsign_core::time::{format_date, format_iso8601, now, DateTime};
use bpsign_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;

/// RequestSigner that implements the BytePlus OpenAPI HMAC-SHA256 signature.
///
/// One signer is bound to a single service and region. It holds no per-request
/// state and can be shared freely between concurrent requests.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request in place and return the `Authorization` value.
    ///
    /// The request gains `X-Date`, `X-Content-Sha256`, `Authorization` and,
    /// for temporary credentials, `X-Security-Token`. On error no
    /// `Authorization` header is written.
    pub fn sign(&self, req: &mut Parts, body: Option<&[u8]>, cred: &Credential) -> Result<String> {
        self.sign_with_hasher(req, body, cred, hex_sha256)
    }

    fn sign_with_hasher(
        &self,
        req: &mut Parts,
        body: Option<&[u8]>,
        cred: &Credential,
        hash: impl FnOnce(&[u8]) -> String,
    ) -> Result<String> {
        let mut signed_req = SigningRequest::build(req)?;
        let result = self.build_authorization(&mut signed_req, body, cred, hash);
        // Return headers and uri back whether signing succeeded or not.
        signed_req.apply(req)?;
        result
    }

    fn build_authorization(
        &self,
        req: &mut SigningRequest,
        body: Option<&[u8]>,
        cred: &Credential,
        hash: impl FnOnce(&[u8]) -> String,
    ) -> Result<String> {
        let now = self.time.unwrap_or_else(now);
        let datetime = format_iso8601(now);
        let date = format_date(now);

        req.headers
            .insert(X_DATE, HeaderValue::try_from(datetime.as_str())?);
        if let Some(token) = &cred.session_token {
            let mut value = HeaderValue::from_str(token)?;
            // Set token value sensitive to avoid leaking.
            value.set_sensitive(true);
            req.headers.insert(X_SECURITY_TOKEN, value);
        }
        ensure_content_sha256(&mut req.headers, body, hash)?;

        // Scope: "20240101/<region>/<service>/request"
        let scope = format!("{date}/{}/{}/{V4_IDENTIFIER}", self.region, self.service);
        debug!("calculated scope: {scope}");

        // Must run after the headers above are in place, they are signed too.
        let creq = canonical_request_string(req, body)?;
        debug!("calculated canonical request: {creq}");

        // StringToSign:
        //
        // HMAC-SHA256
        // 20240101T000000Z
        // 20240101/<region>/<service>/request
        // <hashed_canonical_request>
        let string_to_sign = format!(
            "{ALGORITHM}\n{datetime}\n{scope}\n{}",
            hex_sha256(creq.as_bytes())
        );
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, &date, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
            cred.access_key_id,
            signed_headers(&req.headers),
        );
        let mut value = HeaderValue::from_str(&authorization)?;
        value.set_sensitive(true);
        req.headers.insert(header::AUTHORIZATION, value);

        Ok(authorization)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no valid credential found, request can't be signed",
            ));
        };

        self.sign(req, body, cred).map(|_| ())
    }
}

/// Derive the signing key for one day, region and service.
///
/// Every step feeds the raw HMAC output into the next one:
///
/// ```text
/// kDate    = HMAC(secret,   date)
/// kRegion  = HMAC(kDate,    region)
/// kService = HMAC(kRegion,  service)
/// kSigning = HMAC(kService, "request")
/// ```
pub fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), V4_IDENTIFIER.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::X_CONTENT_SHA256;
    use bpsign_core::time::parse_iso8601;
    use bpsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    const BODY_SHA256: &str = "972a64369b9d9c63503e2274192490cc0e64cf0680af5818979d836e308b776d";

    fn signer() -> RequestSigner {
        RequestSigner::new("vke", "ap-southeast-1")
            .with_time(parse_iso8601("20240101T000000Z").expect("valid time"))
    }

    fn create_cluster() -> Parts {
        http::Request::builder()
            .method(http::Method::POST)
            .uri("https://open.volcengineapi.com/?Action=CreateCluster&Version=2022-05-12")
            .header(header::CONTENT_TYPE, "application/json")
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[test]
    fn test_signing_key_known_answer() {
        let key = generate_signing_key("testsecret", "20240101", "ap-southeast-1", "vke");
        assert_eq!(
            hex::encode(key),
            "55435f4da9352de33ba37971f434f032fefe00513dcd5ba648e05042ec0f26d2"
        );
    }

    #[test]
    fn test_sign_sets_headers() -> Result<()> {
        let mut req = create_cluster();
        let cred = Credential::new("AKTEST", "testsecret");

        let auth = signer().sign(&mut req, Some(br#"{"Name":"cluster-name"}"#.as_slice()), &cred)?;

        assert_eq!(req.headers[X_DATE], "20240101T000000Z");
        assert_eq!(req.headers[X_CONTENT_SHA256], BODY_SHA256);
        assert_eq!(req.headers[header::AUTHORIZATION], auth.as_str());
        assert!(req.headers[header::AUTHORIZATION].is_sensitive());
        assert!(req.headers.get(X_SECURITY_TOKEN).is_none());
        assert_eq!(req.headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            req.uri.to_string(),
            "https://open.volcengineapi.com/?Action=CreateCluster&Version=2022-05-12"
        );
        Ok(())
    }

    #[test]
    fn test_precomputed_hash_suppresses_hashing() -> Result<()> {
        let mut req = create_cluster();
        req.headers
            .insert(X_CONTENT_SHA256, HeaderValue::from_static(BODY_SHA256));

        let calls = Cell::new(0);
        let auth = signer().sign_with_hasher(
            &mut req,
            Some(b"not the hashed body".as_slice()),
            &Credential::new("AKTEST", "testsecret"),
            |b| {
                calls.set(calls.get() + 1);
                hex_sha256(b)
            },
        )?;

        assert_eq!(calls.get(), 0);
        assert_eq!(req.headers[X_CONTENT_SHA256], BODY_SHA256);
        assert_eq!(
            auth,
            "HMAC-SHA256 Credential=AKTEST/20240101/ap-southeast-1/vke/request, \
             SignedHeaders=x-content-sha256;x-date, \
             Signature=507a4f6b1f2db676cc91755d85f6b5be849182a8248827734b6dbe9bbb662fcb"
        );
        Ok(())
    }

    #[test]
    fn test_body_hashed_once() -> Result<()> {
        let mut req = create_cluster();
        let calls = Cell::new(0);
        signer().sign_with_hasher(
            &mut req,
            Some(b"{}".as_slice()),
            &Credential::new("AKTEST", "testsecret"),
            |b| {
                calls.set(calls.get() + 1);
                hex_sha256(b)
            },
        )?;

        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_header_aborts_without_authorization() {
        let mut req = create_cluster();
        req.headers.insert(
            "x-opaque",
            HeaderValue::from_bytes(b"caf\xc3\xa9").expect("obs-text is accepted"),
        );

        let err = signer()
            .sign(&mut req, None, &Credential::new("AKTEST", "testsecret"))
            .expect_err("must fail");

        assert_eq!(err.kind(), ErrorKind::InvalidHeaderValue);
        assert!(req.headers.get(header::AUTHORIZATION).is_none());
        assert!(req.headers.get("x-opaque").is_some());
    }

    #[tokio::test]
    async fn test_sign_request_without_credential_fails() {
        let mut req = create_cluster();
        let err = signer()
            .sign_request(&Context::new(), &mut req, None, None)
            .await
            .expect_err("must fail");

        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(req.headers.get(header::AUTHORIZATION).is_none());
        assert!(req.headers.get(X_DATE).is_none());
    }
}
