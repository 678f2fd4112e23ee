mod golden;
mod ordering;

use anyhow::Result;
use bpsign_byteplus::{Credential, RequestSigner};
use bpsign_core::time::parse_iso8601;
use http::request::Parts;

pub const CREATE_CLUSTER_BODY: &[u8] = br#"{"Name":"cluster-name"}"#;

/// Initialize test environment with a signer pinned to 2024-01-01.
pub fn init_signing_test() -> Result<RequestSigner> {
    let _ = env_logger::builder().is_test(true).try_init();

    Ok(RequestSigner::new("vke", "ap-southeast-1").with_time(parse_iso8601("20240101T000000Z")?))
}

pub fn test_credential() -> Credential {
    Credential::new("AKTEST", "testsecret")
}

/// Build a POST request against the OpenAPI endpoint.
pub fn openapi_request(query: &str, headers: &[(&str, &str)]) -> Result<Parts> {
    let mut builder = http::Request::post(format!("https://open.volcengineapi.com/?{query}"));
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }

    Ok(builder.body(())?.into_parts().0)
}
