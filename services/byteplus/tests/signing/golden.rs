use super::{init_signing_test, openapi_request, test_credential, CREATE_CLUSTER_BODY};
use anyhow::Result;
use bpsign_byteplus::{X_CONTENT_SHA256, X_DATE, X_SECURITY_TOKEN};
use bpsign_core::hash::EMPTY_SHA256;
use pretty_assertions::assert_eq;

#[test]
fn test_create_cluster_authorization() -> Result<()> {
    let signer = init_signing_test()?;
    let mut req = openapi_request(
        "Action=CreateCluster&Version=2022-05-12",
        &[("content-type", "application/json")],
    )?;

    let auth = signer.sign(&mut req, Some(CREATE_CLUSTER_BODY), &test_credential())?;

    assert_eq!(
        auth,
        "HMAC-SHA256 Credential=AKTEST/20240101/ap-southeast-1/vke/request, \
         SignedHeaders=x-content-sha256;x-date, \
         Signature=507a4f6b1f2db676cc91755d85f6b5be849182a8248827734b6dbe9bbb662fcb"
    );
    assert_eq!(req.headers[X_DATE], "20240101T000000Z");
    assert_eq!(
        req.headers[X_CONTENT_SHA256],
        "972a64369b9d9c63503e2274192490cc0e64cf0680af5818979d836e308b776d"
    );
    Ok(())
}

#[test]
fn test_create_cluster_with_session_token() -> Result<()> {
    let signer = init_signing_test()?;
    let mut req = openapi_request(
        "Action=CreateCluster&Version=2022-05-12",
        &[("content-type", "application/json")],
    )?;

    let cred = test_credential().with_session_token("sts-token");
    let auth = signer.sign(&mut req, Some(CREATE_CLUSTER_BODY), &cred)?;

    assert_eq!(
        auth,
        "HMAC-SHA256 Credential=AKTEST/20240101/ap-southeast-1/vke/request, \
         SignedHeaders=x-content-sha256;x-date;x-security-token, \
         Signature=3b8f132a66a577d64b06938dbda3485520fed6adf852c88e9fea2a1ec14044b5"
    );
    assert_eq!(req.headers[X_SECURITY_TOKEN], "sts-token");
    assert!(req.headers[X_SECURITY_TOKEN].is_sensitive());
    Ok(())
}

#[test]
fn test_empty_body_still_hashed() -> Result<()> {
    let signer = init_signing_test()?;
    let mut req = openapi_request("Action=ListSupportedAddons&Version=2022-05-12", &[])?;

    let auth = signer.sign(&mut req, None, &test_credential())?;

    assert_eq!(req.headers[X_CONTENT_SHA256], EMPTY_SHA256);
    assert_eq!(
        auth,
        "HMAC-SHA256 Credential=AKTEST/20240101/ap-southeast-1/vke/request, \
         SignedHeaders=x-content-sha256;x-date, \
         Signature=4dd6f425f7a81fbe19fc10bdc02c087b2be26d0cdc644cac33ca337bd1ee90ca"
    );
    Ok(())
}

#[test]
fn test_signing_is_deterministic() -> Result<()> {
    let signer = init_signing_test()?;

    let mut first = openapi_request("Action=CreateCluster&Version=2022-05-12", &[])?;
    let mut second = openapi_request("Action=CreateCluster&Version=2022-05-12", &[])?;

    let a = signer.sign(&mut first, Some(CREATE_CLUSTER_BODY), &test_credential())?;
    let b = signer.sign(&mut second, Some(CREATE_CLUSTER_BODY), &test_credential())?;
    assert_eq!(a, b);

    // Signing twice overwrites the date and reuses the stored body hash.
    let c = signer.sign(&mut first, Some(CREATE_CLUSTER_BODY), &test_credential())?;
    assert_eq!(a, c);
    Ok(())
}
