use super::{init_signing_test, openapi_request, test_credential, CREATE_CLUSTER_BODY};
use anyhow::Result;
use bpsign_byteplus::canonical::canonical_query_string;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("Action=CreateCluster&Version=2022-05-12", "Version=2022-05-12&Action=CreateCluster"; "swapped params")]
#[test_case("Action=X&Version=1&tags=b&tags=a", "tags=a&Version=1&tags=b&Action=X"; "repeated key")]
#[test_case("Action=X&Version=1&Name=a%20b", "Name=a+b&Version=1&Action=X"; "space encodings")]
fn test_query_order_independence(left: &str, right: &str) -> Result<()> {
    let signer = init_signing_test()?;

    let mut a = openapi_request(left, &[])?;
    let mut b = openapi_request(right, &[])?;

    assert_eq!(
        signer.sign(&mut a, Some(CREATE_CLUSTER_BODY), &test_credential())?,
        signer.sign(&mut b, Some(CREATE_CLUSTER_BODY), &test_credential())?
    );
    Ok(())
}

#[test]
fn test_header_order_and_whitespace_independence() -> Result<()> {
    let signer = init_signing_test()?;

    let mut a = openapi_request(
        "Action=CreateCluster&Version=2022-05-12",
        &[("X-Top-Tag", "a  b"), ("x-top-env", "prod")],
    )?;
    let mut b = openapi_request(
        "Action=CreateCluster&Version=2022-05-12",
        &[("x-top-env", " prod "), ("x-top-tag", "a b")],
    )?;

    let auth_a = signer.sign(&mut a, Some(CREATE_CLUSTER_BODY), &test_credential())?;
    let auth_b = signer.sign(&mut b, Some(CREATE_CLUSTER_BODY), &test_credential())?;

    assert_eq!(auth_a, auth_b);
    assert!(auth_a.contains("SignedHeaders=x-content-sha256;x-date;x-top-env;x-top-tag,"));
    Ok(())
}

#[test]
fn test_unsignable_headers_do_not_change_signature() -> Result<()> {
    let signer = init_signing_test()?;

    let mut a = openapi_request("Action=CreateCluster&Version=2022-05-12", &[])?;
    let mut b = openapi_request(
        "Action=CreateCluster&Version=2022-05-12",
        &[
            ("content-type", "application/json"),
            ("user-agent", "bpsign-test"),
            ("content-length", "23"),
        ],
    )?;

    assert_eq!(
        signer.sign(&mut a, Some(CREATE_CLUSTER_BODY), &test_credential())?,
        signer.sign(&mut b, Some(CREATE_CLUSTER_BODY), &test_credential())?
    );
    Ok(())
}

#[test]
fn test_array_values_are_sorted() {
    let query = vec![
        ("tags".to_string(), "b".to_string()),
        ("tags".to_string(), "a".to_string()),
    ];

    assert_eq!(canonical_query_string(&query), "tags=a&tags=b");
}
