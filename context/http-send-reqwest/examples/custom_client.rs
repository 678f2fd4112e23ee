use anyhow::Result;
use bpsign_core::Context;
use bpsign_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Bound every OpenAPI call; bpsign itself never times out.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("bpsign-example/0.1")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // Unsigned on purpose: the endpoint answers with an error envelope.
    let req = http::Request::post(
        "https://open.volcengineapi.com/?Action=ListSupportedAddons&Version=2022-05-12",
    )
    .header("content-type", "application/json")
    .body(Bytes::from_static(b"{}"))?;

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response body: {}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
