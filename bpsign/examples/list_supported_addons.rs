use anyhow::Result;
use bpsign::{Client, Config};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let resp = client
        .send::<_, Value>("ListSupportedAddons", &json!({}))
        .await?;

    let names: Vec<&str> = resp.result["Items"]
        .as_array()
        .map(|items| items.iter().filter_map(|v| v["Name"].as_str()).collect())
        .unwrap_or_default();
    println!("request id: {}", resp.response_metadata.request_id);
    println!("supported addons: {names:?}");

    Ok(())
}
