use std::env;

use anyhow::Result;
use bpsign::{Client, Config};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let cluster_id = env::var("BYTEPLUS_CLUSTER_ID")?;
    let node_pool_id = env::var("BYTEPLUS_NODE_POOL_ID")?;

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let resp = client
        .send::<_, Value>(
            "DeleteNodePool",
            &json!({"ClusterId": cluster_id, "Id": node_pool_id}),
        )
        .await?;
    println!("deleted, request id: {}", resp.response_metadata.request_id);

    Ok(())
}
