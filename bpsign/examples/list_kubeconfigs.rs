use anyhow::Result;
use bpsign::{Client, Config};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let resp = client
        .send::<_, Value>("ListKubeconfigs", &json!({}))
        .await?;
    println!("{:#}", resp.result["Items"]);

    Ok(())
}
