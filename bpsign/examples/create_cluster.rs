use std::env;

use anyhow::Result;
use bpsign::{Client, Config};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let subnet = env::var("BYTEPLUS_SUBNET_ID").unwrap_or_else(|_| "subnet".to_string());
    let tags = [("mode", "hybrid"), ("section", "hybrid")];

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let resp = client
        .send::<_, Value>(
            "CreateCluster",
            &json!({
                "Name": "cluster-name",
                "Description": "Main cluster",
                "DeleteProtectionEnabled": true,
                "ClusterConfig": {"SubnetIds": [subnet]},
                "PodsConfig": {
                    "PodNetworkMode": "VpcCniShared",
                    "VpcCniConfig": {"SubnetIds": [subnet]}
                },
                "ServicesConfig": {"ServiceCidrsv4": ["10.120.128.0/22"]},
                "Tags": tags
                    .iter()
                    .map(|(k, v)| json!({"Key": k, "Value": v}))
                    .collect::<Vec<_>>(),
                "KubernetesVersion": "v1.30.4-vke.7"
            }),
        )
        .await?;
    println!("{:#}", resp.result);

    Ok(())
}
