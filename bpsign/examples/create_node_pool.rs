use std::env;

use anyhow::Result;
use bpsign::presets::Environment;
use bpsign::{Client, Config};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let cluster_id = env::var("BYTEPLUS_CLUSTER_ID")?;
    let subnet = env::var("BYTEPLUS_SUBNET_ID").unwrap_or_else(|_| "subnet".to_string());
    let environment: Environment = env::var("BYTEPLUS_ENVIRONMENT")
        .map(|v| v.parse())
        .unwrap_or(Ok(Environment::Dev))?;
    let preset = environment.preset();

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let resp = client
        .send::<_, Value>(
            "CreateNodePool",
            &json!({
                "ClusterId": cluster_id,
                "Name": format!("node-{environment}"),
                "NodeConfig": {
                    "InstanceTypeIds": [preset.instance_type],
                    "NamePrefix": format!("bp-{environment}"),
                    "SubnetIds": [subnet],
                    "SystemVolume": {
                        "Type": preset.volume_type,
                        "Size": preset.system_volume_size
                    },
                    "DataVolumes": [{
                        "Type": preset.volume_type,
                        "Size": preset.data_volume_size
                    }],
                    "InstanceChargeType": "PostPaid"
                },
                "AutoScaling": {
                    "Enabled": true,
                    "DesiredReplicas": preset.node_count.desired,
                    "MinReplicas": preset.node_count.min,
                    "MaxReplicas": preset.node_count.max
                }
            }),
        )
        .await?;
    println!("{:#}", resp.result);

    Ok(())
}
