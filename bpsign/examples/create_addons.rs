use std::env;

use anyhow::Result;
use bpsign::{Client, Config};
use serde_json::{json, Value};

/// Addon config is a JSON document carried as a string.
///
/// The document is encoded once, so `Config` holds the JSON text itself
/// rather than a quoted copy of it.
fn addon(cluster_id: &str, name: &str, config: Option<Value>) -> Value {
    let mut addon = json!({"ClusterId": cluster_id, "Name": name});
    if let Some(config) = config {
        addon["Config"] = Value::String(config.to_string());
    }
    addon
}

fn resource(request: (&str, &str), limit: (&str, &str)) -> Value {
    json!({
        "Request": {"Cpu": request.0, "Memory": request.1},
        "Limit": {"Cpu": limit.0, "Memory": limit.1}
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let cluster_id = env::var("BYTEPLUS_CLUSTER_ID")?;
    let id = cluster_id.as_str();
    let subnet_id = env::var("BYTEPLUS_SUBNET_ID")?;

    let addons = vec![
        addon(id, "vpc-cni", None),
        addon(
            id,
            "core-dns",
            Some(json!({"Resource": resource(("250m", "500Mi"), ("1Gi", "2Gi"))})),
        ),
        addon(id, "cloud-controller-manager", Some(json!({}))),
        addon(
            id,
            "metrics-server",
            Some(json!({"Resource": resource(("250m", "500Mi"), ("500m", "1Gi"))})),
        ),
        addon(
            id,
            "csi-ebs",
            Some(json!({"Resource": resource(("250m", "500Mi"), ("500m", "1Gi"))})),
        ),
        addon(
            id,
            "ingress-nginx",
            Some(json!({
                "Replica": 1,
                "Resource": resource(("250m", "500Mi"), ("500m", "1Gi")),
                "PublicNetwork": {
                    "LanType": "BGP",
                    "BandWidthLimit": 100,
                    "IpVersion": "IPV4",
                    "BillingType": 3,
                    "SubnetId": subnet_id
                }
            })),
        ),
        addon(
            id,
            "cluster-autoscaler",
            Some(json!({
                "Expander": "least-waste",
                "ScaleDownEnabled": true,
                "ScaleDownUtilizationThreshold": 0.6,
                "ScaleDownGpuUtilizationThreshold": 0.2,
                "ScaleDownUnneededTime": 30,
                "ScaleDownDelayAfterAdd": 1,
                "ScaleDownDelayAfterFailure": 1,
                "MaxEmptyBulkDelete": 4
            })),
        ),
        addon(
            id,
            "prometheus-agent",
            Some(json!({
                "NodeExporterDisabled": false,
                "AutoScalingEnabled": true,
                "VmAgent": {
                    "InitShards": 1,
                    "MaxShards": 5,
                    "Requests": {"Cpu": "500m", "Memory": "500Mi"},
                    "Limit": {"Cpu": "1", "Memory": "1Gi"}
                },
                "KubeStateMetrics": {
                    "InitShards": 1,
                    "MaxShards": 5,
                    "Requests": {"Cpu": "250m", "Memory": "250Mi"},
                    "Limit": {"Cpu": "500m", "Memory": "500Mi"}
                }
            })),
        ),
    ];

    let client = Client::with_default_context(Config::new("vke", "2022-05-12"))?;

    let results = client.send_all::<_, Value>("CreateAddon", &addons).await;
    for (addon, result) in addons.iter().zip(results) {
        match result {
            Ok(resp) => println!("{}: ok ({})", addon["Name"], resp.response_metadata.request_id),
            Err(err) => eprintln!("{}: {err}", addon["Name"]),
        }
    }

    Ok(())
}
