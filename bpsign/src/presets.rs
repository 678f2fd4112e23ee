//! Node pool sizing presets per deployment environment.
//!
//! ```
//! use bpsign::presets::Environment;
//!
//! let preset = "prod".parse::<Environment>().unwrap().preset();
//! assert_eq!(preset.node_count.max, 20);
//! ```

use std::fmt;
use std::str::FromStr;

/// Desired, minimum and maximum node counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCount {
    /// Nodes started with the pool.
    pub desired: u32,
    /// Lower autoscaling bound.
    pub min: u32,
    /// Upper autoscaling bound.
    pub max: u32,
}

/// Sizing for a node pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentPreset {
    /// VPC address range.
    pub vpc_cidr: &'static str,
    /// ECS instance type of the nodes.
    pub instance_type: &'static str,
    /// Node counts.
    pub node_count: NodeCount,
    /// Volume type of the system and data disks.
    pub volume_type: &'static str,
    /// System disk size in GiB.
    pub system_volume_size: u32,
    /// Data disk size in GiB.
    pub data_volume_size: u32,
}

static DEV: EnvironmentPreset = EnvironmentPreset {
    vpc_cidr: "10.0.0.0/16",
    instance_type: "ecs.t2-c2m1.large",
    node_count: NodeCount {
        desired: 3,
        min: 2,
        max: 10,
    },
    volume_type: "ESSD_PL0",
    system_volume_size: 100,
    data_volume_size: 200,
};

static STAGE: EnvironmentPreset = EnvironmentPreset {
    vpc_cidr: "10.1.0.0/16",
    instance_type: "ecs.t2-c2m1.large",
    node_count: NodeCount {
        desired: 4,
        min: 3,
        max: 15,
    },
    volume_type: "ESSD_PL0",
    system_volume_size: 100,
    data_volume_size: 300,
};

static PROD: EnvironmentPreset = EnvironmentPreset {
    vpc_cidr: "10.2.0.0/16",
    instance_type: "ecs.t2-c2m1.large",
    node_count: NodeCount {
        desired: 6,
        min: 4,
        max: 20,
    },
    volume_type: "ESSD_PL1",
    system_volume_size: 200,
    data_volume_size: 500,
};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Development
    #[default]
    Dev,
    /// Staging
    Stage,
    /// Production
    Prod,
}

impl Environment {
    /// Sizing preset for this environment.
    pub fn preset(self) -> &'static EnvironmentPreset {
        match self {
            Environment::Dev => &DEV,
            Environment::Stage => &STAGE,
            Environment::Prod => &PROD,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Stage => write!(f, "stage"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

impl FromStr for Environment {
    type Err = bpsign_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "stage" => Ok(Environment::Stage),
            "prod" => Ok(Environment::Prod),
            v => Err(bpsign_core::Error::config_invalid(format!(
                "unknown environment {v}, expected one of dev, stage, prod"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dev", Environment::Dev)]
    #[test_case("Stage", Environment::Stage)]
    #[test_case("PROD", Environment::Prod)]
    fn test_parse(input: &str, expected: Environment) {
        assert_eq!(input.parse::<Environment>().ok(), Some(expected));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "qa".parse::<Environment>().expect_err("qa is not an environment");
        assert_eq!(err.kind(), bpsign_core::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_node_counts_are_ordered() {
        for env in [Environment::Dev, Environment::Stage, Environment::Prod] {
            let count = env.preset().node_count;
            assert!(count.min <= count.desired && count.desired <= count.max, "{env}");
        }
    }

    #[test]
    fn test_prod_preset() {
        let preset = Environment::Prod.preset();
        assert_eq!(preset.vpc_cidr, "10.2.0.0/16");
        assert_eq!(preset.volume_type, "ESSD_PL1");
        assert_eq!(preset.data_volume_size, 500);
    }
}
