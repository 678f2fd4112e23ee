use bpsign_core::Context;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "ap-southeast-1";
/// OpenAPI endpoint used when none is configured.
pub const DEFAULT_HOST: &str = "open.volcengineapi.com";

/// Env name of the region override.
pub const BYTEPLUS_REGION: &str = "BYTEPLUS_REGION";
/// Env name of the endpoint host override.
pub const BYTEPLUS_HOST: &str = "BYTEPLUS_HOST";

/// Config carries everything a [`crate::Client`] needs besides the credential.
#[derive(Clone, Debug)]
pub struct Config {
    /// Service name used in the signing scope, e.g. `vke`.
    pub service: String,
    /// API version sent as the `Version` query parameter, e.g. `2022-05-12`.
    pub version: String,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BYTEPLUS_REGION`]
    /// - [`DEFAULT_REGION`]
    pub region: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BYTEPLUS_HOST`]
    /// - [`DEFAULT_HOST`]
    pub host: Option<String>,
    /// URI scheme, `https` unless set.
    pub scheme: Option<String>,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
}

impl Config {
    /// Create a new Config for the given service and API version.
    pub fn new(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            region: None,
            host: None,
            scheme: None,
            headers: Vec::new(),
        }
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Add an extra header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(BYTEPLUS_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BYTEPLUS_HOST) {
            self.host.get_or_insert(v);
        }

        self
    }

    /// The region requests are signed for.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// The endpoint host.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// The URI scheme.
    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or("https")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpsign_core::StaticEnv;

    #[test]
    fn test_defaults() {
        let cfg = Config::new("vke", "2022-05-12");

        assert_eq!(cfg.region(), "ap-southeast-1");
        assert_eq!(cfg.host(), "open.volcengineapi.com");
        assert_eq!(cfg.scheme(), "https");
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (BYTEPLUS_REGION, "cn-beijing"),
            (BYTEPLUS_HOST, "open.byteplusapi.com"),
        ]));

        let cfg = Config::new("vke", "2022-05-12")
            .with_host("localhost:8080")
            .from_env(&ctx);
        assert_eq!(cfg.region(), "cn-beijing");
        assert_eq!(cfg.host(), "localhost:8080");
    }
}
