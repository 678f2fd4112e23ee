// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use bpsign_core::{utils::Redact, Context};

/// Config carries the credential configuration for BytePlus OpenAPI services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BYTEPLUS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BYTEPLUS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BYTEPLUS_SESSION_TOKEN`]
    pub session_token: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set session_token
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set win over the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(BYTEPLUS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BYTEPLUS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BYTEPLUS_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("session_token", &self.session_token.as_ref().map(Redact::from))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpsign_core::StaticEnv;

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (BYTEPLUS_ACCESS_KEY_ID, "env_ak"),
            (BYTEPLUS_SECRET_ACCESS_KEY, "env_sk"),
        ]));

        let cfg = Config::new().with_access_key_id("explicit_ak").from_env(&ctx);
        assert_eq!(cfg.access_key_id.as_deref(), Some("explicit_ak"));
        assert_eq!(cfg.secret_access_key.as_deref(), Some("env_sk"));
        assert_eq!(cfg.session_token, None);
    }

    #[test]
    fn test_debug_redacts() {
        let cfg = Config::new()
            .with_access_key_id("AKLTYzU4ZmFiNWQ3YjE")
            .with_secret_access_key("c2VjcmV0LXNlY3JldC1zZWNyZXQ=");

        let s = format!("{cfg:?}");
        assert!(s.contains("AKL***YjE"));
        assert!(!s.contains("c2VjcmV0LXNlY3JldC1zZWNyZXQ="));
    }
}
