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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use bpsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads BytePlus credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `BYTEPLUS_ACCESS_KEY_ID`: The access key ID
/// - `BYTEPLUS_SECRET_ACCESS_KEY`: The secret access key
/// - `BYTEPLUS_SESSION_TOKEN`: The session token (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let access_key_id = envs.get(BYTEPLUS_ACCESS_KEY_ID);
        let secret_access_key = envs.get(BYTEPLUS_SECRET_ACCESS_KEY);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key_id: ak.clone(),
                secret_access_key: sk.clone(),
                session_token: envs.get(BYTEPLUS_SESSION_TOKEN).cloned(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpsign_core::StaticEnv;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (BYTEPLUS_ACCESS_KEY_ID, "test_access_key"),
            (BYTEPLUS_SECRET_ACCESS_KEY, "test_secret_key"),
        ]));

        let provider = EnvCredentialProvider::new();
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");
        assert!(cred.session_token.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_with_session_token() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (BYTEPLUS_ACCESS_KEY_ID, "test_access_key"),
            (BYTEPLUS_SECRET_ACCESS_KEY, "test_secret_key"),
            (BYTEPLUS_SESSION_TOKEN, "test_session_token"),
        ]));

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.session_token.as_deref(), Some("test_session_token"));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        // Only access key ID
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(
            BYTEPLUS_ACCESS_KEY_ID,
            "test_access_key",
        )]));

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
