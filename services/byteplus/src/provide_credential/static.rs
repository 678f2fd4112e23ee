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

use crate::Credential;
use async_trait::async_trait;
use bpsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider hands out a fixed access key pair.
///
/// Use it when the keys come from somewhere bpsign doesn't know about, like a
/// secret manager read at startup.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Provide `access_key_id` and `secret_access_key` on every call.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            credential: Credential::new(access_key_id, secret_access_key),
        }
    }

    /// Attach a session token for temporary (STS) credentials.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.credential = self.credential.with_session_token(token);
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("AKTEST", "testsecret");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.access_key_id, "AKTEST");
        assert_eq!(cred.secret_access_key, "testsecret");
        assert!(cred.session_token.is_none());

        let provider = StaticCredentialProvider::new("AKTEST", "testsecret")
            .with_session_token("sts-token");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.session_token.as_deref(), Some("sts-token"));

        Ok(())
    }
}
