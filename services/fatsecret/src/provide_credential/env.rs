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

use async_trait::async_trait;
use nutrisign_core::{Context, ProvideCredential, Result};

use crate::constants::*;
use crate::Credential;

/// EnvCredentialProvider loads the credential from environment variables.
///
/// - [`FATSECRET_CONSUMER_KEY`] and [`FATSECRET_CONSUMER_SECRET`] are required
/// - [`FATSECRET_ACCESS_TOKEN`] and [`FATSECRET_ACCESS_TOKEN_SECRET`] are attached when both are set
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

        let (Some(key), Some(secret)) = (
            envs.get(FATSECRET_CONSUMER_KEY),
            envs.get(FATSECRET_CONSUMER_SECRET),
        ) else {
            return Ok(None);
        };

        let cred = Credential::new(key, secret);
        match (
            envs.get(FATSECRET_ACCESS_TOKEN),
            envs.get(FATSECRET_ACCESS_TOKEN_SECRET),
        ) {
            (Some(token), Some(token_secret)) => Ok(Some(cred.with_token(token, token_secret))),
            _ => Ok(Some(cred)),
        }
    }
}
