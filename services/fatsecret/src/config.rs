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

use nutrisign_core::{utils::Redact, Context};

use crate::constants::*;
use crate::Credential;

/// Config for the fatsecret service.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_ACCESS_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_ACCESS_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// `credential_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_CREDENTIAL_FILE`]
    pub credential_file: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`FATSECRET_ENDPOINT`]
    /// - default to [`DEFAULT_REST_ENDPOINT`]
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("token", &self.token.as_ref().map(Redact::from))
            .field("token_secret", &self.token_secret.as_ref().map(Redact::from))
            .field("credential_file", &self.credential_file)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Set the consumer key and secret.
    pub fn with_consumer(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self.consumer_secret = Some(secret.into());
        self
    }

    /// Set the delegated access token and its secret.
    pub fn with_token(mut self, token: impl Into<String>, secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(secret.into());
        self
    }

    /// Set the path of the json credential file.
    pub fn with_credential_file(mut self, path: impl Into<String>) -> Self {
        self.credential_file = Some(path.into());
        self
    }

    /// Set the REST endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(FATSECRET_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(FATSECRET_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(FATSECRET_ACCESS_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(FATSECRET_ACCESS_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(FATSECRET_CREDENTIAL_FILE) {
            self.credential_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(FATSECRET_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }

    /// The REST endpoint to call.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_REST_ENDPOINT)
    }

    /// Build a credential out of the configured values.
    ///
    /// Returns `None` unless both consumer values are set. The token pair is
    /// only attached when both halves are present.
    pub fn credential(&self) -> Option<Credential> {
        let (Some(key), Some(secret)) = (&self.consumer_key, &self.consumer_secret) else {
            return None;
        };

        let cred = Credential::new(key, secret);
        match (&self.token, &self.token_secret) {
            (Some(token), Some(token_secret)) => Some(cred.with_token(token, token_secret)),
            _ => Some(cred),
        }
    }
}
