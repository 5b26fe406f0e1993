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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nutrisign_core::{Context, ProvideCredential, ProvideCredentialChain, Result, StaticEnv};
use nutrisign_fatsecret::constants::*;
use nutrisign_fatsecret::{
    Credential, DefaultCredentialProvider, EnvCredentialProvider, FileCredentialProvider,
    StaticCredentialProvider,
};
use nutrisign_file_read_tokio::TokioFileRead;

#[derive(Debug)]
struct CountingProvider {
    name: &'static str,
    return_credential: bool,
    call_count: Arc<Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;

        if self.return_credential {
            Ok(Some(Credential::new(
                format!("{}_key", self.name),
                format!("{}_secret", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = Context::new();

    let count1 = Arc::new(Mutex::new(0));
    let count2 = Arc::new(Mutex::new(0));
    let count3 = Arc::new(Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1",
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2",
            return_credential: true,
            call_count: count2.clone(),
        })
        .push(CountingProvider {
            name: "provider3",
            return_credential: true,
            call_count: count3.clone(),
        });

    let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
    assert_eq!(cred.consumer_key, "provider2_key");
    assert_eq!(cred.consumer_secret, "provider2_secret");

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_chain_with_real_providers() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("credentials.json");
    std::fs::write(
        &path,
        r#"{"consumer_key": "file_key", "consumer_secret": "file_secret"}"#,
    )?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(FileCredentialProvider::new().with_path(path.to_string_lossy()));

    let cred = chain.provide_credential(&ctx).await?.unwrap();
    assert_eq!(cred.consumer_key, "file_key");

    // Env takes over as soon as it is set.
    let ctx = ctx.with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::from([
            (FATSECRET_CONSUMER_KEY.to_string(), "env_key".to_string()),
            (FATSECRET_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
        ]),
    });
    let cred = chain.provide_credential(&ctx).await?.unwrap();
    assert_eq!(cred.consumer_key, "env_key");

    Ok(())
}

#[tokio::test]
async fn test_default_provider_custom_chain() {
    let provider = DefaultCredentialProvider::with_chain(
        ProvideCredentialChain::new()
            .push(StaticCredentialProvider::new("static_key", "static_secret")),
    );

    let cred = provider
        .provide_credential(&Context::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cred.consumer_key, "static_key");
}
