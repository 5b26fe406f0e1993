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
use log::debug;
use nutrisign_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::constants::*;
use crate::Credential;

/// FileCredentialProvider loads the credential from a local json file.
///
/// The file looks like:
///
/// ```json
/// {
///   "consumer_key": "...",
///   "consumer_secret": "...",
///   "token": "...",
///   "token_secret": "..."
/// }
/// ```
///
/// The path is resolved from
///
/// - the path set by [`FileCredentialProvider::with_path`]
/// - env value: [`FATSECRET_CREDENTIAL_FILE`]
/// - default to [`DEFAULT_CREDENTIAL_FILE`]
///
/// The file is only read, never written.
#[derive(Debug, Default, Clone)]
pub struct FileCredentialProvider {
    path: Option<String>,
}

impl FileCredentialProvider {
    /// Create a new FileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the credential file.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ctx
                .env_var(FATSECRET_CREDENTIAL_FILE)
                .unwrap_or_else(|| DEFAULT_CREDENTIAL_FILE.to_string()),
        };

        let Some(path) = ctx.expand_home_dir(&path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read credential file {path}: {err:?}");
                return Ok(None);
            }
        };

        let cred: Credential = serde_json::from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse credential file {path}"))
                .with_source(e)
        })?;

        if !cred.is_valid() {
            debug!("credential file {path} has an empty consumer key or secret");
            return Ok(None);
        }

        Ok(Some(cred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrisign_core::{ErrorKind, StaticEnv};
    use nutrisign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_file(content: &str) -> anyhow::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    fn ctx(home_dir: Option<std::path::PathBuf>, envs: HashMap<String, String>) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv { home_dir, envs })
    }

    #[tokio::test]
    async fn test_file_provider_with_path() -> anyhow::Result<()> {
        let file = write_file(
            r#"{"consumer_key": "file_key", "consumer_secret": "file_secret", "token": "file_token", "token_secret": "file_token_secret"}"#,
        )?;

        let provider = FileCredentialProvider::new().with_path(file.path().to_string_lossy());
        let cred = provider
            .provide_credential(&ctx(None, HashMap::new()))
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.consumer_key, "file_key");
        assert_eq!(cred.consumer_secret, "file_secret");
        assert_eq!(cred.token.as_deref(), Some("file_token"));
        assert_eq!(cred.token_secret.as_deref(), Some("file_token_secret"));

        Ok(())
    }

    #[tokio::test]
    async fn test_file_provider_from_env() -> anyhow::Result<()> {
        let file = write_file(r#"{"consumer_key": "file_key", "consumer_secret": "file_secret"}"#)?;
        let envs = HashMap::from([(
            FATSECRET_CREDENTIAL_FILE.to_string(),
            file.path().to_string_lossy().to_string(),
        )]);

        let cred = FileCredentialProvider::new()
            .provide_credential(&ctx(None, envs))
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.consumer_key, "file_key");
        assert!(!cred.has_token());

        Ok(())
    }

    #[tokio::test]
    async fn test_file_provider_default_path_in_home() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        std::fs::create_dir_all(home.path().join(".fatsecret"))?;
        std::fs::write(
            home.path().join(".fatsecret/credentials.json"),
            r#"{"consumer_key": "home_key", "consumer_secret": "home_secret"}"#,
        )?;

        let cred = FileCredentialProvider::new()
            .provide_credential(&ctx(Some(home.path().to_path_buf()), HashMap::new()))
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.consumer_key, "home_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() -> anyhow::Result<()> {
        let cred = FileCredentialProvider::new()
            .with_path("/not/exist/credentials.json")
            .provide_credential(&ctx(None, HashMap::new()))
            .await?;
        assert!(cred.is_none());

        // No home dir to expand the default path.
        let cred = FileCredentialProvider::new()
            .provide_credential(&ctx(None, HashMap::new()))
            .await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_file_provider_malformed_file() -> anyhow::Result<()> {
        let file = write_file("consumer_key = not json")?;

        let err = FileCredentialProvider::new()
            .with_path(file.path().to_string_lossy())
            .provide_credential(&ctx(None, HashMap::new()))
            .await
            .expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        Ok(())
    }

    #[tokio::test]
    async fn test_file_provider_empty_consumer() -> anyhow::Result<()> {
        let file = write_file(r#"{"consumer_key": "", "consumer_secret": "file_secret"}"#)?;

        let cred = FileCredentialProvider::new()
            .with_path(file.path().to_string_lossy())
            .provide_credential(&ctx(None, HashMap::new()))
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
