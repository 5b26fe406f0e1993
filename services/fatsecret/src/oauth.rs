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

//! Three-legged OAuth flow issuing a delegated user token.
//!
//! 1. [`request_token`] obtains a temporary token for the consumer.
//! 2. The user visits [`authorize_url`] and receives a verifier.
//! 3. [`access_token`] trades the temporary token and the verifier for the
//!    access token to attach to a [`Credential`].

use std::fmt::{Debug, Formatter};

use http::Method;
use log::debug;
use nutrisign_core::{utils::Redact, Context};
use serde::Deserialize;

use crate::constants::*;
use crate::encode::percent_encode;
use crate::error::Result;
use crate::execute::execute_as;
use crate::shape::{Field, Shape};
use crate::{Credential, Params};

/// A token pair returned by the token endpoints.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token.
    #[serde(rename = "oauth_token")]
    pub token: String,
    /// Secret of the token.
    #[serde(rename = "oauth_token_secret")]
    pub token_secret: String,
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

fn token_shape() -> Shape {
    Shape::object([
        Field::required(OAUTH_TOKEN, Shape::String),
        Field::required(OAUTH_TOKEN_SECRET, Shape::String),
    ])
}

/// The consumer half of `cred`, any delegated token dropped.
fn consumer_of(cred: &Credential) -> Credential {
    Credential::new(&cred.consumer_key, &cred.consumer_secret)
}

/// Obtain a temporary request token.
///
/// `callback` defaults to out-of-band, the verifier is then shown to the user
/// instead of being sent to a redirect.
pub async fn request_token(
    ctx: &Context,
    cred: &Credential,
    callback: Option<&str>,
) -> Result<Token> {
    let params = Params::from([(
        OAUTH_CALLBACK.to_string(),
        callback.unwrap_or(OUT_OF_BAND_CALLBACK).to_string(),
    )]);

    let token: Token = execute_as(
        ctx,
        Method::POST,
        REQUEST_TOKEN_URL,
        &params,
        &consumer_of(cred),
        &token_shape(),
    )
    .await?;
    debug!("obtained request token: {token:?}");
    Ok(token)
}

/// The page the user opens to authorize `token`.
pub fn authorize_url(token: &Token) -> String {
    format!(
        "{AUTHORIZE_URL}?{OAUTH_TOKEN}={}",
        percent_encode(&token.token)
    )
}

/// Exchange an authorized request token and its verifier for an access token.
pub async fn access_token(
    ctx: &Context,
    cred: &Credential,
    request_token: &Token,
    verifier: &str,
) -> Result<Token> {
    let params = Params::from([(OAUTH_VERIFIER.to_string(), verifier.to_string())]);
    let signing = consumer_of(cred).with_token(&request_token.token, &request_token.token_secret);

    let token: Token = execute_as(
        ctx,
        Method::POST,
        ACCESS_TOKEN_URL,
        &params,
        &signing,
        &token_shape(),
    )
    .await?;
    debug!("obtained access token: {token:?}");
    Ok(token)
}

impl Credential {
    /// Attach an access token returned by [`access_token`].
    pub fn with_access_token(self, token: Token) -> Self {
        self.with_token(token.token, token.token_secret)
    }
}
