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

//! Standard OAuth signing parameters.

use nutrisign_core::hash::hex_encode;
use nutrisign_core::time::{epoch_seconds, now};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::*;
use crate::Params;

/// Generate a fresh nonce: 16 bytes from the OS CSPRNG as 32 lowercase hex characters.
pub fn nonce() -> String {
    let mut buf = [0u8; 16];
    OsRng.fill_bytes(&mut buf);
    hex_encode(&buf)
}

/// Current time as floored seconds since the Unix epoch.
pub fn timestamp() -> String {
    epoch_seconds(now()).to_string()
}

/// Build the signing parameter set for one request.
///
/// `oauth_token` is only present when `token` is a non-empty string.
pub fn build_signing_params(consumer_key: &str, token: Option<&str>) -> Params {
    let mut params = Params::from([
        (OAUTH_NONCE.to_string(), nonce()),
        (OAUTH_TIMESTAMP.to_string(), timestamp()),
        (
            OAUTH_SIGNATURE_METHOD.to_string(),
            SIGNATURE_METHOD_HMAC_SHA1.to_string(),
        ),
        (OAUTH_VERSION.to_string(), VERSION_1_0.to_string()),
        (OAUTH_CONSUMER_KEY.to_string(), consumer_key.to_string()),
    ]);

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        params.insert(OAUTH_TOKEN.to_string(), token.to_string());
    }

    params
}
