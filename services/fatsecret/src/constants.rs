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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the fatsecret service.
pub const FATSECRET_CONSUMER_KEY: &str = "FATSECRET_CONSUMER_KEY";
pub const FATSECRET_CONSUMER_SECRET: &str = "FATSECRET_CONSUMER_SECRET";
pub const FATSECRET_ACCESS_TOKEN: &str = "FATSECRET_ACCESS_TOKEN";
pub const FATSECRET_ACCESS_TOKEN_SECRET: &str = "FATSECRET_ACCESS_TOKEN_SECRET";
pub const FATSECRET_CREDENTIAL_FILE: &str = "FATSECRET_CREDENTIAL_FILE";
pub const FATSECRET_ENDPOINT: &str = "FATSECRET_ENDPOINT";

/// Credential file used when none is configured.
pub const DEFAULT_CREDENTIAL_FILE: &str = "~/.fatsecret/credentials.json";

// Endpoints of the upstream service.
pub const DEFAULT_REST_ENDPOINT: &str = "https://platform.fatsecret.com/rest/server.api";
pub const REQUEST_TOKEN_URL: &str = "https://authentication.fatsecret.com/oauth/request_token";
pub const AUTHORIZE_URL: &str = "https://authentication.fatsecret.com/oauth/authorize";
pub const ACCESS_TOKEN_URL: &str = "https://authentication.fatsecret.com/oauth/access_token";

// OAuth parameter names.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_VERIFIER: &str = "oauth_verifier";

pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";
pub const VERSION_1_0: &str = "1.0";

/// Callback value for clients that cannot receive a redirect.
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Upper bound of issues carried by a validation error.
pub const MAX_VALIDATION_ISSUES: usize = 5;

/// AsciiSet for [RFC 3986 percent encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
