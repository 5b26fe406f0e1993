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

//! OAuth 1.0 HMAC-SHA1 signature construction.

use log::debug;
use nutrisign_core::hash::base64_hmac_sha1;

use crate::encode::{encode_pairs, percent_encode};
use crate::Params;

/// Build the normalized parameter string: every pair encoded, sorted by the
/// encoded key, joined as `k=v&k=v`.
fn normalized_params(params: &Params) -> String {
    encode_pairs(params)
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPERCASE(method) + "&" +
/// encode(url) + "&" +
/// encode(normalized parameters)
/// ```
///
/// The parameter block is encoded twice: once per key and value while
/// normalizing, and once more as a whole.
///
/// ## Reference
///
/// - [RFC 5849 Section 3.4.1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn signature_base_string(method: &str, url: &str, params: &Params) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&normalized_params(params))
    )
}

/// Derive the HMAC key: `encode(consumer_secret) + "&" + encode(token_secret)`.
///
/// An absent token secret leaves the trailing component empty.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

/// Compute the base64 encoded HMAC-SHA1 signature over the base string.
///
/// `params` must not contain `oauth_signature` itself.
pub fn signature(
    method: &str,
    url: &str,
    params: &Params,
    consumer_secret: &str,
    token_secret: Option<&str>,
) -> String {
    let base = signature_base_string(method, url, params);
    debug!("signature base string: {base}");

    let key = signing_key(consumer_secret, token_secret);
    base64_hmac_sha1(key.as_bytes(), base.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rfc5849_params() -> Params {
        Params::from([
            ("oauth_consumer_key".to_string(), "dpf43f3p2l4k3l03".to_string()),
            ("oauth_nonce".to_string(), "kllo9940pd9333jh".to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), "1191242096".to_string()),
            ("oauth_token".to_string(), "nnch734d00sl2jdk".to_string()),
            ("oauth_version".to_string(), "1.0".to_string()),
            ("size".to_string(), "original".to_string()),
            ("file".to_string(), "vacation.jpg".to_string()),
        ])
    }

    #[test]
    fn test_signature_rfc5849() {
        let sig = signature(
            "GET",
            "http://photos.example.net/photos",
            &rfc5849_params(),
            "kd94hf93k423kf44",
            Some("pfkkdhi9sl3r4s00"),
        );

        assert_eq!(sig, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
    }

    #[test]
    fn test_signature_base_string_rfc5849() {
        let base = signature_base_string(
            "get",
            "http://photos.example.net/photos",
            &rfc5849_params(),
        );

        assert_eq!(
            base,
            "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal"
        );
    }

    #[test]
    fn test_signature_base_string_double_encodes_values() {
        let params = Params::from([("q".to_string(), "a b&c".to_string())]);
        let base = signature_base_string("post", "https://x.test/api", &params);

        // "a b&c" -> "a%20b%26c" -> "a%2520b%2526c"
        assert_eq!(base, "POST&https%3A%2F%2Fx.test%2Fapi&q%3Da%2520b%2526c");
    }

    #[test]
    fn test_signature_base_string_starts_with_method() {
        for params in [Params::new(), rfc5849_params()] {
            let base = signature_base_string("post", "https://x.test/", &params);
            assert!(base.starts_with("POST&"));
        }
    }

    #[test]
    fn test_signing_key() {
        assert_eq!(signing_key("", None), "&");
        assert_eq!(signing_key("", Some("")), "&");
        assert_eq!(signing_key("a&b", Some("c&d")), "a%26b&c%26d");
        assert_eq!(signing_key("secret", None), "secret&");
    }

    #[test]
    fn test_signature_is_deterministic_and_sensitive() {
        let url = "http://photos.example.net/photos";
        let base = signature("GET", url, &rfc5849_params(), "cs", Some("ts"));
        assert_eq!(base, signature("GET", url, &rfc5849_params(), "cs", Some("ts")));

        let mut changed_param = rfc5849_params();
        changed_param.insert("size".to_string(), "small".to_string());

        let variants = [
            signature("POST", url, &rfc5849_params(), "cs", Some("ts")),
            signature("GET", "http://photos.example.net/other", &rfc5849_params(), "cs", Some("ts")),
            signature("GET", url, &changed_param, "cs", Some("ts")),
            signature("GET", url, &rfc5849_params(), "cs2", Some("ts")),
            signature("GET", url, &rfc5849_params(), "cs", Some("ts2")),
            signature("GET", url, &rfc5849_params(), "cs", None),
        ];
        for v in variants {
            assert_ne!(v, base);
        }
    }
}
