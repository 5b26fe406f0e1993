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

//! RFC 3986 percent encoding shared by every part of the signing pipeline.

use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;
use crate::Params;

/// Percent encode `input` leaving only `A-Za-z0-9-_.~` untouched.
///
/// Every other byte, including each byte of a multi-byte UTF-8 sequence, becomes
/// `%XX` with uppercase hex digits. Space is `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Encode every pair of `params`, sorted by encoded key then encoded value.
pub fn encode_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();
    pairs
}

/// Render `params` as `k=v&k=v` with every key and value percent encoded.
///
/// This is the wire form used for both the query string and the form body.
pub fn encode_params(params: &Params) -> String {
    let mut s = String::new();
    for (idx, (k, v)) in encode_pairs(params).into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(&k);
        s.push('=');
        s.push_str(&v);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("abcXYZ019-._~", "abcXYZ019-._~"; "unreserved")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("+", "%2B"; "plus")]
    #[test_case("*", "%2A"; "asterisk")]
    #[test_case("http://example.com/a?b=c&d", "http%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d"; "url")]
    #[test_case("ü", "%C3%BC"; "two byte utf8")]
    #[test_case("€", "%E2%82%AC"; "three byte utf8")]
    #[test_case("", ""; "empty")]
    fn test_percent_encode(input: &str, expected: &str) {
        assert_eq!(percent_encode(input), expected);
    }

    #[test]
    fn test_percent_encode_uses_uppercase_hex() {
        let encoded = percent_encode("\n\x7f");
        assert_eq!(encoded, "%0A%7F");
    }

    #[test]
    fn test_encode_params_sorts_by_encoded_key() {
        let params = Params::from([
            ("z".to_string(), "last".to_string()),
            ("a b".to_string(), "x y".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);

        assert_eq!(encode_params(&params), "a=1&a%20b=x%20y&z=last");
    }
}
