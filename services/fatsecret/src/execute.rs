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

//! Signed request execution.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::{debug, error};
use nutrisign_core::Context;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::encode::encode_params;
use crate::error::{Error, Issue, Result};
use crate::params::build_signing_params;
use crate::shape::Shape;
use crate::signature::signature;
use crate::validate::validate;
use crate::{Credential, Params};

/// Merge the signing parameters with `params` and append `oauth_signature`.
///
/// Signing parameters win over caller parameters of the same name, a caller
/// `oauth_signature` is dropped. The signature covers every merged pair.
pub fn sign_params(method: &Method, url: &str, params: &Params, cred: &Credential) -> Params {
    let mut merged = build_signing_params(&cred.consumer_key, cred.token.as_deref());
    for (k, v) in params {
        if k == OAUTH_SIGNATURE {
            continue;
        }
        merged.entry(k.clone()).or_insert_with(|| v.clone());
    }

    let sig = signature(
        method.as_str(),
        url,
        &merged,
        &cred.consumer_secret,
        cred.token_secret.as_deref(),
    );
    merged.insert(OAUTH_SIGNATURE.to_string(), sig);
    merged
}

/// Build the http request for an already signed parameter set.
///
/// GET carries the parameters in the query string, POST in a form body.
fn build_request(method: &Method, url: &str, signed: &Params) -> Result<http::Request<Bytes>> {
    if url.contains('?') {
        return Err(nutrisign_core::Error::request_invalid(
            "url must not carry a query string, pass parameters instead",
        )
        .into());
    }

    let encoded = encode_params(signed);
    let req = if *method == Method::GET {
        http::Request::builder()
            .method(Method::GET)
            .uri(format!("{url}?{encoded}"))
            .body(Bytes::new())
    } else if *method == Method::POST {
        http::Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Bytes::from(encoded))
    } else {
        return Err(nutrisign_core::Error::request_invalid(format!(
            "unsupported http method {method}, only GET and POST can be signed"
        ))
        .into());
    };

    Ok(req.map_err(nutrisign_core::Error::from)?)
}

/// Decode a reply body: JSON first, `key=value&key=value` form pairs otherwise.
///
/// Form keys and values are URL-decoded and kept as strings.
pub fn decode_body(body: &str) -> Value {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        return v;
    }

    let map: Map<String, Value> = form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Value::Object(map)
}

/// Sign and send a request, returning the decoded reply without validation.
async fn send(
    ctx: &Context,
    method: Method,
    url: &str,
    params: &Params,
    cred: &Credential,
) -> Result<Value> {
    let signed = sign_params(&method, url, params, cred);
    let req = build_request(&method, url, &signed)?;

    debug!("sending signed request: {method} {url}");
    let resp = ctx.http_send_as_string(req).await?;

    let status = resp.status();
    if !status.is_success() {
        error!("signed request {method} {url} got unexpected status: {status}");
        return Err(Error::Transport {
            status: status.as_u16(),
            body: resp.into_body(),
        });
    }

    Ok(decode_body(resp.body()))
}

/// Execute a signed request and classify the reply against `shape`.
///
/// - non-success status: [`Error::Transport`] with the raw body
/// - error envelope: [`Error::Api`]
/// - shape mismatch: [`Error::Validation`]
///
/// The credential is used as given. A missing delegated token is not checked
/// here, the upstream decides whether the call needs one.
pub async fn execute(
    ctx: &Context,
    method: Method,
    url: &str,
    params: &Params,
    cred: &Credential,
    shape: &Shape,
) -> Result<Value> {
    let value = send(ctx, method, url, params, cred).await?;
    validate(value, shape)
}

/// Like [`execute`], then deserialize the normalized reply into `T`.
pub async fn execute_as<T: DeserializeOwned>(
    ctx: &Context,
    method: Method,
    url: &str,
    params: &Params,
    cred: &Credential,
    shape: &Shape,
) -> Result<T> {
    let value = execute(ctx, method, url, params, cred, shape).await?;
    deserialize(value)
}

pub(crate) fn deserialize<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(&value).map_err(|e| Error::Validation {
        issues: vec![Issue::new("$", e.to_string())],
        raw: value,
    })
}
