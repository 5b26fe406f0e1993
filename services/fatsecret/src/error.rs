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

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One diagnostic of a failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value, like `$.foods.food[0].food_id`.
    pub path: String,
    /// What was wrong at that location.
    pub message: String,
}

impl Issue {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The error type of a signed request.
///
/// `Transport`, `Api` and `Validation` classify a reply and are mutually
/// exclusive. `Core` covers failures before any reply exists.
#[derive(Error, Debug)]
pub enum Error {
    /// The upstream replied with a non-success HTTP status.
    #[error("transport error: status {status}: {body}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Raw body text, never decoded.
        body: String,
    },

    /// The reply matched the upstream error envelope.
    #[error("api error {code}: {message}")]
    Api {
        /// Upstream numeric error code.
        code: i64,
        /// Upstream error message.
        message: String,
    },

    /// The reply did not match the expected shape even after normalization.
    #[error("validation error: {}", join_issues(.issues))]
    Validation {
        /// At most five diagnostics, in document order.
        issues: Vec<Issue>,
        /// The decoded reply as received.
        raw: Value,
    },

    /// The request could not be built, sent or configured.
    #[error(transparent)]
    Core(#[from] nutrisign_core::Error),
}

impl Error {
    /// The upstream error code if this is an `Api` error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The HTTP status if this is a `Transport` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
