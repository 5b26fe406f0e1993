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

//! Signed requests for the fatsecret platform.
//!
//! This crate signs calls with OAuth 1.0 HMAC-SHA1, sends them through the
//! transport configured on a [`nutrisign_core::Context`], decodes the reply and
//! validates it against an expected [`Shape`]. Every failure is one of the
//! [`Error`] variants:
//!
//! - [`Error::Transport`]: the upstream answered with a non-success status
//! - [`Error::Api`]: the reply is an upstream error envelope
//! - [`Error::Validation`]: the reply does not match the expected shape
//!
//! ## Example
//!
//! ```no_run
//! use nutrisign_core::{Context, OsEnv};
//! use nutrisign_fatsecret::{Client, Config};
//! use nutrisign_file_read_tokio::TokioFileRead;
//! use nutrisign_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Loads the consumer pair from config, env or the credential file.
//!     let client = Client::from_config(ctx, Config::default()).await?;
//!
//!     let page = client.foods_search("apple", 0, 10).await?;
//!     for food in page.foods {
//!         println!("{}: {}", food.food_id, food.food_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Generic signed requests
//!
//! [`execute`] is the building block of every operation and can call any
//! endpoint speaking the same protocol:
//!
//! ```no_run
//! use http::Method;
//! use nutrisign_core::Context;
//! use nutrisign_fatsecret::{execute, Credential, Field, Params, Shape};
//!
//! # async fn example(ctx: Context) -> nutrisign_fatsecret::Result<()> {
//! let cred = Credential::new("consumer_key", "consumer_secret");
//! let params = Params::from([
//!     ("method".to_string(), "food.get".to_string()),
//!     ("food_id".to_string(), "33691".to_string()),
//!     ("format".to_string(), "json".to_string()),
//! ]);
//! let shape = Shape::object([Field::required("food", Shape::Any)]);
//!
//! let reply = execute(
//!     &ctx,
//!     Method::GET,
//!     "https://platform.fatsecret.com/rest/server.api",
//!     &params,
//!     &cred,
//!     &shape,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

/// Parameters of a signed request, kept sorted by name.
pub type Params = std::collections::BTreeMap<String, String>;

pub mod constants;
pub mod encode;
pub mod oauth;
pub mod params;
pub mod shape;
pub mod signature;
pub mod validate;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, Issue, Result};

mod execute;
pub use execute::{decode_body, execute, execute_as, sign_params};

pub mod models;

mod provide_credential;
pub use provide_credential::*;

pub use shape::{Field, Shape};
