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

//! Search foods and print the servings of the first match.
//!
//! ```shell
//! FATSECRET_CONSUMER_KEY=... FATSECRET_CONSUMER_SECRET=... \
//!     cargo run --example search_foods -- "greek yogurt"
//! ```
//!
//! Run with `--authorize` to walk through the user authorization flow and
//! print the resulting access token.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use nutrisign_core::{Context, OsEnv};
use nutrisign_fatsecret::{oauth, Client, Config, Error};
use nutrisign_file_read_tokio::TokioFileRead;
use nutrisign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let _ = dotenv::dotenv();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::default().from_env(&ctx);
    let client = Client::from_config(ctx.clone(), config).await?;

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--authorize") {
        return authorize(&ctx, &client).await;
    }

    let expression = if args.is_empty() {
        "apple".to_string()
    } else {
        args.join(" ")
    };

    let page = client.foods_search(&expression, 0, 10).await?;
    println!(
        "{} result(s) for {expression:?}",
        page.total_results.as_deref().unwrap_or("0")
    );
    for food in &page.foods {
        println!(
            "  [{}] {} {}",
            food.food_id,
            food.food_name,
            food.food_description.as_deref().unwrap_or_default()
        );
    }

    let Some(first) = page.foods.first() else {
        return Ok(());
    };

    match client.food_get(&first.food_id).await {
        Ok(food) => {
            println!("\nservings of {}:", food.food_name);
            for serving in &food.servings.servings {
                println!(
                    "  {}: {} kcal",
                    serving.serving_description,
                    serving.calories.as_deref().unwrap_or("?")
                );
            }
        }
        Err(Error::Api { code, message }) => eprintln!("upstream refused: {code} {message}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

async fn authorize(ctx: &Context, client: &Client) -> Result<()> {
    let request = oauth::request_token(ctx, client.credential(), None).await?;
    println!("open {} and enter the verifier:", oauth::authorize_url(&request));
    print!("> ");
    io::stdout().flush()?;

    let mut verifier = String::new();
    io::stdin().lock().read_line(&mut verifier)?;

    let token = oauth::access_token(ctx, client.credential(), &request, verifier.trim()).await?;
    println!("FATSECRET_ACCESS_TOKEN={}", token.token);
    println!("FATSECRET_ACCESS_TOKEN_SECRET={}", token.token_secret);
    Ok(())
}
