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

use std::sync::Arc;

use http::Method;
use log::debug;
use nutrisign_core::{Context, ProvideCredential};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::*;
use crate::error::Result;
use crate::execute::{deserialize, execute};
use crate::models::*;
use crate::shape::{Field, Shape};
use crate::{Config, Credential, DefaultCredentialProvider, Params};

/// Client of the method-dispatched REST endpoint.
///
/// Every operation is a signed POST carrying `method=<name>` and `format=json`.
/// The credential is fixed at construction and passed explicitly into every call.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    endpoint: String,
}

impl Client {
    /// Create a client calling the default endpoint.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            endpoint: DEFAULT_REST_ENDPOINT.to_string(),
        }
    }

    /// Set the REST endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Create a client out of `config`, loading the credential through
    /// [`DefaultCredentialProvider`].
    pub async fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let credential = DefaultCredentialProvider::with_config(config.clone())
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| {
                nutrisign_core::Error::config_invalid("no fatsecret credential could be loaded")
            })?;

        Ok(Self::new(ctx, credential).with_endpoint(config.endpoint()))
    }

    /// The credential used by this client.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Call REST method `name` and validate the reply against `shape`.
    ///
    /// `method` and `format` are always set by the client, values for them in
    /// `params` are replaced.
    pub async fn call(&self, name: &str, mut params: Params, shape: &Shape) -> Result<Value> {
        params.insert("method".to_string(), name.to_string());
        params.insert("format".to_string(), "json".to_string());

        debug!("calling fatsecret method {name}");
        execute(
            &self.ctx,
            Method::POST,
            &self.endpoint,
            &params,
            &self.credential,
            shape,
        )
        .await
    }

    /// Like [`Client::call`], then deserialize the normalized reply into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        name: &str,
        params: Params,
        shape: &Shape,
    ) -> Result<T> {
        let value = self.call(name, params, shape).await?;
        deserialize(value)
    }

    fn require_token(&self, name: &str) -> Result<()> {
        if self.credential.has_token() {
            return Ok(());
        }
        Err(nutrisign_core::Error::credential_invalid(format!(
            "method {name} acts for a user and requires a delegated token"
        ))
        .into())
    }

    /// Search foods matching `expression`.
    pub async fn foods_search(
        &self,
        expression: &str,
        page_number: u32,
        max_results: u32,
    ) -> Result<FoodPage> {
        let params = Params::from([
            ("search_expression".to_string(), expression.to_string()),
            ("page_number".to_string(), page_number.to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ]);

        let reply: FoodsSearchReply = self
            .call_as("foods.search", params, &foods_search_shape())
            .await?;
        Ok(reply.foods)
    }

    /// Fetch the detail and servings of a food.
    pub async fn food_get(&self, food_id: &str) -> Result<Food> {
        let params = Params::from([("food_id".to_string(), food_id.to_string())]);

        let reply: FoodGetReply = self.call_as("food.get", params, &food_get_shape()).await?;
        Ok(reply.food)
    }

    /// Search recipes matching `expression`.
    pub async fn recipes_search(
        &self,
        expression: &str,
        page_number: u32,
        max_results: u32,
    ) -> Result<RecipePage> {
        let params = Params::from([
            ("search_expression".to_string(), expression.to_string()),
            ("page_number".to_string(), page_number.to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ]);

        let reply: RecipesSearchReply = self
            .call_as("recipes.search", params, &recipes_search_shape())
            .await?;
        Ok(reply.recipes)
    }

    /// Record a food diary entry for the user, returning the new entry id.
    pub async fn food_entry_create(&self, entry: &NewFoodEntry) -> Result<String> {
        self.require_token("food_entry.create")?;

        let mut params = Params::from([
            ("food_id".to_string(), entry.food_id.clone()),
            ("food_entry_name".to_string(), entry.food_entry_name.clone()),
            ("serving_id".to_string(), entry.serving_id.clone()),
            (
                "number_of_units".to_string(),
                entry.number_of_units.to_string(),
            ),
            ("meal".to_string(), entry.meal.as_str().to_string()),
        ]);
        if let Some(date) = entry.date {
            params.insert("date".to_string(), date.to_string());
        }

        let reply: FoodEntryCreateReply = self
            .call_as("food_entry.create", params, &value_shape("food_entry_id"))
            .await?;
        Ok(reply.food_entry_id.value)
    }

    /// Delete a food diary entry of the user.
    pub async fn food_entry_delete(&self, food_entry_id: &str) -> Result<()> {
        self.require_token("food_entry.delete")?;

        let params = Params::from([("food_entry_id".to_string(), food_entry_id.to_string())]);
        self.call(
            "food_entry.delete",
            params,
            &Shape::object([Field::required("success", Shape::Any)]),
        )
        .await?;
        Ok(())
    }

    /// Create a user profile, returning the token pair acting for it.
    ///
    /// `user_id` links the profile to an id of the calling application.
    pub async fn profile_create(&self, user_id: Option<&str>) -> Result<Profile> {
        let mut params = Params::new();
        if let Some(user_id) = user_id {
            params.insert("user_id".to_string(), user_id.to_string());
        }

        let reply: ProfileCreateReply = self
            .call_as("profile.create", params, &profile_create_shape())
            .await?;
        Ok(reply.profile)
    }
}

fn foods_search_shape() -> Shape {
    Shape::object([Field::required(
        "foods",
        Shape::object([Field::optional(
            "food",
            Shape::list(Shape::object([
                Field::required("food_id", Shape::String),
                Field::required("food_name", Shape::String),
                Field::optional("food_type", Shape::String),
                Field::optional("brand_name", Shape::String),
                Field::optional("food_description", Shape::String),
                Field::optional("food_url", Shape::String),
            ])),
        )]),
    )])
}

fn food_get_shape() -> Shape {
    Shape::object([Field::required(
        "food",
        Shape::object([
            Field::required("food_id", Shape::String),
            Field::required("food_name", Shape::String),
            Field::optional(
                "servings",
                Shape::object([Field::optional(
                    "serving",
                    Shape::list(Shape::object([
                        Field::required("serving_id", Shape::String),
                        Field::required("serving_description", Shape::String),
                    ])),
                )]),
            ),
        ]),
    )])
}

fn recipes_search_shape() -> Shape {
    Shape::object([Field::required(
        "recipes",
        Shape::object([Field::optional(
            "recipe",
            Shape::list(Shape::object([
                Field::required("recipe_id", Shape::String),
                Field::required("recipe_name", Shape::String),
            ])),
        )]),
    )])
}

fn value_shape(name: &str) -> Shape {
    Shape::object([Field::required(
        name,
        Shape::object([Field::required("value", Shape::String)]),
    )])
}

fn profile_create_shape() -> Shape {
    Shape::object([Field::required(
        "profile",
        Shape::object([
            Field::required("auth_token", Shape::String),
            Field::required("auth_secret", Shape::String),
        ]),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::execute::tests::{parse_pairs, MockHttpSend};
    use nutrisign_core::{ErrorKind, StaticEnv};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn client(http: MockHttpSend, credential: Credential) -> Client {
        Client::new(Context::new().with_http_send(http), credential)
    }

    fn sent_body(http: &MockHttpSend) -> Params {
        let req = http.last_request();
        parse_pairs(&String::from_utf8_lossy(req.body()))
    }

    #[tokio::test]
    async fn test_call_sets_method_and_format() -> anyhow::Result<()> {
        let http = MockHttpSend::new(200, "{}");
        let client = client(http.clone(), Credential::new("ck", "cs"));

        let params = Params::from([("format".to_string(), "xml".to_string())]);
        client.call("foods.search", params, &Shape::Any).await?;

        let req = http.last_request();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri().to_string(), DEFAULT_REST_ENDPOINT);
        let sent = parse_pairs(&String::from_utf8_lossy(req.body()));
        assert_eq!(sent["method"], "foods.search");
        assert_eq!(sent["format"], "json");
        Ok(())
    }

    #[tokio::test]
    async fn test_foods_search() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            200,
            r#"{"foods": {"food": {"food_id": "33691", "food_name": "Apple", "food_type": "Generic", "food_description": "Per 100g - Calories: 52kcal"}, "max_results": "20", "page_number": "0", "total_results": "1"}}"#,
        );
        let client = client(http.clone(), Credential::new("ck", "cs"));

        let page = client.foods_search("apple", 0, 20).await?;
        assert_eq!(page.foods.len(), 1);
        assert_eq!(page.foods[0].food_id, "33691");
        assert_eq!(page.total_results.as_deref(), Some("1"));

        let sent = sent_body(&http);
        assert_eq!(sent["search_expression"], "apple");
        assert_eq!(sent["max_results"], "20");
        Ok(())
    }

    #[tokio::test]
    async fn test_foods_search_no_match() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            200,
            r#"{"foods": {"max_results": "20", "page_number": "0", "total_results": "0"}}"#,
        );
        let client = client(http, Credential::new("ck", "cs"));

        let page = client.foods_search("zzzz", 0, 20).await?;
        assert!(page.foods.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_foods_search_bad_item() {
        let http = MockHttpSend::new(
            200,
            r#"{"foods": {"food": [{"food_id": "1", "food_name": "A"}, {"food_id": "2"}]}}"#,
        );
        let client = client(http, Credential::new("ck", "cs"));

        let err = client
            .foods_search("a", 0, 20)
            .await
            .expect_err("must fail");
        match err {
            Error::Validation { issues, .. } => {
                assert_eq!(issues[0].path, "$.foods.food[1].food_name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_food_get() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            200,
            r#"{"food": {"food_id": "33691", "food_name": "Apple", "servings": {"serving": {"serving_id": "1", "serving_description": "100 g", "calories": "52"}}}}"#,
        );
        let client = client(http.clone(), Credential::new("ck", "cs"));

        let food = client.food_get("33691").await?;
        assert_eq!(food.food_name, "Apple");
        assert_eq!(food.servings.servings.len(), 1);
        assert_eq!(food.servings.servings[0].calories.as_deref(), Some("52"));
        assert_eq!(sent_body(&http)["food_id"], "33691");
        Ok(())
    }

    #[tokio::test]
    async fn test_food_get_api_error() {
        let http = MockHttpSend::new(
            200,
            r#"{"error": {"code": 106, "message": "Invalid ID: value '0' for parameter 'food_id' is invalid"}}"#,
        );
        let client = client(http, Credential::new("ck", "cs"));

        let err = client.food_get("0").await.expect_err("must fail");
        assert_eq!(err.api_code(), Some(106));
    }

    #[tokio::test]
    async fn test_recipes_search() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            200,
            r#"{"recipes": {"recipe": [{"recipe_id": "1", "recipe_name": "Apple Pie"}, {"recipe_id": "2", "recipe_name": "Apple Crumble"}], "total_results": "2"}}"#,
        );
        let client = client(http, Credential::new("ck", "cs"));

        let page = client.recipes_search("apple", 0, 10).await?;
        assert_eq!(page.recipes.len(), 2);
        assert_eq!(page.recipes[1].recipe_name, "Apple Crumble");
        Ok(())
    }

    #[tokio::test]
    async fn test_food_entry_create() -> anyhow::Result<()> {
        let http = MockHttpSend::new(200, r#"{"food_entry_id": {"value": "19410386"}}"#);
        let client = client(
            http.clone(),
            Credential::new("ck", "cs").with_token("tok", "ts"),
        );

        let entry = NewFoodEntry {
            food_id: "33691".to_string(),
            food_entry_name: "Apple".to_string(),
            serving_id: "1".to_string(),
            number_of_units: 1.5,
            meal: Meal::Lunch,
            date: Some(20000),
        };
        let id = client.food_entry_create(&entry).await?;
        assert_eq!(id, "19410386");

        let sent = sent_body(&http);
        assert_eq!(sent["method"], "food_entry.create");
        assert_eq!(sent["meal"], "lunch");
        assert_eq!(sent["number_of_units"], "1.5");
        assert_eq!(sent["date"], "20000");
        assert_eq!(sent[OAUTH_TOKEN], "tok");
        Ok(())
    }

    #[tokio::test]
    async fn test_food_entry_requires_token() {
        let http = MockHttpSend::new(200, "{}");
        let client = client(http.clone(), Credential::new("ck", "cs"));

        let err = client
            .food_entry_delete("1")
            .await
            .expect_err("must fail");
        match err {
            Error::Core(e) => assert_eq!(e.kind(), ErrorKind::CredentialInvalid),
            other => panic!("expected core error, got {other:?}"),
        }
        assert!(http.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_food_entry_delete() -> anyhow::Result<()> {
        let http = MockHttpSend::new(200, r#"{"success": {"value": "1"}}"#);
        let client = client(
            http.clone(),
            Credential::new("ck", "cs").with_token("tok", "ts"),
        );

        client.food_entry_delete("19410386").await?;
        assert_eq!(sent_body(&http)["food_entry_id"], "19410386");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_create() -> anyhow::Result<()> {
        let http = MockHttpSend::new(
            200,
            r#"{"profile": {"auth_token": "user_token", "auth_secret": "user_secret"}}"#,
        );
        let client = client(http.clone(), Credential::new("ck", "cs"));

        let profile = client.profile_create(Some("user-1")).await?;
        assert_eq!(profile.auth_token, "user_token");
        assert_eq!(profile.auth_secret, "user_secret");
        assert_eq!(sent_body(&http)["user_id"], "user-1");
        Ok(())
    }

    #[tokio::test]
    async fn test_from_config() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (FATSECRET_CONSUMER_KEY.to_string(), "env_key".to_string()),
                (FATSECRET_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
            ]),
        });

        let config = Config::default().with_endpoint("http://localhost:8080/rest");
        let client = Client::from_config(ctx, config).await?;
        assert_eq!(client.credential().consumer_key, "env_key");
        assert_eq!(client.endpoint, "http://localhost:8080/rest");

        let err = Client::from_config(Context::new(), Config::default())
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::Core(_)));
        Ok(())
    }
}
