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

//! Typed replies of the REST operations offered by [`Client`](crate::Client).
//!
//! The upstream quotes numbers in its JSON, so counts, ids and nutrient values
//! are kept as strings.

use serde::Deserialize;

use crate::shape::deserialize_one_or_many;

/// One page of `foods.search`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FoodPage {
    /// Matched foods, empty when nothing matched.
    #[serde(default, rename = "food", deserialize_with = "deserialize_one_or_many")]
    pub foods: Vec<FoodSummary>,
    /// Page size requested.
    #[serde(default)]
    pub max_results: Option<String>,
    /// Zero based page offset.
    #[serde(default)]
    pub page_number: Option<String>,
    /// Number of matches across all pages.
    #[serde(default)]
    pub total_results: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct FoodsSearchReply {
    pub(crate) foods: FoodPage,
}

/// A food as listed by a search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FoodSummary {
    pub food_id: String,
    pub food_name: String,
    /// `Generic` or `Brand`.
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Short nutrition summary, like `Per 100g - Calories: 52kcal | ...`.
    #[serde(default)]
    pub food_description: Option<String>,
    #[serde(default)]
    pub food_url: Option<String>,
}

/// Full detail of a food from `food.get`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub food_id: String,
    pub food_name: String,
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub food_url: Option<String>,
    #[serde(default)]
    pub servings: Servings,
}

#[derive(Deserialize)]
pub(crate) struct FoodGetReply {
    pub(crate) food: Food,
}

/// Servings wrapper of a [`Food`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Servings {
    #[serde(default, rename = "serving", deserialize_with = "deserialize_one_or_many")]
    pub servings: Vec<Serving>,
}

/// One serving size of a food and its nutrients.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Serving {
    pub serving_id: String,
    pub serving_description: String,
    #[serde(default)]
    pub metric_serving_amount: Option<String>,
    #[serde(default)]
    pub metric_serving_unit: Option<String>,
    #[serde(default)]
    pub number_of_units: Option<String>,
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub carbohydrate: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
}

/// One page of `recipes.search`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RecipePage {
    #[serde(default, rename = "recipe", deserialize_with = "deserialize_one_or_many")]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub max_results: Option<String>,
    #[serde(default)]
    pub page_number: Option<String>,
    #[serde(default)]
    pub total_results: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RecipesSearchReply {
    pub(crate) recipes: RecipePage,
}

/// A recipe as listed by a search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_description: Option<String>,
    #[serde(default)]
    pub recipe_url: Option<String>,
    #[serde(default)]
    pub recipe_image: Option<String>,
}

/// Meal a food entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Other,
}

impl Meal {
    /// Wire name of the meal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Other => "other",
        }
    }
}

/// A food diary entry to record for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodEntry {
    pub food_id: String,
    pub food_entry_name: String,
    pub serving_id: String,
    pub number_of_units: f64,
    pub meal: Meal,
    /// Days since 1970-01-01, today when unset.
    pub date: Option<i64>,
}

/// Wrapped scalar, like `{"value": "1234"}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct ValueReply {
    pub(crate) value: String,
}

#[derive(Deserialize)]
pub(crate) struct FoodEntryCreateReply {
    pub(crate) food_entry_id: ValueReply,
}

/// Token pair of a profile created by `profile.create`.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub auth_token: String,
    pub auth_secret: String,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use nutrisign_core::utils::Redact;

        f.debug_struct("Profile")
            .field("auth_token", &Redact::from(&self.auth_token))
            .field("auth_secret", &Redact::from(&self.auth_secret))
            .finish()
    }
}

#[derive(Deserialize)]
pub(crate) struct ProfileCreateReply {
    pub(crate) profile: Profile,
}
