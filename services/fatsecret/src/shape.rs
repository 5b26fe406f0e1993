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

//! Expected response shapes and the single-vs-array normalization.
//!
//! The upstream encodes a repeating element as nothing at all when there are
//! no items, as a bare object when there is exactly one, and as an array
//! otherwise. Every [`Shape::List`] slot goes through [`one_or_many`], so shape
//! definitions never deal with that inconsistency themselves.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The expected structure of a decoded reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Anything, left untouched.
    Any,
    /// A JSON string.
    String,
    /// Any JSON number.
    Number,
    /// A JSON number without fractional part.
    Integer,
    /// A JSON boolean.
    Bool,
    /// A JSON object with the listed fields. Unlisted fields pass through.
    Object(Vec<Field>),
    /// A repeating element: absent, null, a single item or an array of items.
    List(Box<Shape>),
    /// The inner shape or null.
    Optional(Box<Shape>),
}

/// A named member of an [`Shape::Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Member name.
    pub name: String,
    /// Expected shape of the member.
    pub shape: Shape,
    /// Whether the member must be present.
    ///
    /// Ignored for [`Shape::List`] members, an absent list is an empty list.
    pub required: bool,
}

impl Field {
    /// A member that must be present and non-null.
    pub fn required(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            required: true,
        }
    }

    /// A member that may be absent.
    pub fn optional(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            required: false,
        }
    }
}

impl Shape {
    /// Build an object shape.
    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        Shape::Object(fields.into_iter().collect())
    }

    /// Build a repeating shape of `item`.
    pub fn list(item: Shape) -> Self {
        Shape::List(Box::new(item))
    }

    /// Build a nullable shape of `inner`.
    pub fn optional(inner: Shape) -> Self {
        Shape::Optional(Box::new(inner))
    }

    /// Short human name used in diagnostics.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Shape::Any => "any",
            Shape::String => "string",
            Shape::Number => "number",
            Shape::Integer => "integer",
            Shape::Bool => "boolean",
            Shape::Object(_) => "object",
            Shape::List(_) => "list",
            Shape::Optional(inner) => inner.describe(),
        }
    }
}

/// Normalize a repeating element into a sequence.
///
/// - absent or `null` becomes `[]`
/// - an array is returned as given
/// - any other value becomes `[value]`
pub fn one_or_many(value: Option<Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(v) => vec![v],
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Serde counterpart of [`one_or_many`] for typed models.
///
/// Pair it with `#[serde(default)]` so an absent member becomes an empty `Vec`:
///
/// ```
/// use nutrisign_fatsecret::shape::deserialize_one_or_many;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Servings {
///     #[serde(default, deserialize_with = "deserialize_one_or_many")]
///     serving: Vec<serde_json::Value>,
/// }
/// ```
pub fn deserialize_one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}
