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

//! Reply classification: error envelope detection, then shape validation.

use log::debug;
use serde_json::{Map, Value};

use crate::constants::MAX_VALIDATION_ISSUES;
use crate::error::{Error, Issue, Result};
use crate::shape::{one_or_many, Field, Shape};

/// Detect the upstream error envelope `{"error": {"code": <integer>, "message": <string>}}`.
///
/// Detection is purely structural. Any integer-valued number is a code, `2.0`
/// included. Codes beyond the `i64` range saturate.
pub fn error_envelope(value: &Value) -> Option<(i64, String)> {
    let error = value.get("error")?.as_object()?;
    let code = integer_code(error.get("code")?)?;
    let message = error.get("message")?.as_str()?;
    Some((code, message.to_string()))
}

fn integer_code(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }

    let code = value.as_f64()?;
    if !code.is_finite() || code.fract() != 0.0 {
        return None;
    }
    Some(code as i64)
}

/// Classify a decoded reply against `shape`.
///
/// 1. A reply matching the error envelope fails with [`Error::Api`], whatever `shape` is.
/// 2. Otherwise the reply is checked and normalized against `shape`. Mismatches fail with
///    [`Error::Validation`] carrying the first five issues and the raw reply.
///
/// On success the normalized reply is returned: every list slot is an array and
/// everything else is left as received.
pub fn validate(value: Value, shape: &Shape) -> Result<Value> {
    if let Some((code, message)) = error_envelope(&value) {
        debug!("reply matched error envelope: {code} {message}");
        return Err(Error::Api { code, message });
    }

    let raw = value.clone();
    let mut checker = Checker::default();
    let normalized = checker.check(value, shape, "$");

    if checker.issues.is_empty() {
        Ok(normalized)
    } else {
        Err(Error::Validation {
            issues: checker.issues,
            raw,
        })
    }
}

#[derive(Default)]
struct Checker {
    issues: Vec<Issue>,
}

impl Checker {
    fn report(&mut self, path: &str, message: impl Into<String>) {
        if self.issues.len() < MAX_VALIDATION_ISSUES {
            self.issues.push(Issue::new(path, message));
        }
    }

    fn mismatch(&mut self, path: &str, shape: &Shape, found: &Value) {
        self.report(
            path,
            format!("expected {}, found {}", shape.describe(), kind_of(found)),
        );
    }

    fn check(&mut self, value: Value, shape: &Shape, path: &str) -> Value {
        match shape {
            Shape::Any => value,
            Shape::String if value.is_string() => value,
            Shape::Number if value.is_number() => value,
            Shape::Integer if value.is_i64() || value.is_u64() => value,
            Shape::Bool if value.is_boolean() => value,
            Shape::Optional(_) if value.is_null() => value,
            Shape::Optional(inner) => self.check(value, inner, path),
            Shape::List(item) => self.check_list(Some(value), item, path),
            Shape::Object(fields) => match value {
                Value::Object(map) => Value::Object(self.check_object(map, fields, path)),
                other => {
                    self.mismatch(path, shape, &other);
                    other
                }
            },
            _ => {
                self.mismatch(path, shape, &value);
                value
            }
        }
    }

    fn check_list(&mut self, value: Option<Value>, item: &Shape, path: &str) -> Value {
        Value::Array(
            one_or_many(value)
                .into_iter()
                .enumerate()
                .map(|(idx, v)| self.check(v, item, &format!("{path}[{idx}]")))
                .collect(),
        )
    }

    fn check_object(
        &mut self,
        mut map: Map<String, Value>,
        fields: &[Field],
        path: &str,
    ) -> Map<String, Value> {
        for field in fields {
            let field_path = format!("{path}.{}", field.name);
            let value = map.remove(&field.name);

            let checked = match (&field.shape, value) {
                (Shape::List(item), value) => Some(self.check_list(value, item, &field_path)),
                (_, None) if field.required => {
                    self.report(&field_path, "required field is missing");
                    None
                }
                (_, None) => None,
                (Shape::Optional(_), Some(Value::Null)) => Some(Value::Null),
                (_, Some(Value::Null)) if field.required => {
                    self.report(&field_path, "required field is null");
                    Some(Value::Null)
                }
                (_, Some(Value::Null)) => Some(Value::Null),
                (shape, Some(v)) => Some(self.check(v, shape, &field_path)),
            };

            if let Some(v) = checked {
                map.insert(field.name.clone(), v);
            }
        }
        map
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
