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

//! Time related utils.

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Seconds since the Unix epoch, floored.
pub fn epoch_seconds(t: DateTime) -> i64 {
    t.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_seconds_floors() {
        let t = chrono::Utc
            .timestamp_millis_opt(1_191_242_096_999)
            .single()
            .expect("timestamp must be valid");
        assert_eq!(epoch_seconds(t), 1_191_242_096);
    }
}
