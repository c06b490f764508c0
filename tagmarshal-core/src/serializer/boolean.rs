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

use crate::error::Error;
use crate::serializer::{FieldValue, ToValue};
use crate::types::{Value, ValueKind};

const TRUTHY: [&str; 7] = ["true", "t", "yes", "y", "on", "1", "enabled"];
const FALSY: [&str; 7] = ["false", "f", "no", "n", "off", "0", "disabled"];

/// Parses the bool words accepted in encoded text; `None` for anything else.
pub fn parse_bool(text: &str) -> Option<bool> {
    let lower = text.trim().to_ascii_lowercase();
    if lower.is_empty() || FALSY.contains(&lower.as_str()) {
        Some(false)
    } else if TRUTHY.contains(&lower.as_str()) {
        Some(true)
    } else {
        None
    }
}

impl ToValue for bool {
    #[inline(always)]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_text(text: &str, _time_format: &str) -> Result<Self, Error> {
        parse_bool(text).ok_or_else(|| Error::decode(format!("'{}' is not a valid bool", text)))
    }

    #[inline(always)]
    fn zero() -> Self {
        false
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        !*self
    }
}
