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
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Words accepted as `true` when a field is declared with the `B` kind.
pub const TRUE_WORDS: [&str; 5] = ["true", "yes", "on", "1", "enabled"];

/// Static category of a field, known from its declared Rust type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Bool,
    /// Signed integers, and enums that expose their ordinal as an integer.
    Int,
    Uint,
    Float,
    DateTime,
    Date,
    /// `Option<Box<dyn Trait>>` fields instantiated through the type registry.
    Poly,
}

impl ValueKind {
    #[inline(always)]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Uint | ValueKind::Float)
    }
}

/// Canonical dynamic value produced by field accessors and getters.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Unset nullable wrapper, empty polymorphic slot, or a getter with nothing to say.
    #[default]
    Blank,
    Str(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl Value {
    pub fn is_blank(&self) -> bool {
        matches!(self, Value::Blank)
    }

    /// Whether the value equals the zero of its own kind.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Blank => true,
            Value::Str(s) => s.trim().is_empty(),
            Value::Bool(b) => !b,
            Value::Int(v) => *v == 0,
            Value::Uint(v) => *v == 0,
            Value::Float(v) => *v == 0.0,
            Value::DateTime(dt) => *dt == NaiveDateTime::default(),
            Value::Date(d) => *d == NaiveDate::default(),
        }
    }

    /// Renders the value with the canonical text rules and no literal overrides.
    ///
    /// `time_format` applies to date and date-time values; an empty format
    /// selects the ISO-style default for the value's kind.
    pub fn to_text(&self, time_format: &str) -> Result<String, Error> {
        let text = match self {
            Value::Blank => String::new(),
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::DateTime(dt) => {
                let format = if time_format.is_empty() {
                    DEFAULT_DATETIME_FORMAT
                } else {
                    time_format
                };
                let mut out = String::new();
                write!(out, "{}", dt.format(format))
                    .map_err(|_| Error::decode(format!("invalid time format '{format}'")))?;
                out
            }
            Value::Date(d) => {
                let format = if time_format.is_empty() {
                    DEFAULT_DATE_FORMAT
                } else {
                    time_format
                };
                let mut out = String::new();
                write!(out, "{}", d.format(format))
                    .map_err(|_| Error::decode(format!("invalid time format '{format}'")))?;
                out
            }
        };
        Ok(text)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}
