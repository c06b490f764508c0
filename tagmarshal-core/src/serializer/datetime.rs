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
use crate::types::{Value, ValueKind, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl FieldValue for NaiveDateTime {
    const KIND: ValueKind = ValueKind::DateTime;

    fn from_text(text: &str, time_format: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(NaiveDateTime::default());
        }
        let format = if time_format.is_empty() {
            DEFAULT_DATETIME_FORMAT
        } else {
            time_format
        };
        // Date-only formats carry no time of day.
        NaiveDateTime::parse_from_str(text, format)
            .or_else(|_| {
                NaiveDate::parse_from_str(text, format).map(|d| d.and_time(NaiveTime::MIN))
            })
            .map_err(|e| {
                Error::decode(format!(
                    "'{}' does not match time format '{}': {}",
                    text, format, e
                ))
            })
    }

    fn zero() -> Self {
        NaiveDateTime::default()
    }

    fn is_zero(&self) -> bool {
        *self == NaiveDateTime::default()
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl FieldValue for NaiveDate {
    const KIND: ValueKind = ValueKind::Date;

    fn from_text(text: &str, time_format: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(NaiveDate::default());
        }
        let format = if time_format.is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            time_format
        };
        NaiveDate::parse_from_str(text, format)
            .or_else(|_| NaiveDateTime::parse_from_str(text, format).map(|dt| dt.date()))
            .map_err(|e| {
                Error::decode(format!(
                    "'{}' does not match date format '{}': {}",
                    text, format, e
                ))
            })
    }

    fn zero() -> Self {
        NaiveDate::default()
    }

    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}
