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

use crate::types::{ValueKind, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};

/// Configuration for tagmarshal operations.
///
/// Holds the tag namespaces and encoding defaults that a [`Marshaller`]
/// hands to every walk. A field's own `timeformat` always wins over the
/// defaults here.
///
/// [`Marshaller`]: crate::marshaller::Marshaller
#[derive(Clone, Debug)]
pub struct Config {
    /// Tag namespace naming fields in query and JSON encodings.
    pub tag: String,
    /// Independent namespace whose `"-"` value excludes a field; may be empty.
    pub exclude_tag: String,
    /// Delimiter joining and splitting CSV tokens.
    pub csv_delimiter: String,
    /// chrono pattern for date-time fields without a `timeformat`.
    pub default_time_format: String,
    /// chrono pattern for date fields without a `timeformat`.
    pub default_date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag: "json".to_string(),
            exclude_tag: String::new(),
            csv_delimiter: ",".to_string(),
            default_time_format: DEFAULT_DATETIME_FORMAT.to_string(),
            default_date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline(always)]
    pub fn exclude_tag(&self) -> &str {
        &self.exclude_tag
    }

    #[inline(always)]
    pub fn csv_delimiter(&self) -> &str {
        &self.csv_delimiter
    }

    /// Resolves the time format for a field: its own declaration, else the
    /// configured default for its kind.
    pub fn time_format<'a>(&'a self, declared: &'a str, kind: ValueKind) -> &'a str {
        if !declared.is_empty() {
            return declared;
        }
        match kind {
            ValueKind::Date => &self.default_date_format,
            ValueKind::DateTime => &self.default_time_format,
            _ => "",
        }
    }
}
