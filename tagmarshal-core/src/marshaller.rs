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

use crate::codec;
use crate::codec::Splitter;
use crate::config::Config;
use crate::error::Error;
use crate::mutate;
use crate::Marshal;

/// Entry point for every marshal, unmarshal and mutator operation.
///
/// A `Marshaller` owns a [`Config`] and is built with chained setters.
/// It holds no per-call state and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use tagmarshal_core::Marshaller;
///
/// let marshaller = Marshaller::default()
///     .tag("query")
///     .exclude_tag("x")
///     .csv_delimiter("|");
/// assert_eq!(marshaller.config().csv_delimiter(), "|");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Marshaller {
    config: Config,
}

impl Marshaller {
    pub fn new(config: Config) -> Self {
        Marshaller { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets the tag namespace that names fields in query and JSON encodings.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tag = tag.into();
        self
    }

    /// Sets the namespace whose `"-"` value excludes a field.
    pub fn exclude_tag(mut self, exclude_tag: impl Into<String>) -> Self {
        self.config.exclude_tag = exclude_tag.into();
        self
    }

    pub fn csv_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.csv_delimiter = delimiter.into();
        self
    }

    /// Sets the chrono pattern used by date-time fields without `timeformat`.
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.config.default_time_format = format.into();
        self
    }

    /// Sets the chrono pattern used by date fields without `timeformat`.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.default_date_format = format.into();
        self
    }

    pub fn to_query_string<T: Marshal>(&self, record: &T) -> Result<String, Error> {
        codec::to_query_string(T::descriptor(), record, &self.config)
    }

    pub fn to_json<T: Marshal>(&self, record: &T) -> Result<String, Error> {
        codec::to_json(T::descriptor(), record, &self.config)
    }

    pub fn to_json_array<T: Marshal>(&self, records: &[T]) -> Result<String, Error> {
        codec::to_json_array(T::descriptor(), records, &self.config)
    }

    pub fn from_json<T: Marshal>(&self, record: &mut T, payload: &str) -> Result<(), Error> {
        codec::from_json(T::descriptor(), record, payload, &self.config)
    }

    pub fn to_csv<T: Marshal>(&self, record: &T) -> Result<String, Error> {
        codec::to_csv(T::descriptor(), record, &self.config)
    }

    pub fn from_csv<T: Marshal>(&self, record: &mut T, payload: &str) -> Result<(), Error> {
        codec::from_csv(T::descriptor(), record, payload, &self.config, None)
    }

    /// Like [`Marshaller::from_csv`], tokenizing with `splitter` instead of the delimiter.
    pub fn from_csv_with<T, F>(
        &self,
        record: &mut T,
        payload: &str,
        splitter: F,
    ) -> Result<(), Error>
    where
        T: Marshal,
        F: Fn(&str) -> Vec<String>,
    {
        let splitter: Splitter<'_> = &splitter;
        codec::from_csv(T::descriptor(), record, payload, &self.config, Some(splitter))
    }

    pub fn clear_fields<T: Marshal>(&self, record: &mut T) {
        mutate::clear_fields(T::descriptor(), record)
    }

    pub fn apply_defaults<T: Marshal>(&self, record: &mut T) -> bool {
        mutate::apply_defaults(T::descriptor(), record, &self.config)
    }

    pub fn is_any_field_set<T: Marshal>(&self, record: &T) -> bool {
        mutate::is_any_field_set(T::descriptor(), record, &self.config)
    }

    pub fn count_unsatisfied_required_fields<T: Marshal>(&self, record: &T) -> usize {
        mutate::count_unsatisfied_required_fields(T::descriptor(), record)
    }

    pub fn fill<S: Marshal, D: Marshal>(&self, src: &S, dst: &mut D) {
        mutate::fill(S::descriptor(), src, D::descriptor(), dst, &self.config)
    }
}

fn with_namespaces(tag: &str, exclude_tag: &str) -> Marshaller {
    Marshaller::default().tag(tag).exclude_tag(exclude_tag)
}

/// Encodes `record` as a query string named by `tag`.
pub fn to_query_string<T: Marshal>(
    record: &T,
    tag: &str,
    exclude_tag: &str,
) -> Result<String, Error> {
    with_namespaces(tag, exclude_tag).to_query_string(record)
}

/// Encodes `record` as a flat JSON object named by `tag`.
pub fn to_json<T: Marshal>(record: &T, tag: &str, exclude_tag: &str) -> Result<String, Error> {
    with_namespaces(tag, exclude_tag).to_json(record)
}

pub fn to_json_array<T: Marshal>(
    records: &[T],
    tag: &str,
    exclude_tag: &str,
) -> Result<String, Error> {
    with_namespaces(tag, exclude_tag).to_json_array(records)
}

/// Decodes a flat JSON object into `record`.
pub fn from_json<T: Marshal>(
    record: &mut T,
    payload: &str,
    tag: &str,
    exclude_tag: &str,
) -> Result<(), Error> {
    with_namespaces(tag, exclude_tag).from_json(record, payload)
}

pub fn to_csv<T: Marshal>(record: &T, delimiter: &str) -> Result<String, Error> {
    Marshaller::default().csv_delimiter(delimiter).to_csv(record)
}

pub fn from_csv<T: Marshal>(record: &mut T, payload: &str, delimiter: &str) -> Result<(), Error> {
    Marshaller::default()
        .csv_delimiter(delimiter)
        .from_csv(record, payload)
}

pub fn from_csv_with<T, F>(record: &mut T, payload: &str, splitter: F) -> Result<(), Error>
where
    T: Marshal,
    F: Fn(&str) -> Vec<String>,
{
    Marshaller::default().from_csv_with(record, payload, splitter)
}

pub fn clear_fields<T: Marshal>(record: &mut T) {
    Marshaller::default().clear_fields(record)
}

pub fn apply_defaults<T: Marshal>(record: &mut T) -> bool {
    Marshaller::default().apply_defaults(record)
}

pub fn is_any_field_set<T: Marshal>(record: &T) -> bool {
    Marshaller::default().is_any_field_set(record)
}

pub fn count_unsatisfied_required_fields<T: Marshal>(record: &T) -> usize {
    Marshaller::default().count_unsatisfied_required_fields(record)
}

pub fn fill<S: Marshal, D: Marshal>(src: &S, dst: &mut D) {
    Marshaller::default().fill(src, dst)
}
