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

//! Delimited records.
//!
//! Fields with an output prefix are addressed by that prefix wherever their
//! token appears; all other placed fields are addressed by `pos`.

use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::meta::{Position, RecordDescriptor};
use crate::mutate::{
    apply_defaults, clear_fields, count_unsatisfied_required_fields, is_any_field_set,
};
use crate::pipeline::{field_text, Rendered};
use crate::resolver::{PrefixClaims, UniqueGroups};
use crate::walker::{apply_input, finish_output, settle_unknown};

/// Splits a CSV payload into tokens in place of the configured delimiter.
pub type Splitter<'a> = &'a dyn Fn(&str) -> Vec<String>;

/// Encodes the record's placed fields into one delimited row.
///
/// A record with nothing set and at least one unsatisfied required field
/// encodes as an empty row.
pub fn to_csv<R>(
    descriptor: &RecordDescriptor<R>,
    record: &R,
    config: &Config,
) -> Result<String, Error> {
    if !is_any_field_set(descriptor, record, config)
        && count_unsatisfied_required_fields(descriptor, record) > 0
    {
        return Ok(String::new());
    }

    let mut slots: Vec<Option<String>> = vec![None; descriptor.len()];
    let mut groups = UniqueGroups::default();
    for field in descriptor.fields() {
        let Position::Ordinal(pos) = field.policy.position else {
            continue;
        };
        if pos >= slots.len() || !groups.claim(field) {
            continue;
        }
        let text = match field_text(field, record, config)? {
            Rendered::Text(text) => text,
            Rendered::Skip => {
                groups.release(field);
                continue;
            }
        };
        let Some(text) = settle_unknown(field, record, text, &mut groups) else {
            continue;
        };
        slots[pos] = Some(finish_output(field, record, text, true)?);
    }
    Ok(slots
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(config.csv_delimiter()))
}

/// Decodes one delimited row into the record.
///
/// The record is cleared and defaulted first. Reading stops quietly at the
/// first ordinal field past the last token, and a prefixed field whose
/// prefix never appears keeps its default. Any rejected field resets the
/// record.
pub fn from_csv<R>(
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
    payload: &str,
    config: &Config,
    splitter: Option<Splitter<'_>>,
) -> Result<(), Error> {
    ensure!(
        !payload.trim().is_empty(),
        Error::precondition("csv payload is required")
    );
    ensure!(
        !config.csv_delimiter().is_empty() || splitter.is_some(),
        Error::precondition("csv delimiter or splitter is required")
    );
    let tokens: Vec<String> = match splitter {
        Some(split) => split(payload),
        None => payload
            .split(config.csv_delimiter())
            .map(str::to_string)
            .collect(),
    };

    clear_fields(descriptor, record);
    apply_defaults(descriptor, record, config);

    let mut prefixes = PrefixClaims::default();
    for field in descriptor.fields() {
        let policy = &field.policy;
        let (text, computed) = match policy.position {
            Position::Unplaced => continue,
            Position::Computed if !field.has_setter() => continue,
            Position::Computed => (String::new(), true),
            Position::Ordinal(pos) if !policy.has_prefix() => {
                let Some(token) = tokens.get(pos) else {
                    log::trace!("csv row ends before field {} at {}", field.name, pos);
                    return Ok(());
                };
                (policy.literals.normalize(token).to_string(), false)
            }
            Position::Ordinal(_) => {
                let Some(rest) = prefixes.take(&tokens, policy.prefix) else {
                    continue;
                };
                let text = if rest.is_empty() && policy.literals.true_is_sentinel() {
                    "true"
                } else {
                    policy.literals.normalize(rest)
                };
                (text.to_string(), false)
            }
        };
        if let Err(e) = apply_input(field, record, text, computed, config) {
            log::debug!("csv field {} rejected, record reset: {}", field.name, e);
            clear_fields(descriptor, record);
            return Err(e);
        }
    }
    Ok(())
}
