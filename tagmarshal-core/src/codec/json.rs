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

//! Flat JSON objects: one level of `"key":"value"` pairs, values always
//! encoded as strings.

use crate::codec::check_namespaces;
use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::meta::RecordDescriptor;
use crate::mutate::{apply_defaults, clear_fields};
use crate::resolver::output_key;
use crate::util::{escape_json, unescape_apostrophes};
use crate::walker::{apply_input, finish_output, walk_output};
use serde_json::{Map, Value as JsonValue};

pub fn to_json<R>(
    descriptor: &RecordDescriptor<R>,
    record: &R,
    config: &Config,
) -> Result<String, Error> {
    check_namespaces(config)?;
    let mut members = Vec::with_capacity(descriptor.len());
    walk_output(descriptor, record, config, |visit| {
        let value = finish_output(visit.field, record, visit.text, false)?;
        members.push(format!(
            "\"{}\":\"{}\"",
            escape_json(visit.key),
            escape_json(&value)
        ));
        Ok(())
    })?;
    ensure!(
        !members.is_empty(),
        Error::blank_output(format!("json of {}", descriptor.name))
    );
    Ok(format!("{{{}}}", members.join(", ")))
}

/// Encodes each record with [`to_json`] and joins them into an array.
pub fn to_json_array<R>(
    descriptor: &RecordDescriptor<R>,
    records: &[R],
    config: &Config,
) -> Result<String, Error> {
    ensure!(
        !records.is_empty(),
        Error::precondition("at least one record is required")
    );
    let items = records
        .iter()
        .map(|record| to_json(descriptor, record, config))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(format!("[{}]", items.join(", ")))
}

fn member_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn parse_object(payload: &str) -> Result<Map<String, JsonValue>, Error> {
    let payload = unescape_apostrophes(payload);
    match serde_json::from_str::<JsonValue>(&payload) {
        Ok(JsonValue::Object(members)) if !members.is_empty() => Ok(members),
        Ok(JsonValue::Object(_)) => Err(Error::decode("json payload has no members")),
        Ok(_) => Err(Error::decode("json payload is not an object")),
        Err(e) => Err(Error::decode(format!("invalid json payload: {}", e))),
    }
}

/// Decodes a flat JSON object into the record.
///
/// A payload that does not parse leaves the record untouched. Otherwise the
/// record is cleared, defaults are applied, and every member whose key
/// names a field is written; missing keys keep their defaults. A field that
/// fails to decode resets the whole record.
pub fn from_json<R>(
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
    payload: &str,
    config: &Config,
) -> Result<(), Error> {
    ensure!(
        !payload.trim().is_empty(),
        Error::precondition("json payload is required")
    );
    check_namespaces(config)?;
    let members = parse_object(payload)?;

    clear_fields(descriptor, record);
    apply_defaults(descriptor, record, config);

    for field in descriptor.fields() {
        let Some(key) = output_key(field, config.tag(), config.exclude_tag()) else {
            continue;
        };
        let Some(member) = members.get(key) else {
            continue;
        };
        let raw = member_text(member);
        let literals = field.policy.literals;
        let text = if literals.true_is_sentinel()
            && field.policy.has_prefix()
            && raw == field.policy.prefix
        {
            "true".to_string()
        } else {
            literals.normalize(&raw).to_string()
        };
        if let Err(e) = apply_input(field, record, text, false, config) {
            log::debug!("json field {} rejected, record reset: {}", field.name, e);
            clear_fields(descriptor, record);
            return Err(e);
        }
    }
    Ok(())
}
