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

//! Canonical rendering of one field for the encoders.

use crate::config::Config;
use crate::error::Error;
use crate::meta::FieldDescriptor;
use crate::types::{Value, ValueKind};

/// Outcome of rendering one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    Text(String),
    /// A skip policy applies; the field produces nothing.
    Skip,
}

/// The value the encoders see: the getter's result when one is declared,
/// the stored value otherwise.
pub fn effective_value<R>(
    field: &FieldDescriptor<R>,
    record: &R,
    config: &Config,
) -> Result<Value, Error> {
    match &field.access.getter {
        Some(getter) => {
            let own_text = if getter.takes_text {
                field.text(record, config)?
            } else {
                String::new()
            };
            Ok((getter.call)(record, &own_text))
        }
        None => Ok(field.read(record)),
    }
}

/// Renders a value under the field's literal and skip policies.
///
/// `skipblank` drops blank text and unset wrappers, `skipzero` drops zero
/// numbers, `false`, zero dates and unset wrappers, `zeroblank` renders zero
/// numbers and dates as blank text.
pub fn render<R>(
    field: &FieldDescriptor<R>,
    value: &Value,
    config: &Config,
) -> Result<Rendered, Error> {
    let policy = &field.policy;
    let text = match value {
        Value::Blank => {
            if policy.skip_blank || policy.skip_zero {
                return Ok(Rendered::Skip);
            }
            String::new()
        }
        Value::Str(s) => {
            if policy.skip_blank && s.trim().is_empty() {
                return Ok(Rendered::Skip);
            }
            s.clone()
        }
        Value::Bool(b) => {
            if policy.skip_zero && !b {
                return Ok(Rendered::Skip);
            }
            match policy.literals.render(*b) {
                Some(literal) => literal.to_string(),
                None => b.to_string(),
            }
        }
        Value::Int(_) | Value::Uint(_) | Value::Float(_) | Value::DateTime(_) | Value::Date(_) => {
            if value.is_zero() {
                if policy.skip_zero {
                    return Ok(Rendered::Skip);
                }
                if policy.zero_blank {
                    return Ok(Rendered::Text(String::new()));
                }
            }
            value.to_text(field.time_format(config))?
        }
    };
    Ok(Rendered::Text(text))
}

/// Effective value of the field, rendered.
pub fn field_text<R>(
    field: &FieldDescriptor<R>,
    record: &R,
    config: &Config,
) -> Result<Rendered, Error> {
    let value = effective_value(field, record, config)?;
    render(field, &value, config)
}

/// An integer field holding its zero value that renders as `"unknown"` is
/// an unset enum and counts as absent.
pub fn is_unknown_sentinel<R>(field: &FieldDescriptor<R>, record: &R, text: &str) -> bool {
    field.kind == ValueKind::Int && field.is_zero(record) && text.eq_ignore_ascii_case("unknown")
}
