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

//! Kind filtering and structural constraints.
//!
//! Encoding is strict: minimum length, numeric range and `req` are
//! enforced. Decoding only truncates to the maximum length and checks the
//! modulo.

use crate::error::Error;
use crate::meta::{FieldDescriptor, Kind};
use crate::types::TRUE_WORDS;
use crate::util::{
    extract_alpha, extract_alpha_numeric, extract_hex, extract_numeric, extract_printable,
    strip_matches,
};

/// Result of filtering rendered text by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Filtered {
    Text(String),
    /// Final text; no further default, constraint or validation applies.
    Settled(String),
}

fn truthy_word(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    if TRUE_WORDS.contains(&lower.as_str()) {
        "true".to_string()
    } else {
        "false".to_string()
    }
}

fn filter_chars(kind: &Kind, text: &str, keep_symbols: bool) -> String {
    match kind {
        Kind::Alpha => extract_alpha(text),
        Kind::Numeric => extract_numeric(text),
        Kind::AlphaNumeric => extract_alpha_numeric(text),
        Kind::AlphaNumericSymbols if keep_symbols => text.to_string(),
        Kind::AlphaNumericSymbols | Kind::Base64 => extract_printable(text),
        Kind::Hex => extract_hex(text),
        Kind::Regex(re) => strip_matches(text, re),
        Kind::Free | Kind::Bool => text.to_string(),
    }
}

/// Marshal-direction kind filter.
///
/// `ANS` text produced by a getter is trusted as is. `B` without literals
/// folds truthy words to `true`; with both literals trimming to the same
/// text, `false` settles as an empty value.
pub fn filter_output<R>(field: &FieldDescriptor<R>, text: String) -> Filtered {
    let policy = &field.policy;
    match &policy.kind {
        Kind::Bool => {
            let literals = policy.literals;
            if literals.is_unset() {
                Filtered::Text(truthy_word(&text))
            } else if literals.truthy.trim() == literals.falsy.trim() && text == "false" {
                Filtered::Settled(String::new())
            } else {
                Filtered::Text(text)
            }
        }
        kind => Filtered::Text(filter_chars(kind, &text, field.has_getter())),
    }
}

/// Unmarshal-direction kind filter. `ANS` text headed for a setter is left alone.
pub fn filter_input<R>(field: &FieldDescriptor<R>, text: &str) -> String {
    match &field.policy.kind {
        Kind::Bool => truthy_word(text),
        kind => filter_chars(kind, text, field.has_setter()),
    }
}

fn truncate(text: String, max: usize) -> String {
    if max > 0 && text.chars().count() > max {
        text.chars().take(max).collect()
    } else {
        text
    }
}

fn check_modulo<R>(field: &FieldDescriptor<R>, text: &str) -> Result<(), Error> {
    let modulo = field.policy.size.modulo;
    if modulo > 0 && text.chars().count() % modulo != 0 {
        return Err(Error::constraint(format!(
            "{} expects value in blocks of {} characters",
            field.name, modulo
        )));
    }
    Ok(())
}

/// Size, range and `req` checks on text about to be encoded. Returns the
/// text truncated to the maximum size.
pub fn enforce_output<R>(field: &FieldDescriptor<R>, text: String) -> Result<String, Error> {
    let policy = &field.policy;
    let mut text = text;
    if policy.kind.is_filtered() {
        let min = policy.size.min;
        let len = text.chars().count();
        if min > 0 && len > 0 && len < min {
            return Err(Error::constraint(format!(
                "{} min length is {}",
                field.name, min
            )));
        }
        text = truncate(text, policy.size.max);
        check_modulo(field, &text)?;
    }
    if matches!(policy.kind, Kind::Numeric) || field.kind.is_numeric() {
        if let Ok(n) = text.trim().parse::<f64>() {
            let range = policy.range;
            if range.min > 0 && n < range.min as f64 && !(n == 0.0 && !policy.required) {
                return Err(Error::constraint(format!(
                    "{} range minimum is {}",
                    field.name, range.min
                )));
            }
            if range.max > 0 && n > range.max as f64 {
                return Err(Error::constraint(format!(
                    "{} range maximum is {}",
                    field.name, range.max
                )));
            }
        }
    }
    if policy.required && text.is_empty() {
        return Err(Error::required(field.name));
    }
    Ok(text)
}

/// Maximum-size truncation and modulo check on decoded text.
pub fn enforce_input<R>(field: &FieldDescriptor<R>, text: String) -> Result<String, Error> {
    if !field.policy.kind.is_filtered() {
        return Ok(text);
    }
    let text = truncate(text, field.policy.size.max);
    check_modulo(field, &text)?;
    Ok(text)
}
