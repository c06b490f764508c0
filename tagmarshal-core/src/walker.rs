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

//! The record walker.
//!
//! Fields are visited in declaration order, which fixes CSV slots and
//! decides which field wins a unique group. A unique group is held by the
//! first field that actually produces output: a field that claims its
//! group and is then skipped hands the claim back.

use crate::config::Config;
use crate::error::Error;
use crate::meta::{FieldDescriptor, RecordDescriptor, Validation};
use crate::pipeline::{
    enforce_input, enforce_output, field_text, filter_input, filter_output, is_unknown_sentinel,
    validate, Filtered, Rendered,
};
use crate::resolver::{FieldResolver, UniqueGroups};

/// A field that produced text during an encoding walk.
pub struct Visit<'d, R> {
    pub field: &'d FieldDescriptor<R>,
    /// Output key under the requested namespace.
    pub key: &'static str,
    /// Rendered text, before literal, default and constraint handling.
    pub text: String,
}

/// Applies the unknown-enum rule. `None` means the field drops out of the
/// walk and its group claim, if any, was released.
pub(crate) fn settle_unknown<R>(
    field: &FieldDescriptor<R>,
    record: &R,
    text: String,
    groups: &mut UniqueGroups,
) -> Option<String> {
    if !is_unknown_sentinel(field, record, &text) {
        return Some(text);
    }
    match field.policy.default {
        Some(def) => Some(def.to_string()),
        None if groups.holds(field) => {
            groups.release(field);
            None
        }
        None => Some(String::new()),
    }
}

/// Walks the fields taking part under the configured namespaces and hands
/// each produced text to `emit`. Fields whose rendering fails or is skipped
/// are left out.
pub fn walk_output<R, F>(
    descriptor: &RecordDescriptor<R>,
    record: &R,
    config: &Config,
    mut emit: F,
) -> Result<(), Error>
where
    F: FnMut(Visit<'_, R>) -> Result<(), Error>,
{
    let mut resolver = FieldResolver::new(config.tag(), config.exclude_tag());
    for field in descriptor.fields() {
        let Some(key) = resolver.resolve(field) else {
            continue;
        };
        let text = match field_text(field, record, config) {
            Ok(Rendered::Text(text)) => text,
            Ok(Rendered::Skip) => {
                resolver.release(field);
                continue;
            }
            Err(e) => {
                log::debug!("field {} left out, rendering failed: {}", field.name, e);
                resolver.release(field);
                continue;
            }
        };
        let Some(text) = settle_unknown(field, record, text, resolver.groups_mut()) else {
            continue;
        };
        emit(Visit { field, key, text })?;
    }
    Ok(())
}

/// A numeric field still holding zero has not been set; its default stands in.
fn is_unset_number<R>(field: &FieldDescriptor<R>, record: &R) -> bool {
    field.kind.is_numeric() && !field.has_getter() && field.is_zero(record)
}

/// Turns rendered text into the final encoded value: sentinel literals,
/// kind filter, default, constraints, validation, skip flags and prefix.
///
/// `with_prefix` is false for JSON, which never carries output prefixes.
pub fn finish_output<R>(
    field: &FieldDescriptor<R>,
    record: &R,
    text: String,
    with_prefix: bool,
) -> Result<String, Error> {
    let policy = &field.policy;
    if policy.has_prefix() {
        if policy.literals.false_is_sentinel() && text == "false" {
            return Ok(String::new());
        }
        if with_prefix && policy.literals.true_is_sentinel() && text == "true" {
            return Ok(policy.prefix.to_string());
        }
    }
    let text = match filter_output(field, text) {
        Filtered::Settled(text) => return Ok(text),
        Filtered::Text(text) => text,
    };
    let text = match policy.default {
        Some(def) if text.is_empty() || is_unset_number(field, record) => def.to_string(),
        _ => text,
    };
    let text = enforce_output(field, text)?;
    validate(field, record, &text)?;
    if (policy.skip_blank && text.trim().is_empty()) || (policy.skip_zero && text == "0") {
        Ok(String::new())
    } else if with_prefix {
        Ok(format!("{}{}", policy.prefix, text))
    } else {
        Ok(text)
    }
}

/// Writes decoded text into a field: kind filter, size, setter adoption,
/// validation and finally the typed write.
///
/// `computed` marks CSV fields without a slot of their own; they skip the
/// filters and always run their setter. The caller resets the record when
/// this fails.
pub fn apply_input<R>(
    field: &FieldDescriptor<R>,
    record: &mut R,
    text: String,
    computed: bool,
    config: &Config,
) -> Result<(), Error> {
    let mut text = text;
    if !computed {
        text = filter_input(field, &text);
        text = enforce_input(field, text)?;
    }
    if field.has_setter() && (computed || !text.is_empty()) {
        if field.is_poly() {
            if let Some(instantiate) = field.access.instantiate {
                log::debug!("instantiating polymorphic field {} before its setter", field.name);
                instantiate(record)?;
            }
            field.run_setter(record, &text, config)?;
            return Ok(());
        }
        match field.run_setter(record, &text, config)? {
            Some(adopted) => text = adopted,
            None => {
                log::debug!("setter of field {} produced nothing to adopt", field.name);
                return Ok(());
            }
        }
    }
    if matches!(field.policy.validation, Some(Validation::Predicate(_))) {
        field.write_text(record, &text, config)?;
        return validate(field, record, &text);
    }
    validate(field, record, &text)?;
    field.write_text(record, &text, config)
}
