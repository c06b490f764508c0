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

//! Whole-record operations.

use crate::config::Config;
use crate::meta::RecordDescriptor;
use crate::types::ValueKind;

/// Resets every field to its zero value; polymorphic fields become `None`.
pub fn clear_fields<R>(descriptor: &RecordDescriptor<R>, record: &mut R) {
    for field in descriptor.fields() {
        field.clear(record);
    }
}

/// Fills every zero field that declares a default.
///
/// Integer defaults are first passed through the field's setter when one is
/// declared, so an enum field may default by name. A default that fails to
/// parse is ignored. Returns whether any field declares a default, not
/// whether anything changed.
pub fn apply_defaults<R>(
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
    config: &Config,
) -> bool {
    let mut declared = false;
    for field in descriptor.fields() {
        let Some(def) = field.policy.default else {
            continue;
        };
        declared = true;
        if field.is_poly() || !field.is_zero(record) {
            continue;
        }
        let mut text = def.to_string();
        if field.has_setter() && matches!(field.kind, ValueKind::Int | ValueKind::Uint) {
            match field.run_setter(record, def, config) {
                Ok(Some(adopted)) => text = adopted,
                Ok(None) => {}
                Err(e) => log::debug!("default of field {} not adopted: {}", field.name, e),
            }
        }
        if let Err(e) = field.write_text(record, &text, config) {
            log::debug!("default '{}' of field {} ignored: {}", text, field.name, e);
        }
    }
    declared
}

fn same_text(text: &str, def: &str) -> bool {
    if text == def {
        return true;
    }
    match (text.parse::<f64>(), def.trim().parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether any field holds a value that is neither zero nor its declared default.
pub fn is_any_field_set<R>(descriptor: &RecordDescriptor<R>, record: &R, config: &Config) -> bool {
    descriptor.fields().iter().any(|field| {
        if field.is_zero(record) {
            return false;
        }
        if field.is_poly() {
            return true;
        }
        match (field.policy.default, field.text(record, config)) {
            (Some(def), Ok(text)) => !same_text(&text, def),
            _ => true,
        }
    })
}

/// Counts `req` fields without a default whose value is still zero.
pub fn count_unsatisfied_required_fields<R>(descriptor: &RecordDescriptor<R>, record: &R) -> usize {
    descriptor
        .fields()
        .iter()
        .filter(|f| f.policy.required && f.policy.default.is_none() && f.is_zero(record))
        .count()
}

/// Copies every field of `src` into the same-named field of `dst` through
/// canonical text. Fields without a counterpart, or whose text does not
/// parse on the other side, are left untouched.
pub fn fill<S, D>(
    src_descriptor: &RecordDescriptor<S>,
    src: &S,
    dst_descriptor: &RecordDescriptor<D>,
    dst: &mut D,
    config: &Config,
) {
    for field in src_descriptor.fields() {
        if field.is_poly() {
            continue;
        }
        let Some(target) = dst_descriptor.field(field.name) else {
            continue;
        };
        let copied = field
            .text(src, config)
            .and_then(|text| target.write_text(dst, &text, config));
        if let Err(e) = copied {
            log::debug!("field {} not filled: {}", field.name, e);
        }
    }
}
