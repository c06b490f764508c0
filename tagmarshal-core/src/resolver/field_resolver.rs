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

//! Per-call field resolution.
//!
//! A [`FieldDescriptor`] holds what a field declares; this module decides,
//! for one call, what the field means under the namespaces the caller
//! asked for. The claim maps live only as long as the call that owns them.

use crate::meta::FieldDescriptor;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Output key of `field` under `tag`, or `None` when the field is excluded.
///
/// The exclusion namespace is consulted first; a blank key in the primary
/// namespace falls back to the field name.
pub fn output_key<R>(
    field: &FieldDescriptor<R>,
    tag: &str,
    exclude_tag: &str,
) -> Option<&'static str> {
    if !exclude_tag.is_empty() && field.tag(exclude_tag).map(str::trim) == Some("-") {
        log::trace!("field {} excluded by '{}' namespace", field.name, exclude_tag);
        return None;
    }
    match field.tag(tag).map(str::trim).unwrap_or("") {
        "-" => None,
        "" => Some(field.name),
        key => Some(key),
    }
}

/// Unique-group claims of one walk: group id -> field holding it.
#[derive(Debug, Default)]
pub struct UniqueGroups {
    claims: HashMap<String, &'static str>,
}

impl UniqueGroups {
    /// Claims the field's group. Fields without a group always succeed.
    pub fn claim<R>(&mut self, field: &FieldDescriptor<R>) -> bool {
        let Some(group) = field.policy.unique_id.as_deref() else {
            return true;
        };
        match self.claims.entry(group.to_string()) {
            Entry::Occupied(owner) => {
                log::trace!(
                    "field {} skipped, unique group '{}' held by {}",
                    field.name,
                    group,
                    owner.get()
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(field.name);
                true
            }
        }
    }

    /// Returns the field's group to unclaimed so a later member may produce output.
    pub fn release<R>(&mut self, field: &FieldDescriptor<R>) {
        if let Some(group) = field.policy.unique_id.as_deref() {
            if self.claims.remove(group).is_some() {
                log::trace!("field {} released unique group '{}'", field.name, group);
            }
        }
    }

    /// Whether the field holds a claim on its group.
    pub fn holds<R>(&self, field: &FieldDescriptor<R>) -> bool {
        field
            .policy
            .unique_id
            .as_deref()
            .and_then(|group| self.claims.get(group))
            .is_some_and(|owner| *owner == field.name)
    }
}

/// Resolves fields of one query or JSON walk.
pub struct FieldResolver<'a> {
    tag: &'a str,
    exclude_tag: &'a str,
    groups: UniqueGroups,
}

impl<'a> FieldResolver<'a> {
    pub fn new(tag: &'a str, exclude_tag: &'a str) -> Self {
        FieldResolver {
            tag,
            exclude_tag,
            groups: UniqueGroups::default(),
        }
    }

    /// Output key of a participating field; claims its unique group on the way.
    pub fn resolve<R>(&mut self, field: &FieldDescriptor<R>) -> Option<&'static str> {
        let key = output_key(field, self.tag, self.exclude_tag)?;
        self.groups.claim(field).then_some(key)
    }

    pub fn release<R>(&mut self, field: &FieldDescriptor<R>) {
        self.groups.release(field)
    }

    pub fn groups_mut(&mut self) -> &mut UniqueGroups {
        &mut self.groups
    }
}

/// CSV prefix claims of one unmarshal walk, keyed by lowercased prefix.
#[derive(Debug, Default)]
pub struct PrefixClaims {
    claimed: HashSet<String>,
}

impl PrefixClaims {
    /// Finds the first token carrying `prefix` (case-insensitive) and returns
    /// the remainder. A prefix already consumed by an earlier field never
    /// matches again.
    pub fn take<'t>(&mut self, tokens: &'t [String], prefix: &str) -> Option<&'t str> {
        let key = prefix.to_lowercase();
        if self.claimed.contains(&key) {
            return None;
        }
        let remainder = tokens.iter().find_map(|token| {
            let head = token.get(..prefix.len())?;
            head.eq_ignore_ascii_case(prefix)
                .then(|| &token[prefix.len()..])
        })?;
        self.claimed.insert(key);
        Some(remainder)
    }
}
