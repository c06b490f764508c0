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

//! Field descriptor tables.
//!
//! `#[derive(Marshal)]` builds one [`RecordDescriptor`] per record type the
//! first time it is needed. Each [`FieldDescriptor`] bundles the field's
//! name, its raw attribute pairs, the policy parsed from them, and plain
//! function pointers that read and write the field. Getter and setter
//! methods named in attributes are compiled into those function pointers,
//! so nothing is looked up by name at run time.

use crate::config::Config;
use crate::error::Error;
use crate::meta::policy::{tag_value, FieldPolicy};
use crate::types::{Value, ValueKind};

pub type GetFn<R> = fn(&R) -> Value;
/// Parses text into the field: `(record, text, time_format)`.
pub type SetFn<R> = fn(&mut R, &str, &str) -> Result<(), Error>;
pub type ClearFn<R> = fn(&mut R);
pub type IsZeroFn<R> = fn(&R) -> bool;
/// Getter call; the text argument is the field's own canonical text when
/// the getter takes a parameter and empty otherwise.
pub type GetterFn<R> = fn(&R, &str) -> Value;
/// Setter call; returns the value to adopt, if any.
pub type SetterFn<R> = fn(&mut R, &str) -> Option<Value>;
pub type PredicateFn<R> = fn(&R) -> Result<(), String>;
/// Fills an unset polymorphic field from the type registry.
pub type InstantiateFn<R> = fn(&mut R) -> Result<(), Error>;

pub struct Getter<R> {
    pub takes_text: bool,
    pub call: GetterFn<R>,
}

/// Accessors for one field of record type `R`.
pub struct FieldAccess<R> {
    pub get: GetFn<R>,
    pub set: SetFn<R>,
    pub clear: ClearFn<R>,
    pub is_zero: IsZeroFn<R>,
    pub getter: Option<Getter<R>>,
    pub setter: Option<SetterFn<R>>,
    pub predicate: Option<PredicateFn<R>>,
    pub instantiate: Option<InstantiateFn<R>>,
}

impl<R> FieldAccess<R> {
    pub fn new(get: GetFn<R>, set: SetFn<R>, clear: ClearFn<R>, is_zero: IsZeroFn<R>) -> Self {
        FieldAccess {
            get,
            set,
            clear,
            is_zero,
            getter: None,
            setter: None,
            predicate: None,
            instantiate: None,
        }
    }

    pub fn with_getter(mut self, takes_text: bool, call: GetterFn<R>) -> Self {
        self.getter = Some(Getter { takes_text, call });
        self
    }

    pub fn with_setter(mut self, setter: SetterFn<R>) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn with_predicate(mut self, predicate: PredicateFn<R>) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_instantiate(mut self, instantiate: InstantiateFn<R>) -> Self {
        self.instantiate = Some(instantiate);
        self
    }
}

pub struct FieldDescriptor<R> {
    pub name: &'static str,
    pub kind: ValueKind,
    pub tags: &'static [(&'static str, &'static str)],
    pub policy: FieldPolicy,
    pub access: FieldAccess<R>,
}

impl<R> FieldDescriptor<R> {
    pub fn new(
        name: &'static str,
        kind: ValueKind,
        tags: &'static [(&'static str, &'static str)],
        access: FieldAccess<R>,
    ) -> Self {
        FieldDescriptor {
            name,
            kind,
            tags,
            policy: FieldPolicy::from_tags(tags),
            access,
        }
    }

    /// Raw value declared under `key`, e.g. a tag namespace.
    #[inline(always)]
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        tag_value(self.tags, key)
    }

    #[inline(always)]
    pub fn is_poly(&self) -> bool {
        self.kind == ValueKind::Poly
    }

    #[inline(always)]
    pub fn has_getter(&self) -> bool {
        self.access.getter.is_some()
    }

    #[inline(always)]
    pub fn has_setter(&self) -> bool {
        self.access.setter.is_some()
    }

    pub fn time_format<'a>(&'a self, config: &'a Config) -> &'a str {
        config.time_format(self.policy.time_format, self.kind)
    }

    #[inline(always)]
    pub fn read(&self, record: &R) -> Value {
        (self.access.get)(record)
    }

    #[inline(always)]
    pub fn is_zero(&self, record: &R) -> bool {
        (self.access.is_zero)(record)
    }

    #[inline(always)]
    pub fn clear(&self, record: &mut R) {
        (self.access.clear)(record)
    }

    /// Canonical text of the stored value, ignoring getters and literals.
    pub fn text(&self, record: &R, config: &Config) -> Result<String, Error> {
        self.read(record).to_text(self.time_format(config))
    }

    /// Parses `text` into the field with its resolved time format.
    pub fn write_text(&self, record: &mut R, text: &str, config: &Config) -> Result<(), Error> {
        (self.access.set)(record, text, self.time_format(config))
    }

    /// Runs the declared setter and returns the canonical text of what it
    /// produced, or `None` when nothing is to be adopted.
    pub fn run_setter(
        &self,
        record: &mut R,
        text: &str,
        config: &Config,
    ) -> Result<Option<String>, Error> {
        match self.access.setter {
            Some(setter) => match setter(record, text) {
                Some(value) => value.to_text(self.time_format(config)).map(Some),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }
}

/// The full field table of one record type, in declaration order.
pub struct RecordDescriptor<R> {
    pub name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R> RecordDescriptor<R> {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor<R>>) -> Self {
        RecordDescriptor { name, fields }
    }

    #[inline(always)]
    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
