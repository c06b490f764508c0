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

//! # tagmarshal
//!
//! Converts flat records to and from URL query strings, flat JSON objects
//! and delimited CSV rows. Every field declares its behavior with
//! `#[marshal(...)]` attributes: the key it is known by in each tag
//! namespace, defaults, bool literals, character kinds, size and range
//! constraints, validation, CSV placement, and getter or setter methods
//! that transform its value.
//!
//! The derive macro builds a descriptor table per type once; every call then
//! walks that table without runtime reflection.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use tagmarshal::{Marshal, Marshaller};
//!
//! #[derive(Marshal, Default, Debug)]
//! struct Person {
//!     #[marshal(json = "name", query = "n", pos = 0, req)]
//!     name: String,
//!     #[marshal(json = "age", query = "a", pos = 1, def = "18", kind = "N")]
//!     age: i32,
//!     #[marshal(json = "vip", pos = 2, booltrue = "Y", boolfalse = "N")]
//!     vip: bool,
//! }
//!
//! let person = Person { name: "Ann Lee".into(), age: 30, vip: true };
//! assert_eq!(
//!     tagmarshal::to_json(&person, "json", "")?,
//!     r#"{"name":"Ann Lee", "age":"30", "vip":"Y"}"#
//! );
//! assert_eq!(
//!     tagmarshal::to_query_string(&person, "query", "")?,
//!     "n=Ann%20Lee&a=30&vip=Y"
//! );
//! assert_eq!(tagmarshal::to_csv(&person, ",")?, "Ann Lee,30,Y");
//!
//! let mut back = Person::default();
//! Marshaller::default().from_csv(&mut back, "Bo,41,N")?;
//! assert_eq!(back.age, 41);
//! ```
//!
//! ## Polymorphic fields
//!
//! A field declared as `Option<Box<dyn Trait>>` with `poly` is instantiated
//! from the process-wide type registry before its setter runs:
//!
//! ```rust,ignore
//! tagmarshal::register_poly_type!(Shape, "Shape", Circle);
//! ```
//!
//! ## Crates
//!
//! Generated code names `tagmarshal_core` by path, so a crate deriving
//! `Marshal` depends on both `tagmarshal` and `tagmarshal-core`.
//!
//! ## Debugging
//!
//! Build with `TAGMARSHAL_PANIC_ON_ERROR=1` to panic where an error is
//! created, and enable `trace` logging for the `tagmarshal_core` target to
//! see exclusions, unique-group claims and CSV prefix lookups.

pub use tagmarshal_core::{
    apply_defaults, bail, clear_fields, count_unsatisfied_required_fields, create_type, ensure,
    fill, from_csv, from_csv_with, from_json, is_any_field_set, register_poly_type, register_type,
    to_csv, to_json, to_json_array, to_query_string, type_registry, Config, Error, FieldAccess,
    FieldDescriptor, FieldValue, Marshal, Marshaller, RecordDescriptor, SetterOutput, ToValue,
    TypeRegistry, Value, ValueKind, Verdict,
};
pub use tagmarshal_derive::Marshal;
