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

//! # tagmarshal derive macro
//!
//! `#[derive(Marshal)]` builds the field descriptor table the tagmarshal
//! engine walks. Each field's `#[marshal(...)]` attributes are embedded
//! verbatim in the table, and the getter, setter and validator methods they
//! name are compiled into direct calls.
//!
//! ## Attribute keys
//!
//! | Key | Meaning |
//! |-----|---------|
//! | any other identifier | tag namespace, e.g. `json = "first_name"`; `"-"` excludes |
//! | `getter` | `m`, `base.m`, `m(x)` or `base.m(x)` |
//! | `setter` | `m` or `base.m`; always receives the text |
//! | `def` | default value |
//! | `booltrue`, `boolfalse` | bool literal overrides; `" "` marks prefix presence |
//! | `timeformat` | chrono pattern |
//! | `outprefix` | output prefix, and the lookup key of prefixed CSV rows |
//! | `uniqueid` | unique group id |
//! | `skipblank`, `skipzero`, `zeroblank`, `req` | flags |
//! | `pos` | CSV position, or `"-"` for setter-computed fields |
//! | `kind`, `regex` | `A N AN ANS H B64 B REGEX` character filters |
//! | `size`, `range` | `x`, `x..`, `..y`, `x..y`, size with optional `+%z` |
//! | `validate` | `==a\|\|b`, `!=a&&b`, `<=n`, `<n`, `>=n`, `>n`, `:=method` |
//! | `poly` | registry tag of an `Option<Box<dyn Trait>>` field |
//!
//! ## Example
//!
//! ```rust,ignore
//! use tagmarshal::Marshal;
//!
//! #[derive(Marshal, Default)]
//! struct Person {
//!     #[marshal(json = "name", pos = 0)]
//!     name: String,
//!     #[marshal(json = "age", def = "18", pos = 1, kind = "N")]
//!     age: i32,
//! }
//! ```
//!
//! Generated code refers to `::tagmarshal_core`, so the using crate depends
//! on `tagmarshal-core` as well as `tagmarshal`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro building the `Marshal` descriptor table of a struct.
///
/// Only non-generic structs with named fields are supported. Every field
/// type must implement `FieldValue`, except `Option<Box<dyn Trait>>`
/// fields, which are polymorphic.
#[proc_macro_derive(Marshal, attributes(marshal))]
pub fn proc_macro_derive_marshal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_marshal(&input)
}
