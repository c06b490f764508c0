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

//! # tagmarshal core
//!
//! The engine behind `#[derive(Marshal)]`: it converts records to and from
//! URL query strings, flat JSON objects and delimited CSV rows, driven by
//! policies declared on each field.
//!
//! ## Architecture
//!
//! - **`meta`**: field descriptor tables and the policies parsed from field attributes
//! - **`resolver`**: per-call field resolution and the polymorphic type registry
//! - **`serializer`**: conversions between field types and the canonical [`Value`]
//! - **`pipeline`**: rendering, kind filtering, constraints and validation of one field
//! - **`walker`**: field-by-field traversal shared by the encoders
//! - **`codec`**: query string, JSON and CSV framing
//! - **`mutate`**: clearing, defaulting and inspecting whole records
//! - **`marshaller`**: the [`Marshaller`] entry point and free-function wrappers
//! - **`config`**, **`error`**, **`types`**, **`util`**
//!
//! ## Usage
//!
//! This crate is normally used through the `tagmarshal` crate, which adds
//! the derive macro. Generated code refers to `tagmarshal_core` by path, so
//! depend on both.
//!
//! ```rust
//! use tagmarshal_core::{Config, Marshaller};
//!
//! let marshaller = Marshaller::new(Config::new()).tag("query");
//! assert_eq!(marshaller.config().tag(), "query");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod marshaller;
pub mod meta;
pub mod mutate;
pub mod pipeline;
pub mod resolver;
pub mod serializer;
pub mod types;
pub mod util;
pub mod walker;

pub use config::Config;
pub use error::Error;
pub use marshaller::{
    apply_defaults, clear_fields, count_unsatisfied_required_fields, fill, from_csv,
    from_csv_with, from_json, is_any_field_set, to_csv, to_json, to_json_array,
    to_query_string, Marshaller,
};
pub use meta::{FieldAccess, FieldDescriptor, RecordDescriptor};
pub use resolver::{create_type, register_type, type_registry, TypeRegistry};
pub use serializer::{FieldValue, SetterOutput, ToValue, Verdict};
pub use types::{Value, ValueKind};

/// A record type with a field descriptor table.
///
/// Implemented by `#[derive(Marshal)]`; the table is built on first use and
/// shared for the life of the process.
pub trait Marshal: Sized + 'static {
    fn descriptor() -> &'static RecordDescriptor<Self>;
}
