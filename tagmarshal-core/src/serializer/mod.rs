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

//! Conversions between field types and the canonical [`Value`].
//!
//! Every non-polymorphic field type implements [`FieldValue`]; the derive
//! macro only ever talks to a field through this trait, which keeps the
//! generated accessors free of per-type branches.

use crate::error::Error;
use crate::types::{Value, ValueKind};
use std::fmt::Display;

pub mod boolean;
mod datetime;
mod number;
mod option;
mod string;

/// Renders a value into its canonical dynamic form.
///
/// Getter methods may return any type implementing this trait.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// A field type the engine can read, write, clear and test for zero.
///
/// User enums usually implement this by hand with `KIND = ValueKind::Int`,
/// rendering their zero variant as `"unknown"` so the unknown-enum rule
/// applies to them.
pub trait FieldValue: ToValue + Sized {
    const KIND: ValueKind;

    /// Parses canonical text. Empty text yields the zero value.
    fn from_text(text: &str, time_format: &str) -> Result<Self, Error>;

    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        self.to_value().is_zero()
    }
}

/// How the return value of a setter method is adopted into its field.
///
/// `()` adopts nothing, `Result<T, E>` adopts `T` on `Ok` and nothing on
/// `Err`, any other [`ToValue`] is adopted as is.
pub trait SetterOutput {
    fn adopt(self) -> Option<Value>;
}

impl SetterOutput for () {
    #[inline(always)]
    fn adopt(self) -> Option<Value> {
        None
    }
}

impl<T: ToValue> SetterOutput for T {
    #[inline(always)]
    fn adopt(self) -> Option<Value> {
        Some(self.to_value())
    }
}

impl<T: ToValue, E> SetterOutput for Result<T, E> {
    fn adopt(self) -> Option<Value> {
        match self {
            Ok(v) => Some(v.to_value()),
            Err(_) => None,
        }
    }
}

/// Outcome of a record-level predicate named by `validate = ":=method"`.
pub trait Verdict {
    /// `Err` carries the human readable rejection reason.
    fn verdict(self, method: &str) -> Result<(), String>;
}

impl Verdict for () {
    fn verdict(self, _method: &str) -> Result<(), String> {
        Ok(())
    }
}

impl Verdict for bool {
    fn verdict(self, method: &str) -> Result<(), String> {
        if self {
            Ok(())
        } else {
            Err(format!("{method}() returned false"))
        }
    }
}

impl<T, E: Display> Verdict for Result<T, E> {
    fn verdict(self, method: &str) -> Result<(), String> {
        self.map(|_| ())
            .map_err(|e| format!("{method}() failed: {e}"))
    }
}

impl ToValue for Value {
    #[inline(always)]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline(always)]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
