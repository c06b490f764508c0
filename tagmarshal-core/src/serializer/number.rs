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

use crate::error::Error;
use crate::serializer::{FieldValue, ToValue};
use crate::types::{Value, ValueKind};

macro_rules! impl_num_field_value {
    ($ty:ty, $variant:ident, $wide:ty, $kind:expr) => {
        impl ToValue for $ty {
            #[inline(always)]
            fn to_value(&self) -> Value {
                Value::$variant(*self as $wide)
            }
        }

        impl FieldValue for $ty {
            const KIND: ValueKind = $kind;

            fn from_text(text: &str, _time_format: &str) -> Result<Self, Error> {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(0 as $ty);
                }
                text.parse::<$ty>().map_err(|_| {
                    Error::decode(format!(
                        "'{}' is not a valid {}",
                        text,
                        stringify!($ty)
                    ))
                })
            }

            #[inline(always)]
            fn zero() -> Self {
                0 as $ty
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == 0 as $ty
            }
        }
    };
}

impl_num_field_value!(i8, Int, i64, ValueKind::Int);
impl_num_field_value!(i16, Int, i64, ValueKind::Int);
impl_num_field_value!(i32, Int, i64, ValueKind::Int);
impl_num_field_value!(i64, Int, i64, ValueKind::Int);
impl_num_field_value!(isize, Int, i64, ValueKind::Int);
impl_num_field_value!(u8, Uint, u64, ValueKind::Uint);
impl_num_field_value!(u16, Uint, u64, ValueKind::Uint);
impl_num_field_value!(u32, Uint, u64, ValueKind::Uint);
impl_num_field_value!(u64, Uint, u64, ValueKind::Uint);
impl_num_field_value!(usize, Uint, u64, ValueKind::Uint);
impl_num_field_value!(f64, Float, f64, ValueKind::Float);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        // Widen through the shortest decimal so 0.1f32 renders as 0.1.
        let widened = self.to_string().parse::<f64>().unwrap_or(*self as f64);
        Value::Float(widened)
    }
}

impl FieldValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_text(text: &str, _time_format: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(0.0);
        }
        text.parse::<f32>()
            .map_err(|_| Error::decode(format!("'{}' is not a valid f32", text)))
    }

    fn zero() -> Self {
        0.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}
