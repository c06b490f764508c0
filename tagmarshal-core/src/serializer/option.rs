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

//! `Option<T>` is the nullable wrapper: `None` renders blank and parses from empty text.

use crate::error::Error;
use crate::serializer::{FieldValue, ToValue};
use crate::types::{Value, ValueKind};

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Blank,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_text(text: &str, time_format: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(None);
        }
        T::from_text(text, time_format).map(Some)
    }

    #[inline(always)]
    fn zero() -> Self {
        None
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}
