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

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::Text;

    #[inline(always)]
    fn from_text(text: &str, _time_format: &str) -> Result<Self, Error> {
        Ok(text.to_string())
    }

    #[inline(always)]
    fn zero() -> Self {
        String::new()
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}
