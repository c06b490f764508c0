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
use crate::meta::{FieldDescriptor, Validation};

/// Runs the field's `validate` expression against its final text.
///
/// Comparisons only reject a value that is non-blank or required; a
/// predicate always runs.
pub fn validate<R>(field: &FieldDescriptor<R>, record: &R, text: &str) -> Result<(), Error> {
    let Some(validation) = &field.policy.validation else {
        return Ok(());
    };
    let applies = !text.is_empty() || field.policy.required;
    let lower = text.to_lowercase();
    match validation {
        Validation::OneOf(options) => {
            if applies && !options.iter().any(|o| o.to_lowercase() == lower) {
                return Err(Error::validation(
                    field.name,
                    format!(
                        "expected to match '{}', but received '{}'",
                        options.join(" or "),
                        text
                    ),
                ));
            }
        }
        Validation::NoneOf(options) => {
            if applies && options.iter().any(|o| o.to_lowercase() == lower) {
                return Err(Error::validation(
                    field.name,
                    format!(
                        "expected to not match '{}', but received '{}'",
                        options.join(" and "),
                        text
                    ),
                ));
            }
        }
        Validation::Bound { op, limit, literal } => {
            let value = text.trim().parse::<f64>().unwrap_or(0.0);
            if applies && !op.holds(value, *limit) {
                return Err(Error::validation(
                    field.name,
                    format!(
                        "expected to be {} '{}', but received '{}'",
                        op.describe(),
                        literal,
                        text
                    ),
                ));
            }
        }
        Validation::Predicate(_) => {
            if let Some(predicate) = field.access.predicate {
                predicate(record).map_err(|reason| Error::validation(field.name, reason))?;
            }
        }
    }
    Ok(())
}
