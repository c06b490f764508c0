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

pub mod csv;
pub mod json;
pub mod query;

pub use csv::{from_csv, to_csv, Splitter};
pub use json::{from_json, to_json, to_json_array};
pub use query::to_query_string;

use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::meta::RESERVED_KEYS;

/// Query and JSON name fields through a namespace, which must be given and
/// must not collide with a policy key.
pub(crate) fn check_namespaces(config: &Config) -> Result<(), Error> {
    let tag = config.tag().trim();
    ensure!(!tag.is_empty(), Error::precondition("tag namespace is required"));
    for namespace in [tag, config.exclude_tag().trim()] {
        ensure!(
            !RESERVED_KEYS.contains(&namespace),
            Error::precondition(format!("'{}' is a policy key, not a tag namespace", namespace))
        );
    }
    Ok(())
}
