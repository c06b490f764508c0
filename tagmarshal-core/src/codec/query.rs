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

use crate::codec::check_namespaces;
use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::meta::RecordDescriptor;
use crate::walker::{finish_output, walk_output};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the RFC 3986 unreserved set is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn escape_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Encodes the record as `key=value` pairs joined by `&`.
pub fn to_query_string<R>(
    descriptor: &RecordDescriptor<R>,
    record: &R,
    config: &Config,
) -> Result<String, Error> {
    check_namespaces(config)?;
    let mut pairs = Vec::with_capacity(descriptor.len());
    walk_output(descriptor, record, config, |visit| {
        let value = finish_output(visit.field, record, visit.text, true)?;
        pairs.push(format!("{}={}", visit.key, escape_query_value(&value)));
        Ok(())
    })?;
    ensure!(
        !pairs.is_empty(),
        Error::blank_output(format!("query string of {}", descriptor.name))
    );
    Ok(pairs.join("&"))
}
