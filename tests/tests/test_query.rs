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

use tagmarshal::{Error, Marshal, Marshaller};

#[derive(Marshal, Default, Debug)]
struct Search {
    #[marshal(query = "q", skipblank)]
    term: String,
    #[marshal(query = "page", skipzero)]
    page: u32,
    #[marshal(query = "-")]
    internal: String,
    #[marshal(query = "exact", booltrue = "1", boolfalse = "0")]
    exact: bool,
}

#[test]
fn test_query_string_pairs() {
    let search = Search {
        term: "rust & co".to_string(),
        page: 2,
        internal: "hidden".to_string(),
        exact: true,
    };
    let query = tagmarshal::to_query_string(&search, "query", "").unwrap();
    assert_eq!(query, "q=rust%20%26%20co&page=2&exact=1");
}

#[test]
fn test_query_string_skips() {
    let search = Search::default();
    let query = tagmarshal::to_query_string(&search, "query", "").unwrap();
    assert_eq!(query, "exact=0");
}

#[test]
fn test_query_string_requires_namespace() {
    let err = tagmarshal::to_query_string(&Search::default(), " ", "").unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
    let err = tagmarshal::to_query_string(&Search::default(), "def", "").unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}

#[derive(Marshal, Default, Debug)]
struct Versioned {
    #[marshal(query = "ver", outprefix = "v")]
    version: u32,
    #[marshal(query = "beta", outprefix = "B", booltrue = " ", boolfalse = " ")]
    beta: bool,
    #[marshal(query = "code", kind = "AN", size = "..4")]
    code: String,
}

#[test]
fn test_query_prefix_and_sentinel_literals() {
    let versioned = Versioned {
        version: 2,
        beta: true,
        code: "ab-c/de".to_string(),
    };
    let query = tagmarshal::to_query_string(&versioned, "query", "").unwrap();
    assert_eq!(query, "ver=v2&beta=B&code=abcd");

    let versioned = Versioned {
        version: 3,
        beta: false,
        code: String::new(),
    };
    let query = tagmarshal::to_query_string(&versioned, "query", "").unwrap();
    assert_eq!(query, "ver=v3&beta=&code=");
}

#[derive(Marshal, Default, Debug)]
struct Ticket {
    #[marshal(query = "status", getter = "base.status_name", uniqueid = "state")]
    status: i32,
    #[marshal(query = "state", uniqueid = "state")]
    state_text: String,
    #[marshal(query = "priority", getter = "base.priority_name", def = "normal")]
    priority: i32,
}

impl Ticket {
    fn status_name(&self) -> &'static str {
        match self.status {
            1 => "open",
            2 => "closed",
            _ => "unknown",
        }
    }

    fn priority_name(&self) -> &'static str {
        match self.priority {
            1 => "high",
            _ => "UNKNOWN",
        }
    }
}

#[test]
fn test_unknown_enum_sentinel() {
    let ticket = Ticket {
        status: 0,
        state_text: "archived".to_string(),
        priority: 0,
    };
    let query = tagmarshal::to_query_string(&ticket, "query", "").unwrap();
    assert_eq!(query, "state=archived&priority=normal");

    let ticket = Ticket {
        status: 1,
        state_text: "archived".to_string(),
        priority: 1,
    };
    let query = tagmarshal::to_query_string(&ticket, "query", "").unwrap();
    assert_eq!(query, "status=open&priority=high");
}

#[test]
fn test_marshaller_exclude_namespace() {
    #[derive(Marshal, Default)]
    struct Filter {
        #[marshal(query = "owner", public = "-")]
        owner: String,
        #[marshal(query = "tag")]
        tag: String,
    }

    let filter = Filter {
        owner: "ann".to_string(),
        tag: "red".to_string(),
    };
    let marshaller = Marshaller::default().tag("query");
    assert_eq!(marshaller.to_query_string(&filter).unwrap(), "owner=ann&tag=red");
    let marshaller = marshaller.exclude_tag("public");
    assert_eq!(marshaller.to_query_string(&filter).unwrap(), "tag=red");
}
