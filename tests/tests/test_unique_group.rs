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

use tagmarshal::Marshal;

#[derive(Marshal, Default, Debug)]
struct Contact {
    #[marshal(query = "email", pos = 0, uniqueid = "Reach", skipblank)]
    email: String,
    #[marshal(query = "phone", pos = 1, uniqueid = "reach", skipblank)]
    phone: String,
    #[marshal(query = "name", pos = 2)]
    name: String,
}

#[test]
fn test_first_producing_field_wins_group() {
    let contact = Contact {
        email: "a@b.io".to_string(),
        phone: "555".to_string(),
        name: "Ann".to_string(),
    };
    assert_eq!(
        tagmarshal::to_query_string(&contact, "query", "").unwrap(),
        "email=a%40b.io&name=Ann"
    );
    assert_eq!(tagmarshal::to_csv(&contact, ",").unwrap(), "a@b.io,Ann");
}

#[test]
fn test_skipped_field_releases_group() {
    let contact = Contact {
        email: String::new(),
        phone: "555".to_string(),
        name: "Bo".to_string(),
    };
    assert_eq!(
        tagmarshal::to_query_string(&contact, "query", "").unwrap(),
        "phone=555&name=Bo"
    );
    assert_eq!(tagmarshal::to_csv(&contact, ",").unwrap(), "555,Bo");
}

#[test]
fn test_group_claims_are_per_call() {
    let contact = Contact {
        email: "c@d.io".to_string(),
        phone: String::new(),
        name: "Cy".to_string(),
    };
    let first = tagmarshal::to_query_string(&contact, "query", "").unwrap();
    let second = tagmarshal::to_query_string(&contact, "query", "").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "email=c%40d.io&name=Cy");
}

#[test]
fn test_excluded_field_does_not_claim_group() {
    #[derive(Marshal, Default)]
    struct Pair {
        #[marshal(json = "-", uniqueid = "g")]
        hidden: String,
        #[marshal(json = "shown", uniqueid = "g")]
        shown: String,
    }

    let pair = Pair {
        hidden: "h".to_string(),
        shown: "s".to_string(),
    };
    assert_eq!(
        tagmarshal::to_json(&pair, "json", "").unwrap(),
        r#"{"shown":"s"}"#
    );
}
