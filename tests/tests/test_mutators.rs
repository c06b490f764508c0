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

#[derive(Marshal, Default, Debug, PartialEq)]
struct Member {
    #[marshal(json = "name", req)]
    name: String,
    #[marshal(json = "age", def = "18")]
    age: i32,
    #[marshal(json = "active", def = "true")]
    active: bool,
    #[marshal(json = "rate", def = "1.50")]
    rate: f64,
    #[marshal(json = "code", req, def = "X1")]
    code: String,
    #[marshal(json = "email", req)]
    email: Option<String>,
}

#[test]
fn test_apply_defaults() {
    let mut member = Member::default();
    assert!(tagmarshal::apply_defaults(&mut member));
    assert_eq!(member.age, 18);
    assert!(member.active);
    assert_eq!(member.rate, 1.5);
    assert_eq!(member.code, "X1");
    assert_eq!(member.name, "");
    assert_eq!(member.email, None);
}

#[test]
fn test_apply_defaults_is_idempotent_and_keeps_values() {
    let mut member = Member {
        age: 40,
        ..Default::default()
    };
    tagmarshal::apply_defaults(&mut member);
    let once = format!("{:?}", member);
    tagmarshal::apply_defaults(&mut member);
    assert_eq!(format!("{:?}", member), once);
    assert_eq!(member.age, 40);
}

#[test]
fn test_apply_defaults_without_declarations() {
    #[derive(Marshal, Default)]
    struct Plain {
        #[marshal(json = "a")]
        a: String,
    }
    let mut plain = Plain::default();
    assert!(!tagmarshal::apply_defaults(&mut plain));
}

#[test]
fn test_integer_default_through_setter() {
    #[derive(Marshal, Default)]
    struct Plan {
        #[marshal(json = "tier", def = "gold", setter = "base.tier_from_name")]
        tier: i32,
    }

    impl Plan {
        fn tier_from_name(&mut self, name: &str) -> i32 {
            match name {
                "gold" => 3,
                "silver" => 2,
                _ => name.parse().unwrap_or(0),
            }
        }
    }

    let mut plan = Plan::default();
    assert!(tagmarshal::apply_defaults(&mut plan));
    assert_eq!(plan.tier, 3);

    let mut plan = Plan::default();
    tagmarshal::from_json(&mut plan, r#"{"tier":"silver"}"#, "json", "").unwrap();
    assert_eq!(plan.tier, 2);
}

#[test]
fn test_clear_fields() {
    let mut member = Member {
        name: "Ann".to_string(),
        age: 3,
        active: true,
        rate: 9.0,
        code: "Z".to_string(),
        email: Some("a@b".to_string()),
    };
    tagmarshal::clear_fields(&mut member);
    assert_eq!(member, Member::default());
}

#[test]
fn test_is_any_field_set() {
    let mut member = Member::default();
    assert!(!tagmarshal::is_any_field_set(&member));

    tagmarshal::apply_defaults(&mut member);
    assert!(!tagmarshal::is_any_field_set(&member));

    member.rate = 2.0;
    assert!(tagmarshal::is_any_field_set(&member));

    member.rate = 1.5;
    member.name = "Bo".to_string();
    assert!(tagmarshal::is_any_field_set(&member));
}

#[test]
fn test_count_unsatisfied_required_fields() {
    let mut member = Member::default();
    assert_eq!(tagmarshal::count_unsatisfied_required_fields(&member), 2);
    member.name = "Cy".to_string();
    assert_eq!(tagmarshal::count_unsatisfied_required_fields(&member), 1);
    member.email = Some("c@y".to_string());
    assert_eq!(tagmarshal::count_unsatisfied_required_fields(&member), 0);
}

#[derive(Marshal, Default, Debug)]
struct MemberRow {
    #[marshal(pos = 0)]
    name: String,
    #[marshal(pos = 1)]
    age: i64,
    #[marshal(pos = 2)]
    rate: String,
    #[marshal(pos = 3)]
    active: u8,
    #[marshal(pos = 4)]
    nickname: String,
}

#[test]
fn test_fill_copies_same_named_fields() {
    let member = Member {
        name: "Dee".to_string(),
        age: 52,
        active: true,
        rate: 0.25,
        code: "Q".to_string(),
        email: None,
    };
    let mut row = MemberRow {
        nickname: "kept".to_string(),
        active: 7,
        ..Default::default()
    };
    tagmarshal::fill(&member, &mut row);
    assert_eq!(row.name, "Dee");
    assert_eq!(row.age, 52);
    assert_eq!(row.rate, "0.25");
    // "true" does not parse as u8
    assert_eq!(row.active, 7);
    assert_eq!(row.nickname, "kept");
}
