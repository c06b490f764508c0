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

use tagmarshal::{Error, Marshal};

#[derive(Marshal, Default, Debug)]
struct Order {
    #[marshal(json = "qty", validate = "<=10")]
    qty: i32,
    #[marshal(json = "color", validate = "==red||blue")]
    color: String,
    #[marshal(json = "code", validate = "!=x1&&y2")]
    code: String,
    #[marshal(json = "score", validate = ">>0")]
    score: f64,
    #[marshal(json = "age", range = "18..120")]
    age: u32,
}

fn order() -> Order {
    Order {
        qty: 3,
        color: "Red".to_string(),
        code: "z9".to_string(),
        score: 1.5,
        age: 30,
    }
}

#[test]
fn test_valid_order_marshals() {
    let json = tagmarshal::to_json(&order(), "json", "").unwrap();
    assert_eq!(
        json,
        r#"{"qty":"3", "color":"Red", "code":"z9", "score":"1.5", "age":"30"}"#
    );
}

#[test]
fn test_bound_validation() {
    let mut bad = order();
    bad.qty = 11;
    let err = tagmarshal::to_json(&bad, "json", "").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "qty validation failed: expected to be less than or equal to '10', but received '11'"
    );

    let mut bad = order();
    bad.score = 0.0;
    assert!(matches!(
        tagmarshal::to_json(&bad, "json", ""),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn test_one_of_and_none_of() {
    let mut bad = order();
    bad.color = "green".to_string();
    let err = tagmarshal::to_json(&bad, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "color validation failed: expected to match 'red or blue', but received 'green'"
    );

    let mut bad = order();
    bad.code = "Y2".to_string();
    let err = tagmarshal::to_json(&bad, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "code validation failed: expected to not match 'x1 and y2', but received 'Y2'"
    );

    let mut blank = order();
    blank.color = String::new();
    assert!(tagmarshal::to_json(&blank, "json", "").is_ok());
}

#[test]
fn test_range_constraint() {
    let mut bad = order();
    bad.age = 150;
    let err = tagmarshal::to_json(&bad, "json", "").unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));
    assert_eq!(err.to_string(), "age range maximum is 120");

    bad.age = 12;
    let err = tagmarshal::to_json(&bad, "json", "").unwrap_err();
    assert_eq!(err.to_string(), "age range minimum is 18");

    // an unset optional value is not out of range
    bad.age = 0;
    assert!(tagmarshal::to_json(&bad, "json", "").is_ok());
}

#[test]
fn test_validation_on_unmarshal_resets_record() {
    let mut target = order();
    let err = tagmarshal::from_json(&mut target, r#"{"qty":"2","color":"pink"}"#, "json", "")
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(target.qty, 0);
    assert_eq!(target.color, "");

    // decoding is lenient about range
    tagmarshal::from_json(&mut target, r#"{"age":"200","color":"BLUE"}"#, "json", "").unwrap();
    assert_eq!(target.age, 200);
    assert_eq!(target.color, "BLUE");
}

#[derive(Marshal, Default, Debug)]
struct Signup {
    #[marshal(json = "email", validate = ":=check_email")]
    email: String,
    #[marshal(json = "user", validate = ":=check_user")]
    user: String,
}

impl Signup {
    fn check_email(&self) -> bool {
        self.email.contains('@')
    }

    fn check_user(&self) -> Result<(), String> {
        if self.user.len() >= 3 {
            Ok(())
        } else {
            Err(format!("'{}' is too short", self.user))
        }
    }
}

#[test]
fn test_predicate_validation() {
    let signup = Signup {
        email: "a@b.io".to_string(),
        user: "ann".to_string(),
    };
    assert!(tagmarshal::to_json(&signup, "json", "").is_ok());

    let signup = Signup {
        email: "nope".to_string(),
        user: "ann".to_string(),
    };
    let err = tagmarshal::to_json(&signup, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "email validation failed: check_email() returned false"
    );

    let signup = Signup {
        email: "a@b.io".to_string(),
        user: "al".to_string(),
    };
    let err = tagmarshal::to_json(&signup, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "user validation failed: check_user() failed: 'al' is too short"
    );
}

#[test]
fn test_predicate_sees_decoded_value() {
    let mut signup = Signup::default();
    tagmarshal::from_json(&mut signup, r#"{"email":"c@d.io","user":"cyd"}"#, "json", "").unwrap();
    assert_eq!(signup.email, "c@d.io");

    let err = tagmarshal::from_json(&mut signup, r#"{"email":"c@d.io","user":"x"}"#, "json", "")
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(signup.email, "");
}

#[derive(Marshal, Default, Debug)]
struct Dial {
    #[marshal(json = "low", validate = ">5")]
    low: i32,
    #[marshal(json = "high", validate = "<5")]
    high: i32,
    #[marshal(json = "shade", validate = "==red|| blue")]
    shade: String,
}

#[test]
fn test_single_digit_bounds() {
    let dial = Dial {
        low: 6,
        high: 4,
        shade: "blue".to_string(),
    };
    assert_eq!(
        tagmarshal::to_json(&dial, "json", "").unwrap(),
        r#"{"low":"6", "high":"4", "shade":"blue"}"#
    );

    let dial = Dial {
        low: 1,
        high: 4,
        shade: "red".to_string(),
    };
    let err = tagmarshal::to_json(&dial, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "low validation failed: expected to be greater than '5', but received '1'"
    );

    let dial = Dial {
        low: 6,
        high: 9,
        shade: "red".to_string(),
    };
    let err = tagmarshal::to_json(&dial, "json", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "high validation failed: expected to be less than '5', but received '9'"
    );

    let mut target = Dial::default();
    let err = tagmarshal::from_json(&mut target, r#"{"low":"1"}"#, "json", "").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    let err = tagmarshal::from_json(&mut target, r#"{"low":"7","high":"9"}"#, "json", "")
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(target.low, 0);

    tagmarshal::from_json(&mut target, r#"{"low":"7","high":"2","shade":"Blue"}"#, "json", "")
        .unwrap();
    assert_eq!(target.low, 7);
    assert_eq!(target.high, 2);
    assert_eq!(target.shade, "Blue");
}
