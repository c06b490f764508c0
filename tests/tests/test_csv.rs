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

#[derive(Marshal, Default, Debug, PartialEq)]
struct Row {
    #[marshal(pos = 0)]
    name: String,
    #[marshal(pos = 1, def = "18", kind = "N")]
    age: i32,
    #[marshal(pos = 2, booltrue = "Y", boolfalse = "N")]
    vip: bool,
    note: String,
}

#[test]
fn test_to_csv_ordinal_slots() {
    let row = Row {
        name: "Ann".to_string(),
        age: 30,
        vip: true,
        note: "not placed".to_string(),
    };
    assert_eq!(tagmarshal::to_csv(&row, ",").unwrap(), "Ann,30,Y");
    assert_eq!(tagmarshal::to_csv(&row, "|").unwrap(), "Ann|30|Y");
}

#[test]
fn test_from_csv_ordinal_slots() {
    let mut row = Row::default();
    tagmarshal::from_csv(&mut row, "Bo,41,N", ",").unwrap();
    assert_eq!(
        row,
        Row {
            name: "Bo".to_string(),
            age: 41,
            vip: false,
            note: String::new(),
        }
    );

    tagmarshal::from_csv(&mut row, "Cy|4x2|Y", "|").unwrap();
    assert_eq!(row.name, "Cy");
    assert_eq!(row.age, 42);
    assert!(row.vip);
}

#[test]
fn test_from_csv_short_row_keeps_defaults() {
    let mut row = Row {
        name: "stale".to_string(),
        age: 99,
        vip: true,
        note: "stale".to_string(),
    };
    tagmarshal::from_csv(&mut row, "Dee", ",").unwrap();
    assert_eq!(row.name, "Dee");
    assert_eq!(row.age, 18);
    assert!(!row.vip);
    assert_eq!(row.note, "");
}

#[test]
fn test_from_csv_with_splitter() {
    let mut row = Row::default();
    tagmarshal::from_csv_with(&mut row, "Eve ; 7 ; Y", |payload| {
        payload.split(';').map(|t| t.trim().to_string()).collect()
    })
    .unwrap();
    assert_eq!(row.name, "Eve");
    assert_eq!(row.age, 7);
    assert!(row.vip);
}

#[test]
fn test_csv_preconditions() {
    let mut row = Row::default();
    assert!(matches!(
        tagmarshal::from_csv(&mut row, "", ","),
        Err(Error::Precondition(_))
    ));
    assert!(matches!(
        tagmarshal::from_csv(&mut row, "a,b", ""),
        Err(Error::Precondition(_))
    ));
}

#[derive(Marshal, Default, Debug, PartialEq)]
struct Tagged {
    #[marshal(pos = 0, outprefix = "NAME=")]
    name: String,
    #[marshal(pos = 1, outprefix = "AGE=")]
    age: i32,
    #[marshal(pos = 2, outprefix = "VIP", booltrue = " ", boolfalse = " ")]
    vip: bool,
}

#[test]
fn test_to_csv_prefixed_tokens() {
    let tagged = Tagged {
        name: "Ann".to_string(),
        age: 30,
        vip: true,
    };
    assert_eq!(tagmarshal::to_csv(&tagged, ",").unwrap(), "NAME=Ann,AGE=30,VIP");
}

#[test]
fn test_from_csv_prefixed_tokens() {
    let mut tagged = Tagged::default();
    tagmarshal::from_csv(&mut tagged, "age=30,VIP,name=Bo,AGE=31", ",").unwrap();
    assert_eq!(
        tagged,
        Tagged {
            name: "Bo".to_string(),
            age: 30,
            vip: true,
        }
    );

    tagmarshal::from_csv(&mut tagged, "NAME=Cy", ",").unwrap();
    assert_eq!(tagged.name, "Cy");
    assert_eq!(tagged.age, 0);
    assert!(!tagged.vip);
}

#[test]
fn test_size_without_kind_is_not_enforced() {
    #[derive(Marshal, Default)]
    struct Loose {
        #[marshal(pos = 0, size = "4")]
        code: String,
    }

    let loose = Loose {
        code: "ab".to_string(),
    };
    assert_eq!(tagmarshal::to_csv(&loose, ",").unwrap(), "ab");
}

#[test]
fn test_size_with_kind() {
    #[derive(Marshal, Default)]
    struct Strict {
        #[marshal(pos = 0, kind = "AN", size = "4")]
        code: String,
    }

    let err = tagmarshal::to_csv(&Strict { code: "ab".to_string() }, ",").unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));
    assert_eq!(err.to_string(), "code min length is 4");

    let csv = tagmarshal::to_csv(&Strict { code: "ab-cdef".to_string() }, ",").unwrap();
    assert_eq!(csv, "abcd");

    let mut strict = Strict::default();
    tagmarshal::from_csv(&mut strict, "a", ",").unwrap();
    assert_eq!(strict.code, "a");
    tagmarshal::from_csv(&mut strict, "abcdefg", ",").unwrap();
    assert_eq!(strict.code, "abcd");
}

#[test]
fn test_size_modulo() {
    #[derive(Marshal, Default)]
    struct Blocks {
        #[marshal(pos = 0)]
        id: u32,
        #[marshal(pos = 1, kind = "AN", size = "+%4")]
        payload: String,
    }

    let blocks = Blocks {
        id: 1,
        payload: "abcdef".to_string(),
    };
    let err = tagmarshal::to_csv(&blocks, ",").unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));
    assert_eq!(err.to_string(), "payload expects value in blocks of 4 characters");

    let mut blocks = Blocks::default();
    tagmarshal::from_csv(&mut blocks, "7,abcdefgh", ",").unwrap();
    assert_eq!(blocks.id, 7);
    assert_eq!(blocks.payload, "abcdefgh");

    let err = tagmarshal::from_csv(&mut blocks, "9,abcdef", ",").unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));
    assert_eq!(blocks.id, 0);
    assert_eq!(blocks.payload, "");
}

#[derive(Marshal, Default, Debug)]
struct Line {
    #[marshal(pos = 0)]
    qty: i32,
    #[marshal(pos = 1)]
    price: i32,
    #[marshal(pos = "-", setter = "base.compute_total")]
    total: i32,
}

impl Line {
    fn compute_total(&mut self, _text: &str) -> i32 {
        self.qty * self.price
    }
}

#[test]
fn test_computed_fields() {
    let mut line = Line::default();
    tagmarshal::from_csv(&mut line, "3,4", ",").unwrap();
    assert_eq!(line.qty, 3);
    assert_eq!(line.price, 4);
    assert_eq!(line.total, 12);

    assert_eq!(tagmarshal::to_csv(&line, ",").unwrap(), "3,4");
}

#[test]
fn test_required_fields_on_csv() {
    #[derive(Marshal, Default)]
    struct Needy {
        #[marshal(pos = 0, req)]
        name: String,
        #[marshal(pos = 1)]
        note: String,
    }

    assert_eq!(tagmarshal::to_csv(&Needy::default(), ",").unwrap(), "");

    let needy = Needy {
        name: String::new(),
        note: "x".to_string(),
    };
    let err = tagmarshal::to_csv(&needy, ",").unwrap_err();
    assert!(matches!(err, Error::Required(_)));
    assert_eq!(err.to_string(), "name is a required field");
}

#[test]
fn test_character_kinds() {
    #[derive(Marshal, Default)]
    struct Kinds {
        #[marshal(pos = 0, kind = "A")]
        alpha: String,
        #[marshal(pos = 1, kind = "H")]
        hex: String,
        #[marshal(pos = 2, kind = "REGEX", regex = "[0-9]")]
        no_digits: String,
        #[marshal(pos = 3, kind = "B64")]
        printable: String,
    }

    let kinds = Kinds {
        alpha: "a1b2 c".to_string(),
        hex: "zz0Fa9".to_string(),
        no_digits: "r2d2".to_string(),
        printable: "ok\u{7}!".to_string(),
    };
    let marshaller = Marshaller::default().csv_delimiter(";");
    assert_eq!(marshaller.to_csv(&kinds).unwrap(), "abc;0Fa9;rd;ok!");
}
