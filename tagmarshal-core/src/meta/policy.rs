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

//! Declarative field policies, parsed once per record type from the raw
//! `#[marshal(...)]` pairs the derive macro embeds in the descriptor.

use crate::serializer::boolean::parse_bool;
use regex::Regex;

/// Attribute keys that carry policy; every other key names a tag namespace.
pub const RESERVED_KEYS: [&str; 19] = [
    "getter",
    "setter",
    "def",
    "booltrue",
    "boolfalse",
    "timeformat",
    "outprefix",
    "uniqueid",
    "skipblank",
    "skipzero",
    "zeroblank",
    "req",
    "pos",
    "kind",
    "regex",
    "size",
    "range",
    "validate",
    "poly",
];

/// Looks up a raw attribute value. When a key is repeated the last one wins.
pub fn tag_value(tags: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    tags.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Character class a field's encoded text is filtered to.
#[derive(Clone, Debug, Default)]
pub enum Kind {
    #[default]
    Free,
    Alpha,
    Numeric,
    AlphaNumeric,
    AlphaNumericSymbols,
    Hex,
    Base64,
    Bool,
    Regex(Regex),
}

impl Kind {
    /// Parses a `kind` attribute. Unknown kinds, and `REGEX` without a
    /// usable pattern, fall back to [`Kind::Free`].
    pub fn parse(raw: &str, pattern: Option<&str>) -> Kind {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Kind::Alpha,
            "n" => Kind::Numeric,
            "an" => Kind::AlphaNumeric,
            "ans" => Kind::AlphaNumericSymbols,
            "h" => Kind::Hex,
            "b64" => Kind::Base64,
            "b" => Kind::Bool,
            "regex" => match pattern.map(str::trim).filter(|p| !p.is_empty()) {
                Some(p) => match Regex::new(p) {
                    Ok(re) => Kind::Regex(re),
                    Err(e) => {
                        log::warn!("ignoring invalid regex kind pattern '{}': {}", p, e);
                        Kind::Free
                    }
                },
                None => Kind::Free,
            },
            _ => Kind::Free,
        }
    }

    /// Whether the kind strips characters and is subject to `size` rules.
    pub fn is_filtered(&self) -> bool {
        !matches!(self, Kind::Free | Kind::Bool)
    }
}

/// CSV placement of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// No `pos`: the field does not take part in CSV.
    #[default]
    Unplaced,
    Ordinal(usize),
    /// `pos = "-"`: no slot of its own, populated by its setter during unmarshal.
    Computed,
}

impl Position {
    pub fn parse(raw: &str) -> Position {
        let raw = raw.trim();
        if raw == "-" {
            return Position::Computed;
        }
        raw.parse::<usize>()
            .map(Position::Ordinal)
            .unwrap_or(Position::Unplaced)
    }
}

/// Length rules on encoded text; zero means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeConstraint {
    pub min: usize,
    pub max: usize,
    /// Encoded length must be a multiple of this.
    pub modulo: usize,
}

impl SizeConstraint {
    /// Parses `x`, `x..`, `..y` or `x..y`, each optionally followed by `+%z`.
    pub fn parse(raw: &str) -> SizeConstraint {
        let raw = raw.trim();
        let (bounds, modulo) = match raw.split_once("+%") {
            Some((bounds, modulo)) => (bounds, lenient_usize(modulo)),
            None => (raw, 0),
        };
        let (min, max) = match bounds.split_once("..") {
            Some((min, max)) => (lenient_usize(min), lenient_usize(max)),
            None => {
                let exact = lenient_usize(bounds);
                (exact, exact)
            }
        };
        SizeConstraint { min, max, modulo }
    }

    pub fn is_empty(&self) -> bool {
        self.min == 0 && self.max == 0 && self.modulo == 0
    }
}

/// Inclusive numeric bounds; zero means unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeConstraint {
    pub min: i64,
    pub max: i64,
}

impl RangeConstraint {
    pub fn parse(raw: &str) -> RangeConstraint {
        let raw = raw.trim();
        match raw.split_once("..") {
            Some((min, max)) => RangeConstraint {
                min: min.trim().parse().unwrap_or(0),
                max: max.trim().parse().unwrap_or(0),
            },
            None => {
                let exact = raw.parse().unwrap_or(0);
                RangeConstraint {
                    min: exact,
                    max: exact,
                }
            }
        }
    }
}

/// `booltrue` / `boolfalse` overrides.
///
/// A literal of a single space is the prefix-presence sentinel: the bool is
/// expressed by whether the output prefix appears at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoolLiterals {
    pub truthy: &'static str,
    pub falsy: &'static str,
}

impl BoolLiterals {
    pub const SENTINEL: &'static str = " ";

    pub fn true_is_sentinel(&self) -> bool {
        self.truthy == Self::SENTINEL
    }

    pub fn false_is_sentinel(&self) -> bool {
        self.falsy == Self::SENTINEL
    }

    /// Whether neither literal was declared at all.
    pub fn is_unset(&self) -> bool {
        self.truthy.is_empty() && self.falsy.is_empty()
    }

    /// Literal rendering for a bool; `None` keeps the canonical word.
    pub fn render(&self, value: bool) -> Option<&'static str> {
        let literal = if value { self.truthy } else { self.falsy };
        let literal = literal.trim();
        (!literal.is_empty()).then_some(literal)
    }

    /// Maps a declared literal back to `"true"` / `"false"`.
    pub fn normalize<'a>(&self, text: &'a str) -> &'a str {
        let truthy = self.truthy.trim();
        if !truthy.is_empty() && truthy == text {
            return "true";
        }
        let falsy = self.falsy.trim();
        if !falsy.is_empty() && falsy == text {
            return "false";
        }
        text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundOp {
    AtMost,
    LessThan,
    AtLeast,
    GreaterThan,
}

impl BoundOp {
    pub fn holds(self, value: f64, limit: f64) -> bool {
        match self {
            BoundOp::AtMost => value <= limit,
            BoundOp::LessThan => value < limit,
            BoundOp::AtLeast => value >= limit,
            BoundOp::GreaterThan => value > limit,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            BoundOp::AtMost => "less than or equal to",
            BoundOp::LessThan => "less than",
            BoundOp::AtLeast => "greater than or equal to",
            BoundOp::GreaterThan => "greater than",
        }
    }
}

/// A `validate` expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    /// `==a||b`, case-insensitive.
    OneOf(Vec<String>),
    /// `!=a&&b`, case-insensitive.
    NoneOf(Vec<String>),
    Bound {
        op: BoundOp,
        limit: f64,
        literal: String,
    },
    /// `:=method`, a predicate on the enclosing record.
    Predicate(String),
}

impl Validation {
    /// Parses an expression. An operator without an operand, and bounds
    /// whose operand is not a number, are ignored.
    pub fn parse(raw: &str) -> Option<Validation> {
        let raw = raw.trim();
        let bound = |op: BoundOp, operand: &str| {
            let literal = operand.trim();
            literal.parse::<f64>().ok().map(|limit| Validation::Bound {
                op,
                limit,
                literal: literal.to_string(),
            })
        };
        let options = |rest: &str, separator: &str| {
            let options: Vec<String> = rest
                .split(separator)
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            (!options.is_empty()).then_some(options)
        };
        if let Some(rest) = raw.strip_prefix("==") {
            options(rest, "||").map(Validation::OneOf)
        } else if let Some(rest) = raw.strip_prefix("!=") {
            options(rest, "&&").map(Validation::NoneOf)
        } else if let Some(rest) = raw.strip_prefix(":=") {
            let method = rest.trim();
            (!method.is_empty()).then(|| Validation::Predicate(method.to_string()))
        } else if let Some(rest) = raw.strip_prefix("<=") {
            bound(BoundOp::AtMost, rest)
        } else if let Some(rest) = raw.strip_prefix(">=") {
            bound(BoundOp::AtLeast, rest)
        } else if let Some(rest) = raw.strip_prefix("<<").or_else(|| raw.strip_prefix('<')) {
            bound(BoundOp::LessThan, rest)
        } else if let Some(rest) = raw.strip_prefix(">>").or_else(|| raw.strip_prefix('>')) {
            bound(BoundOp::GreaterThan, rest)
        } else {
            None
        }
    }
}

/// Everything declared on one field, independent of the tag namespace a
/// call asks for.
#[derive(Clone, Debug, Default)]
pub struct FieldPolicy {
    pub default: Option<&'static str>,
    pub literals: BoolLiterals,
    pub time_format: &'static str,
    pub prefix: &'static str,
    /// Lowercased, trimmed unique group id.
    pub unique_id: Option<String>,
    pub skip_blank: bool,
    pub skip_zero: bool,
    pub zero_blank: bool,
    pub required: bool,
    pub position: Position,
    pub kind: Kind,
    pub size: SizeConstraint,
    pub range: RangeConstraint,
    pub validation: Option<Validation>,
}

impl FieldPolicy {
    pub fn from_tags(tags: &'static [(&'static str, &'static str)]) -> FieldPolicy {
        let get = |key: &str| tag_value(tags, key);
        let flag = |key: &str| get(key).and_then(parse_bool).unwrap_or(false);
        FieldPolicy {
            default: get("def").filter(|d| !d.is_empty()),
            literals: BoolLiterals {
                truthy: get("booltrue").unwrap_or(""),
                falsy: get("boolfalse").unwrap_or(""),
            },
            time_format: get("timeformat").map(str::trim).unwrap_or(""),
            prefix: get("outprefix").unwrap_or(""),
            unique_id: get("uniqueid")
                .map(|id| id.trim().to_lowercase())
                .filter(|id| !id.is_empty()),
            skip_blank: flag("skipblank"),
            skip_zero: flag("skipzero"),
            zero_blank: flag("zeroblank"),
            required: flag("req"),
            position: get("pos").map(Position::parse).unwrap_or_default(),
            kind: get("kind")
                .map(|k| Kind::parse(k, get("regex")))
                .unwrap_or_default(),
            size: get("size").map(SizeConstraint::parse).unwrap_or_default(),
            range: get("range").map(RangeConstraint::parse).unwrap_or_default(),
            validation: get("validate").and_then(Validation::parse),
        }
    }

    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }
}

fn lenient_usize(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(0)
}
