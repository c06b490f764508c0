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

//! Field-level metadata parsing for `#[marshal(...)]` attributes.
//!
//! Every `key = value` pair is kept verbatim so the runtime can build the
//! field policy from it; bare flags are stored as `"true"`. Keys that name
//! methods (`getter`, `setter`, `validate = ":=..."`) are also parsed here,
//! because they turn into calls in the generated code and must be
//! well-formed at compile time. Unreserved keys are tag namespaces.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Field, Ident, Lit};

/// A method named by `getter`/`setter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef {
    pub name: Ident,
    /// `base.` prefix: call on the enclosing record instead of the field.
    pub on_record: bool,
    /// `(x)` suffix: pass the field's own text as the argument.
    pub takes_text: bool,
}

impl MethodRef {
    pub fn parse(raw: &str, allow_param: bool, span: Span) -> syn::Result<MethodRef> {
        let mut rest = raw.trim();
        let on_record = rest
            .get(..5)
            .is_some_and(|head| head.eq_ignore_ascii_case("base."));
        if on_record {
            rest = &rest[5..];
        }
        let takes_text = rest
            .len()
            .checked_sub(3)
            .and_then(|at| rest.get(at..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case("(x)"));
        if takes_text {
            if !allow_param {
                return Err(syn::Error::new(span, "setters always take the text; drop `(x)`"));
            }
            rest = &rest[..rest.len() - 3];
        }
        if rest.is_empty() {
            return Err(syn::Error::new(span, "method name is required"));
        }
        let name: Ident = syn::parse_str(rest)
            .map_err(|_| syn::Error::new(span, format!("`{}` is not a method name", rest)))?;
        Ok(MethodRef {
            name,
            on_record,
            takes_text,
        })
    }
}

/// Represents parsed `#[marshal(...)]` field attributes.
#[derive(Debug, Clone, Default)]
pub struct MarshalFieldMeta {
    /// Raw pairs in declaration order.
    pub pairs: Vec<(String, String)>,
    pub getter: Option<MethodRef>,
    pub setter: Option<MethodRef>,
    /// Record method named by `validate = ":=method"`.
    pub predicate: Option<Ident>,
    /// Registry tag given with `poly`.
    pub poly: Option<String>,
    /// `pos = "-"`.
    pub computed: bool,
}

impl MarshalFieldMeta {
    #[cfg(test)]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Reads the value of a nested meta item: a literal after `=`, or `"true"`
/// for a standalone flag.
fn parse_value(nested: &ParseNestedMeta) -> syn::Result<String> {
    if nested.input.is_empty() || nested.input.peek(syn::Token![,]) {
        return Ok("true".to_string());
    }
    let lit: Lit = nested.value()?.parse()?;
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        other => Err(syn::Error::new(
            other.span(),
            "expected a string, integer, float or bool literal",
        )),
    }
}

/// Parse `#[marshal(...)]` attributes from a field. Repeated attributes merge.
pub fn parse_field_meta(field: &Field) -> syn::Result<MarshalFieldMeta> {
    let mut meta = MarshalFieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("marshal") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            let key = nested
                .path
                .get_ident()
                .ok_or_else(|| nested.error("expected a single identifier key"))?
                .to_string();
            let span = nested.path.get_ident().map(Ident::span).unwrap_or_else(Span::call_site);
            let value = parse_value(&nested)?;
            match key.as_str() {
                "getter" => meta.getter = Some(MethodRef::parse(&value, true, span)?),
                "setter" => meta.setter = Some(MethodRef::parse(&value, false, span)?),
                "pos" => {
                    let pos = value.trim();
                    if pos == "-" {
                        meta.computed = true;
                    } else if pos.parse::<usize>().is_ok() {
                        meta.computed = false;
                    } else {
                        return Err(syn::Error::new(
                            span,
                            "pos must be a non-negative integer or \"-\"",
                        ));
                    }
                }
                "validate" => {
                    if let Some(method) = value.trim().strip_prefix(":=") {
                        let method = method.trim();
                        if method.is_empty() {
                            return Err(syn::Error::new(span, "validate `:=` needs a method name"));
                        }
                        let name: Ident = syn::parse_str(method).map_err(|_| {
                            syn::Error::new(span, format!("`{}` is not a method name", method))
                        })?;
                        meta.predicate = Some(name);
                    } else {
                        meta.predicate = None;
                    }
                }
                "poly" => {
                    let tag = value.trim();
                    // Bare `poly` defaults the tag to the trait name.
                    meta.poly = Some(if tag == "true" { String::new() } else { tag.to_string() });
                }
                _ => {}
            }
            meta.pairs.push((key, value));
            Ok(())
        })?;
    }

    if meta.computed && meta.setter.is_none() {
        let span = field
            .ident
            .as_ref()
            .map(Ident::span)
            .unwrap_or_else(Span::call_site);
        return Err(syn::Error::new(span, "pos = \"-\" requires a setter"));
    }

    Ok(meta)
}
