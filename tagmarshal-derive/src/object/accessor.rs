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

//! Generates the accessor function pointers of one field.
//!
//! Every accessor is a non-capturing closure coerced to a plain `fn`
//! pointer, so the descriptor table holds no boxed state.

use crate::object::field_meta::{MarshalFieldMeta, MethodRef};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Type, TypeTraitObject};

/// Polymorphic target of an `Option<Box<dyn Trait>>` field.
pub struct PolyTarget<'a> {
    pub trait_object: &'a TypeTraitObject,
    pub tag: String,
}

pub struct FieldModel<'a> {
    pub record: &'a Ident,
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub meta: &'a MarshalFieldMeta,
    pub poly: Option<PolyTarget<'a>>,
}

impl FieldModel<'_> {
    pub fn kind(&self) -> TokenStream {
        let ty = self.ty;
        if self.poly.is_some() {
            quote! { ::tagmarshal_core::ValueKind::Poly }
        } else {
            quote! { <#ty as ::tagmarshal_core::FieldValue>::KIND }
        }
    }

    /// `FieldAccess::new(...)` followed by the optional method hooks.
    pub fn access(&self) -> TokenStream {
        let record = self.record;
        let mut access = if self.poly.is_some() {
            self.poly_base_access()
        } else {
            self.value_base_access()
        };
        if let Some(getter) = &self.meta.getter {
            let call = self.getter_call(getter);
            let takes_text = getter.takes_text;
            let text = if takes_text {
                quote! { text }
            } else {
                quote! { _text }
            };
            access = quote! {
                #access.with_getter(#takes_text, |r: &#record, #text: &str| #call)
            };
        }
        if let Some(setter) = &self.meta.setter {
            let call = self.setter_call(setter);
            access = quote! {
                #access.with_setter(|r: &mut #record, text: &str| #call)
            };
        }
        if let Some(predicate) = &self.meta.predicate {
            let name = predicate.to_string();
            access = quote! {
                #access.with_predicate(|r: &#record| {
                    ::tagmarshal_core::Verdict::verdict(r.#predicate(), #name)
                })
            };
        }
        if let Some(poly) = &self.poly {
            let ident = self.ident;
            let field_name = ident.to_string();
            let trait_object = poly.trait_object;
            let tag = &poly.tag;
            access = quote! {
                #access.with_instantiate(|r: &mut #record| {
                    if r.#ident.is_none() {
                        match ::tagmarshal_core::create_type::<#trait_object>(#tag) {
                            ::std::option::Option::Some(instance) => {
                                r.#ident = ::std::option::Option::Some(instance);
                            }
                            ::std::option::Option::None => {
                                return ::std::result::Result::Err(
                                    ::tagmarshal_core::Error::type_not_registered(
                                        #field_name,
                                        #tag,
                                    ),
                                );
                            }
                        }
                    }
                    ::std::result::Result::Ok(())
                })
            };
        }
        access
    }

    fn value_base_access(&self) -> TokenStream {
        let record = self.record;
        let ident = self.ident;
        let ty = self.ty;
        quote! {
            ::tagmarshal_core::FieldAccess::<#record>::new(
                |r: &#record| ::tagmarshal_core::ToValue::to_value(&r.#ident),
                |r: &mut #record, text: &str, time_format: &str| {
                    r.#ident =
                        <#ty as ::tagmarshal_core::FieldValue>::from_text(text, time_format)?;
                    ::std::result::Result::Ok(())
                },
                |r: &mut #record| {
                    r.#ident = <#ty as ::tagmarshal_core::FieldValue>::zero();
                },
                |r: &#record| <#ty as ::tagmarshal_core::FieldValue>::is_zero(&r.#ident),
            )
        }
    }

    /// Trait objects have no text form of their own: they read as blank,
    /// ignore direct writes, and are reached through getters and setters.
    fn poly_base_access(&self) -> TokenStream {
        let record = self.record;
        let ident = self.ident;
        quote! {
            ::tagmarshal_core::FieldAccess::<#record>::new(
                |_r: &#record| ::tagmarshal_core::Value::Blank,
                |_r: &mut #record, _text: &str, _time_format: &str| ::std::result::Result::Ok(()),
                |r: &mut #record| {
                    r.#ident = ::std::option::Option::None;
                },
                |r: &#record| r.#ident.is_none(),
            )
        }
    }

    fn getter_call(&self, getter: &MethodRef) -> TokenStream {
        let method = &getter.name;
        let args = if getter.takes_text {
            quote! { text }
        } else {
            quote! {}
        };
        if getter.on_record {
            return quote! { ::tagmarshal_core::ToValue::to_value(&r.#method(#args)) };
        }
        let ident = self.ident;
        if self.poly.is_some() {
            quote! {
                match r.#ident.as_deref() {
                    ::std::option::Option::Some(v) => {
                        ::tagmarshal_core::ToValue::to_value(&v.#method(#args))
                    }
                    ::std::option::Option::None => ::tagmarshal_core::Value::Blank,
                }
            }
        } else {
            quote! { ::tagmarshal_core::ToValue::to_value(&r.#ident.#method(#args)) }
        }
    }

    fn setter_call(&self, setter: &MethodRef) -> TokenStream {
        let method = &setter.name;
        if setter.on_record {
            return quote! { ::tagmarshal_core::SetterOutput::adopt(r.#method(text)) };
        }
        let ident = self.ident;
        if self.poly.is_some() {
            quote! {
                match r.#ident.as_deref_mut() {
                    ::std::option::Option::Some(v) => {
                        ::tagmarshal_core::SetterOutput::adopt(v.#method(text))
                    }
                    ::std::option::Option::None => ::std::option::Option::None,
                }
            }
        } else {
            quote! { ::tagmarshal_core::SetterOutput::adopt(r.#ident.#method(text)) }
        }
    }
}
