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

mod accessor;
pub(crate) mod field_meta;

use crate::util::is_option_box_dyn_trait;
use accessor::{FieldModel, PolyTarget};
use field_meta::parse_field_meta;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

pub fn derive_marshal(input: &DeriveInput) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Marshal cannot be derived for generic types",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new(
                    name.span(),
                    "Marshal requires a struct with named fields",
                ))
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                name.span(),
                "Marshal can only be derived for structs",
            ))
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let meta = parse_field_meta(field)?;
        let poly = match is_option_box_dyn_trait(&field.ty) {
            Some((trait_object, trait_name)) => Some(PolyTarget {
                trait_object,
                tag: match meta.poly.as_deref() {
                    Some(tag) if !tag.is_empty() => tag.to_string(),
                    _ => trait_name,
                },
            }),
            None if meta.poly.is_some() => {
                return Err(syn::Error::new(
                    field.ty.span(),
                    "poly fields must be declared as Option<Box<dyn Trait>>",
                ))
            }
            None => None,
        };
        let model = FieldModel {
            record: name,
            ident,
            ty: &field.ty,
            meta: &meta,
            poly,
        };
        let field_name = ident.to_string();
        let kind = model.kind();
        let access = model.access();
        let keys = meta.pairs.iter().map(|(k, _)| k);
        let values = meta.pairs.iter().map(|(_, v)| v);
        descriptors.push(quote! {
            ::tagmarshal_core::FieldDescriptor::new(
                #field_name,
                #kind,
                &[#((#keys, #values)),*],
                #access,
            )
        });
    }

    let type_name = name.to_string();
    Ok(quote! {
        impl ::tagmarshal_core::Marshal for #name {
            fn descriptor() -> &'static ::tagmarshal_core::RecordDescriptor<#name> {
                static DESCRIPTOR: ::std::sync::OnceLock<
                    ::tagmarshal_core::RecordDescriptor<#name>,
                > = ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    ::tagmarshal_core::RecordDescriptor::new(
                        #type_name,
                        ::std::vec![#(#descriptors),*],
                    )
                })
            }
        }
    })
}
