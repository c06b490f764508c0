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

use syn::{GenericArgument, PathArguments, Type, TypePath, TypeTraitObject};

fn single_generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath { path, .. }) = ty {
        if let Some(seg) = path.segments.last() {
            if seg.ident == wrapper {
                if let PathArguments::AngleBracketed(args) = &seg.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return Some(inner);
                    }
                }
            }
        }
    }
    None
}

/// Check if a type is `Box<dyn Trait>` and return the trait object and trait name if it is
pub fn is_box_dyn_trait(ty: &Type) -> Option<(&TypeTraitObject, String)> {
    if let Some(Type::TraitObject(trait_obj)) = single_generic_arg(ty, "Box") {
        if let Some(syn::TypeParamBound::Trait(trait_bound)) = trait_obj.bounds.first() {
            if let Some(segment) = trait_bound.path.segments.last() {
                return Some((trait_obj, segment.ident.to_string()));
            }
        }
    }
    None
}

/// Check if a type is `Option<Box<dyn Trait>>`, the shape of a polymorphic field.
pub fn is_option_box_dyn_trait(ty: &Type) -> Option<(&TypeTraitObject, String)> {
    single_generic_arg(ty, "Option").and_then(is_box_dyn_trait)
}
