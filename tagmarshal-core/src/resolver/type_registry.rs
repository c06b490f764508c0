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

//! Factory registry for polymorphic fields.
//!
//! A polymorphic field is declared as `Option<Box<dyn Trait>>`. When an
//! unmarshal call needs to run a setter on such a field while it is still
//! `None`, the engine asks this registry for a fresh instance registered
//! under the field's type tag.
//!
//! The registry is read-mostly: populate it at program start, before any
//! concurrent unmarshal begins.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

type Factories = HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>;

/// Maps `(trait object type, tag)` to a `fn() -> Box<dyn Trait>` factory.
#[derive(Default)]
pub struct TypeRegistry {
    factories: RwLock<Factories>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `tag`, replacing an earlier registration.
    pub fn register<T: ?Sized + 'static>(&self, tag: &str, factory: fn() -> Box<T>) {
        let mut factories = self.factories.write().unwrap_or_else(|e| e.into_inner());
        factories.insert((TypeId::of::<T>(), tag.to_string()), Box::new(factory));
    }

    /// Creates a new instance registered under `tag`, if any.
    pub fn create<T: ?Sized + 'static>(&self, tag: &str) -> Option<Box<T>> {
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        let factory = factories
            .get(&(TypeId::of::<T>(), tag.to_string()))?
            .downcast_ref::<fn() -> Box<T>>()?;
        log::debug!("instantiating polymorphic type '{}'", tag);
        Some(factory())
    }

    pub fn contains<T: ?Sized + 'static>(&self, tag: &str) -> bool {
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        factories.contains_key(&(TypeId::of::<T>(), tag.to_string()))
    }
}

/// The process-wide registry consulted by derived descriptors.
pub fn type_registry() -> &'static TypeRegistry {
    static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TypeRegistry::new)
}

pub fn register_type<T: ?Sized + 'static>(tag: &str, factory: fn() -> Box<T>) {
    type_registry().register(tag, factory)
}

pub fn create_type<T: ?Sized + 'static>(tag: &str) -> Option<Box<T>> {
    type_registry().create(tag)
}

/// Registers `Concrete::default` as the factory for `dyn Trait` under `tag`.
///
/// ```rust
/// use tagmarshal_core::register_poly_type;
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// #[derive(Default)]
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// register_poly_type!(Shape, "Shape", Square);
/// assert!(tagmarshal_core::create_type::<dyn Shape>("Shape").is_some());
/// ```
#[macro_export]
macro_rules! register_poly_type {
    ($trait_:path, $tag:expr, $concrete:ty) => {
        $crate::resolver::type_registry::register_type::<dyn $trait_>(
            $tag,
            || -> ::std::boxed::Box<dyn $trait_> {
                ::std::boxed::Box::new(<$concrete as ::std::default::Default>::default())
            },
        )
    };
}
