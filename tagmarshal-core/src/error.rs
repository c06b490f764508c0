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

//! Error type shared by every marshal and unmarshal operation.
//!
//! Errors are never retried internally. A marshal-direction error carries no
//! partial output, and an unmarshal-direction error raised after the record
//! started being mutated is returned only after the record was cleared.

use std::borrow::Cow;

use thiserror::Error;

/// Compile-time switch: build with `TAGMARSHAL_PANIC_ON_ERROR=1` to panic where an error
/// is created.
pub const PANIC_ON_ERROR: bool = option_env!("TAGMARSHAL_PANIC_ON_ERROR").is_some();

/// Check if `TAGMARSHAL_PANIC_ON_ERROR` was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for tagmarshal operations.
///
/// # Always Use Static Constructor Functions
///
/// Do not construct variants with the enum syntax; use the constructor
/// functions, which accept anything convertible into `Cow<'static, str>`
/// and honor `TAGMARSHAL_PANIC_ON_ERROR`.
///
/// ```rust
/// use tagmarshal_core::error::Error;
///
/// let err = Error::precondition("record tag namespace is required");
/// let err = Error::validation("age", format!("expected to be less than '{}'", 120));
/// let err = Error::required("name");
/// ```
///
/// ## Debug Mode: TAGMARSHAL_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 TAGMARSHAL_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Caller-side misuse: missing namespace, empty payload, no delimiter.
    ///
    /// Do not construct this variant directly; use [`Error::precondition`] instead.
    #[error("{0}")]
    Precondition(Cow<'static, str>),

    /// A structural constraint (minimum size, modulo, numeric range) was violated.
    ///
    /// Do not construct this variant directly; use [`Error::constraint`] instead.
    #[error("{0}")]
    Constraint(Cow<'static, str>),

    /// A declared `validate` expression rejected the field value.
    ///
    /// Do not construct this variant directly; use [`Error::validation`] instead.
    #[error("{field} validation failed: {reason}")]
    Validation {
        field: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// A `req` field was blank after defaults and transforms were applied.
    ///
    /// Do not construct this variant directly; use [`Error::required`] instead.
    #[error("{0} is a required field")]
    Required(Cow<'static, str>),

    /// Source text could not be decoded: malformed JSON, unparseable number or date.
    ///
    /// Do not construct this variant directly; use [`Error::decode`] instead.
    #[error("{0}")]
    Decode(Cow<'static, str>),

    /// Every field was legitimately skipped and nothing was produced.
    ///
    /// Do not construct this variant directly; use [`Error::blank_output`] instead.
    #[error("{0} yielded blank output")]
    BlankOutput(Cow<'static, str>),

    /// A polymorphic field was unset and no factory is registered for its tag.
    ///
    /// Do not construct this variant directly; use [`Error::type_not_registered`] instead.
    #[error("field {field} is polymorphic but no type is registered under '{tag}'")]
    TypeNotRegistered {
        field: Cow<'static, str>,
        tag: Cow<'static, str>,
    },

    /// Generic error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`] instead.
    #[error("{0}")]
    Unknown(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Precondition`].
    ///
    /// # Example
    /// ```
    /// use tagmarshal_core::error::Error;
    ///
    /// let err = Error::precondition("csv payload is required");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn precondition<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Precondition(s.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Constraint`].
    ///
    /// # Example
    /// ```
    /// use tagmarshal_core::error::Error;
    ///
    /// let err = Error::constraint(format!("{} min length is {}", "code", 4));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn constraint<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Constraint(s.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Validation`] for the named field.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn validation<F, S>(field: F, reason: S) -> Self
    where
        F: Into<Cow<'static, str>>,
        S: Into<Cow<'static, str>>,
    {
        let err = Error::Validation {
            field: field.into(),
            reason: reason.into(),
        };
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Required`] for the named field.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn required<S: Into<Cow<'static, str>>>(field: S) -> Self {
        let err = Error::Required(field.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Decode`].
    ///
    /// # Example
    /// ```
    /// use tagmarshal_core::error::Error;
    ///
    /// let err = Error::decode(format!("'{}' is not a valid integer", "12a"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn decode<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Decode(s.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::BlankOutput`] naming the operation that produced nothing.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn blank_output<S: Into<Cow<'static, str>>>(operation: S) -> Self {
        let err = Error::BlankOutput(operation.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeNotRegistered`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_not_registered<F, S>(field: F, tag: S) -> Self
    where
        F: Into<Cow<'static, str>>,
        S: Into<Cow<'static, str>>,
    {
        let err = Error::TypeNotRegistered {
            field: field.into(),
            tag: tag.into(),
        };
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unknown`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unknown(s.into());
        if PANIC_ON_ERROR {
            panic!("TAGMARSHAL_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Whether the error came from a declared `validate` expression or a `req` check.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Required(_))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use tagmarshal_core::ensure;
/// use tagmarshal_core::error::Error;
///
/// fn check_delimiter(delimiter: &str) -> Result<(), Error> {
///     ensure!(!delimiter.is_empty(), Error::precondition("delimiter is required"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`enum@Error`].
///
/// # Examples
/// ```
/// use tagmarshal_core::bail;
/// use tagmarshal_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("something went wrong");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::unknown($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)))
    };
}
