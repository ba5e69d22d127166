/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An option type that makes the absence of a value explicit.
//!
//! [`Maybe<T>`] either contains exactly one value or none at all.
//! Asking an empty [`Maybe`] for its value is an error instead of a silently substituted default.
//!
//! # Features
//!
//! - `serde`: (de)serializes a [`Maybe<T>`] exactly like an [`Option<T>`]
//! - `tracing`: emits a debug event whenever a precondition fails
//!
//! # Example
//!
//! ```
//! use maybe_option::{MaybeError, of, of_nullable_reference, require_not_empty};
//!
//! let greeting = of_nullable_reference(Some("hello"));
//! assert!(greeting.has_value());
//! assert_eq!(greeting.value(), Ok(&"hello"));
//!
//! let nothing = of_nullable_reference(None::<&str>);
//! assert!(!nothing.has_value());
//!
//! assert_eq!(of(None::<&str>), Err(MaybeError::NullArgument { parameter: "value" }));
//! assert!(require_not_empty(Some(""), "name").is_err());
//! ```

mod error;
mod maybe;
mod of;
mod requires;

pub use self::{
	error::MaybeError,
	maybe::Maybe,
	of::{of, of_nullable_reference, of_value, of_value_type},
	requires::{Nullable, require_not_empty, require_not_null},
};
