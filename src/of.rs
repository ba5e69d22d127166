/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Factories that turn raw and nullable inputs into a [`Maybe`]

use crate::{
	Maybe,
	error::MaybeError,
	requires::{Nullable, require_not_null},
};

/// Creates a [`Maybe`] from a value that is required to be present.
///
/// # Errors
/// Returns [`MaybeError::NullArgument`] if `value` is [`None`] or contains a null value itself, e.g. `Some(None)`
pub fn of<T: Nullable>(value: Option<T>) -> Result<Maybe<T>, MaybeError> {
	require_not_null(&value, "value")?;

	Ok(Maybe::from_nullable(value))
}

/// Creates a [`Maybe`] from a value that may be missing.
///
/// Unlike [`of`], a missing or null value is fine and results in [`Maybe::no_value`]
#[must_use]
pub fn of_nullable_reference<T: Nullable>(value: Option<T>) -> Maybe<T> {
	Maybe::from_nullable(value)
}

/// Creates a [`Maybe`] from an optional plain value.
///
/// Default values like `0` are still values:
///
/// ```
/// use maybe_option::of_value_type;
///
/// assert!(of_value_type(Some(0)).has_value());
/// assert!(!of_value_type(None::<i32>).has_value());
/// ```
#[must_use]
pub fn of_value_type<T: Nullable>(value: Option<T>) -> Maybe<T> {
	Maybe::from_nullable(value)
}

/// Same as [`of_value_type`] for a value that is always present
#[must_use]
pub fn of_value<T: Nullable>(value: T) -> Maybe<T> {
	Maybe::from_nullable(Some(value))
}
