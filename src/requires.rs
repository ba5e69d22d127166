/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument guards that fail with [`MaybeError::NullArgument`] when a required value is missing

use std::{ptr::NonNull, rc::Rc, sync::Arc};

use crate::{Maybe, error::MaybeError};

/// A type that may be used where a value is required to be non-null.
///
/// Most types can never be null and use the default [`Nullable::is_null`] that always returns `false`,
/// e.g. `impl Nullable for MyType {}`. This is already done for the primitive and common std types.
/// Types that do have a null state override it: [`Option`], [`Maybe`] and raw pointers.
/// Wrappers like references, [`Box`], [`Rc`] and [`Arc`] forward to the value they point to.
pub trait Nullable {
	/// Checks if this value represents the absence of a value
	fn is_null(&self) -> bool {
		false
	}
}

macro_rules! never_null {
	($($ty:ty),* $(,)?) => {
		$(impl Nullable for $ty {})*
	};
}

never_null!(
	(),
	bool,
	char,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	f32,
	f64,
	str,
	String,
);

impl<T> Nullable for [T] {}

impl<T> Nullable for Vec<T> {}

impl<T: ?Sized> Nullable for NonNull<T> {}

/// [`None`], as well as [`Some`] of a null value, is null
impl<T: Nullable> Nullable for Option<T> {
	fn is_null(&self) -> bool {
		self.as_ref().is_none_or(Nullable::is_null)
	}
}

impl<T> Nullable for Maybe<T> {
	fn is_null(&self) -> bool {
		!self.has_value()
	}
}

impl<T: ?Sized> Nullable for *const T {
	fn is_null(&self) -> bool {
		<*const T>::is_null(*self)
	}
}

impl<T: ?Sized> Nullable for *mut T {
	fn is_null(&self) -> bool {
		<*mut T>::is_null(*self)
	}
}

macro_rules! forward_nullable {
	($($ptr:ty),* $(,)?) => {
		$(
			impl<T: Nullable + ?Sized> Nullable for $ptr {
				fn is_null(&self) -> bool {
					(**self).is_null()
				}
			}
		)*
	};
}

forward_nullable!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Requires `value` to be non-null.
///
/// Accepts any [`Nullable`] value, values of types that can never be null always pass.
///
/// # Errors
/// Returns [`MaybeError::NullArgument`] carrying `parameter_name` if `value` is null
pub fn require_not_null<V>(value: &V, parameter_name: &'static str) -> Result<(), MaybeError>
where
	V: Nullable + ?Sized,
{
	if value.is_null() {
		return Err(null_argument(parameter_name));
	}

	Ok(())
}

/// Requires the string `value` to be present and non-empty.
///
/// A missing and an empty string both produce the same error.
///
/// # Errors
/// Returns [`MaybeError::NullArgument`] carrying `parameter_name` if `value` is [`None`] or empty
pub fn require_not_empty<S>(value: Option<S>, parameter_name: &'static str) -> Result<(), MaybeError>
where
	S: AsRef<str>,
{
	match value {
		Some(s) if !s.as_ref().is_empty() => Ok(()),
		_ => Err(null_argument(parameter_name)),
	}
}

fn null_argument(parameter: &'static str) -> MaybeError {
	#[cfg(feature = "tracing")]
	tracing::debug!(parameter, "Required argument is missing");

	MaybeError::NullArgument { parameter }
}
