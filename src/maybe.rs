/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Maybe`], an option type that refuses to hand out a value it doesn't have

use std::{
	any::Any,
	fmt,
	hash::{DefaultHasher, Hash, Hasher},
};

use crate::{
	error::MaybeError,
	requires::{Nullable, require_not_null},
};

const HASH_MULTIPLIER: u64 = 397;

/// Payload hash used in place of the value's hash when there's no value
const ABSENT_PAYLOAD_HASH: u64 = 0;

/// A value that is either present or explicitly absent.
///
/// The state is fixed at construction. A present [`Maybe`] always contains a real, non-null value,
/// an absent one contains nothing at all and [`Maybe::value`] returns [`MaybeError::InvalidState`] for it.
///
/// # Examples
///
/// ```
/// use maybe_option::{Maybe, MaybeError};
///
/// let present = Maybe::new("Test")?;
/// assert!(present.has_value());
/// assert_eq!(present.value(), Ok(&"Test"));
///
/// let absent = Maybe::<&str>::no_value();
/// assert_eq!(absent.value(), Err(MaybeError::InvalidState));
///
/// // a null payload is rejected
/// assert!(Maybe::new(None::<u8>).is_err());
/// # Ok::<(), MaybeError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Maybe<T> {
	value: Option<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
	T: serde::Deserialize<'de> + Nullable,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = Option::<T>::deserialize(deserializer)?;
		Ok(Maybe::from_nullable(value))
	}
}

impl<T> Maybe<T> {
	/// Creates a [`Maybe`] containing `value`.
	///
	/// # Errors
	/// Returns [`MaybeError::NullArgument`] if `value` is itself null, e.g. a [`None`] or a null pointer
	pub fn new(value: T) -> Result<Self, MaybeError>
	where
		T: Nullable,
	{
		require_not_null(&value, "value")?;

		Ok(Self { value: Some(value) })
	}

	/// Creates a [`Maybe`] from a value that may be missing.
	///
	/// Both a missing and a null value result in [`Maybe::no_value`]
	#[must_use]
	pub fn from_nullable(value: Option<T>) -> Self
	where
		T: Nullable,
	{
		match value {
			Some(value) if !value.is_null() => Self { value: Some(value) },
			_ => Self::no_value(),
		}
	}

	/// Returns the [`Maybe`] that has no value
	#[must_use]
	pub const fn no_value() -> Self {
		Self { value: None }
	}

	/// Checks if this [`Maybe`] contains a value
	#[must_use]
	pub const fn has_value(&self) -> bool {
		self.value.is_some()
	}

	/// Gets a reference to the contained value.
	///
	/// Check [`Maybe::has_value`] first if the value may be absent, there is no fallback value.
	///
	/// # Errors
	/// Returns [`MaybeError::InvalidState`] if there's no value
	pub fn value(&self) -> Result<&T, MaybeError> {
		self.value.as_ref().ok_or_else(invalid_state)
	}

	/// Takes the contained value out of this [`Maybe`].
	///
	/// # Errors
	/// Returns [`MaybeError::InvalidState`] if there's no value
	pub fn into_value(self) -> Result<T, MaybeError> {
		self.value.ok_or_else(invalid_state)
	}

	/// Views this [`Maybe`] as an [`Option`] reference
	#[must_use]
	pub const fn as_option(&self) -> Option<&T> {
		self.value.as_ref()
	}

	/// Converts this [`Maybe`] into an [`Option`]
	#[must_use]
	pub fn into_option(self) -> Option<T> {
		self.value
	}

	/// Compares against an object of any type.
	///
	/// Returns `false` for anything that isn't a `Maybe<T>` of this exact `T`,
	/// e.g. a `Maybe<i32>` never equals a `Maybe<String>`, even if both have no value.
	#[must_use]
	pub fn eq_any(&self, other: &dyn Any) -> bool
	where
		T: PartialEq + 'static,
	{
		other
			.downcast_ref::<Self>()
			.is_some_and(|other| self == other)
	}

	/// Computes a deterministic hash of both the payload and the presence flag.
	///
	/// The payload hash is multiplied by 397 and xor'ed with the presence flag.
	/// Equal instances always produce equal hash codes.
	#[must_use]
	pub fn hash_code(&self) -> u64
	where
		T: Hash,
	{
		let payload_hash = match &self.value {
			Some(value) => {
				let mut hasher = DefaultHasher::new();
				value.hash(&mut hasher);
				hasher.finish()
			}
			None => ABSENT_PAYLOAD_HASH,
		};

		payload_hash.wrapping_mul(HASH_MULTIPLIER) ^ u64::from(self.has_value())
	}
}

fn invalid_state() -> MaybeError {
	#[cfg(feature = "tracing")]
	tracing::debug!("Value of an empty Maybe requested");

	MaybeError::InvalidState
}

impl<T> Default for Maybe<T> {
	fn default() -> Self {
		Self::no_value()
	}
}

impl<T: Hash> Hash for Maybe<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.hash_code());
	}
}

impl<T: Nullable> From<Option<T>> for Maybe<T> {
	fn from(value: Option<T>) -> Self {
		Self::from_nullable(value)
	}
}

impl<T> From<Maybe<T>> for Option<T> {
	fn from(value: Maybe<T>) -> Self {
		value.into_option()
	}
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => write!(f, "Maybe: {value}"),
			None => f.write_str("Maybe.NoValue"),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => write!(f, "Maybe: {value:?}"),
			None => f.write_str("Maybe.NoValue"),
		}
	}
}
