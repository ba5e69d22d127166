/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`MaybeError`], the only error type of this crate

/// A violated precondition.
///
/// Neither variant is recoverable at the point it's produced, it should be propagated to the caller as is.
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MaybeError {
	/// A required argument was null, or, for strings, empty
	#[error("value cannot be null: {parameter}")]
	NullArgument {
		/// Name of the offending parameter
		parameter: &'static str,
	},

	/// The value of a [`Maybe`](crate::Maybe) that has no value was requested
	#[error("can not retrieve the value of a Maybe that has no value")]
	InvalidState,
}

impl MaybeError {
	/// Returns the name of the offending parameter if this is a [`MaybeError::NullArgument`]
	#[must_use]
	pub fn parameter(&self) -> Option<&'static str> {
		match *self {
			Self::NullArgument { parameter } => Some(parameter),
			Self::InvalidState => None,
		}
	}
}
