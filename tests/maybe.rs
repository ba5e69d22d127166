/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! These tests check the public contract of [`Maybe`] and its factories

#![allow(clippy::missing_assert_message)]
#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::unwrap_used)]

use assert_matches::assert_matches;
use maybe_option::{Maybe, MaybeError, of, of_nullable_reference, of_value, of_value_type};

#[test]
fn no_value_value_fails() {
	let maybe = Maybe::<String>::no_value();

	assert!(!maybe.has_value());
	assert_matches!(maybe.value(), Err(MaybeError::InvalidState));
}

#[test]
fn with_value_returns_value() {
	let maybe = Maybe::new("Test".to_owned()).unwrap();

	assert!(maybe.has_value());
	assert_eq!(maybe.value().map(String::as_str), Ok("Test"));
}

#[test]
fn no_value_is_canonical() {
	assert_eq!(Maybe::<String>::no_value(), Maybe::<String>::no_value());
	assert_eq!(Maybe::<String>::no_value(), Maybe::default());
}

#[test]
fn copies_are_equal() {
	let maybe = Maybe::new("Test").unwrap();
	let copy = maybe;

	assert_eq!(maybe, copy);
	assert!(maybe.eq_any(&copy));
}

#[test]
fn present_never_equals_absent() {
	let left = Maybe::new("Test").unwrap();
	let right = Maybe::no_value();

	assert_ne!(left, right);
}

#[test]
fn different_payloads_are_not_equal() {
	assert_ne!(Maybe::new(1).unwrap(), Maybe::new(2).unwrap());
}

#[test]
fn hash_code_is_not_zero() {
	let maybe = Maybe::new("Test").unwrap();

	assert_ne!(maybe.hash_code(), 0);
}

#[test]
fn equal_instances_hash_equally() {
	let left = Maybe::new("Test".to_owned()).unwrap();
	let right = Maybe::new("Test".to_owned()).unwrap();

	assert_eq!(left.hash_code(), right.hash_code());
	assert_eq!(
		Maybe::<i32>::no_value().hash_code(),
		Maybe::<i32>::no_value().hash_code()
	);
}

#[test]
fn hash_code_separates_presence() {
	assert_ne!(
		Maybe::new(0).unwrap().hash_code(),
		Maybe::<i32>::no_value().hash_code()
	);
}

#[test]
fn eq_any_rejects_no_object() {
	let maybe = Maybe::new("Test").unwrap();

	assert!(!maybe.eq_any(&()));
}

#[test]
fn eq_any_rejects_different_type_maybe() {
	let left = Maybe::<String>::no_value();
	let right = Maybe::<i32>::no_value();

	assert!(!left.eq_any(&right));
	assert!(!Maybe::new(1i64).unwrap().eq_any(&Maybe::new(1i32).unwrap()));
}

#[test]
fn of_fails_if_null() {
	let s: Option<&str> = None;

	assert_matches!(of(s), Err(MaybeError::NullArgument { parameter: "value" }));
}

#[test]
fn of_contains_string() {
	let maybe = of(Some("Test")).unwrap();

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&"Test"));
	assert_eq!(maybe, Maybe::new("Test").unwrap());
}

#[test]
fn of_nullable_no_value_if_null() {
	let s: Option<&str> = None;

	let maybe = of_nullable_reference(s);

	assert!(!maybe.has_value());
}

#[test]
fn of_nullable_contains_string() {
	let maybe = of_nullable_reference(Some("Test"));

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&"Test"));
	assert_eq!(maybe, Maybe::new("Test").unwrap());
}

#[test]
fn value_type() {
	let maybe = Maybe::new(10).unwrap();

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&10));
}

#[test]
fn value_type_default_is_still_a_value() {
	let maybe = Maybe::new(i32::default()).unwrap();

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&0));
}

#[test]
fn of_value_type_with_value() {
	let maybe = of_value(0);

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&0));

	let maybe = of_value_type(Some(0));

	assert!(maybe.has_value());
	assert_eq!(maybe.value(), Ok(&0));
}

#[test]
fn of_value_type_no_value() {
	let i: Option<i32> = None;

	let maybe = of_value_type(i);

	assert!(!maybe.has_value());
}

#[test]
fn null_payload_is_never_present() {
	assert_matches!(
		Maybe::new(std::ptr::null::<u8>()),
		Err(MaybeError::NullArgument { parameter: "value" })
	);
	assert_matches!(
		of(Some(None::<u8>)),
		Err(MaybeError::NullArgument { parameter: "value" })
	);
	assert!(!of_nullable_reference(Some(std::ptr::null::<u8>())).has_value());
	assert!(!of_value_type(Some(None::<u8>)).has_value());
}

#[test]
fn maybe_is_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}

	assert_send_sync::<Maybe<String>>();
}
