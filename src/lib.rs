//! The Bignum Kernel crate is the allocation-free engine beneath an
//! arbitrary-precision integer type.
//! 
//! Values are word arrays, least-significant word first. The [`unsigned`]
//! module does arithmetic, shifts, bitwise operations, and comparison on plain
//! magnitudes; the [`signed`] module layers two's-complement semantics on top
//! for the sign-aware bitwise operators. Every operation writes into a buffer
//! supplied by the caller and returns the normalised length of its result.
//! 
//! The kernel trusts its caller by default. The [`checked`] module offers the
//! same operations behind full precondition validation, reporting violations
//! as [`PreconditionError`]s.



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

pub mod bits;
pub mod checked;
mod errors;
pub mod signed;
pub mod unsigned;

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;



//		Packages																										

pub use bits::Word;
pub use errors::PreconditionError;
pub use signed::SignedOp;
