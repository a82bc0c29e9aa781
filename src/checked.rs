//! Precondition-validating front ends for the kernel.
//! 
//! The operations in [`unsigned`](crate::unsigned) and
//! [`signed`](crate::signed) trust their caller: an undersized buffer panics,
//! and an unnormalised operand, a dirty accumulator, or a subtraction that
//! underflows silently computes a wrong answer. The functions here check every
//! documented precondition first, report a violation as a
//! [`PreconditionError`], and otherwise delegate unchanged.

#![allow(clippy::arithmetic_side_effects, reason = "Capacity sums cannot overflow a slice length")]



//		Modules																											

#[cfg(test)]
#[path = "tests/checked.rs"]
mod tests;



//		Packages																										

use crate::{
	bits::Word,
	errors::PreconditionError,
	signed::{self, SignedOp},
	unsigned,
};
use core::cmp::max;
use tracing::debug;



//		Functions																										

//		reject																	
/// Logs a rejected call and hands back the error.
/// 
/// The lengths or shift amount carried by the error are recorded as fields of
/// their own.
/// 
fn reject(op: &'static str, err: PreconditionError) -> PreconditionError {
	match err {
		PreconditionError::BufferTooSmall { needed, actual } => {
			debug!(op, needed, actual, %err, "Rejected kernel call");
		},
		PreconditionError::LengthMismatch(lhs_len, rhs_len) => {
			debug!(op, lhs_len, rhs_len, %err, "Rejected kernel call");
		},
		PreconditionError::ShiftOutOfRange(amount) => {
			debug!(op, amount, %err, "Rejected kernel call");
		},
		PreconditionError::DirtyAccumulator(operand)
		| PreconditionError::EmptyOperand(operand)
		| PreconditionError::SignMismatch(operand)
		| PreconditionError::Unnormalized(operand) => {
			debug!(op, operand, %err, "Rejected kernel call");
		},
		PreconditionError::DivisionByZero | PreconditionError::Underflow => {
			debug!(op, %err, "Rejected kernel call");
		},
	}
	err
}

//		non_empty																
fn non_empty(op: &'static str, name: &'static str, words: &[Word]) -> Result<(), PreconditionError> {
	if words.is_empty() {
		return Err(reject(op, PreconditionError::EmptyOperand(name)));
	}
	Ok(())
}

//		normalised																
fn normalised(op: &'static str, name: &'static str, words: &[Word]) -> Result<(), PreconditionError> {
	non_empty(op, name, words)?;
	if unsigned::actual_count(words) != words.len() {
		return Err(reject(op, PreconditionError::Unnormalized(name)));
	}
	Ok(())
}

//		capacity																
fn capacity(op: &'static str, needed: usize, actual: usize) -> Result<(), PreconditionError> {
	if actual < needed {
		return Err(reject(op, PreconditionError::BufferTooSmall { needed, actual }));
	}
	Ok(())
}

//		zeroed																	
fn zeroed(op: &'static str, name: &'static str, words: &[Word]) -> Result<(), PreconditionError> {
	if words.iter().any(|&w| w != 0) {
		return Err(reject(op, PreconditionError::DirtyAccumulator(name)));
	}
	Ok(())
}

//		sign_flag																
fn sign_flag(op: &'static str, name: &'static str, words: &[Word], negative: bool) -> Result<(), PreconditionError> {
	if signed::is_negative(words) != negative {
		return Err(reject(op, PreconditionError::SignMismatch(name)));
	}
	Ok(())
}

//		shift_amount															
fn shift_amount(op: &'static str, amount: u32) -> Result<(), PreconditionError> {
	if amount >= Word::BITS {
		return Err(reject(op, PreconditionError::ShiftOutOfRange(amount)));
	}
	Ok(())
}

//		add																		
/// Checked form of [`unsigned::add()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty or unnormalised, or if `sum` holds fewer
/// than `max(lhs, rhs) + 1` words.
/// 
pub fn add(lhs: &[Word], rhs: &[Word], sum: &mut [Word]) -> Result<usize, PreconditionError> {
	normalised("add", "lhs", lhs)?;
	normalised("add", "rhs", rhs)?;
	capacity("add", max(lhs.len(), rhs.len()) + 1, sum.len())?;
	Ok(unsigned::add(lhs, rhs, sum))
}

//		sub																		
/// Checked form of [`unsigned::sub()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty or unnormalised, if `lhs` is less than
/// `rhs`, or if `diff` holds fewer than `lhs` words.
/// 
pub fn sub(lhs: &[Word], rhs: &[Word], diff: &mut [Word]) -> Result<usize, PreconditionError> {
	normalised("sub", "lhs", lhs)?;
	normalised("sub", "rhs", rhs)?;
	if unsigned::less_than(lhs, rhs) {
		return Err(reject("sub", PreconditionError::Underflow));
	}
	capacity("sub", lhs.len(), diff.len())?;
	Ok(unsigned::sub(lhs, rhs, diff))
}

//		mul																		
/// Checked form of [`unsigned::mul()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty, if `prod` holds fewer than `lhs + rhs`
/// words, or if those words are not all zero.
/// 
pub fn mul(lhs: &[Word], rhs: &[Word], prod: &mut [Word]) -> Result<usize, PreconditionError> {
	non_empty("mul", "lhs", lhs)?;
	non_empty("mul", "rhs", rhs)?;
	let count = lhs.len() + rhs.len();
	capacity("mul", count, prod.len())?;
	zeroed("mul", "prod", prod.get(..count).unwrap_or_default())?;
	Ok(unsigned::mul(lhs, rhs, prod))
}

//		quotient_and_remainder													
/// Checked form of [`unsigned::quotient_and_remainder()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty or unnormalised, if `rhs` is zero, if
/// `quotient` holds fewer than `lhs - rhs + 1` words (at least one) or
/// `remainder` fewer than `rhs + 1` words, or if either output is not zeroed.
/// 
pub fn quotient_and_remainder(
	lhs:       &[Word],
	rhs:       &[Word],
	quotient:  &mut [Word],
	remainder: &mut [Word],
) -> Result<(usize, usize), PreconditionError> {
	normalised("quotient_and_remainder", "lhs", lhs)?;
	normalised("quotient_and_remainder", "rhs", rhs)?;
	if rhs == [0] {
		return Err(reject("quotient_and_remainder", PreconditionError::DivisionByZero));
	}
	capacity("quotient_and_remainder", lhs.len().saturating_sub(rhs.len()) + 1, quotient.len())?;
	capacity("quotient_and_remainder", rhs.len() + 1,                          remainder.len())?;
	zeroed("quotient_and_remainder", "quotient",  quotient)?;
	zeroed("quotient_and_remainder", "remainder", remainder)?;
	Ok(unsigned::quotient_and_remainder(lhs, rhs, quotient, remainder))
}

//		shift_left																
/// Checked form of [`unsigned::shift_left()`].
/// 
/// # Errors
/// 
/// Fails if `shifting` is empty, if `amount` is not less than the word width,
/// or if `shifted` holds fewer than `shifting + 1` words.
/// 
pub fn shift_left(shifting: &[Word], shifted: &mut [Word], amount: u32) -> Result<usize, PreconditionError> {
	non_empty("shift_left", "shifting", shifting)?;
	shift_amount("shift_left", amount)?;
	capacity("shift_left", shifting.len() + 1, shifted.len())?;
	Ok(unsigned::shift_left(shifting, shifted, amount))
}

//		shift_right_in_place													
/// Checked form of [`unsigned::shift_right_in_place()`].
/// 
/// # Errors
/// 
/// Fails if `words` is empty or if `amount` is not less than the word width.
/// 
pub fn shift_right_in_place(words: &mut [Word], amount: u32) -> Result<usize, PreconditionError> {
	non_empty("shift_right_in_place", "words", words)?;
	shift_amount("shift_right_in_place", amount)?;
	Ok(unsigned::shift_right_in_place(words, amount))
}

//		bitwise_not																
/// Checked form of [`unsigned::bitwise_not()`].
/// 
/// # Errors
/// 
/// Fails if `negating` is empty or if `negated` is shorter than it.
/// 
pub fn bitwise_not(negating: &[Word], negated: &mut [Word]) -> Result<usize, PreconditionError> {
	non_empty("bitwise_not", "negating", negating)?;
	capacity("bitwise_not", negating.len(), negated.len())?;
	Ok(unsigned::bitwise_not(negating, negated))
}

//		bitwise_and																
/// Checked form of [`unsigned::bitwise_and()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty, if their lengths differ, or if `result`
/// is shorter than them.
/// 
pub fn bitwise_and(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> Result<usize, PreconditionError> {
	non_empty("bitwise_and", "lhs", lhs)?;
	non_empty("bitwise_and", "rhs", rhs)?;
	if lhs.len() != rhs.len() {
		return Err(reject("bitwise_and", PreconditionError::LengthMismatch(lhs.len(), rhs.len())));
	}
	capacity("bitwise_and", lhs.len(), result.len())?;
	Ok(unsigned::bitwise_and(lhs, rhs, result))
}

//		bitwise_or																
/// Checked form of [`unsigned::bitwise_or()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty, or if `result` holds fewer than
/// `max(lhs, rhs)` words.
/// 
pub fn bitwise_or(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> Result<usize, PreconditionError> {
	non_empty("bitwise_or", "lhs", lhs)?;
	non_empty("bitwise_or", "rhs", rhs)?;
	capacity("bitwise_or", max(lhs.len(), rhs.len()), result.len())?;
	Ok(unsigned::bitwise_or(lhs, rhs, result))
}

//		bitwise_xor																
/// Checked form of [`unsigned::bitwise_xor()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty, or if `result` holds fewer than
/// `max(lhs, rhs)` words.
/// 
pub fn bitwise_xor(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> Result<usize, PreconditionError> {
	non_empty("bitwise_xor", "lhs", lhs)?;
	non_empty("bitwise_xor", "rhs", rhs)?;
	capacity("bitwise_xor", max(lhs.len(), rhs.len()), result.len())?;
	Ok(unsigned::bitwise_xor(lhs, rhs, result))
}

//		less_than																
/// Checked form of [`unsigned::less_than()`].
/// 
/// # Errors
/// 
/// Fails if either operand is empty or unnormalised.
/// 
pub fn less_than(lhs: &[Word], rhs: &[Word]) -> Result<bool, PreconditionError> {
	normalised("less_than", "lhs", lhs)?;
	normalised("less_than", "rhs", rhs)?;
	Ok(unsigned::less_than(lhs, rhs))
}

//		decimal_width															
fn decimal_width(word: Word) -> usize {
	word.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

//		digits_to_string														
/// Checked form of [`unsigned::digits_to_string()`].
/// 
/// The exact rendered width is computed up front: the most-significant limb
/// at its natural width, and every other limb at `digit_digits` or its natural
/// width, whichever is wider.
/// 
/// # Errors
/// 
/// Fails if `digits` is empty, or if `string` cannot hold the rendering.
/// 
pub fn digits_to_string(digits: &[Word], string: &mut [u8], digit_digits: usize) -> Result<usize, PreconditionError> {
	let Some((&top, rest)) = digits.split_last() else {
		return Err(reject("digits_to_string", PreconditionError::EmptyOperand("digits")));
	};
	let needed = decimal_width(top)
		+ rest.iter().map(|&limb| max(digit_digits, decimal_width(limb))).sum::<usize>();
	capacity("digits_to_string", needed, string.len())?;
	unsigned::digits_to_string(digits, string, digit_digits)
		.map_err(|_| reject("digits_to_string", PreconditionError::BufferTooSmall { needed, actual: string.len() }))
}

//		sign_conversion															
/// Checked form of [`signed::sign_conversion()`].
/// 
/// # Errors
/// 
/// Fails if `words` is empty, or if `result` holds fewer than `words + 1`
/// words.
/// 
pub fn sign_conversion(
	words:           &[Word],
	words_negative:  bool,
	result_negative: bool,
	result:          &mut [Word],
) -> Result<usize, PreconditionError> {
	non_empty("sign_conversion", "words", words)?;
	capacity("sign_conversion", words.len() + 1, result.len())?;
	Ok(signed::sign_conversion(words, words_negative, result_negative, result))
}

//		signed_bitwise															
/// Checked form of [`signed::bitwise()`].
/// 
/// Only the first [`SignedOp::result_count()`] words of `result` are used.
/// 
/// # Errors
/// 
/// Fails if either operand is empty, if either sign flag disagrees with the
/// top bit of its operand, or if `result` is shorter than the result count.
/// 
pub fn signed_bitwise(
	op:           SignedOp,
	lhs:          &[Word],
	lhs_negative: bool,
	rhs:          &[Word],
	rhs_negative: bool,
	result:       &mut [Word],
) -> Result<usize, PreconditionError> {
	let name = match op {
		SignedOp::And => "signed_bitwise_and",
		SignedOp::Or  => "signed_bitwise_or",
		SignedOp::Xor => "signed_bitwise_xor",
	};
	non_empty(name, "lhs", lhs)?;
	non_empty(name, "rhs", rhs)?;
	sign_flag(name, "lhs", lhs, lhs_negative)?;
	sign_flag(name, "rhs", rhs, rhs_negative)?;
	let count  = op.result_count(lhs.len(), lhs_negative, rhs.len(), rhs_negative);
	capacity(name, count, result.len())?;
	let result = result.get_mut(..count).unwrap_or_default();
	Ok(signed::bitwise(op, lhs, lhs_negative, rhs, rhs_negative, result))
}

//		signed_bitwise_and														
/// Checked form of [`signed::bitwise_and()`].
/// 
/// # Errors
/// 
/// See [`signed_bitwise()`].
/// 
pub fn signed_bitwise_and(
	lhs:          &[Word],
	lhs_negative: bool,
	rhs:          &[Word],
	rhs_negative: bool,
	result:       &mut [Word],
) -> Result<usize, PreconditionError> {
	signed_bitwise(SignedOp::And, lhs, lhs_negative, rhs, rhs_negative, result)
}

//		signed_bitwise_or														
/// Checked form of [`signed::bitwise_or()`].
/// 
/// # Errors
/// 
/// See [`signed_bitwise()`].
/// 
pub fn signed_bitwise_or(
	lhs:          &[Word],
	lhs_negative: bool,
	rhs:          &[Word],
	rhs_negative: bool,
	result:       &mut [Word],
) -> Result<usize, PreconditionError> {
	signed_bitwise(SignedOp::Or, lhs, lhs_negative, rhs, rhs_negative, result)
}

//		signed_bitwise_xor														
/// Checked form of [`signed::bitwise_xor()`].
/// 
/// # Errors
/// 
/// See [`signed_bitwise()`].
/// 
pub fn signed_bitwise_xor(
	lhs:          &[Word],
	lhs_negative: bool,
	rhs:          &[Word],
	rhs_negative: bool,
	result:       &mut [Word],
) -> Result<usize, PreconditionError> {
	signed_bitwise(SignedOp::Xor, lhs, lhs_negative, rhs, rhs_negative, result)
}
