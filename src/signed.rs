//! Two's-complement semantics on top of the unsigned core.
//! 
//! A signed value is held by its caller as a magnitude plus a sign flag. For
//! bitwise operations it is materialised as a two's-complement word array,
//! whose sign is always recoverable from the top bit of its own last word.
//! [`sign_conversion()`] guarantees this by appending a guard word whenever the
//! magnitude's natural top bit would otherwise be misread as the sign bit.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Capacities are part of the calling contract"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Index arithmetic is bounded by slice lengths")]



//		Modules																											

#[cfg(test)]
#[path = "tests/signed.rs"]
mod tests;



//		Packages																										

use crate::{
	bits::{Word, leading_zeros},
	unsigned::actual_count,
};
use core::{
	cmp::{max, min},
	fmt::{Display, Formatter, self},
};



//		Enums																											

//		SignedOp																
/// The sign-aware bitwise operators.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignedOp {
	/// Bitwise AND.
	And,
	
	/// Bitwise inclusive OR.
	Or,
	
	/// Bitwise exclusive OR.
	Xor,
}

//󰭅		SignedOp																
impl SignedOp {
	//		apply																
	/// Combines two overlapping two's-complement words.
	#[must_use]
	pub const fn apply(self, lhs: Word, rhs: Word) -> Word {
		match self {
			Self::And => lhs & rhs,
			Self::Or  => lhs | rhs,
			Self::Xor => lhs ^ rhs,
		}
	}
	
	//		extend																
	/// Combines a word of the longer operand with the implicit sign extension
	/// of the shorter operand.
	/// 
	/// # Parameters
	/// 
	/// * `word`             - The word of the longer operand.
	/// * `shorter_negative` - Whether the shorter operand is negative, in which
	///                        case its implicit high words are all ones.
	/// 
	#[must_use]
	pub const fn extend(self, word: Word, shorter_negative: bool) -> Word {
		match (self, shorter_negative) {
			(Self::And, true)  => word,
			(Self::And, false) => 0,
			(Self::Or,  true)  => Word::MAX,
			(Self::Or,  false) => word,
			(Self::Xor, true)  => !word,
			(Self::Xor, false) => word,
		}
	}
	
	//		result_count														
	/// Computes the output capacity a signed bitwise operation needs.
	/// 
	/// An AND of operands with differing signs cannot extend beyond the
	/// nonnegative operand, whose implicit high words are zero. Every other
	/// combination needs the longer operand's length.
	/// 
	/// # Parameters
	/// 
	/// * `lhs_len`      - The length of the left-hand two's-complement array.
	/// * `lhs_negative` - Whether the left-hand operand is negative.
	/// * `rhs_len`      - The length of the right-hand two's-complement array.
	/// * `rhs_negative` - Whether the right-hand operand is negative.
	/// 
	#[must_use]
	pub fn result_count(self, lhs_len: usize, lhs_negative: bool, rhs_len: usize, rhs_negative: bool) -> usize {
		match self {
			Self::And if lhs_negative != rhs_negative => if lhs_negative { rhs_len } else { lhs_len },
			Self::And | Self::Or | Self::Xor          => max(lhs_len, rhs_len),
		}
	}
	
	//		result_negative														
	/// Determines the sign of a signed bitwise operation's result.
	#[must_use]
	pub const fn result_negative(self, lhs_negative: bool, rhs_negative: bool) -> bool {
		match self {
			Self::And => lhs_negative && rhs_negative,
			Self::Or  => lhs_negative || rhs_negative,
			Self::Xor => lhs_negative != rhs_negative,
		}
	}
}

//󰭅		Display																	
impl Display for SignedOp {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::And => "and",
			Self::Or  => "or",
			Self::Xor => "xor",
		})
	}
}



//		Functions																										

//		is_value_negative														
/// Determines whether a single word reads as negative, i.e. has its top bit
/// set.
#[must_use]
pub const fn is_value_negative(value: Word) -> bool {
	leading_zeros(value) == 0
}

//		is_negative																
/// Determines whether a two's-complement word array is negative.
/// 
/// # Parameters
/// 
/// * `words` - The two's-complement array, which must not be empty.
/// 
#[must_use]
pub fn is_negative(words: &[Word]) -> bool {
	is_value_negative(words[words.len() - 1])
}

//		twos_complement															
/// Negates a word array in place, by complementing every word and then
/// incrementing with a rippling carry.
pub fn twos_complement(words: &mut [Word]) {
	let mut carry = true;
	for word in words {
		let (total, c) = (!*word).overflowing_add(Word::from(carry));
		*word          = total;
		carry          = c;
	}
}

//		sign_conversion															
/// Converts a word array between sign-flagged magnitude and two's complement.
/// 
/// If the source and target polarities match, the words are copied verbatim;
/// otherwise the two's complement is taken. If the top bit of the last word
/// then disagrees with `result_negative`, a guard word is appended: all zeros
/// for a nonnegative result, all ones for a negative one.
/// 
/// Returns the length written, which is one more than the input's if a guard
/// word was needed.
/// 
/// The same call converts back: passing a two's-complement array with its
/// sign as `words_negative` and `false` as `result_negative` yields its
/// magnitude. That magnitude may still carry zero guard words, so callers trim
/// it with [`actual_count()`]. [`into_magnitude()`] does both steps in place.
/// 
/// # Parameters
/// 
/// * `words`           - The source words, which must not be empty.
/// * `words_negative`  - Whether the source is negative.
/// * `result_negative` - Whether the result must read as negative.
/// * `result`          - The output, with capacity of at least `words + 1`.
/// 
pub fn sign_conversion(words: &[Word], words_negative: bool, result_negative: bool, result: &mut [Word]) -> usize {
	let count = words.len();
	debug_assert!(count > 0, "Operand must not be empty");
	result[..count].copy_from_slice(words);
	if words_negative != result_negative {
		twos_complement(&mut result[..count]);
	}
	
	if is_value_negative(result[count - 1]) == result_negative {
		return count;
	}
	result[count] = if result_negative { Word::MAX } else { 0 };
	count + 1
}

//		into_magnitude															
/// Converts a two's-complement word array back to a magnitude, in place.
/// 
/// Returns the normalised length of the magnitude and whether the value was
/// negative. The sign is read before anything is changed.
/// 
/// # Parameters
/// 
/// * `words` - The two's-complement array, which must not be empty.
/// 
pub fn into_magnitude(words: &mut [Word]) -> (usize, bool) {
	let negative = is_negative(words);
	if negative {
		twos_complement(words);
	}
	(actual_count(words), negative)
}

//		bitwise																	
/// Applies a sign-aware bitwise operator to two two's-complement arrays.
/// 
/// The overlapping words are combined directly. Beyond the shorter operand,
/// its implicit high words are all ones if it is negative and all zeros if
/// not, and are combined with the longer operand's words accordingly. The raw
/// result is finally converted back to a magnitude.
/// 
/// Returns the normalised length of the result's magnitude. The result's sign
/// is given by [`SignedOp::result_negative()`].
/// 
/// # Parameters
/// 
/// * `op`           - The operator to apply.
/// * `lhs`          - The left-hand two's-complement array.
/// * `lhs_negative` - Whether the left-hand operand is negative.
/// * `rhs`          - The right-hand two's-complement array.
/// * `rhs_negative` - Whether the right-hand operand is negative.
/// * `result`       - The output, whose length is the result count, as given
///                    by [`SignedOp::result_count()`].
/// 
pub fn bitwise(
	op:           SignedOp,
	lhs:          &[Word],
	lhs_negative: bool,
	rhs:          &[Word],
	rhs_negative: bool,
	result:       &mut [Word],
) -> usize {
	let shared = min(min(lhs.len(), rhs.len()), result.len());
	let (longer, shorter_negative) = if lhs.len() > rhs.len() {
		(lhs, rhs_negative)
	} else {
		(rhs, lhs_negative)
	};
	
	for ((out, &l), &r) in result.iter_mut().zip(lhs).zip(rhs) {
		*out = op.apply(l, r);
	}
	for (out, &word) in result[shared..].iter_mut().zip(&longer[shared..]) {
		*out = op.extend(word, shorter_negative);
	}
	
	into_magnitude(result).0
}

//		bitwise_and																
/// Intersects two signed values given as two's-complement arrays.
/// 
/// See [`bitwise()`] for the parameters and the result.
/// 
pub fn bitwise_and(lhs: &[Word], lhs_negative: bool, rhs: &[Word], rhs_negative: bool, result: &mut [Word]) -> usize {
	bitwise(SignedOp::And, lhs, lhs_negative, rhs, rhs_negative, result)
}

//		bitwise_or																
/// Unites two signed values given as two's-complement arrays.
/// 
/// See [`bitwise()`] for the parameters and the result.
/// 
pub fn bitwise_or(lhs: &[Word], lhs_negative: bool, rhs: &[Word], rhs_negative: bool, result: &mut [Word]) -> usize {
	bitwise(SignedOp::Or, lhs, lhs_negative, rhs, rhs_negative, result)
}

//		bitwise_xor																
/// Takes the symmetric difference of two signed values given as
/// two's-complement arrays.
/// 
/// See [`bitwise()`] for the parameters and the result.
/// 
pub fn bitwise_xor(lhs: &[Word], lhs_negative: bool, rhs: &[Word], rhs_negative: bool, result: &mut [Word]) -> usize {
	bitwise(SignedOp::Xor, lhs, lhs_negative, rhs, rhs_negative, result)
}
