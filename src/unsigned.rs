//! Unsigned arithmetic over magnitude word arrays.
//! 
//! Every operation reads plain least-significant-word-first arrays, writes its
//! result into a caller-supplied buffer, and returns the normalised length of
//! that result. Nothing here allocates. Where an operation documents a minimum
//! output capacity, supplying less panics on the out-of-bounds write.

//	These lint checks are unnecessary in this module because:
//	  1. All lengths come from the slices themselves or from the documented
//	     capacity contract, which the checked layer enforces up front.
//	  2. Carry and borrow are tracked with overflowing_* primitives, so the
//	     remaining arithmetic is index arithmetic bounded by slice lengths.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Capacities are part of the calling contract"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Index arithmetic is bounded by slice lengths")]



//		Modules																											

#[cfg(test)]
#[path = "tests/unsigned.rs"]
mod tests;



//		Packages																										

use crate::bits::{DoubleWord, WORD_BITS, Word, get_bit, leading_zeros, set_bit, trailing_zeros};
use core::{
	cmp::{Ordering, max, min},
	fmt::{Error as FmtError, Write, self},
};



//		Structs																											

//		SliceWriter																
/// A [`fmt::Write`] sink over a fixed byte buffer.
/// 
/// Writing past the end of the buffer fails with [`fmt::Error`] rather than
/// truncating, so that a short buffer is never mistaken for a short number.
/// 
#[derive(Debug)]
struct SliceWriter<'a> {
	buf: &'a mut [u8],
	len: usize,
}

//󰭅		Write																	
impl Write for SliceWriter<'_> {
	//		write_str															
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let end = self.len.checked_add(s.len()).ok_or(FmtError)?;
		self.buf.get_mut(self.len..end).ok_or(FmtError)?.copy_from_slice(s.as_bytes());
		self.len = end;
		Ok(())
	}
}



//		Functions																										

//		actual_count															
/// Finds the normalised length of a word array.
/// 
/// Scans down from the most-significant word, dropping zero words, and stops
/// at a length of one so that zero is always represented by a single zero
/// word.
/// 
/// # Parameters
/// 
/// * `words` - The word array, which may carry superfluous high zero words.
/// 
#[must_use]
pub fn actual_count(words: &[Word]) -> usize {
	let mut count = words.len();
	while count > 1 && words[count - 1] == 0 {
		count -= 1;
	}
	count
}

//		normalized																
/// Returns the normalised view of a word array.
/// 
/// # Parameters
/// 
/// * `words` - The word array, which may carry superfluous high zero words.
/// 
#[must_use]
pub fn normalized(words: &[Word]) -> &[Word] {
	&words[..actual_count(words)]
}

//		add																		
/// Adds two magnitudes.
/// 
/// Ripples the carry through the overlapping words, then propagates only the
/// outstanding carry through the rest of the longer operand. A final carry
/// appends a word of value `1`.
/// 
/// # Parameters
/// 
/// * `lhs` - The first addend.
/// * `rhs` - The second addend.
/// * `sum` - The output, with capacity of at least `max(lhs, rhs) + 1` words.
/// 
pub fn add(lhs: &[Word], rhs: &[Word], sum: &mut [Word]) -> usize {
	debug_assert!(!lhs.is_empty() && !rhs.is_empty(), "Operands must not be empty");
	let (longer, shorter) = if lhs.len() >= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };
	let mut carry         = false;
	
	for (i, (&l, &r)) in longer.iter().zip(shorter).enumerate() {
		let (partial, c1) = l.overflowing_add(r);
		let (total,   c2) = partial.overflowing_add(Word::from(carry));
		sum[i]            = total;
		carry             = c1 || c2;
	}
	
	for i in shorter.len()..longer.len() {
		if carry {
			let (total, c) = longer[i].overflowing_add(1);
			sum[i]         = total;
			carry          = c;
		} else {
			sum[i]         = longer[i];
		}
	}
	
	if carry {
		sum[longer.len()] = 1;
		return longer.len() + 1;
	}
	longer.len()
}

//		sub_in_place															
/// Subtracts one magnitude from another, in place.
/// 
/// This is the safe self-aliasing form of [`sub()`], where the minuend buffer
/// receives the difference.
/// 
/// # Parameters
/// 
/// * `lhs` - The minuend, which receives the difference. It may carry
///           superfluous high zero words, and must not be less than `rhs`.
/// * `rhs` - The subtrahend.
/// 
pub fn sub_in_place(lhs: &mut [Word], rhs: &[Word]) -> usize {
	debug_assert!(lhs.len() >= rhs.len(), "Minuend must be at least as long as subtrahend");
	let mut borrow = false;
	
	for (l, &r) in lhs.iter_mut().zip(rhs) {
		let (partial, b1) = l.overflowing_sub(r);
		let (total,   b2) = partial.overflowing_sub(Word::from(borrow));
		*l                = total;
		borrow            = b1 || b2;
	}
	
	for l in lhs.iter_mut().skip(rhs.len()) {
		if !borrow {
			break;
		}
		let (total, b) = l.overflowing_sub(1);
		*l             = total;
		borrow         = b;
	}
	debug_assert!(!borrow, "Subtrahend must not exceed minuend");
	
	actual_count(lhs)
}

//		sub																		
/// Subtracts one magnitude from another.
/// 
/// # Parameters
/// 
/// * `lhs`  - The minuend, which must not be less than `rhs`.
/// * `rhs`  - The subtrahend.
/// * `diff` - The output, with capacity of at least `lhs` words.
/// 
pub fn sub(lhs: &[Word], rhs: &[Word], diff: &mut [Word]) -> usize {
	let diff = &mut diff[..lhs.len()];
	diff.copy_from_slice(lhs);
	sub_in_place(diff, rhs)
}

//		shift_add																
/// Adds a two-word value into an accumulator at a word offset.
/// 
/// The carry out of the touched words is rippled upwards for as long as it
/// persists, because the accumulator already holds partial sums.
fn shift_add(accumulator: &mut [Word], shift: usize, low: Word, high: Word) {
	let (total, mut carry) = accumulator[shift].overflowing_add(low);
	accumulator[shift]     = total;
	let mut index          = shift + 1;
	
	if high != 0 {
		let (partial, c1)  = accumulator[index].overflowing_add(high);
		let (total,   c2)  = partial.overflowing_add(Word::from(carry));
		accumulator[index] = total;
		carry              = c1 || c2;
		index             += 1;
	}
	
	while carry {
		let (total, c)     = accumulator[index].overflowing_add(1);
		accumulator[index] = total;
		carry              = c;
		index             += 1;
	}
}

//		mul																		
/// Multiplies two magnitudes.
/// 
/// Schoolbook multiplication: every nonzero word pair is multiplied at double
/// width and the two halves are accumulated at offset `i + j`.
/// 
/// # Parameters
/// 
/// * `lhs`  - The multiplicand.
/// * `rhs`  - The multiplier.
/// * `prod` - The output, with capacity of at least `lhs + rhs` words. It is
///            an accumulator and must be zeroed before the call.
/// 
pub fn mul(lhs: &[Word], rhs: &[Word], prod: &mut [Word]) -> usize {
	let count = lhs.len() + rhs.len();
	debug_assert!(prod[..count].iter().all(|&w| w == 0), "Product buffer must be zeroed");
	
	for (i, &l) in lhs.iter().enumerate() {
		if l == 0 {
			continue;
		}
		for (j, &r) in rhs.iter().enumerate() {
			if r == 0 {
				continue;
			}
			let wide = l as DoubleWord * r as DoubleWord;
			#[expect(clippy::cast_possible_truncation, reason = "Splitting into low and high halves")]
			let (low, high) = (wide as Word, (wide >> WORD_BITS) as Word);
			shift_add(prod, i + j, low, high);
		}
	}
	
	actual_count(&prod[..count])
}

//		quotient_and_remainder													
/// Divides one magnitude by another, producing quotient and remainder.
/// 
/// Bit-serial restoring division. For each bit of the dividend, from the top
/// down, the remainder is shifted left by one, takes that bit as its new
/// least-significant bit, and if it is no longer less than the divisor, the
/// divisor is subtracted and the quotient bit is set.
/// 
/// Returns the normalised lengths of the quotient and the remainder.
/// 
/// # Parameters
/// 
/// * `lhs`       - The dividend.
/// * `rhs`       - The divisor, which must not be zero.
/// * `quotient`  - The quotient output, with capacity of at least
///                 `lhs - rhs + 1` words, and at least one. Must be zeroed
///                 before the call.
/// * `remainder` - The remainder output, with capacity of at least `rhs + 1`
///                 words. Must be zeroed before the call.
/// 
pub fn quotient_and_remainder(
	lhs:       &[Word],
	rhs:       &[Word],
	quotient:  &mut [Word],
	remainder: &mut [Word],
) -> (usize, usize) {
	debug_assert!(rhs.iter().any(|&w| w != 0), "Division by zero");
	debug_assert!(remainder.len() > rhs.len(), "Remainder needs one more word than the divisor");
	let used_bits = lhs.len() * WORD_BITS - leading_zeros(lhs[lhs.len() - 1]) as usize;
	let count     = remainder.len();
	
	for i in (0..used_bits).rev() {
		shift_left_in_place(remainder, count, 1);
		set_bit(remainder, 0, get_bit(lhs, i));
		if !seeking_less_than(remainder, rhs) {
			sub_in_place(remainder, rhs);
			set_bit(quotient, i, true);
		}
	}
	
	(actual_count(quotient), actual_count(remainder))
}

//		shift_left_in_place														
/// Shifts a magnitude left by less than a word, in place.
/// 
/// The high `amount` bits of each word carry into the next. A carry escaping
/// the top word is written to `words[count]`, extending the result by one.
/// 
/// # Parameters
/// 
/// * `words`  - The buffer holding the magnitude in its first `count` words.
/// * `count`  - The number of words to shift.
/// * `amount` - The number of bits to shift by, less than the word width.
/// 
pub fn shift_left_in_place(words: &mut [Word], count: usize, amount: u32) -> usize {
	debug_assert!(amount < Word::BITS, "Shift amount must be less than the word width");
	if amount == 0 {
		return count;
	}
	
	let mut previous = 0;
	for word in &mut words[..count] {
		let carry = *word >> (Word::BITS - amount);
		*word     = (*word << amount) | previous;
		previous  = carry;
	}
	
	if previous != 0 {
		words[count] = previous;
		return count + 1;
	}
	count
}

//		shift_left																
/// Shifts a magnitude left by less than a word.
/// 
/// # Parameters
/// 
/// * `shifting` - The magnitude to shift.
/// * `shifted`  - The output, with capacity of at least `shifting + 1` words.
/// * `amount`   - The number of bits to shift by, less than the word width.
/// 
pub fn shift_left(shifting: &[Word], shifted: &mut [Word], amount: u32) -> usize {
	shifted[..shifting.len()].copy_from_slice(shifting);
	shift_left_in_place(shifted, shifting.len(), amount)
}

//		shift_right_in_place													
/// Shifts a magnitude right by less than a word, in place.
/// 
/// The low `amount` bits of each word carry down into the word below. The
/// result never grows, and is trimmed.
/// 
/// # Parameters
/// 
/// * `words`  - The magnitude to shift.
/// * `amount` - The number of bits to shift by, less than the word width.
/// 
pub fn shift_right_in_place(words: &mut [Word], amount: u32) -> usize {
	debug_assert!(amount < Word::BITS, "Shift amount must be less than the word width");
	if amount != 0 {
		let mut previous = 0;
		for word in words.iter_mut().rev() {
			let carry = *word << (Word::BITS - amount);
			*word     = (*word >> amount) | previous;
			previous  = carry;
		}
	}
	actual_count(words)
}

//		bitwise_not																
/// Complements every word of a magnitude.
/// 
/// # Parameters
/// 
/// * `negating` - The magnitude to complement.
/// * `negated`  - The output, with capacity of at least `negating` words.
/// 
pub fn bitwise_not(negating: &[Word], negated: &mut [Word]) -> usize {
	let negated = &mut negated[..negating.len()];
	for (out, &word) in negated.iter_mut().zip(negating) {
		*out = !word;
	}
	actual_count(negated)
}

//		bitwise_and																
/// Intersects two magnitudes of exactly equal length.
/// 
/// There is no implicit zero-extension: callers with operands of different
/// lengths must pad the shorter one first.
/// 
/// # Parameters
/// 
/// * `lhs`    - The first operand.
/// * `rhs`    - The second operand, of the same length as `lhs`.
/// * `result` - The output, with capacity of at least `lhs` words.
/// 
pub fn bitwise_and(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> usize {
	debug_assert_eq!(lhs.len(), rhs.len(), "Operands must have equal length");
	let result = &mut result[..lhs.len()];
	for ((out, &l), &r) in result.iter_mut().zip(lhs).zip(rhs) {
		*out = l & r;
	}
	actual_count(result)
}

//		bitwise_or																
/// Unites two magnitudes of any length.
/// 
/// # Parameters
/// 
/// * `lhs`    - The first operand.
/// * `rhs`    - The second operand.
/// * `result` - The output, with capacity of at least `max(lhs, rhs)` words.
/// 
pub fn bitwise_or(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> usize {
	combine(lhs, rhs, result, |l, r| l | r)
}

//		bitwise_xor																
/// Takes the symmetric difference of two magnitudes of any length.
/// 
/// # Parameters
/// 
/// * `lhs`    - The first operand.
/// * `rhs`    - The second operand.
/// * `result` - The output, with capacity of at least `max(lhs, rhs)` words.
/// 
pub fn bitwise_xor(lhs: &[Word], rhs: &[Word], result: &mut [Word]) -> usize {
	combine(lhs, rhs, result, |l, r| l ^ r)
}

//		combine																	
/// Applies a word-wise operator over the overlapping words, then copies the
/// longer operand's remaining words verbatim.
fn combine<F>(lhs: &[Word], rhs: &[Word], result: &mut [Word], op: F) -> usize
where
	F: Fn(Word, Word) -> Word,
{
	let shared = min(lhs.len(), rhs.len());
	let count  = max(lhs.len(), rhs.len());
	let longer = if lhs.len() > rhs.len() { lhs } else { rhs };
	let result = &mut result[..count];
	
	for ((out, &l), &r) in result.iter_mut().zip(lhs).zip(rhs) {
		*out = op(l, r);
	}
	result[shared..].copy_from_slice(&longer[shared..]);
	
	actual_count(result)
}

//		less_than																
/// Compares two normalised magnitudes.
/// 
/// A shorter magnitude is smaller. Equal lengths are compared word by word
/// from the most-significant end. Equal values are not less than each other.
/// 
/// # Parameters
/// 
/// * `lhs` - The left-hand magnitude.
/// * `rhs` - The right-hand magnitude.
/// 
#[must_use]
pub fn less_than(lhs: &[Word], rhs: &[Word]) -> bool {
	if lhs.len() != rhs.len() {
		return lhs.len() < rhs.len();
	}
	lhs.iter().rev().cmp(rhs.iter().rev()) == Ordering::Less
}

//		seeking_less_than														
/// Compares two magnitudes that may carry superfluous high zero words.
/// 
/// Both are trimmed to their significant length first, then compared with
/// [`less_than()`].
/// 
/// # Parameters
/// 
/// * `lhs` - The left-hand magnitude.
/// * `rhs` - The right-hand magnitude.
/// 
#[must_use]
pub fn seeking_less_than(lhs: &[Word], rhs: &[Word]) -> bool {
	less_than(normalized(lhs), normalized(rhs))
}

//		digits_to_string														
/// Renders an array of decimal limbs as ASCII digits.
/// 
/// The limbs are already expressed in base `10^digit_digits`, least
/// significant first. The most-significant limb is written without padding;
/// every following limb is zero-padded to `digit_digits` characters.
/// 
/// Returns the number of bytes written.
/// 
/// # Parameters
/// 
/// * `digits`       - The limbs, least-significant first.
/// * `string`       - The output buffer.
/// * `digit_digits` - The number of decimal digits in each full limb.
/// 
/// # Errors
/// 
/// Returns [`fmt::Error`] if the output buffer is too small to hold the
/// rendering.
/// 
pub fn digits_to_string(digits: &[Word], string: &mut [u8], digit_digits: usize) -> Result<usize, FmtError> {
	let mut writer = SliceWriter { buf: string, len: 0 };
	let mut limbs  = digits.iter().rev();
	
	if let Some(top) = limbs.next() {
		write!(writer, "{top}")?;
	}
	for limb in limbs {
		write!(writer, "{limb:0digit_digits$}")?;
	}
	
	Ok(writer.len)
}

//		trailing_zero_bit_count													
/// Counts the trailing zero bits of a word array.
/// 
/// Whole zero words count as a full word of bits each, and the first nonzero
/// word contributes its own trailing zeros. An all-zero array yields its full
/// bit length.
/// 
/// # Parameters
/// 
/// * `words` - The word array.
/// 
#[must_use]
pub fn trailing_zero_bit_count(words: &[Word]) -> usize {
	let zero_words = words.iter().take_while(|&&w| w == 0).count();
	words.get(zero_words).map_or(zero_words * WORD_BITS, |&word| {
		zero_words * WORD_BITS + trailing_zeros(word) as usize
	})
}
